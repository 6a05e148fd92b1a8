//! Storage abstraction layer
//!
//! Whole-object byte storage keyed by name. The record store sits on top.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

use crate::Result;

pub mod local;

/// Storage backend trait
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read object from storage
    ///
    /// A missing object yields an `Io` error of kind `NotFound`.
    async fn get(&self, key: &str) -> Result<Bytes>;

    /// Replace object in storage
    ///
    /// Readers observe either the previous or the new contents, never a
    /// truncated object.
    async fn put(&self, key: &str, data: Bytes) -> Result<()>;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local { root_path: PathBuf, fsync: bool },
}

/// Create storage backend from config
pub fn create_storage(config: StorageConfig) -> Result<Box<dyn StorageBackend>> {
    match config {
        StorageConfig::Local { root_path, fsync } => {
            let backend = local::LocalStorage::new(root_path)?.with_fsync(fsync);
            Ok(Box::new(backend))
        }
    }
}
