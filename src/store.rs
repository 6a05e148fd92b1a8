//! Record store
//!
//! Loads and saves a whole collection as a single JSON array document.

use bytes::Bytes;
use std::sync::Arc;

use crate::storage::StorageBackend;
use crate::types::{Collection, Record};
use crate::Result;

pub struct RecordStore {
    storage: Arc<dyn StorageBackend>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Load every record of a collection, in insertion order.
    ///
    /// A missing, unreadable or unparsable document reads as an empty
    /// collection. The failure is logged, never returned.
    pub async fn load(&self, collection: Collection) -> Vec<Record> {
        let key = collection.document_key();

        let data = match self.storage.get(&key).await {
            Ok(data) => data,
            Err(e) if e.is_not_found() => {
                tracing::debug!(%collection, "No backing document yet; treating as empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(%collection, error = %e, "Failed to read backing document; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Record>>(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(%collection, error = %e, "Backing document is not a JSON array of objects; treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the collection's backing document with `records`.
    pub async fn save(&self, collection: Collection, records: &[Record]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        self.storage
            .put(&collection.document_key(), Bytes::from(json))
            .await?;

        tracing::debug!(%collection, count = records.len(), "Saved collection");
        Ok(())
    }
}
