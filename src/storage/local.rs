//! Local filesystem storage backend

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{Error, Result};

use super::StorageBackend;

/// Local filesystem storage
pub struct LocalStorage {
    root_path: PathBuf,
    fsync: bool,
}

impl LocalStorage {
    pub fn new(root_path: impl Into<PathBuf>) -> Result<Self> {
        let root_path = root_path.into();
        std::fs::create_dir_all(&root_path)?;
        Ok(Self {
            root_path,
            fsync: true,
        })
    }

    /// Configure whether writes call `File::sync_all` before the rename.
    pub fn with_fsync(mut self, fsync: bool) -> Self {
        self.fsync = fsync;
        self
    }

    fn resolve_path(&self, key: &str) -> PathBuf {
        self.root_path.join(key)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn get(&self, key: &str) -> Result<Bytes> {
        let path = self.resolve_path(key);
        let data = fs::read(&path).await?;
        Ok(Bytes::from(data))
    }

    async fn put(&self, key: &str, data: Bytes) -> Result<()> {
        let path = self.resolve_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = temp_path(&path);
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        if self.fsync {
            file.sync_all().await?;
        }
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(Error::storage(format!(
                "failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path()).unwrap().with_fsync(false);

        let key = "nested/file.json";
        let data = Bytes::from("hello world");

        storage.put(key, data.clone()).await.unwrap();
        let retrieved = storage.get(key).await.unwrap();
        assert_eq!(retrieved, data);

        storage.put(key, Bytes::from("replaced")).await.unwrap();
        assert_eq!(storage.get(key).await.unwrap(), Bytes::from("replaced"));
        assert!(!temp_dir.path().join("nested/file.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path()).unwrap();

        let err = storage.get("absent.json").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_put_fails_when_target_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path()).unwrap().with_fsync(false);
        std::fs::create_dir_all(temp_dir.path().join("blocked.json/inner")).unwrap();

        let result = storage.put("blocked.json", Bytes::from("[]")).await;
        assert!(result.is_err());
        assert!(!temp_dir.path().join("blocked.json.tmp").exists());
    }
}
