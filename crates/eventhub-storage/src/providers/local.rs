//! Local filesystem image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use eventhub_core::config::LocalMediaConfig;
use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::traits::{ImageStore, StoredImage};

/// Image store backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    /// Root directory for all stored images.
    root: PathBuf,
    /// Base URL under which the root directory is served.
    public_base_url: String,
}

impl LocalImageStore {
    /// Create a new local image store rooted at the configured path.
    pub async fn new(config: &LocalMediaConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create media root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(key.trim_start_matches('/'))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn upload(&self, key: &str, data: Bytes, _content_type: &str) -> AppResult<StoredImage> {
        let full_path = self.resolve(key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write image: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Stored image");
        Ok(StoredImage {
            url: format!("{}/{}", self.public_base_url, key.trim_start_matches('/')),
            key: key.to_string(),
        })
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete image: {key}"),
                    e,
                )
            })?;
            debug!(key, "Removed image");
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &tempfile::TempDir) -> LocalMediaConfig {
        LocalMediaConfig {
            root: dir.path().to_str().unwrap().to_string(),
            public_base_url: "http://localhost:8000/media/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upload_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(&config_for(&dir)).await.unwrap();

        let stored = store
            .upload("events/pic.jpg", Bytes::from("fake-jpeg"), "image/jpeg")
            .await
            .unwrap();
        assert_eq!(stored.key, "events/pic.jpg");
        assert_eq!(stored.url, "http://localhost:8000/media/events/pic.jpg");
        assert!(dir.path().join("events/pic.jpg").exists());

        store.remove("events/pic.jpg").await.unwrap();
        assert!(!dir.path().join("events/pic.jpg").exists());
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(&config_for(&dir)).await.unwrap();
        store.remove("events/nothing.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(&config_for(&dir)).await.unwrap();
        assert!(store.health_check().await.unwrap());
    }
}
