//! Image store trait for pluggable external image backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Reference to an image held by the external store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredImage {
    /// Publicly reachable URL of the image.
    pub url: String,
    /// Store-side key, used to remove the object later.
    pub key: String,
}

/// Trait for external image store backends.
///
/// Implementations exist for the local filesystem and S3-compatible
/// object stores. The trait is defined here in `eventhub-core` and
/// implemented in `eventhub-storage`.
#[async_trait]
pub trait ImageStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Upload an image under the given key and return its stored reference.
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<StoredImage>;

    /// Remove a previously uploaded image by its key.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
