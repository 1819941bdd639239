//! # eventhub-storage
//!
//! Image store providers (local filesystem and S3-compatible object
//! storage) plus the temp-file spool used while an upload is in flight.

pub mod providers;
pub mod temp;

use std::sync::Arc;

use eventhub_core::config::MediaConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::traits::ImageStore;

pub use providers::{LocalImageStore, S3ImageStore};
pub use temp::TempSpool;

/// Build the configured image store.
pub async fn create_image_store(config: &MediaConfig) -> AppResult<Arc<dyn ImageStore>> {
    match config.provider.as_str() {
        "local" => {
            let store = LocalImageStore::new(&config.local).await?;
            Ok(Arc::new(store))
        }
        "s3" => {
            let store = S3ImageStore::new(&config.s3).await?;
            Ok(Arc::new(store))
        }
        other => Err(AppError::configuration(format!(
            "Unknown media provider: {other}"
        ))),
    }
}
