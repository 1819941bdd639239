//! Temp-file spool for in-flight uploads.
//!
//! An upload is written to the spool directory before it reaches the image
//! store. The guard removes the file on drop, so the spool is cleaned up
//! whether the upload succeeds or fails.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;

/// A spooled upload on disk, removed when the guard is dropped.
#[derive(Debug)]
pub struct TempSpool {
    path: PathBuf,
}

impl TempSpool {
    /// Spool the given bytes into `dir` under a unique file name.
    pub async fn write(dir: &str, data: &Bytes) -> AppResult<Self> {
        fs::create_dir_all(dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create temp directory: {dir}"),
                e,
            )
        })?;

        let path = Path::new(dir).join(Uuid::new_v4().to_string());
        fs::write(&path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to spool upload: {}", path.display()),
                e,
            )
        })?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the spooled bytes back.
    pub async fn read(&self) -> AppResult<Bytes> {
        let data = fs::read(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read spooled upload: {}", self.path.display()),
                e,
            )
        })?;
        Ok(Bytes::from(data))
    }
}

impl Drop for TempSpool {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to remove spooled upload");
            }
        }
    }
}
