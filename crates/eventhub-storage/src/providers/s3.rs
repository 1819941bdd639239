//! S3-compatible object store provider.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use eventhub_core::config::S3MediaConfig;
use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::traits::{ImageStore, StoredImage};

/// Image store backed by an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3ImageStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    /// Create a new S3 image store from configuration. Empty credentials
    /// fall back to the ambient AWS credential chain.
    pub async fn new(config: &S3MediaConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket is not configured"));
        }

        info!(
            bucket = %config.bucket,
            region = %config.region,
            "Initializing S3 image store"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if !config.region.is_empty() {
            loader = loader.region(Region::new(config.region.clone()));
        }
        if !config.access_key_id.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key_id.clone(),
                config.secret_access_key.clone(),
                None,
                None,
                "eventhub-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(&config.endpoint).force_path_style(true);
        }
        let client = Client::from_conf(builder.build());

        let public_base_url = if config.public_base_url.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com",
                config.bucket, config.region
            )
        } else {
            config.public_base_url.trim_end_matches('/').to_string()
        };

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url,
        })
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<StoredImage> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to upload image: {key}"),
                    e,
                )
            })?;

        debug!(key, bytes = size, "Uploaded image to S3");
        Ok(StoredImage {
            url: format!("{}/{key}", self.public_base_url),
            key: key.to_string(),
        })
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete image: {key}"),
                    e,
                )
            })?;

        debug!(key, "Removed image from S3");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map(|_| true)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "S3 health check failed", e)
            })
    }
}
