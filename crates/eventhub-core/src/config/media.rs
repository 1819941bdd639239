//! Image store configuration.

use serde::{Deserialize, Serialize};

/// Image store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Provider: `"local"` or `"s3"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory used to spool uploads before they reach the store.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    /// Maximum accepted image size in bytes.
    #[serde(default = "default_max_image_size")]
    pub max_image_size_bytes: u64,
    /// Local provider settings.
    #[serde(default)]
    pub local: LocalMediaConfig,
    /// S3 provider settings.
    #[serde(default)]
    pub s3: S3MediaConfig,
}

/// Local filesystem image store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalMediaConfig {
    /// Root directory for stored images.
    #[serde(default = "default_local_root")]
    pub root: String,
    /// Base URL under which stored images are served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

/// S3-compatible image store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3MediaConfig {
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Region.
    #[serde(default)]
    pub region: String,
    /// Custom endpoint URL (for S3-compatible stores); empty = AWS.
    #[serde(default)]
    pub endpoint: String,
    /// Access key ID; empty = ambient AWS credentials.
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// Base URL under which uploaded objects are publicly reachable.
    #[serde(default)]
    pub public_base_url: String,
}

impl Default for LocalMediaConfig {
    fn default() -> Self {
        Self {
            root: default_local_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_temp_dir() -> String {
    "data/temp".to_string()
}

fn default_max_image_size() -> u64 {
    2 * 1024 * 1024
}

fn default_local_root() -> String {
    "data/media".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8000/media".to_string()
}
