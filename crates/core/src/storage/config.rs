//! Storage configuration.

use std::path::PathBuf;

/// Storage backend configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Selected provider.
    pub provider: StorageProvider,
}

/// Supported storage providers.
#[derive(Debug, Clone)]
pub enum StorageProvider {
    /// Local filesystem (dev).
    LocalFs {
        /// Root directory for stored assets.
        root: PathBuf,
    },
    /// S3-compatible object storage (R2, AWS S3).
    S3 {
        /// Endpoint URL.
        endpoint: String,
        /// Bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Region.
        region: String,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::LocalFs {
                root: PathBuf::from("uploads"),
            },
        }
    }
}
