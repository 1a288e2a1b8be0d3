//! Avatar object-storage configuration

use serde::{Deserialize, Serialize};

/// Which storage backend holds uploaded avatars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    S3,
}

/// Avatar storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Selected backend (`AVATAR_STORAGE=local|s3`)
    pub backend: StorageBackend,

    /// Base directory for local storage
    pub local_path: String,

    /// Bucket name for S3 storage
    pub s3_bucket: Option<String>,

    /// AWS region for S3 storage
    pub s3_region: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            local_path: String::from("./media"),
            s3_bucket: None,
            s3_region: None,
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backend = match std::env::var("AVATAR_STORAGE").as_deref() {
            Ok("s3") => StorageBackend::S3,
            _ => StorageBackend::Local,
        };
        Self {
            backend,
            local_path: std::env::var("AVATAR_LOCAL_PATH").unwrap_or(defaults.local_path),
            s3_bucket: std::env::var("AVATAR_S3_BUCKET").ok(),
            s3_region: std::env::var("AVATAR_S3_REGION").ok(),
        }
    }
}
