//! Avatar object-storage implementations.

pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

pub use local::LocalAvatarStorage;
#[cfg(feature = "s3")]
pub use s3::S3AvatarStorage;

use async_trait::async_trait;

use signet_core::errors::DomainError;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::config::{StorageBackend, StorageConfig};

/// Runtime-selected avatar storage backend
#[derive(Debug, Clone)]
pub enum AvatarStorage {
    /// Local filesystem storage
    Local(LocalAvatarStorage),
    /// Amazon S3 storage
    #[cfg(feature = "s3")]
    S3(S3AvatarStorage),
}

impl AvatarStorage {
    /// Create the backend selected by configuration
    pub async fn new(config: &StorageConfig) -> Result<Self, DomainError> {
        match config.backend {
            StorageBackend::Local => Ok(Self::Local(LocalAvatarStorage::new(&config.local_path))),
            #[cfg(feature = "s3")]
            StorageBackend::S3 => Ok(Self::S3(S3AvatarStorage::new(config).await?)),
            #[cfg(not(feature = "s3"))]
            StorageBackend::S3 => Err(DomainError::Internal {
                message: "S3 avatar storage requires the `s3` cargo feature".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AvatarStorageTrait for AvatarStorage {
    async fn store(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), DomainError> {
        match self {
            Self::Local(storage) => storage.store(key, content, content_type).await,
            #[cfg(feature = "s3")]
            Self::S3(storage) => storage.store(key, content, content_type).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        match self {
            Self::Local(storage) => storage.delete(key).await,
            #[cfg(feature = "s3")]
            Self::S3(storage) => storage.delete(key).await,
        }
    }

    fn url(&self, key: &str) -> String {
        match self {
            Self::Local(storage) => storage.url(key),
            #[cfg(feature = "s3")]
            Self::S3(storage) => storage.url(key),
        }
    }
}
