//! Avatar object-storage seam.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Storage backend for uploaded avatar images.
///
/// Keys are opaque to the domain layer; implementations decide how they map
/// to paths or object names.
#[async_trait]
pub trait AvatarStorageTrait: Send + Sync {
    /// Store an object under `key`, replacing any previous content
    async fn store(&self, key: &str, content: &[u8], content_type: &str)
        -> Result<(), DomainError>;

    /// Delete the object under `key`; missing objects are not an error
    async fn delete(&self, key: &str) -> Result<(), DomainError>;

    /// Public URL for the object under `key`
    fn url(&self, key: &str) -> String;
}
