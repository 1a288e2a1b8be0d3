//! Local filesystem avatar storage.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use signet_core::errors::DomainError;
use signet_core::services::storage::AvatarStorageTrait;

/// Stores avatars under a base directory on the local filesystem.
///
/// Object keys map directly to relative paths; URLs are served from
/// `/media/{key}` by whatever fronts the media directory.
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    base_path: PathBuf,
}

impl LocalAvatarStorage {
    /// Create a storage rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

fn io_err(e: std::io::Error) -> DomainError {
    DomainError::Internal {
        message: format!("avatar storage I/O failed: {e}"),
    }
}

#[async_trait]
impl AvatarStorageTrait for LocalAvatarStorage {
    async fn store(
        &self,
        key: &str,
        content: &[u8],
        _content_type: &str,
    ) -> Result<(), DomainError> {
        let path = self.object_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        fs::write(&path, content).await.map_err(io_err)?;

        debug!(?path, "avatar stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        match fs::remove_file(self.object_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(e)),
        }
    }

    fn url(&self, key: &str) -> String {
        format!("/media/{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalAvatarStorage::new(dir.path());

        storage
            .store("avatars/u1.png", b"png-bytes", "image/png")
            .await
            .unwrap();
        let on_disk = tokio::fs::read(dir.path().join("avatars/u1.png")).await.unwrap();
        assert_eq!(on_disk, b"png-bytes");

        storage.delete("avatars/u1.png").await.unwrap();
        assert!(!dir.path().join("avatars/u1.png").exists());
    }

    #[tokio::test]
    async fn deleting_a_missing_object_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalAvatarStorage::new(dir.path());

        storage.delete("avatars/never-stored.png").await.unwrap();
    }

    #[test]
    fn urls_are_served_from_the_media_prefix() {
        let storage = LocalAvatarStorage::new("/var/media");
        assert_eq!(storage.url("avatars/u1.png"), "/media/avatars/u1.png");
    }
}
