//! Mock avatar storage for user service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;
use crate::services::storage::AvatarStorageTrait;

/// In-memory avatar store recording every object by key
#[derive(Default)]
pub struct MockAvatarStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockAvatarStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl AvatarStorageTrait for MockAvatarStorage {
    async fn store(
        &self,
        key: &str,
        content: &[u8],
        _content_type: &str,
    ) -> Result<(), DomainError> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), content.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    fn url(&self, key: &str) -> String {
        format!("mock://avatars/{key}")
    }
}
