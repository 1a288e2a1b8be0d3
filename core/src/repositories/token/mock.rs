//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// In-memory token repository for tests, keyed by token hash
#[derive(Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self.tokens.read().await.get(token_hash).cloned())
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_revoked => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired());
        Ok(before - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "h1".to_string(), REFRESH_TOKEN_EXPIRY_DAYS);
        repo.save_refresh_token(token.clone()).await.unwrap();

        let found = repo.find_refresh_token("h1").await.unwrap().unwrap();
        assert_eq!(found, token);
    }

    #[tokio::test]
    async fn revoke_is_idempotent_per_token() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "h1".to_string(), REFRESH_TOKEN_EXPIRY_DAYS);
        repo.save_refresh_token(token).await.unwrap();

        assert!(repo.revoke_token("h1").await.unwrap());
        assert!(!repo.revoke_token("h1").await.unwrap());
        assert!(!repo.revoke_token("missing").await.unwrap());
    }

    #[tokio::test]
    async fn delete_expired_removes_only_expired_tokens() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();

        let live = RefreshToken::new(user_id, "live".to_string(), REFRESH_TOKEN_EXPIRY_DAYS);
        let mut dead = RefreshToken::new(user_id, "dead".to_string(), REFRESH_TOKEN_EXPIRY_DAYS);
        dead.expires_at = Utc::now() - Duration::days(1);

        repo.save_refresh_token(live).await.unwrap();
        repo.save_refresh_token(dead).await.unwrap();

        assert_eq!(repo.delete_expired_tokens().await.unwrap(), 1);
        assert!(repo.find_refresh_token("live").await.unwrap().is_some());
        assert!(repo.find_refresh_token("dead").await.unwrap().is_none());
    }
}
