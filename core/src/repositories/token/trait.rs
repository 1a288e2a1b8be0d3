//! Token repository trait for refresh-token persistence.
//!
//! Verification (activation / reset) tokens are stateless and never touch
//! this repository; only session refresh tokens are stored, and only their
//! SHA-256 hashes.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh-token persistence operations
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a refresh token record
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look up a refresh token by its hash
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke (block) a refresh token by its hash; returns whether a live
    /// token was found and revoked
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Remove expired refresh tokens; returns how many were deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;
}
