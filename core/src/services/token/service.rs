//! Token service: signed verification tokens and session token pairs.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{
    Claims, RefreshToken, TokenPair, VerificationClaims, JWT_ISSUER,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Length of the opaque refresh-token string
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Service for issuing and verifying signed tokens.
///
/// Verification tokens (account activation, password reset) are stateless
/// HS256 JWTs carrying the user id, email and an absolute expiry; nothing is
/// persisted and nothing can revoke them before that expiry. Session refresh
/// tokens are opaque random strings stored hashed through the repository and
/// revocable via the block-token flow.
pub struct TokenService<R: TokenRepository> {
    repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_validation: Validation,
    verification_validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut access_validation = Validation::new(config.algorithm);
        access_validation.set_issuer(&[JWT_ISSUER]);
        access_validation.validate_exp = true;
        access_validation.validate_nbf = true;
        access_validation.leeway = 0;

        // Verification tokens carry only sub/email/exp; the expiry must be
        // exact so short lifetimes behave as issued.
        let mut verification_validation = Validation::new(config.algorithm);
        verification_validation.validate_exp = true;
        verification_validation.leeway = 0;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            access_validation,
            verification_validation,
        }
    }

    /// Issues a signed verification token for a user.
    ///
    /// The token encodes the user id, email and an absolute expiry; when
    /// `lifetime` is `None` the configured default window (5 minutes)
    /// applies. Issuance is stateless: two calls at different instants or
    /// with different lifetimes yield distinct strings, each independently
    /// valid until its own expiry.
    pub fn issue_verification_token(
        &self,
        user: &User,
        lifetime: Option<Duration>,
    ) -> Result<String, DomainError> {
        let lifetime = lifetime
            .unwrap_or_else(|| Duration::minutes(self.config.verification_token_expiry_minutes));
        let claims = VerificationClaims::new(user.id, &user.email, Some(lifetime));
        self.encode_jwt(&claims)
    }

    /// Decodes and checks a verification token.
    ///
    /// Failure taxonomy, in precedence order:
    /// 1. [`TokenError::VerificationExpired`] — signature valid, expiry elapsed
    /// 2. [`TokenError::VerificationInvalid`] — signature or payload undecodable
    ///
    /// The user lookup (and the folding of a missing user into the generic
    /// invalid response) happens in the auth service.
    pub fn decode_verification_token(
        &self,
        token: &str,
    ) -> Result<VerificationClaims, DomainError> {
        let data = decode::<VerificationClaims>(
            token,
            &self.decoding_key,
            &self.verification_validation,
        )
        .map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::VerificationExpired)
            } else {
                DomainError::Token(TokenError::VerificationInvalid)
            }
        })?;

        Ok(data.claims)
    }

    /// Generates a session token pair (access JWT + stored refresh token)
    pub async fn generate_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user.id).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_days,
            self.config.refresh_token_expiry_days,
        ))
    }

    /// Generates an access token for a user
    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            user.id,
            user.is_admin,
            self.config.access_token_expiry_days,
        );
        self.encode_jwt(&claims)
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.access_validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidTokenFormat)
                }
            })?;

        Ok(data.claims)
    }

    /// Verifies a stored refresh token and returns the owning user id
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_hash = self.hash_token(token);

        let refresh_token = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if refresh_token.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }
        if refresh_token.is_revoked {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(refresh_token.user_id)
    }

    /// Revokes (blocks) a refresh token.
    ///
    /// Returns `true` when a live token was revoked, `false` when the token
    /// is unknown or already revoked.
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<bool, DomainError> {
        let token_hash = self.hash_token(token);
        self.repository.revoke_token(&token_hash).await
    }

    /// Removes expired refresh tokens from storage
    pub async fn cleanup_expired_tokens(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired_tokens().await
    }

    /// Generates an opaque refresh token and stores its hash
    async fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token_string: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let token_hash = self.hash_token(&token_string);
        let refresh_token = RefreshToken::new(
            user_id,
            token_hash,
            self.config.refresh_token_expiry_days,
        );

        self.repository
            .save_refresh_token(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_string)
    }

    /// Encodes claims into a JWT
    fn encode_jwt<C: serde::Serialize>(&self, claims: &C) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Hashes a token for storage lookups
    fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
