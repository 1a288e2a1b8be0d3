//! Token service configuration.

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_DAYS, REFRESH_TOKEN_EXPIRY_DAYS, VERIFICATION_TOKEN_EXPIRY_MINUTES,
};

/// Configuration for the token service.
///
/// The signing secret and all lifetimes are carried here explicitly so the
/// service never reads ambient global state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,

    /// JWT signing algorithm
    pub algorithm: Algorithm,

    /// Access token expiry in days
    pub access_token_expiry_days: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,

    /// Verification (activation / reset) token expiry in minutes, used when
    /// the caller does not pass an explicit lifetime
    pub verification_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_days: ACCESS_TOKEN_EXPIRY_DAYS,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
            verification_token_expiry_minutes: VERIFICATION_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Configuration with an explicit secret and default lifetimes
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }
}
