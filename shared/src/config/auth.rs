//! Authentication and token configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry in days
    pub access_token_expiry_days: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,

    /// Verification (activation / password reset) token expiry in minutes
    pub verification_token_expiry_minutes: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_days: 2,
            refresh_token_expiry_days: 15,
            verification_token_expiry_minutes: 5,
            issuer: String::from("signet"),
        }
    }
}

impl JwtConfig {
    /// Check if using the default secret (security warning at startup)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Public base URL used when composing activation / reset links
    pub public_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            public_base_url: String::from("http://localhost:8080"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry_days: env_i64("JWT_ACCESS_TOKEN_EXPIRY_DAYS", defaults.access_token_expiry_days),
            refresh_token_expiry_days: env_i64("JWT_REFRESH_TOKEN_EXPIRY_DAYS", defaults.refresh_token_expiry_days),
            verification_token_expiry_minutes: env_i64(
                "VERIFICATION_TOKEN_EXPIRY_MINUTES",
                defaults.verification_token_expiry_minutes,
            ),
            issuer: defaults.issuer,
        };

        Self {
            jwt,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_lifetimes() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_days, 2);
        assert_eq!(config.refresh_token_expiry_days, 15);
        assert_eq!(config.verification_token_expiry_minutes, 5);
        assert!(config.is_using_default_secret());
    }
}
