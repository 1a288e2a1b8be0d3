//! Authentication service configuration.

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Public base URL used when composing activation / reset links sent by
    /// email
    pub public_base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl AuthServiceConfig {
    /// Configuration with an explicit public base URL
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
        }
    }
}
