//! Outbound email (SMTP) configuration

use serde::{Deserialize, Serialize};

/// Default SMTP port (STARTTLS)
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set
const DEFAULT_FROM_ADDRESS: &str = "noreply@signet.local";

/// Configuration for the SMTP mailer.
///
/// | Variable        | Required | Default                |
/// |-----------------|----------|------------------------|
/// | `SMTP_HOST`     | no       | `localhost`            |
/// | `SMTP_PORT`     | no       | `587`                  |
/// | `SMTP_FROM`     | no       | `noreply@signet.local` |
/// | `SMTP_USER`     | no       | —                      |
/// | `SMTP_PASSWORD` | no       | —                      |
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,

    /// SMTP server port
    pub smtp_port: u16,

    /// RFC 5322 "From" address
    pub from_address: String,

    /// Optional SMTP username
    pub smtp_user: Option<String>,

    /// Optional SMTP password
    pub smtp_password: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: DEFAULT_SMTP_PORT,
            from_address: String::from(DEFAULT_FROM_ADDRESS),
            smtp_user: None,
            smtp_password: None,
        }
    }
}

impl EmailConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM").unwrap_or(defaults.from_address),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        }
    }
}
