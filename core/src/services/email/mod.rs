//! Outbound email seam.
//!
//! The domain services only ever send "here is a link" emails; the single
//! trait below is the whole contract. The SMTP implementation lives in the
//! infra crate, a recording mock next to it for tests.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Delivery of link-carrying emails (activation, password reset)
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send `link` to `recipient` with `message` as the subject line
    async fn send_link(&self, recipient: &str, link: &str, message: &str)
        -> Result<(), DomainError>;
}
