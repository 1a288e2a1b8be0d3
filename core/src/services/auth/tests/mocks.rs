//! Mock collaborators for auth service tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;
use crate::services::email::MailerTrait;

/// A captured outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub recipient: String,
    pub link: String,
    pub message: String,
}

/// Mailer that records every send instead of delivering
#[derive(Default)]
pub struct MockMailer {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything "sent" so far, oldest first
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    /// The most recent send, if any
    pub async fn last(&self) -> Option<SentEmail> {
        self.sent.read().await.last().cloned()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_link(
        &self,
        recipient: &str,
        link: &str,
        message: &str,
    ) -> Result<(), DomainError> {
        self.sent.write().await.push(SentEmail {
            recipient: recipient.to_string(),
            link: link.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
