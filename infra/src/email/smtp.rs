//! SMTP implementation of the mailer seam.
//!
//! Wraps the `lettre` async SMTP transport. Sends are dispatched on a
//! background task: `send_link` reports whether the message was accepted for
//! delivery, not whether the remote server took it — activation and reset
//! flows treat email as fire-and-forget and offer a resend path instead.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error};

use signet_core::errors::DomainError;
use signet_core::services::email::MailerTrait;
use signet_shared::config::EmailConfig;

/// Sends link-carrying emails over SMTP
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a mailer from configuration (STARTTLS relay, optional
    /// credentials)
    pub fn new(config: &EmailConfig) -> Result<Self, DomainError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| DomainError::Internal {
                message: format!("SMTP transport setup failed: {e}"),
            })?
            .port(config.smtp_port);

        if let (Some(user), Some(password)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| DomainError::Internal {
                message: format!("invalid SMTP from address: {e}"),
            })?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn compose(&self, recipient: &str, link: &str, message: &str) -> Result<Message, DomainError> {
        let to = recipient.parse::<Mailbox>().map_err(|e| DomainError::Internal {
            message: format!("invalid recipient address: {e}"),
        })?;

        let body = format!("Hi {recipient},\n\n{message}:\n\n{link}\n");

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message)
            .body(body)
            .map_err(|e| DomainError::Internal {
                message: format!("failed to build email: {e}"),
            })
    }
}

#[async_trait]
impl MailerTrait for SmtpMailer {
    async fn send_link(
        &self,
        recipient: &str,
        link: &str,
        message: &str,
    ) -> Result<(), DomainError> {
        let email = self.compose(recipient, link, message)?;
        let transport = self.transport.clone();
        let recipient = recipient.to_string();

        // The SMTP round trip happens off the request path.
        tokio::spawn(async move {
            match transport.send(email).await {
                Ok(_) => debug!(%recipient, "email dispatched"),
                Err(e) => error!(%recipient, error = %e, "SMTP send failed"),
            }
        });

        Ok(())
    }
}
