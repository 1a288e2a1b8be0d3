//! Main authentication service implementation.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::email::MailerTrait;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Subject line of activation emails
const ACTIVATION_EMAIL_SUBJECT: &str = "Verify your Signet account";

/// Subject line of password-reset emails
const RESET_EMAIL_SUBJECT: &str = "Reset your Signet password";

/// Authentication service for the complete account lifecycle: registration,
/// email verification, login, password change/reset and token revocation.
pub struct AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailerTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for verification and session tokens
    token_service: Arc<TokenService<T>>,
    /// Mailer for activation / reset links
    mailer: Arc<M>,
    /// Password hashing and strength validation
    passwords: PasswordService,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, M> AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailerTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        mailer: Arc<M>,
        passwords: PasswordService,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            mailer,
            passwords,
            config,
        }
    }

    /// Register a new account.
    ///
    /// The account starts inactive; an activation link is emailed to the
    /// given address. Returns the created user.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        if !signet_shared::utils::is_valid_username(username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }
        if !signet_shared::utils::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.passwords.validate_strength(password)?;

        if self.user_repository.exists_by_username(username).await? {
            return Err(ValidationError::DuplicateValue {
                field: "username".to_string(),
            }
            .into());
        }
        if self.user_repository.exists_by_email(email).await? {
            return Err(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }
            .into());
        }

        let password_hash = self.passwords.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(
                username.to_string(),
                email.to_string(),
                password_hash,
            ))
            .await?;

        self.send_activation_email(&user, &user.email).await;

        Ok(user)
    }

    /// Decode a verification token and resolve the user it references.
    ///
    /// Failure precedence:
    /// 1. expired token — [`TokenError::VerificationExpired`]
    /// 2. undecodable token — [`TokenError::VerificationInvalid`]
    /// 3. decoded but the user is gone — [`AuthError::VerificationUserInvalid`],
    ///    deliberately folded into the same generic "invalid URL" response so
    ///    callers cannot learn whether the id ever existed.
    pub async fn verify_token(&self, token: &str) -> Result<User, DomainError> {
        let claims = self.token_service.decode_verification_token(token)?;

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Auth(AuthError::VerificationUserInvalid))?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::VerificationUserInvalid))
    }

    /// Activate an account from an emailed verification token and log the
    /// user in.
    pub async fn activate(&self, token: &str) -> Result<AuthResponse, DomainError> {
        let mut user = self.verify_token(token).await?;

        if user.is_active {
            return Err(AuthError::AccountAlreadyActive.into());
        }

        user.activate();
        let user = self.user_repository.update(user).await?;

        let pair = self.token_service.generate_token_pair(&user).await?;
        Ok(AuthResponse::new(pair, &user))
    }

    /// Re-send the activation email for a not-yet-active account
    pub async fn resend_verification(&self, email: &str) -> Result<(), DomainError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if user.is_active {
            return Err(AuthError::AccountAlreadyActive.into());
        }

        self.send_activation_email(&user, &user.email).await;
        Ok(())
    }

    /// Authenticate with email and password, returning a session token pair
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, DomainError> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailed))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(AuthError::AuthenticationFailed.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        let pair = self.token_service.generate_token_pair(&user).await?;
        Ok(AuthResponse::new(pair, &user))
    }

    /// Change the password of a logged-in user
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        if !self.passwords.verify(old_password, &user.password_hash)? {
            return Err(AuthError::OldPasswordMismatch.into());
        }
        self.passwords.validate_strength(new_password)?;

        user.set_password_hash(self.passwords.hash(new_password)?);
        self.user_repository.update(user).await?;
        Ok(())
    }

    /// Email a password-reset link to a registered address
    pub async fn request_password_reset(&self, email: &str) -> Result<(), DomainError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let token = self.token_service.issue_verification_token(&user, None)?;
        let link = format!(
            "{}/api/v1/users/password/set/{}",
            self.config.public_base_url, token
        );
        self.dispatch_link(&user.email, &link, RESET_EMAIL_SUBJECT).await;
        Ok(())
    }

    /// Set a new password through an emailed reset token
    pub async fn set_password(&self, token: &str, new_password: &str) -> Result<(), DomainError> {
        let mut user = self.verify_token(token).await?;

        self.passwords.validate_strength(new_password)?;
        user.set_password_hash(self.passwords.hash(new_password)?);
        self.user_repository.update(user).await?;
        Ok(())
    }

    /// Issue a fresh access token from a valid refresh token
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, DomainError> {
        let user_id = self.token_service.verify_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        self.token_service.generate_access_token(&user)
    }

    /// Block (revoke) a refresh token so it can no longer mint access tokens
    pub async fn block_token(&self, refresh_token: &str) -> Result<(), DomainError> {
        if !self.token_service.revoke_refresh_token(refresh_token).await? {
            return Err(TokenError::InvalidRefreshToken.into());
        }
        Ok(())
    }

    /// Issue an activation token for `user` and email the activation link to
    /// `recipient` (which differs from `user.email` while an email change is
    /// pending).
    pub async fn send_activation_email(&self, user: &User, recipient: &str) {
        match self.token_service.issue_verification_token(user, None) {
            Ok(token) => {
                let link = format!(
                    "{}/api/v1/users/register/verify/{}",
                    self.config.public_base_url, token
                );
                self.dispatch_link(recipient, &link, ACTIVATION_EMAIL_SUBJECT).await;
            }
            Err(e) => warn!(error = %e, "failed to issue activation token"),
        }
    }

    /// Hand a link to the mailer. Delivery is fire-and-forget: a failed send
    /// never fails the enclosing request, the user can ask for a resend.
    async fn dispatch_link(&self, recipient: &str, link: &str, message: &str) {
        if let Err(e) = self.mailer.send_link(recipient, link, message).await {
            warn!(error = %e, recipient, "failed to dispatch email");
        }
    }
}
