//! Tests for the authentication service flows.

use std::sync::Arc;

use chrono::Duration;

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::token::MockTokenRepository;
use crate::repositories::user::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::PasswordService;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockMailer;

struct Harness {
    service: AuthService<MockUserRepository, MockTokenRepository, MockMailer>,
    users: Arc<MockUserRepository>,
    tokens: Arc<TokenService<MockTokenRepository>>,
    mailer: Arc<MockMailer>,
}

fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::with_secret("auth-test-secret"),
    ));
    let mailer = Arc::new(MockMailer::new());

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&tokens),
        Arc::clone(&mailer),
        PasswordService::with_cost(4),
        AuthServiceConfig::new("http://testserver"),
    );

    Harness {
        service,
        users,
        tokens,
        mailer,
    }
}

/// Pull the token segment out of an emailed activation / reset link
fn token_from_link(link: &str) -> &str {
    link.rsplit('/').next().unwrap()
}

#[tokio::test]
async fn register_creates_an_inactive_user_and_emails_a_link() {
    let h = harness();

    let user = h
        .service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    assert!(!user.is_active);

    let email = h.mailer.last().await.expect("activation email sent");
    assert_eq!(email.recipient, "alice@example.com");
    assert!(email.link.starts_with("http://testserver/api/v1/users/register/verify/"));

    let claims = h
        .tokens
        .decode_verification_token(token_from_link(&email.link))
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn register_rejects_duplicates_and_weak_input() {
    let h = harness();
    h.service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    let taken_username = h
        .service
        .register("alice", "other@example.com", "password1")
        .await;
    assert!(matches!(
        taken_username,
        Err(DomainError::ValidationErr(ValidationError::DuplicateValue { ref field })) if field == "username"
    ));

    let taken_email = h
        .service
        .register("bob", "alice@example.com", "password1")
        .await;
    assert!(matches!(
        taken_email,
        Err(DomainError::ValidationErr(ValidationError::DuplicateValue { ref field })) if field == "email"
    ));

    let weak = h.service.register("carol", "carol@example.com", "short").await;
    assert!(matches!(
        weak,
        Err(DomainError::ValidationErr(ValidationError::WeakPassword { .. }))
    ));

    let bad_email = h.service.register("dave", "not-an-email", "password1").await;
    assert!(matches!(
        bad_email,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn activation_round_trip() {
    let h = harness();
    let user = h
        .service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    let email = h.mailer.last().await.unwrap();
    let response = h
        .service
        .activate(token_from_link(&email.link))
        .await
        .unwrap();

    assert_eq!(response.user.id, user.id);
    assert!(!response.access_token.is_empty());

    let stored = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.is_active);

    // The access token from activation is a usable session token
    let claims = h.tokens.verify_access_token(&response.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn activating_twice_reports_already_active() {
    let h = harness();
    h.service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    let token = {
        let email = h.mailer.last().await.unwrap();
        token_from_link(&email.link).to_string()
    };

    h.service.activate(&token).await.unwrap();

    match h.service.activate(&token).await {
        Err(DomainError::Auth(AuthError::AccountAlreadyActive)) => {}
        other => panic!("expected AccountAlreadyActive, got {other:?}"),
    }
}

#[tokio::test]
async fn expired_activation_token_is_reported_as_expired() {
    let h = harness();
    let user = h
        .service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    let expired = h
        .tokens
        .issue_verification_token(&user, Some(Duration::seconds(-1)))
        .unwrap();

    match h.service.activate(&expired).await {
        Err(DomainError::Token(TokenError::VerificationExpired)) => {}
        other => panic!("expected VerificationExpired, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_activation_token_is_reported_as_invalid() {
    let h = harness();

    match h.service.activate("garbage-token").await {
        Err(DomainError::Token(TokenError::VerificationInvalid)) => {}
        other => panic!("expected VerificationInvalid, got {other:?}"),
    }
}

#[tokio::test]
async fn deleted_user_folds_into_the_generic_invalid_failure() {
    let h = harness();
    let user = h
        .service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    let token = {
        let email = h.mailer.last().await.unwrap();
        token_from_link(&email.link).to_string()
    };

    // The user disappears between issuance and verification
    h.users.delete(user.id).await.unwrap();

    // Not a distinct "user not found": the same folded failure as a
    // malformed URL, so ids cannot be probed.
    match h.service.verify_token(&token).await {
        Err(DomainError::Auth(AuthError::VerificationUserInvalid)) => {}
        other => panic!("expected VerificationUserInvalid, got {other:?}"),
    }
}

#[tokio::test]
async fn resend_verification_rules() {
    let h = harness();
    h.service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    match h.service.resend_verification("nobody@example.com").await {
        Err(DomainError::Auth(AuthError::UserNotFound)) => {}
        other => panic!("expected UserNotFound, got {other:?}"),
    }

    h.service.resend_verification("alice@example.com").await.unwrap();
    assert_eq!(h.mailer.sent().await.len(), 2);

    let email = h.mailer.last().await.unwrap();
    h.service.activate(token_from_link(&email.link)).await.unwrap();

    match h.service.resend_verification("alice@example.com").await {
        Err(DomainError::Auth(AuthError::AccountAlreadyActive)) => {}
        other => panic!("expected AccountAlreadyActive, got {other:?}"),
    }
}

async fn register_and_activate(h: &Harness) -> crate::domain::entities::user::User {
    let user = h
        .service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();
    let email = h.mailer.last().await.unwrap();
    h.service.activate(token_from_link(&email.link)).await.unwrap();
    h.users.find_by_id(user.id).await.unwrap().unwrap()
}

#[tokio::test]
async fn login_succeeds_for_active_accounts_and_records_the_login() {
    let h = harness();
    let user = register_and_activate(&h).await;

    let response = h
        .service
        .login("alice@example.com", "password1")
        .await
        .unwrap();
    assert_eq!(response.user.id, user.id);
    assert_eq!(response.user.username, "alice");

    let stored = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.last_login_at.is_some());
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_check_failed() {
    let h = harness();
    h.service
        .register("alice", "alice@example.com", "password1")
        .await
        .unwrap();

    // Unknown email and wrong password yield the same failure
    match h.service.login("nobody@example.com", "password1").await {
        Err(DomainError::Auth(AuthError::AuthenticationFailed)) => {}
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    match h.service.login("alice@example.com", "wrongpass1").await {
        Err(DomainError::Auth(AuthError::AuthenticationFailed)) => {}
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }

    // Correct credentials against a never-activated account
    match h.service.login("alice@example.com", "password1").await {
        Err(DomainError::Auth(AuthError::AccountInactive)) => {}
        other => panic!("expected AccountInactive, got {other:?}"),
    }
}

#[tokio::test]
async fn change_password_requires_the_old_one() {
    let h = harness();
    let user = register_and_activate(&h).await;

    match h
        .service
        .change_password(user.id, "wrong-old1", "newpassword1")
        .await
    {
        Err(DomainError::Auth(AuthError::OldPasswordMismatch)) => {}
        other => panic!("expected OldPasswordMismatch, got {other:?}"),
    }

    h.service
        .change_password(user.id, "password1", "newpassword1")
        .await
        .unwrap();

    h.service.login("alice@example.com", "newpassword1").await.unwrap();
}

#[tokio::test]
async fn password_reset_round_trip() {
    let h = harness();
    register_and_activate(&h).await;

    match h.service.request_password_reset("nobody@example.com").await {
        Err(DomainError::Auth(AuthError::UserNotFound)) => {}
        other => panic!("expected UserNotFound, got {other:?}"),
    }

    h.service
        .request_password_reset("alice@example.com")
        .await
        .unwrap();

    let email = h.mailer.last().await.unwrap();
    assert!(email.link.starts_with("http://testserver/api/v1/users/password/set/"));

    h.service
        .set_password(token_from_link(&email.link), "resetpass1")
        .await
        .unwrap();

    h.service.login("alice@example.com", "resetpass1").await.unwrap();
}

#[tokio::test]
async fn refresh_and_block_token_flows() {
    let h = harness();
    register_and_activate(&h).await;

    let response = h
        .service
        .login("alice@example.com", "password1")
        .await
        .unwrap();

    let access = h.service.refresh(&response.refresh_token).await.unwrap();
    let claims = h.tokens.verify_access_token(&access).unwrap();
    assert_eq!(claims.user_id().unwrap(), response.user.id);

    h.service.block_token(&response.refresh_token).await.unwrap();

    match h.service.refresh(&response.refresh_token).await {
        Err(DomainError::Token(TokenError::TokenRevoked)) => {}
        other => panic!("expected TokenRevoked, got {other:?}"),
    }

    match h.service.block_token(&response.refresh_token).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken)) => {}
        other => panic!("expected InvalidRefreshToken, got {other:?}"),
    }

    match h.service.block_token("never-issued").await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken)) => {}
        other => panic!("expected InvalidRefreshToken, got {other:?}"),
    }
}
