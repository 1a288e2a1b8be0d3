//! Tests for the token service.

use chrono::Duration;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::token::MockTokenRepository;
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_service() -> TokenService<MockTokenRepository> {
    TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::with_secret("unit-test-secret"),
    )
}

fn test_user() -> User {
    User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    )
}

#[test]
fn issued_verification_token_decodes_to_the_same_user() {
    let service = test_service();
    let user = test_user();

    let token = service.issue_verification_token(&user, None).unwrap();
    let claims = service.decode_verification_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, user.email);
}

#[test]
fn default_lifetime_is_five_minutes() {
    let service = test_service();
    let token = service.issue_verification_token(&test_user(), None).unwrap();
    let claims = service.decode_verification_token(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 5 * 60);
}

#[test]
fn elapsed_lifetime_yields_expired() {
    let service = test_service();
    let user = test_user();

    let token = service
        .issue_verification_token(&user, Some(Duration::seconds(-1)))
        .unwrap();

    match service.decode_verification_token(&token) {
        Err(DomainError::Token(TokenError::VerificationExpired)) => {}
        other => panic!("expected VerificationExpired, got {other:?}"),
    }
}

#[test]
fn garbage_strings_yield_invalid_not_a_panic() {
    let service = test_service();

    for garbage in ["", "not-a-token", "a.b.c", "Zm9v.YmFy.YmF6"] {
        match service.decode_verification_token(garbage) {
            Err(DomainError::Token(TokenError::VerificationInvalid)) => {}
            other => panic!("expected VerificationInvalid for {garbage:?}, got {other:?}"),
        }
    }
}

#[test]
fn token_signed_with_a_different_secret_is_invalid() {
    let issuing = test_service();
    let verifying = TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::with_secret("a-different-secret"),
    );

    let token = issuing.issue_verification_token(&test_user(), None).unwrap();

    match verifying.decode_verification_token(&token) {
        Err(DomainError::Token(TokenError::VerificationInvalid)) => {}
        other => panic!("expected VerificationInvalid, got {other:?}"),
    }
}

#[test]
fn two_issuances_produce_distinct_but_both_valid_tokens() {
    let service = test_service();
    let user = test_user();

    let first = service
        .issue_verification_token(&user, Some(Duration::minutes(5)))
        .unwrap();
    let second = service
        .issue_verification_token(&user, Some(Duration::minutes(6)))
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(
        service.decode_verification_token(&first).unwrap().user_id().unwrap(),
        user.id
    );
    assert_eq!(
        service.decode_verification_token(&second).unwrap().user_id().unwrap(),
        user.id
    );
}

#[tokio::test]
async fn token_pair_access_token_verifies() {
    let service = test_service();
    let mut user = test_user();
    user.is_admin = true;

    let pair = service.generate_token_pair(&user).await.unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert!(claims.is_admin);
    assert_eq!(pair.access_expires_in, 2 * 86400);
    assert_eq!(pair.refresh_expires_in, 15 * 86400);
}

#[test]
fn tampered_access_token_is_rejected() {
    let service = test_service();
    let user = test_user();

    let token = service.generate_access_token(&user).unwrap();
    let mut tampered = token.clone();
    tampered.push('x');

    match service.verify_access_token(&tampered) {
        Err(DomainError::Token(TokenError::InvalidTokenFormat)) => {}
        other => panic!("expected InvalidTokenFormat, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_token_verifies_to_its_owner() {
    let service = test_service();
    let user = test_user();

    let pair = service.generate_token_pair(&user).await.unwrap();
    let owner = service.verify_refresh_token(&pair.refresh_token).await.unwrap();

    assert_eq!(owner, user.id);
}

#[tokio::test]
async fn unknown_refresh_token_is_invalid() {
    let service = test_service();

    match service.verify_refresh_token("never-issued").await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken)) => {}
        other => panic!("expected InvalidRefreshToken, got {other:?}"),
    }
}

#[tokio::test]
async fn revoked_refresh_token_is_rejected() {
    let service = test_service();
    let user = test_user();

    let pair = service.generate_token_pair(&user).await.unwrap();
    assert!(service.revoke_refresh_token(&pair.refresh_token).await.unwrap());

    match service.verify_refresh_token(&pair.refresh_token).await {
        Err(DomainError::Token(TokenError::TokenRevoked)) => {}
        other => panic!("expected TokenRevoked, got {other:?}"),
    }

    // A second revocation finds nothing live to block
    assert!(!service.revoke_refresh_token(&pair.refresh_token).await.unwrap());
}

#[tokio::test]
async fn cleanup_leaves_live_refresh_tokens_alone() {
    let service = test_service();
    let user = test_user();

    let pair = service.generate_token_pair(&user).await.unwrap();
    assert_eq!(service.cleanup_expired_tokens().await.unwrap(), 0);
    assert!(service.verify_refresh_token(&pair.refresh_token).await.is_ok());
}

#[tokio::test]
async fn verification_tokens_do_not_touch_the_repository() {
    let service = test_service();
    let user = test_user();

    let token = service.issue_verification_token(&user, None).unwrap();
    service.decode_verification_token(&token).unwrap();

    // Nothing persisted: the stateless token cannot be looked up as a
    // refresh token.
    match service.verify_refresh_token(&token).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken)) => {}
        other => panic!("expected InvalidRefreshToken, got {other:?}"),
    }
}
