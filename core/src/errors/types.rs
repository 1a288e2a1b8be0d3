//! Domain-specific error types for authentication and related operations.
//!
//! The user-facing message and HTTP status for each variant live in the
//! presentation layer; these types only carry the failure category.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Account not activated")]
    AccountInactive,

    #[error("Account already active")]
    AccountAlreadyActive,

    #[error("Old password does not match")]
    OldPasswordMismatch,

    /// The verification token decoded but no user exists for its subject.
    /// Deliberately surfaced with the same generic "invalid URL" message as
    /// a malformed token so callers cannot probe which ids exist.
    #[error("Verification target invalid")]
    VerificationUserInvalid,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Verification token expired")]
    VerificationExpired,

    #[error("Verification token invalid")]
    VerificationInvalid,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },

    #[error("Passwords must match")]
    PasswordMismatch,

    #[error("Password too weak: {reason}")]
    WeakPassword { reason: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Unsupported file type: {content_type}")]
    UnsupportedFileType { content_type: String },

    #[error("Nothing to update")]
    EmptyUpdate,
}
