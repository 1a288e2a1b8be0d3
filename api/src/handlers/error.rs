//! Mapping from domain errors to HTTP responses.
//!
//! Every decode failure of the verification flow surfaces here with a fixed
//! message and status; nothing below lets a token error propagate as a 500.

use actix_web::HttpResponse;
use tracing::error;

use signet_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use signet_shared::types::response::ErrorResponse;

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::ValidationErr(validation_error) => handle_validation_error(validation_error),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "Not found."))
        }
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "unauthorized",
            "Authentication credentials were not provided.",
        )),
        DomainError::Database { message } | DomainError::Internal { message } => {
            error!(%message, "internal error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

fn handle_token_error(err: TokenError) -> HttpResponse {
    match err {
        TokenError::VerificationExpired => HttpResponse::BadRequest().json(ErrorResponse::new(
            "activation_link_expired",
            "Activation link has expired!",
        )),
        TokenError::VerificationInvalid => HttpResponse::BadRequest().json(ErrorResponse::new(
            "activation_link_invalid",
            "Activation link is invalid!",
        )),
        TokenError::InvalidRefreshToken | TokenError::TokenRevoked => HttpResponse::BadRequest()
            .json(ErrorResponse::new("token_invalid", "token is invalid!")),
        TokenError::TokenExpired | TokenError::InvalidTokenFormat => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(
                "token_not_valid",
                "Token is invalid or expired",
            )),
        TokenError::TokenGenerationFailed => {
            error!("token generation failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

fn handle_auth_error(err: AuthError) -> HttpResponse {
    match err {
        // The folded failure: a decoded token whose user is gone gets the
        // same generic wording as a malformed URL, 404 status as the only
        // difference.
        AuthError::VerificationUserInvalid => HttpResponse::NotFound().json(ErrorResponse::new(
            "activation_url_invalid",
            "Activation URL is invalid",
        )),
        AuthError::AccountAlreadyActive => HttpResponse::BadRequest().json(ErrorResponse::new(
            "already_active",
            "this account already is active",
        )),
        AuthError::UserNotFound => HttpResponse::BadRequest().json(ErrorResponse::new(
            "user_not_found",
            "user with this Email not found!",
        )),
        AuthError::AuthenticationFailed | AuthError::AccountInactive => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(
                "authentication_failed",
                "No active account found with the given credentials",
            )),
        AuthError::OldPasswordMismatch => HttpResponse::BadRequest().json(ErrorResponse::new(
            "old_password_incorrect",
            "Your old password is not correct",
        )),
        AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(ErrorResponse::new(
            "permission_denied",
            "You do not have permission to perform this action.",
        )),
    }
}

fn handle_validation_error(err: ValidationError) -> HttpResponse {
    let message = match &err {
        ValidationError::DuplicateValue { field } if field == "username" => {
            "user with this username already exists.".to_string()
        }
        ValidationError::DuplicateValue { field } if field == "email" => {
            "user with this Email already exists.".to_string()
        }
        ValidationError::DuplicateValue { field } => {
            format!("user with this {field} already exists.")
        }
        ValidationError::PasswordMismatch => "Passwords must match.".to_string(),
        ValidationError::WeakPassword { reason } => {
            format!("This password is too weak: {reason}.")
        }
        ValidationError::InvalidEmail => "Enter a valid email address.".to_string(),
        ValidationError::EmptyUpdate => "fields can not be blank.".to_string(),
        ValidationError::UnsupportedFileType { .. } => {
            "File extension not allowed. Allowed extensions are: png, jpg, jpeg.".to_string()
        }
        ValidationError::InvalidFormat { field } => format!("Invalid value for {field}."),
        ValidationError::RequiredField { field } => format!("{field} is required."),
    };

    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}

/// Convert `validator` derive failures into the 400 response shape
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{field}: {detail}")
        })
        .collect::<Vec<_>>()
        .join("; ");

    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn verification_failures_map_to_the_fixed_statuses() {
        let expired = handle_domain_error(TokenError::VerificationExpired.into());
        assert_eq!(expired.status(), StatusCode::BAD_REQUEST);

        let invalid = handle_domain_error(TokenError::VerificationInvalid.into());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let folded = handle_domain_error(AuthError::VerificationUserInvalid.into());
        assert_eq!(folded.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn login_failures_are_unauthorized() {
        let failed = handle_domain_error(AuthError::AuthenticationFailed.into());
        assert_eq!(failed.status(), StatusCode::UNAUTHORIZED);

        let inactive = handle_domain_error(AuthError::AccountInactive.into());
        assert_eq!(inactive.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_errors_do_not_leak_details() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused at 10.0.0.5".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
