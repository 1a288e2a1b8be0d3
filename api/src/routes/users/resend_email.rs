//! Handler for POST /api/v1/users/resend_email

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::errors::{AuthError, DomainError};
use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::types::response::{ErrorResponse, MessageResponse};

use crate::dto::auth_dto::ResendEmailRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Issues a fresh activation token and emails it again.
///
/// # Responses
/// - 200: `{ "message": "The activation email has been sent again successfully" }`
/// - 400: unknown email or already-active account
pub async fn resend_email<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<ResendEmailRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.resend_verification(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "The activation email has been sent again successfully",
        )),
        // This endpoint keeps its own wording for the two expected failures.
        Err(DomainError::Auth(AuthError::UserNotFound)) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("user_not_found", "User does not exist!")),
        Err(DomainError::Auth(AuthError::AccountAlreadyActive)) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("already_active", "Account already active!")),
        Err(error) => handle_domain_error(error),
    }
}
