//! Handler for POST /api/v1/users/token/refresh

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;

use crate::dto::auth_dto::{RefreshResponse, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Mints a new access token from a valid refresh token.
///
/// # Responses
/// - 200: `{ "access" }`
/// - 400: unknown or revoked refresh token
/// - 401: expired refresh token
pub async fn refresh<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.auth_service.refresh(&request.refresh).await {
        Ok(access) => HttpResponse::Ok().json(RefreshResponse { access }),
        Err(error) => handle_domain_error(error),
    }
}
