//! Handler for POST /api/v1/users/token

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Obtains a session token pair from email + password credentials.
///
/// # Responses
/// - 200: `{ "refresh", "access", "user": { "id", "username", "email" } }`
/// - 401: unknown credentials or not-yet-activated account
pub async fn login<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<LoginRequest>,
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

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            refresh: auth.refresh_token,
            access: auth.access_token,
            user: auth.user,
        }),
        Err(error) => handle_domain_error(error),
    }
}
