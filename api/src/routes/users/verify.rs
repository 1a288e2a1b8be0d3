//! Handler for GET /api/v1/users/register/verify/{token}

use actix_web::{web, HttpResponse};

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;

use crate::dto::auth_dto::VerifyResponse;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Verification endpoint for registration.
///
/// Consumes the emailed activation token, activates the account and logs the
/// user in.
///
/// # Responses
/// - 200: `{ "message", "token", "refresh" }`
/// - 400: expired or malformed link, or account already active
/// - 404: decoded token references no existing user
pub async fn verify<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    let token = path.into_inner();

    match state.auth_service.activate(&token).await {
        Ok(auth) => HttpResponse::Ok().json(VerifyResponse {
            message: "Account activated successfully".to_string(),
            token: auth.access_token,
            refresh: auth.refresh_token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
