//! Handler for POST /api/v1/users/token/block

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::types::response::MessageResponse;

use crate::dto::auth_dto::BlockTokenRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Blocks (revokes) a refresh token so it can no longer mint access tokens.
///
/// Only session refresh tokens are revocable; activation and reset tokens
/// have no revocation list and simply age out.
///
/// # Responses
/// - 200: `{ "message": "Token blocked successfully!" }`
/// - 400: `{ "message": "token is invalid!" }`
pub async fn block_token<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<BlockTokenRequest>,
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

    match state.auth_service.block_token(&request.refresh).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Token blocked successfully!")),
        Err(error) => handle_domain_error(error),
    }
}
