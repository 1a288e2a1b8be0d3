//! Handler for POST /api/v1/users/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;

use crate::dto::user_dto::{RegisterData, RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Registers a user.
///
/// The account starts inactive; an activation link is emailed to the given
/// address and must be followed before login works.
///
/// # Responses
/// - 200: `{ "data": { "username", "email", "message" } }`
/// - 400: validation failure or duplicate username/email
pub async fn register<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<RegisterRequest>,
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

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(RegisterResponse {
            data: RegisterData {
                username: user.username,
                email: user.email,
                message: "we sent you an activation url.".to_string(),
            },
        }),
        Err(error) => handle_domain_error(error),
    }
}
