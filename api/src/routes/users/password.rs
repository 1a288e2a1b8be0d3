//! Handlers for the /api/v1/users/password/ endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::types::response::MessageResponse;

use crate::dto::password_dto::{ChangePasswordRequest, ResetPasswordRequest, SetPasswordRequest};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;

use super::AppState;

/// PUT /api/v1/users/password/change — change the password of the
/// authenticated user.
///
/// # Responses
/// - 200: `{ "message": "Your password changed successfully!" }`
/// - 400: wrong old password, weak or mismatched new password
pub async fn change_password<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    ctx: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(ctx.user_id, &request.old_password, &request.new_password)
        .await
    {
        Ok(()) => {
            HttpResponse::Ok().json(MessageResponse::new("Your password changed successfully!"))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/v1/users/password/set/{token} — set a new password through an
/// emailed reset token.
///
/// # Responses
/// - 200: `{ "message": "Password changed successfully" }`
/// - 400: expired or malformed link, weak or mismatched password
/// - 404: decoded token references no existing user
pub async fn set_password<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    path: web::Path<String>,
    request: web::Json<SetPasswordRequest>,
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

    let token = path.into_inner();

    match state
        .auth_service
        .set_password(&token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password changed successfully")),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/v1/users/password/reset — email a password-reset link.
///
/// # Responses
/// - 200: `{ "message": "sent you a change password link!" }`
/// - 400: `{ "message": "user with this Email not found!" }`
pub async fn reset_password<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    request: web::Json<ResetPasswordRequest>,
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

    match state.auth_service.request_password_reset(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("sent you a change password link!")),
        Err(error) => handle_domain_error(error),
    }
}
