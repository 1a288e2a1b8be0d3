//! Handlers for the /api/v1/users/profile/{id} endpoints.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use signet_core::errors::AuthError;
use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_core::services::user::ProfileUpdate;
use signet_shared::types::response::MessageResponse;

use crate::dto::user_dto::{UpdateProfileRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;

use super::AppState;

/// GET /api/v1/users/profile/{id} — public profile of an active user.
pub async fn get_profile<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    match state.user_service.get_profile(path.into_inner()).await {
        Ok(user) => {
            let avatar = state.user_service.avatar_url(&user);
            HttpResponse::Ok().json(UserResponse::from_user(&user, avatar))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/v1/users/profile/{id} — partial profile update, owner only.
///
/// Changing the email deactivates the account and sends a verification link
/// to the new address.
pub async fn update_profile<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    let id = path.into_inner();
    if let Err(response) = require_owner(&ctx, id) {
        return response;
    }
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let update = ProfileUpdate {
        username: request.username.clone(),
        email: request.email.clone(),
        bio: request.bio.clone(),
    };

    match state.user_service.update_profile(id, update).await {
        Ok((_, email_changed)) => {
            let mut message = "Updated profile successfully.".to_string();
            if email_changed {
                message.push_str(" A verification URL has been sent to your new email address.");
            }
            HttpResponse::Ok().json(MessageResponse::new(message))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/v1/users/profile/{id}/avatar — upload an avatar image, owner
/// only. Accepts the raw image bytes with a png/jpeg content type.
pub async fn upload_avatar<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    let id = path.into_inner();
    if let Err(response) = require_owner(&ctx, id) {
        return response;
    }

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    match state
        .user_service
        .upload_avatar(id, &body, &content_type)
        .await
    {
        Ok(user) => {
            let avatar = state.user_service.avatar_url(&user);
            HttpResponse::Ok().json(UserResponse::from_user(&user, avatar))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/users/profile/{id} — delete the account, owner only.
pub async fn delete_account<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    let id = path.into_inner();
    if let Err(response) = require_owner(&ctx, id) {
        return response;
    }

    match state.user_service.delete_account(id).await {
        Ok(()) => {
            HttpResponse::Ok().json(MessageResponse::new("your account deleted successfully."))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Owner-or-admin guard for the write endpoints
fn require_owner(ctx: &AuthContext, id: Uuid) -> Result<(), HttpResponse> {
    if ctx.user_id == id || ctx.is_admin {
        Ok(())
    } else {
        Err(handle_domain_error(
            AuthError::InsufficientPermissions.into(),
        ))
    }
}
