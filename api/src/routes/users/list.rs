//! Handler for GET /api/v1/users — admin listing with filters and the
//! pagination envelope.

use actix_web::{web, HttpRequest, HttpResponse};

use signet_core::errors::AuthError;
use signet_core::repositories::{TokenRepository, UserListFilter, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::types::pagination::PaginatedResponse;

use crate::dto::user_dto::{UserListQuery, UserResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use super::AppState;

/// Returns the paginated list of users. Admin only.
///
/// Query parameters: `page`, `limit` (max 20), `is_active`, `is_admin`,
/// `search` (matched against username and email).
///
/// # Responses
/// - 200: `{ "pagination": { .. }, "data": [ users ] }`
/// - 403: non-admin caller
pub async fn list_users<U, T, M, V>(
    state: web::Data<AppState<U, T, M, V>>,
    ctx: AuthContext,
    req: HttpRequest,
    query: web::Query<UserListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    if !ctx.is_admin {
        return handle_domain_error(AuthError::InsufficientPermissions.into());
    }

    let filter = UserListFilter {
        is_active: query.is_active,
        is_admin: query.is_admin,
        search: query.search.clone(),
    };
    let page_query = query.page_query();

    match state.user_service.list_users(&filter, page_query).await {
        Ok((users, total)) => {
            let data: Vec<UserResponse> = users
                .iter()
                .map(|user| {
                    UserResponse::from_user(user, state.user_service.avatar_url(user))
                })
                .collect();

            HttpResponse::Ok().json(PaginatedResponse::new(data, page_query, total, req.path()))
        }
        Err(error) => handle_domain_error(error),
    }
}
