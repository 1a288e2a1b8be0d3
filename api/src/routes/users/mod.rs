//! User route handlers: registration, verification, sessions, passwords,
//! profiles and the admin listing.

pub mod block_token;
pub mod list;
pub mod login;
pub mod password;
pub mod profile;
pub mod refresh;
pub mod register;
pub mod resend_email;
pub mod verify;

use std::sync::Arc;

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::auth::AuthService;
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;
use signet_core::services::user::UserService;

/// Application state that holds the shared services
pub struct AppState<U, T, M, V>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailerTrait,
    V: AvatarStorageTrait,
{
    pub auth_service: Arc<AuthService<U, T, M>>,
    pub user_service: Arc<UserService<U, V, T, M>>,
}
