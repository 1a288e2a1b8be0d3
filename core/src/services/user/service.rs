//! User service: admin listing, profile retrieval and updates, avatars,
//! account deletion.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use signet_shared::types::pagination::PageQuery;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{TokenRepository, UserListFilter, UserRepository};
use crate::services::auth::AuthService;
use crate::services::email::MailerTrait;
use crate::services::storage::AvatarStorageTrait;

/// Maximum accepted bio length, in characters
const MAX_BIO_LENGTH: usize = 500;

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Whether the update carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.bio.is_none()
    }
}

/// Service for profile management and the admin user listing
pub struct UserService<U, V, T, M>
where
    U: UserRepository,
    V: AvatarStorageTrait,
    T: TokenRepository,
    M: MailerTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Object storage for uploaded avatars
    avatar_storage: Arc<V>,
    /// Auth service, for re-verification after an email change
    auth_service: Arc<AuthService<U, T, M>>,
}

impl<U, V, T, M> UserService<U, V, T, M>
where
    U: UserRepository,
    V: AvatarStorageTrait,
    T: TokenRepository,
    M: MailerTrait,
{
    /// Create a new user service
    pub fn new(
        user_repository: Arc<U>,
        avatar_storage: Arc<V>,
        auth_service: Arc<AuthService<U, T, M>>,
    ) -> Self {
        Self {
            user_repository,
            avatar_storage,
            auth_service,
        }
    }

    /// One page of users matching the filter, plus the total match count
    pub async fn list_users(
        &self,
        filter: &UserListFilter,
        query: PageQuery,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let query = query.sanitized();
        let total = self.user_repository.count(filter).await?;
        let users = self
            .user_repository
            .list(filter, query.page_size(), query.offset())
            .await?;
        Ok((users, total))
    }

    /// Fetch an active user's profile; inactive and unknown ids both 404
    pub async fn get_profile(&self, id: Uuid) -> Result<User, DomainError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })
    }

    /// Partially update a profile.
    ///
    /// Changing the email address deactivates the account and re-sends an
    /// activation link to the new address. Returns the updated user and
    /// whether the email changed.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<(User, bool), DomainError> {
        if update.is_empty() {
            return Err(ValidationError::EmptyUpdate.into());
        }

        let mut user = self.get_profile(id).await?;

        if let Some(ref username) = update.username {
            if username != &user.username {
                if !signet_shared::utils::is_valid_username(username) {
                    return Err(ValidationError::InvalidFormat {
                        field: "username".to_string(),
                    }
                    .into());
                }
                if self.user_repository.exists_by_username(username).await? {
                    return Err(ValidationError::DuplicateValue {
                        field: "username".to_string(),
                    }
                    .into());
                }
                user.username = username.clone();
            }
        }

        let mut email_changed = false;
        if let Some(ref email) = update.email {
            if email != &user.email {
                if !signet_shared::utils::is_valid_email(email) {
                    return Err(ValidationError::InvalidEmail.into());
                }
                if self.user_repository.exists_by_email(email).await? {
                    return Err(ValidationError::DuplicateValue {
                        field: "email".to_string(),
                    }
                    .into());
                }
                user.email = email.clone();
                email_changed = true;
            }
        }

        if let Some(ref bio) = update.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(ValidationError::InvalidFormat {
                    field: "bio".to_string(),
                }
                .into());
            }
            user.bio = Some(bio.clone());
        }

        if email_changed {
            // The new address must be proven before the account is usable
            // again.
            user.deactivate();
        }

        let user = self.user_repository.update(user).await?;

        if email_changed {
            self.auth_service.send_activation_email(&user, &user.email).await;
        }

        Ok((user, email_changed))
    }

    /// Store a new avatar image for a user, replacing any previous one
    pub async fn upload_avatar(
        &self,
        id: Uuid,
        content: &[u8],
        content_type: &str,
    ) -> Result<User, DomainError> {
        let extension = match content_type {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            other => {
                return Err(ValidationError::UnsupportedFileType {
                    content_type: other.to_string(),
                }
                .into())
            }
        };

        let mut user = self.get_profile(id).await?;
        let key = format!("avatars/{}.{}", user.id, extension);

        if let Some(ref old_key) = user.avatar_key {
            if old_key != &key {
                if let Err(e) = self.avatar_storage.delete(old_key).await {
                    warn!(error = %e, key = %old_key, "failed to delete previous avatar");
                }
            }
        }

        self.avatar_storage.store(&key, content, content_type).await?;

        user.set_avatar_key(Some(key));
        self.user_repository.update(user).await
    }

    /// Public URL of a user's avatar, if one is set
    pub fn avatar_url(&self, user: &User) -> Option<String> {
        user.avatar_key.as_deref().map(|key| self.avatar_storage.url(key))
    }

    /// Delete an account, removing its avatar object first
    pub async fn delete_account(&self, id: Uuid) -> Result<(), DomainError> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        if let Some(ref key) = user.avatar_key {
            self.avatar_storage.delete(key).await?;
        }

        self.user_repository.delete(id).await?;
        Ok(())
    }
}
