//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Filters accepted by the admin user listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    /// Restrict to (in)active accounts
    pub is_active: Option<bool>,

    /// Restrict to admins / non-admins
    pub is_admin: Option<bool>,

    /// Case-insensitive substring match over username and email
    pub search: Option<String>,
}

/// Repository trait for User entity persistence operations.
///
/// Implementations handle the actual database access while keeping the
/// domain layer free of storage concerns.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their username (exact match)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Fails with a validation error when the email or username is already
    /// taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether any user holds the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether any user holds the given username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// One page of users matching the filter, ordered by email
    async fn list(
        &self,
        filter: &UserListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<User>, DomainError>;

    /// Total number of users matching the filter
    async fn count(&self, filter: &UserListFilter) -> Result<u64, DomainError>;
}
