//! User entity representing a registered account in the Signet system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account.
///
/// Accounts start inactive and become active once the emailed activation
/// link is verified. Profile data (bio, avatar) lives on the entity itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique display name
    pub username: String,

    /// Unique email address, also the login identifier
    pub email: String,

    /// bcrypt hash of the user's password
    pub password_hash: String,

    /// Free-form profile text, up to 500 characters
    pub bio: Option<String>,

    /// Object-storage key of the uploaded avatar, if any
    pub avatar_key: Option<String>,

    /// Whether the account's email address has been verified
    pub is_active: bool,

    /// Whether the user has administrative privileges
    pub is_admin: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new inactive, non-admin user
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            bio: None,
            avatar_key: None,
            is_active: false,
            is_admin: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Marks the account as verified
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Marks the account as unverified (e.g. after an email change)
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored avatar key
    pub fn set_avatar_key(&mut self, avatar_key: Option<String>) {
        self.avatar_key = avatar_key;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn new_users_start_inactive_and_non_admin() {
        let user = sample_user();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.is_active);
        assert!(!user.is_admin);
        assert!(user.bio.is_none());
        assert!(user.avatar_key.is_none());
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn activation_round_trip() {
        let mut user = sample_user();

        user.activate();
        assert!(user.is_active);

        user.deactivate();
        assert!(!user.is_active);
    }

    #[test]
    fn setting_password_touches_updated_at() {
        let mut user = sample_user();
        let before = user.updated_at;

        user.set_password_hash("$2b$04$other".to_string());
        assert_eq!(user.password_hash, "$2b$04$other");
        assert!(user.updated_at >= before);
    }

    #[test]
    fn update_last_login_records_a_timestamp() {
        let mut user = sample_user();

        assert!(user.last_login_at.is_none());
        user.update_last_login();
        assert!(user.last_login_at.is_some());
    }

    #[test]
    fn avatar_key_can_be_set_and_cleared() {
        let mut user = sample_user();

        user.set_avatar_key(Some("avatars/alice.png".to_string()));
        assert_eq!(user.avatar_key.as_deref(), Some("avatars/alice.png"));

        user.set_avatar_key(None);
        assert!(user.avatar_key.is_none());
    }
}
