//! User and profile request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use signet_core::domain::entities::user::User;
use signet_shared::types::pagination::PageQuery;

/// POST /api/v1/users/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords must match."))]
    pub password2: String,
}

/// Registration success body: the accepted fields plus the follow-up hint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub data: RegisterData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub message: String,
}

/// PATCH /api/v1/users/profile/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 100))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
}

/// Query parameters of the admin user listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
    pub search: Option<String>,
}

impl UserListQuery {
    /// The pagination part of the query, with defaults applied
    pub fn page_query(&self) -> PageQuery {
        let defaults = PageQuery::default();
        PageQuery::new(
            self.page.unwrap_or(defaults.page),
            self.limit.unwrap_or(defaults.limit),
        )
    }
}

/// Public representation of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    /// Shape a user entity for the wire, with the avatar key already
    /// resolved to a URL
    pub fn from_user(user: &User, avatar_url: Option<String>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            avatar: avatar_url,
            is_active: user.is_active,
            is_admin: user.is_admin,
            last_login: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password1".to_string(),
            password2: "password1".to_string(),
        }
    }

    #[test]
    fn register_request_accepts_matching_passwords() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn register_request_rejects_mismatched_passwords() {
        let mut request = valid_request();
        request.password2 = "different1".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_enforces_password_length() {
        let mut request = valid_request();
        request.password = "short".to_string();
        request.password2 = "short".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_enforces_username_bounds() {
        let mut request = valid_request();
        request.username = "ab".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_request_validates_only_present_fields() {
        let empty = UpdateProfileRequest::default();
        assert!(empty.validate().is_ok());

        let bad_email = UpdateProfileRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());

        let long_bio = UpdateProfileRequest {
            bio: Some("x".repeat(501)),
            ..Default::default()
        };
        assert!(long_bio.validate().is_err());
    }

    #[test]
    fn list_query_falls_back_to_default_pagination() {
        let query = UserListQuery::default();
        let page = query.page_query();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);

        let query = UserListQuery {
            limit: Some(100),
            ..Default::default()
        };
        // Clamped to the maximum page size
        assert_eq!(query.page_query().limit, 20);
    }
}
