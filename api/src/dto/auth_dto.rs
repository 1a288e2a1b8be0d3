//! Authentication request/response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use signet_core::domain::value_objects::AuthenticatedUser;

/// POST /api/v1/users/token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response: token pair plus the authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub user: AuthenticatedUser,
}

/// POST /api/v1/users/token/refresh
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub refresh: String,
}

/// Refresh response carrying the new access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// POST /api/v1/users/token/block
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlockTokenRequest {
    #[validate(length(min = 1))]
    pub refresh: String,
}

/// POST /api/v1/users/resend_email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendEmailRequest {
    #[validate(email)]
    pub email: String,
}

/// GET /api/v1/users/register/verify/{token} success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub message: String,
    pub token: String,
    pub refresh: String,
}
