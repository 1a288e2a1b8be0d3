//! Password management request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// PUT /api/v1/users/password/change
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords must match."))]
    pub confirm_new_password: String,
}

/// POST /api/v1/users/password/set/{token}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetPasswordRequest {
    #[validate(length(min = 8))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords must match."))]
    pub confirm_new_password: String,
}

/// POST /api/v1/users/password/reset
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_requires_matching_confirmation() {
        let request = ChangePasswordRequest {
            old_password: "oldpass1".to_string(),
            new_password: "newpass12".to_string(),
            confirm_new_password: "other12".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn set_password_enforces_minimum_length() {
        let request = SetPasswordRequest {
            new_password: "short".to_string(),
            confirm_new_password: "short".to_string(),
        };
        assert!(request.validate().is_err());

        let request = SetPasswordRequest {
            new_password: "longenough1".to_string(),
            confirm_new_password: "longenough1".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
