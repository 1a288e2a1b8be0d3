//! API response wrappers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simple success payload carrying a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standardized error response structure for domain errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp of when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("token_expired", "Activation link has expired!");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "token_expired");
        assert_eq!(json["message"], "Activation link has expired!");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn message_response_round_trips() {
        let response = MessageResponse::new("Token blocked successfully!");
        let json = serde_json::to_string(&response).unwrap();
        let back: MessageResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, "Token blocked successfully!");
    }
}
