//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation, safe to show to the caller.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method Not Allowed")
    }

    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_message_only() {
        let body = serde_json::to_string(&ErrorResponse::not_found("Post not found")).unwrap();
        assert_eq!(body, r#"{"message":"Post not found"}"#);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        assert_eq!(
            ErrorResponse::internal_error().message,
            "Internal Server Error"
        );
    }
}
