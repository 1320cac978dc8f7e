//! Response DTOs for the password API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::generator::Complexity;

/// Response body for `GET /api/passwords/generate`
///
/// Carries the plaintext once; the stored record only holds the hash.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub owner: String,
    pub password: String,
    pub length: usize,
    /// Tier the password was drawn from, serialized as its level
    pub complexity: Complexity,
    /// Id of the record the password was stored under
    pub id: Option<u64>,
}

impl GenerateResponse {
    pub fn new(
        owner: impl Into<String>,
        password: impl Into<String>,
        length: usize,
        complexity: Complexity,
        id: Option<u64>,
    ) -> Self {
        Self {
            owner: owner.into(),
            password: password.into(),
            length,
            complexity,
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_serialize() {
        let resp = GenerateResponse::new("alice", "12345678", 8, Complexity::Digits, Some(4));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["owner"], "alice");
        assert_eq!(json["password"], "12345678");
        assert_eq!(json["length"], 8);
        assert_eq!(json["complexity"], 1);
        assert_eq!(json["id"], 4);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
