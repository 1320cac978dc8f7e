//! Request DTOs for the password API
//!
//! Defines query strings and bodies accepted by the HTTP layer. Range checks
//! happen here, before anything reaches the service.

use serde::Deserialize;

use crate::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::models::{PasswordRecord, Tag};

/// Query string for `GET /api/passwords/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuery {
    /// Requested password length
    pub length: usize,
    /// Complexity tier (1 to 3)
    pub complexity: u8,
    /// Owner recorded on the stored password
    pub owner: String,
}

impl GenerateQuery {
    /// Validates the query parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Some(format!(
                "Password length must be between {} and {} characters",
                MIN_LENGTH, MAX_LENGTH
            ));
        }
        if !(1..=3).contains(&self.complexity) {
            return Some("Complexity must be between 1 and 3".to_string());
        }
        None
    }
}

/// Query string for `GET /api/passwords/by-tag`
#[derive(Debug, Clone, Deserialize)]
pub struct TagQuery {
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

/// Body for `POST /api/passwords` and `PUT /api/passwords/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordPayload {
    /// Plaintext secret, hashed before storage
    pub password: String,
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl PasswordPayload {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.password.is_empty() {
            return Some("Password cannot be empty".to_string());
        }
        None
    }

    /// Converts the payload into an unsaved record.
    pub fn into_record(self) -> PasswordRecord {
        PasswordRecord::new(self.password, self.owner).with_tags(self.tags)
    }
}
