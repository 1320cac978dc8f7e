//! Domain records and request/response models for the password API
//!
//! `record` holds the persisted entities; `requests` and `responses` are the
//! DTOs used for serializing/deserializing HTTP bodies and query strings.

pub mod record;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use record::{PasswordRecord, Tag};
pub use requests::{GenerateQuery, PasswordPayload, TagQuery};
pub use responses::{ErrorResponse, GenerateResponse, HealthResponse};
