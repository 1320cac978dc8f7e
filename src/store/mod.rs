//! Store Module
//!
//! The persistence collaborator behind the password service: an async
//! repository trait plus the bundled in-memory implementation.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PasswordRecord;

pub use memory::MemoryRepository;

// == Store Error ==
/// Failures reported by a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Update targeted an id that is not stored
    #[error("No stored password with id {0}")]
    Missing(u64),

    /// Backend failure (connectivity, constraint violation, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for repository operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Repository Trait ==
/// Durable storage for password records.
///
/// Each call is expected to be individually consistent; the service adds no
/// transactional semantics on top.
#[async_trait]
pub trait PasswordRepository: Send + Sync {
    /// Inserts a record without an id, or replaces the record with the same id.
    async fn save(&self, record: PasswordRecord) -> StoreResult<PasswordRecord>;

    /// Returns every stored record.
    async fn find_all(&self) -> StoreResult<Vec<PasswordRecord>>;

    /// Returns the record with `id`, if any.
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<PasswordRecord>>;

    /// Removes the record with `id`.
    async fn delete_by_id(&self, id: u64) -> StoreResult<()>;

    /// Returns records carrying a tag named `name`.
    async fn find_by_tag_name(&self, name: &str) -> StoreResult<Vec<PasswordRecord>>;
}
