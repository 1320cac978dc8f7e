//! Cache Module
//!
//! Partitioned in-memory cache for generated passwords and record lookups,
//! with whole-partition invalidation on writes.

mod partitions;
mod stats;


// Re-export public types
pub use partitions::{Epoch, GeneratedKey, PasswordCache};
pub use stats::{CacheStats, PartitionStats};
