//! Cache Statistics Module
//!
//! Tracks hits and misses per partition along with invalidation counts.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Partition Counters ==
/// Lock-free hit/miss counters for one partition.
///
/// Lookups only hold read locks, so counting happens on atomics instead of
/// inside the guarded state.
#[derive(Debug, Default)]
pub(crate) struct PartitionCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PartitionCounters {
    // == Record Hit ==
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a hit or a miss depending on whether `found` is set.
    pub(crate) fn record<T>(&self, found: &Option<T>) {
        if found.is_some() {
            self.record_hit();
        } else {
            self.record_miss();
        }
    }

    pub(crate) fn snapshot(&self, entries: usize) -> PartitionStats {
        PartitionStats::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            entries,
        )
    }
}

// == Partition Stats ==
/// Point-in-time statistics for one cache partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartitionStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that fell through to the generator or repository
    pub misses: u64,
    /// Entries currently held
    pub entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl PartitionStats {
    // == Constructor ==
    /// Creates a snapshot and derives the hit rate.
    ///
    /// Returns a hit rate of 0.0 if no lookups have been made.
    pub fn new(hits: u64, misses: u64, entries: usize) -> Self {
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        Self {
            hits,
            misses,
            entries,
            hit_rate,
        }
    }
}

// == Cache Stats ==
/// Statistics for every partition of the password cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub generated: PartitionStats,
    pub all_records: PartitionStats,
    pub by_id: PartitionStats,
    pub by_tag: PartitionStats,
    /// Number of whole-partition invalidations of the record partitions
    pub invalidations: u64,
}
