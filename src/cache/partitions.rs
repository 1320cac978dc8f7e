//! Password Cache Module
//!
//! Four independent partitions in front of the generator and the repository.
//! The generated partition lives behind its own lock; the three record
//! partitions share one lock so invalidating them is a single atomic write.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::stats::{CacheStats, PartitionCounters};
use crate::generator::Complexity;
use crate::models::PasswordRecord;

/// Key of the generated-password partition.
pub type GeneratedKey = (usize, Complexity);

// == Epoch ==
/// Invalidation generation of the record partitions.
///
/// Capture it before falling back to the repository and hand it back on
/// `put_*`; values fetched under an older epoch are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn value(self) -> u64 {
        self.0
    }
}

// == Record Partitions ==
#[derive(Debug, Default)]
struct RecordPartitions {
    epoch: u64,
    all: Option<Vec<PasswordRecord>>,
    by_id: HashMap<u64, PasswordRecord>,
    by_tag: HashMap<String, Vec<PasswordRecord>>,
}

impl RecordPartitions {
    fn accepts(&self, epoch: Epoch) -> bool {
        epoch.0 == self.epoch
    }

    fn clear(&mut self) {
        self.all = None;
        self.by_id.clear();
        self.by_tag.clear();
        self.epoch += 1;
    }
}

#[derive(Debug, Default)]
struct Counters {
    generated: PartitionCounters,
    all: PartitionCounters,
    by_id: PartitionCounters,
    by_tag: PartitionCounters,
}

// == Password Cache ==
/// Process-local cache shared by every request handled by the service.
#[derive(Debug, Default)]
pub struct PasswordCache {
    generated: RwLock<HashMap<GeneratedKey, String>>,
    records: RwLock<RecordPartitions>,
    counters: Counters,
}

impl PasswordCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Generated Partition ==
    /// Returns the password previously generated for `(length, complexity)`.
    pub async fn get_generated(&self, length: usize, complexity: Complexity) -> Option<String> {
        let found = self
            .generated
            .read()
            .await
            .get(&(length, complexity))
            .cloned();
        self.counters.generated.record(&found);
        found
    }

    /// Stores a generated password. Never cleared by record writes.
    pub async fn put_generated(&self, length: usize, complexity: Complexity, password: String) {
        self.generated
            .write()
            .await
            .insert((length, complexity), password);
    }

    // == Epoch ==
    /// Current invalidation epoch of the record partitions.
    pub async fn epoch(&self) -> Epoch {
        Epoch(self.records.read().await.epoch)
    }

    // == All-Records Partition ==
    pub async fn get_all(&self) -> Option<Vec<PasswordRecord>> {
        let found = self.records.read().await.all.clone();
        self.counters.all.record(&found);
        found
    }

    /// Stores the full listing if no invalidation happened since `epoch`.
    ///
    /// Returns false when the value was discarded as stale.
    pub async fn put_all(&self, epoch: Epoch, records: Vec<PasswordRecord>) -> bool {
        let mut partitions = self.records.write().await;
        if !partitions.accepts(epoch) {
            debug!("Discarding stale all-records snapshot from epoch {}", epoch.0);
            return false;
        }
        partitions.all = Some(records);
        true
    }

    // == By-Id Partition ==
    pub async fn get_by_id(&self, id: u64) -> Option<PasswordRecord> {
        let found = self.records.read().await.by_id.get(&id).cloned();
        self.counters.by_id.record(&found);
        found
    }

    /// Stores a single record if no invalidation happened since `epoch`.
    pub async fn put_by_id(&self, epoch: Epoch, id: u64, record: PasswordRecord) -> bool {
        let mut partitions = self.records.write().await;
        if !partitions.accepts(epoch) {
            debug!("Discarding stale snapshot of record {}", id);
            return false;
        }
        partitions.by_id.insert(id, record);
        true
    }

    // == By-Tag Partition ==
    pub async fn get_by_tag(&self, tag_name: &str) -> Option<Vec<PasswordRecord>> {
        let found = self.records.read().await.by_tag.get(tag_name).cloned();
        self.counters.by_tag.record(&found);
        found
    }

    /// Stores a tag listing if no invalidation happened since `epoch`.
    pub async fn put_by_tag(
        &self,
        epoch: Epoch,
        tag_name: impl Into<String>,
        records: Vec<PasswordRecord>,
    ) -> bool {
        let tag_name = tag_name.into();
        let mut partitions = self.records.write().await;
        if !partitions.accepts(epoch) {
            debug!("Discarding stale listing for tag '{}'", tag_name);
            return false;
        }
        partitions.by_tag.insert(tag_name, records);
        true
    }

    // == Invalidation ==
    /// Empties the all-records, by-id and by-tag partitions in one step.
    ///
    /// Readers see either every partition as it was or every partition
    /// empty. The generated partition is left alone.
    pub async fn clear_records(&self) {
        let mut partitions = self.records.write().await;
        partitions.clear();
        debug!("Record partitions invalidated (epoch {})", partitions.epoch);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let generated_entries = self.generated.read().await.len();
        let partitions = self.records.read().await;

        CacheStats {
            generated: self.counters.generated.snapshot(generated_entries),
            all_records: self
                .counters
                .all
                .snapshot(usize::from(partitions.all.is_some())),
            by_id: self.counters.by_id.snapshot(partitions.by_id.len()),
            by_tag: self.counters.by_tag.snapshot(partitions.by_tag.len()),
            invalidations: partitions.epoch,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;
    use std::sync::Arc;

    fn record(id: u64, owner: &str) -> PasswordRecord {
        let mut record = PasswordRecord::new("hash", owner).with_tags([Tag::new(1, "work")]);
        record.id = Some(id);
        record
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let cache = PasswordCache::new();

        assert!(cache.get_generated(8, Complexity::Digits).await.is_none());
        assert!(cache.get_all().await.is_none());
        assert!(cache.get_by_id(1).await.is_none());
        assert!(cache.get_by_tag("work").await.is_none());
        assert_eq!(cache.epoch().await.value(), 0);
    }

    #[tokio::test]
    async fn test_generated_keyed_by_length_and_complexity() {
        let cache = PasswordCache::new();
        cache
            .put_generated(8, Complexity::Digits, "12345678".to_string())
            .await;

        assert_eq!(
            cache.get_generated(8, Complexity::Digits).await.as_deref(),
            Some("12345678")
        );
        assert!(cache.get_generated(8, Complexity::Full).await.is_none());
        assert!(cache.get_generated(9, Complexity::Digits).await.is_none());
    }

    #[tokio::test]
    async fn test_put_and_get_record_partitions() {
        let cache = PasswordCache::new();
        let epoch = cache.epoch().await;

        assert!(cache.put_all(epoch, vec![record(1, "alice")]).await);
        assert!(cache.put_by_id(epoch, 1, record(1, "alice")).await);
        assert!(cache.put_by_tag(epoch, "work", vec![record(1, "alice")]).await);

        assert_eq!(cache.get_all().await.unwrap().len(), 1);
        assert_eq!(cache.get_by_id(1).await.unwrap().owner, "alice");
        assert_eq!(cache.get_by_tag("work").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_records_empties_all_record_partitions() {
        let cache = PasswordCache::new();
        let epoch = cache.epoch().await;
        cache.put_all(epoch, vec![record(1, "alice")]).await;
        cache.put_by_id(epoch, 1, record(1, "alice")).await;
        cache.put_by_tag(epoch, "work", vec![]).await;
        cache
            .put_generated(10, Complexity::Full, "x".repeat(10))
            .await;

        cache.clear_records().await;

        assert!(cache.get_all().await.is_none());
        assert!(cache.get_by_id(1).await.is_none());
        assert!(cache.get_by_tag("work").await.is_none());
        // Generated passwords do not depend on stored records
        assert!(cache.get_generated(10, Complexity::Full).await.is_some());
    }

    #[tokio::test]
    async fn test_stale_epoch_put_is_discarded() {
        let cache = PasswordCache::new();
        let before = cache.epoch().await;

        cache.clear_records().await;

        assert!(!cache.put_all(before, vec![record(1, "stale")]).await);
        assert!(!cache.put_by_id(before, 1, record(1, "stale")).await);
        assert!(!cache.put_by_tag(before, "work", vec![]).await);
        assert!(cache.get_all().await.is_none());
        assert!(cache.get_by_id(1).await.is_none());

        let after = cache.epoch().await;
        assert!(after > before);
        assert!(cache.put_all(after, vec![]).await);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache = PasswordCache::new();
        let epoch = cache.epoch().await;

        cache.get_by_id(1).await; // miss
        cache.put_by_id(epoch, 1, record(1, "alice")).await;
        cache.get_by_id(1).await; // hit
        cache.get_generated(4, Complexity::Digits).await; // miss
        cache.clear_records().await;

        let stats = cache.stats().await;
        assert_eq!(stats.by_id.hits, 1);
        assert_eq!(stats.by_id.misses, 1);
        assert_eq!(stats.by_id.entries, 0);
        assert_eq!(stats.generated.misses, 1);
        assert_eq!(stats.invalidations, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_and_clears() {
        let cache = Arc::new(PasswordCache::new());

        let mut handles = Vec::new();
        for i in 0..16u64 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    let epoch = cache.epoch().await;
                    cache.put_by_id(epoch, i, record(i, "worker")).await;
                    cache.get_all().await;
                    if i % 4 == 0 {
                        cache.clear_records().await;
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        cache.clear_records().await;
        let stats = cache.stats().await;
        assert_eq!(stats.by_id.entries, 0);
        assert_eq!(stats.all_records.entries, 0);
        assert_eq!(stats.invalidations, 4 * 50 + 1);
    }
}
