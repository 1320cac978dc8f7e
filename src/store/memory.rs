//! In-Memory Repository
//!
//! BTreeMap-backed `PasswordRepository` with sequential id assignment.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::PasswordRecord;
use crate::store::{PasswordRepository, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, PasswordRecord>,
    last_id: u64,
}

// == Memory Repository ==
/// Process-local repository. Listings come back ordered by id.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    table: RwLock<Table>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl PasswordRepository for MemoryRepository {
    async fn save(&self, mut record: PasswordRecord) -> StoreResult<PasswordRecord> {
        let mut table = self.table.write().await;

        let id = match record.id {
            Some(id) => {
                let existing = table.rows.get(&id).ok_or(StoreError::Missing(id))?;
                // Creation time never changes after the first save
                record.created_at = existing.created_at;
                id
            }
            None => {
                table.last_id += 1;
                record.id = Some(table.last_id);
                table.last_id
            }
        };

        debug!("Saving password record {}", id);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> StoreResult<Vec<PasswordRecord>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<PasswordRecord>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        if self.table.write().await.rows.remove(&id).is_none() {
            debug!("Delete of unknown password record {} ignored", id);
        }
        Ok(())
    }

    async fn find_by_tag_name(&self, name: &str) -> StoreResult<Vec<PasswordRecord>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|record| record.has_tag(name))
            .cloned()
            .collect())
    }
}
