use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use crate::record::PraiseRecord;
use crate::store::repository::{PraiseRepository, StoreError};
use crate::types::identifiers::{PraiseId, RecordRevision};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("duplicate record id {0}")]
    DuplicateId(PraiseId),
}

/// In-memory repository.
///
/// A `BTreeMap` keyed by id makes the id-ascending `fetch_all` contract fall
/// out of iteration order. Locks are never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<BTreeMap<PraiseId, PraiseRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<PraiseRecord>) -> Result<Self, SeedError> {
        let mut map = BTreeMap::new();
        for record in records {
            let id = record.id;
            if map.insert(id, record).is_some() {
                return Err(SeedError::DuplicateId(id));
            }
        }
        Ok(Self {
            records: RwLock::new(map),
        })
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl PraiseRepository for MemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<PraiseRecord>, StoreError> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn fetch(&self, id: PraiseId) -> Result<PraiseRecord, StoreError> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_thank_count(
        &self,
        id: PraiseId,
        expected: &RecordRevision,
        new_count: u64,
    ) -> Result<PraiseRecord, StoreError> {
        let mut records = self.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if record.revision() != *expected {
            return Err(StoreError::RevisionMismatch(id));
        }

        record.thank_count = new_count;
        Ok(record.clone())
    }
}
