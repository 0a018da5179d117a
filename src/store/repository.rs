use async_trait::async_trait;
use thiserror::Error;

use crate::record::PraiseRecord;
use crate::selection::ranking::top_k;
use crate::types::errors::EngineError;
use crate::types::identifiers::{PraiseId, RecordRevision};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(PraiseId),
    #[error("revision mismatch on record {0}")]
    RevisionMismatch(PraiseId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => EngineError::NotFound(id),
            StoreError::RevisionMismatch(id) => {
                EngineError::Unavailable(format!("record {id} kept changing during the update"))
            }
            StoreError::Unavailable(msg) => EngineError::Unavailable(msg),
        }
    }
}

/// The durable praise collection, injected into the engine.
///
/// The engine never creates, deletes, or migrates records; it reads
/// snapshots and issues revision-guarded counter updates. All access
/// suspends at this boundary and nowhere else.
#[async_trait]
pub trait PraiseRepository: Send + Sync {
    /// Every record, ordered by id ascending. Empty is valid, not an error.
    async fn fetch_all(&self) -> Result<Vec<PraiseRecord>, StoreError>;

    /// The current state of a single record.
    async fn fetch(&self, id: PraiseId) -> Result<PraiseRecord, StoreError>;

    /// Single-field counter update, guarded by the revision the caller read.
    ///
    /// Fails `RevisionMismatch` when the record changed since that read;
    /// the caller decides whether to re-fetch and try again.
    async fn update_thank_count(
        &self,
        id: PraiseId,
        expected: &RecordRevision,
        new_count: u64,
    ) -> Result<PraiseRecord, StoreError>;

    /// Records ordered by thank count descending, bounded to `limit`.
    /// Ties break by ascending id.
    async fn top_by_thanks(&self, limit: usize) -> Result<Vec<PraiseRecord>, StoreError> {
        Ok(top_k(self.fetch_all().await?, limit))
    }
}
