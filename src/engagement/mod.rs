pub mod replies;
pub mod share;

use crate::record::PraiseRecord;
use crate::store::repository::{PraiseRepository, StoreError};
use crate::types::errors::EngineError;
use crate::types::identifiers::PraiseId;

pub use replies::{thank_reply, REPLY_TEMPLATES};
pub use share::{SharePayload, ShareTarget};

/// Records visitor thanks against the shared popularity counter.
///
/// Stateless over an injected repository; nothing local mutates on failure.
pub struct EngagementTracker<'a, R: PraiseRepository + ?Sized> {
    repository: &'a R,
    retry_limit: u32,
}

impl<'a, R> EngagementTracker<'a, R>
where
    R: PraiseRepository + ?Sized,
{
    pub fn new(repository: &'a R, retry_limit: u32) -> Self {
        Self {
            repository,
            retry_limit,
        }
    }

    /// Increment a record's thank count by exactly one.
    ///
    /// Reads the current record, then writes `thank_count + 1` guarded by
    /// the revision it read. A concurrent writer surfaces as a revision
    /// conflict, absorbed by re-reading up to `retry_limit` times so neither
    /// increment is lost; conflicts past the bound and transport failures
    /// surface as `Unavailable`. Returns the post-update record so the
    /// caller can refresh its cached view.
    pub async fn record_thanks(&self, id: PraiseId) -> Result<PraiseRecord, EngineError> {
        let mut conflicts = 0;
        loop {
            let current = self.repository.fetch(id).await?;
            let revision = current.revision();

            match self
                .repository
                .update_thank_count(id, &revision, current.thank_count + 1)
                .await
            {
                Ok(updated) => {
                    tracing::info!(%id, thank_count = updated.thank_count, "thanks recorded");
                    return Ok(updated);
                }
                Err(StoreError::RevisionMismatch(_)) if conflicts < self.retry_limit => {
                    conflicts += 1;
                    tracing::warn!(%id, conflicts, "revision conflict, re-reading");
                }
                Err(e) => {
                    tracing::warn!(%id, error = %e, "thanks update failed");
                    return Err(e.into());
                }
            }
        }
    }
}
