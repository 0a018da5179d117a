use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use praise_core::engagement::EngagementTracker;
use praise_core::record::{PraiseRecord, RawRecord};
use praise_core::store::{MemoryRepository, PraiseRepository, StoreError};
use praise_core::types::{EngineError, PraiseId, RecordRevision};

fn make_record(id: i64, count: u64) -> PraiseRecord {
    PraiseRecord::validate(RawRecord {
        id,
        title: format!("Praise {id}"),
        template: "The realm brightens when {name} arrives.".to_string(),
        thank_count: count as i64,
    })
    .unwrap()
}

/// Repository whose transport is down.
struct UnavailableRepository;

#[async_trait]
impl PraiseRepository for UnavailableRepository {
    async fn fetch_all(&self) -> Result<Vec<PraiseRecord>, StoreError> {
        Err(StoreError::Unavailable("transport down".into()))
    }

    async fn fetch(&self, _id: PraiseId) -> Result<PraiseRecord, StoreError> {
        Err(StoreError::Unavailable("transport down".into()))
    }

    async fn update_thank_count(
        &self,
        _id: PraiseId,
        _expected: &RecordRevision,
        _new_count: u64,
    ) -> Result<PraiseRecord, StoreError> {
        Err(StoreError::Unavailable("transport down".into()))
    }
}

/// Repository where another writer lands an increment just before each of
/// the first `conflicts` guarded updates.
struct ConflictingRepository {
    inner: MemoryRepository,
    conflicts: AtomicU32,
    update_calls: AtomicU32,
}

impl ConflictingRepository {
    fn new(inner: MemoryRepository, conflicts: u32) -> Self {
        Self {
            inner,
            conflicts: AtomicU32::new(conflicts),
            update_calls: AtomicU32::new(0),
        }
    }

    async fn sneak_in_other_writer(&self, id: PraiseId) {
        let current = self.inner.fetch(id).await.unwrap();
        self.inner
            .update_thank_count(id, &current.revision(), current.thank_count + 1)
            .await
            .unwrap();
    }
}

#[async_trait]
impl PraiseRepository for ConflictingRepository {
    async fn fetch_all(&self) -> Result<Vec<PraiseRecord>, StoreError> {
        self.inner.fetch_all().await
    }

    async fn fetch(&self, id: PraiseId) -> Result<PraiseRecord, StoreError> {
        self.inner.fetch(id).await
    }

    async fn update_thank_count(
        &self,
        id: PraiseId,
        expected: &RecordRevision,
        new_count: u64,
    ) -> Result<PraiseRecord, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let remaining = self.conflicts.load(Ordering::SeqCst);
        if remaining > 0 {
            self.conflicts.store(remaining - 1, Ordering::SeqCst);
            self.sneak_in_other_writer(id).await;
        }
        self.inner.update_thank_count(id, expected, new_count).await
    }
}

#[tokio::test]
async fn thanks_increments_by_exactly_one() {
    let repo = MemoryRepository::seeded(vec![make_record(1, 4), make_record(2, 9)]).unwrap();
    let tracker = EngagementTracker::new(&repo, 3);

    let before = repo.fetch(PraiseId::new(1)).await.unwrap();
    let updated = tracker.record_thanks(PraiseId::new(1)).await.unwrap();

    assert_eq!(updated.thank_count, before.thank_count + 1);
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.template, before.template);

    // The returned record is the stored state, not a local echo.
    let stored = repo.fetch(PraiseId::new(1)).await.unwrap();
    assert_eq!(stored, updated);

    // The neighbor is untouched.
    assert_eq!(repo.fetch(PraiseId::new(2)).await.unwrap().thank_count, 9);
}

#[tokio::test]
async fn missing_id_fails_not_found_and_changes_nothing() {
    let repo = MemoryRepository::seeded(vec![make_record(1, 4)]).unwrap();
    let tracker = EngagementTracker::new(&repo, 3);

    let err = tracker.record_thanks(PraiseId::new(99)).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound(id) if id == PraiseId::new(99)));

    let all = repo.fetch_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].thank_count, 4);
}

#[tokio::test]
async fn transport_failure_is_unavailable() {
    let repo = UnavailableRepository;
    let tracker = EngagementTracker::new(&repo, 3);

    let err = tracker.record_thanks(PraiseId::new(1)).await.unwrap_err();
    assert!(matches!(err, EngineError::Unavailable(_)));
}

#[tokio::test]
async fn conflict_is_absorbed_without_losing_either_increment() {
    let inner = MemoryRepository::seeded(vec![make_record(1, 0)]).unwrap();
    let repo = ConflictingRepository::new(inner, 1);
    let tracker = EngagementTracker::new(&repo, 3);

    let updated = tracker.record_thanks(PraiseId::new(1)).await.unwrap();

    // One increment from the sneaking writer, one from the tracker.
    assert_eq!(updated.thank_count, 2);
    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn persistent_conflict_exhausts_to_unavailable() {
    let inner = MemoryRepository::seeded(vec![make_record(1, 0)]).unwrap();
    let repo = ConflictingRepository::new(inner, u32::MAX);
    let tracker = EngagementTracker::new(&repo, 3);

    let err = tracker.record_thanks(PraiseId::new(1)).await.unwrap_err();

    assert!(matches!(err, EngineError::Unavailable(_)));
    // Initial attempt plus the configured number of retries.
    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 4);
}
