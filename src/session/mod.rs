pub mod phase;
pub mod visit;

use chrono::{DateTime, Utc};

use crate::types::identifiers::PraiseId;

pub use phase::{PhaseError, VisitEvent, VisitPhase};
pub use visit::{ShownPraise, ThankOutcome, Visit, VisitError};

/// Volatile per-visit state.
///
/// Created at visit start, discarded when the visit ends. The engagement
/// counter survives navigation and reload within a visit; the ONLY reset
/// trigger is an identity transition.
#[derive(Debug, Clone)]
pub struct SessionState {
    praise_count: u64,
    last_shown: Option<PraiseId>,
    started_at: DateTime<Utc>, // informational only
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            praise_count: 0,
            last_shown: None,
            started_at: Utc::now(),
        }
    }

    /// Count one newly displayed praise.
    pub fn advance(&mut self) -> u64 {
        self.praise_count += 1;
        self.praise_count
    }

    /// Zero the counter and forget the last shown praise.
    pub fn reset_on_identity_change(&mut self) {
        self.praise_count = 0;
        self.last_shown = None;
    }

    pub fn praise_count(&self) -> u64 {
        self.praise_count
    }

    pub fn last_shown(&self) -> Option<PraiseId> {
        self.last_shown
    }

    pub fn note_shown(&mut self, id: PraiseId) {
        self.last_shown = Some(id);
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
