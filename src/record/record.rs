use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{PraiseId, RecordRevision};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record {id} has negative thank count {count}")]
    NegativeCount { id: i64, count: i64 },
    #[error("record {0} has a blank title")]
    BlankTitle(i64),
    #[error("record id {0} is negative")]
    NegativeId(i64),
}

/// The wire shape of a record, exactly as the store returns it.
///
/// Nothing downstream accepts a `RawRecord`; it exists so malformed rows are
/// rejected at the boundary instead of propagating through the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    pub title: String,
    pub template: String,
    pub thank_count: i64,
}

/// A stored unit of praise text with a personalization placeholder and a
/// popularity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PraiseRecord {
    pub id: PraiseId,
    pub title: String,
    pub template: String,
    pub thank_count: u64,
}

impl PraiseRecord {
    /// Validate a wire record into the engine type.
    ///
    /// This is the ONLY way a store row becomes a `PraiseRecord`: negative
    /// ids, negative counts, and blank titles are rejected here. The
    /// placeholder token is deliberately NOT counted — templates may carry
    /// it zero, one, or several times, and only the first occurrence is
    /// ever substituted.
    pub fn validate(raw: RawRecord) -> Result<Self, RecordError> {
        if raw.id < 0 {
            return Err(RecordError::NegativeId(raw.id));
        }
        if raw.thank_count < 0 {
            return Err(RecordError::NegativeCount {
                id: raw.id,
                count: raw.thank_count,
            });
        }
        if raw.title.trim().is_empty() {
            return Err(RecordError::BlankTitle(raw.id));
        }

        Ok(PraiseRecord {
            id: PraiseId::new(raw.id),
            title: raw.title,
            template: raw.template,
            thank_count: raw.thank_count as u64,
        })
    }

    /// Current revision token of this record.
    pub fn revision(&self) -> RecordRevision {
        RecordRevision::from_content(&self.canonical_bytes())
    }

    // Length-prefixed so field boundaries can never collide.
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(24 + self.title.len() + self.template.len());
        buf.extend_from_slice(&self.id.as_i64().to_be_bytes());
        buf.extend_from_slice(&self.thank_count.to_be_bytes());
        buf.extend_from_slice(&(self.title.len() as u64).to_be_bytes());
        buf.extend_from_slice(self.title.as_bytes());
        buf.extend_from_slice(self.template.as_bytes());
        buf
    }
}
