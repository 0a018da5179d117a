use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable ordering key of a praise record. Unique and immutable for the
/// lifetime of the record; assigned by the store, never by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PraiseId(i64);

impl PraiseId {
    pub fn new(raw: i64) -> Self {
        PraiseId(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PraiseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content-hash revision of a record's current field values.
///
/// Two revisions are equal iff the records they were computed from are
/// field-for-field equal, which is what makes this usable as the
/// optimistic-concurrency token for counter updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRevision(String);

impl RecordRevision {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        RecordRevision(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
