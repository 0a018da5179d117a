use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The visitor's chosen display name. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    display_name: String,
}

impl Identity {
    /// Trim the submitted name; a blank submission yields no identity.
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Identity {
                display_name: trimmed.to_string(),
            })
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable identity state: the display-name entry plus the confirmed flag.
///
/// The two are stored together but mean different things: `display_name`
/// survives an explicit "change name" so the form can be pre-filled, while
/// `confirmed` records whether the visitor currently stands by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub display_name: Option<String>,
    pub confirmed: bool,
}

impl StoredIdentity {
    /// The identity in effect, if the visitor has a confirmed name.
    pub fn current(&self) -> Option<Identity> {
        if !self.confirmed {
            return None;
        }
        self.display_name.as_deref().and_then(Identity::new)
    }
}

/// Durable key-value home of the visitor's identity. Persistence horizon is
/// indefinite, unlike the per-visit session state.
pub trait IdentityStore {
    fn load(&self) -> Result<StoredIdentity, IdentityStoreError>;
    fn save(&self, identity: &StoredIdentity) -> Result<(), IdentityStoreError>;
}

/// File-backed identity store.
///
/// Writes go to a temp path, are fsynced, then renamed over the target so a
/// crash mid-save never leaves a torn document. A missing file loads as the
/// unset identity.
#[derive(Debug)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<StoredIdentity, IdentityStoreError> {
        if !self.path.exists() {
            return Ok(StoredIdentity::default());
        }
        let f = fs::File::open(&self.path)?;
        Ok(serde_json::from_reader(f)?)
    }

    fn save(&self, identity: &StoredIdentity) -> Result<(), IdentityStoreError> {
        let temp_path = self.path.with_extension("tmp");

        let f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&f, identity)?;
        f.sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// In-memory identity store for hosts without a filesystem home.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    inner: Mutex<StoredIdentity>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<StoredIdentity, IdentityStoreError> {
        Ok(self.inner.lock().clone())
    }

    fn save(&self, identity: &StoredIdentity) -> Result<(), IdentityStoreError> {
        *self.inner.lock() = identity.clone();
        Ok(())
    }
}
