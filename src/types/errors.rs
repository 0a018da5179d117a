use thiserror::Error;

/// Failure taxonomy of the engagement engine.
///
/// Every variant carries a fixed, user-visible apology line; callers at the
/// UI boundary surface `apology()` and never the technical message. No
/// variant is retried automatically and none escalates past the single user
/// action that triggered it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The record set is empty; there is nothing to show.
    #[error("no praises available")]
    NoContentAvailable,

    /// The record vanished between read and update.
    #[error("praise {0} not found")]
    NotFound(crate::types::PraiseId),

    /// Transport or backend failure on a repository call.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The host has no native share facility.
    #[error("native share unsupported")]
    ShareUnsupported,

    /// The host refused clipboard access.
    #[error("clipboard access denied")]
    ClipboardDenied,
}

impl EngineError {
    /// The non-technical line shown to the visitor for this failure.
    pub fn apology(&self) -> &'static str {
        match self {
            EngineError::NoContentAvailable => {
                "Foximo bows in apology – no praises have been prepared yet."
            }
            EngineError::NotFound(_) => "Alas! Foximo could not record your gracious thanks.",
            EngineError::Unavailable(_) => {
                "Foximo is terribly sorry, but the praises could not be loaded."
            }
            EngineError::ShareUnsupported => {
                "Your browser does not support direct sharing. Please use Copy instead."
            }
            EngineError::ClipboardDenied => "Could not copy to clipboard. Please try manually.",
        }
    }
}
