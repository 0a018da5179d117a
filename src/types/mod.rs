pub mod config;
pub mod errors;
pub mod identifiers;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use identifiers::{PraiseId, RecordRevision};
