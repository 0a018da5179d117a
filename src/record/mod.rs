pub mod record;
pub mod template;

pub use crate::types::identifiers::{PraiseId, RecordRevision};
pub use record::{PraiseRecord, RawRecord, RecordError};
pub use template::{render, render_with_fallback, DEFAULT_DISPLAY_NAME, PLACEHOLDER};
