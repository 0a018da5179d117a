use crate::record::{template, PraiseRecord};
use crate::types::errors::EngineError;

/// The plain-text message handed to the host's share facility.
///
/// Layout: fixed greeting line, `For <recipient>:`, the praise rendered for
/// the RECIPIENT (not the viewer) in curly quotes, and the canonical site
/// URL. A blank recipient falls back to the generic placeholder in both the
/// address line and the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    text: String,
}

impl SharePayload {
    pub fn compose(
        record: &PraiseRecord,
        recipient: &str,
        recipient_fallback: &str,
        site_url: &str,
    ) -> Self {
        let trimmed = recipient.trim();
        let base_name = if trimmed.is_empty() {
            recipient_fallback
        } else {
            trimmed
        };
        let praise_text = template::render_with_fallback(&record.template, base_name, recipient_fallback);

        let text = format!(
            "🦊 A royal praise from Foximo the Courtier\n\n\
             For {base_name}:\n\
             \u{201c}{praise_text}\u{201d}\n\n\
             Receive more courtly compliments here:\n\
             {site_url}"
        );

        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Best-effort outbound delivery, implemented by the host.
///
/// The two paths report independently: a host may refuse the clipboard but
/// still share natively, or the reverse. Expected failures are
/// `EngineError::ShareUnsupported` and `EngineError::ClipboardDenied`.
pub trait ShareTarget {
    fn share_text(&self, text: &str) -> Result<(), EngineError>;
    fn copy_text(&self, text: &str) -> Result<(), EngineError>;
}
