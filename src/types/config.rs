use serde::{Deserialize, Serialize};

/// Knobs of the engagement engine. Serializable so a host can ship its own;
/// [`EngineConfig::courtier`] is the canonical court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Canonical site URL appended to outbound share payloads.
    pub site_url: String,
    /// Name substituted for the viewer when no display name is set.
    pub viewer_fallback: String,
    /// Name substituted for the recipient when the share form is left blank.
    pub recipient_fallback: String,
    /// Upper bound of the leaderboard query.
    pub leaderboard_limit: usize,
    /// How many revision conflicts a single thanks update absorbs before
    /// surfacing `Unavailable`.
    pub thanks_retry_limit: u32,
}

impl EngineConfig {
    /// The canonical court configuration.
    pub fn courtier() -> Self {
        Self {
            site_url: "https://www.foximoatyourservice.today/".into(),
            viewer_fallback: "Your Grace".into(),
            recipient_fallback: "you".into(),
            leaderboard_limit: 10,
            thanks_retry_limit: 3,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::courtier()
    }
}
