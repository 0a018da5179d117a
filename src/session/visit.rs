use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::engagement::{share::ShareTarget, thank_reply, EngagementTracker, SharePayload};
use crate::record::{template, PraiseRecord};
use crate::session::phase::{PhaseError, VisitEvent, VisitPhase};
use crate::session::SessionState;
use crate::store::identity::{Identity, IdentityStore, StoredIdentity};
use crate::store::repository::{PraiseRepository, StoreError};
use crate::types::config::EngineConfig;
use crate::types::errors::EngineError;

#[derive(Debug, Error)]
pub enum VisitError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Phase(#[from] PhaseError),
    #[error("nothing is on display to {action}")]
    NothingShown { action: &'static str },
}

impl From<StoreError> for VisitError {
    fn from(err: StoreError) -> Self {
        VisitError::Engine(err.into())
    }
}

impl VisitError {
    /// The non-technical line shown to the visitor for this failure.
    pub fn apology(&self) -> &'static str {
        match self {
            VisitError::Engine(e) => e.apology(),
            VisitError::Phase(_) | VisitError::NothingShown { .. } => {
                "Foximo begs your pardon – that action is not available just now."
            }
        }
    }
}

/// A praise freshly picked for the viewer.
#[derive(Debug, Clone)]
pub struct ShownPraise {
    pub record: PraiseRecord,
    /// Template text rendered with the viewer's effective name.
    pub text: String,
    /// Session counter after this praise was counted.
    pub praise_count: u64,
}

/// Outcome of a recorded thanks.
#[derive(Debug, Clone)]
pub struct ThankOutcome {
    /// The post-update record, for refreshing cached views.
    pub record: PraiseRecord,
    /// Courtly acknowledgment line rendered with the viewer's name.
    pub reply: String,
}

/// One visitor's sitting at the court.
///
/// Owns the per-visit state and the phase machine, and drives the engine
/// parts against the injected repository and identity store. Dropping the
/// visit discards the session state; the identity store persists.
pub struct Visit<R, I>
where
    R: PraiseRepository,
    I: IdentityStore,
{
    repository: R,
    identity_store: I,
    config: EngineConfig,
    rng: StdRng,
    stored: StoredIdentity,
    identity: Option<Identity>,
    phase: VisitPhase,
    session: SessionState,
    current: Option<PraiseRecord>,
}

impl<R, I> Visit<R, I>
where
    R: PraiseRepository,
    I: IdentityStore,
{
    pub fn begin(repository: R, identity_store: I, config: EngineConfig) -> Self {
        Self::with_rng(repository, identity_store, config, StdRng::from_entropy())
    }

    /// Like [`begin`](Self::begin) with a caller-supplied rng, so tests can
    /// seed the draws.
    pub fn with_rng(repository: R, identity_store: I, config: EngineConfig, rng: StdRng) -> Self {
        // A torn or unreadable identity file must not take the court down;
        // the visit simply starts unidentified.
        let stored = identity_store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "identity load failed, starting unidentified");
            StoredIdentity::default()
        });
        let identity = stored.current();
        let phase = if identity.is_some() {
            VisitPhase::Idle
        } else {
            VisitPhase::Unidentified
        };

        Self {
            repository,
            identity_store,
            config,
            rng,
            stored,
            identity,
            phase,
            session: SessionState::new(),
            current: None,
        }
    }

    pub fn phase(&self) -> VisitPhase {
        self.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn current(&self) -> Option<&PraiseRecord> {
        self.current.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The name praises are addressed to right now.
    pub fn display_name(&self) -> &str {
        self.identity
            .as_ref()
            .map(Identity::display_name)
            .unwrap_or(&self.config.viewer_fallback)
    }

    /// Stored name for pre-filling the form, confirmed or not.
    pub fn remembered_name(&self) -> Option<&str> {
        self.stored.display_name.as_deref()
    }

    /// Confirm a display name for this visitor.
    ///
    /// Trims the submission; a blank one is ignored (`Ok(false)`), matching
    /// the form's behavior. Acceptance persists the identity, resets the
    /// session counter (the one reset trigger), and moves the visit to
    /// `Idle`. Nothing local changes if persisting fails.
    pub fn submit_name(&mut self, name: &str) -> Result<bool, VisitError> {
        let next = self.phase.transition(VisitEvent::IdentitySubmitted)?;

        let Some(identity) = Identity::new(name) else {
            return Ok(false);
        };

        let stored = StoredIdentity {
            display_name: Some(identity.display_name().to_string()),
            confirmed: true,
        };
        self.identity_store
            .save(&stored)
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        tracing::info!("display name confirmed");
        self.stored = stored;
        self.identity = Some(identity);
        self.session.reset_on_identity_change();
        self.current = None;
        self.phase = next;
        Ok(true)
    }

    /// Renounce the current name and reopen the form.
    ///
    /// The remembered name stays for pre-filling, the confirmed flag drops,
    /// and the session counter is left alone until the next submission.
    pub fn change_name(&mut self) -> Result<(), VisitError> {
        let next = self.phase.transition(VisitEvent::IdentityCleared)?;

        let stored = StoredIdentity {
            display_name: self.stored.display_name.clone(),
            confirmed: false,
        };
        self.identity_store
            .save(&stored)
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        self.stored = stored;
        self.identity = None;
        self.current = None;
        self.phase = next;
        Ok(())
    }

    /// Pick and render the next praise.
    pub async fn request_praise(&mut self) -> Result<ShownPraise, VisitError> {
        let next = self.phase.transition(VisitEvent::PraiseRequested)?;

        let records = self.repository.fetch_all().await?;
        let id = crate::selection::pick_next(&mut self.rng, &records, self.session.last_shown())?;
        let record = records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(EngineError::NotFound(id))?;

        let text = template::render_with_fallback(
            &record.template,
            self.display_name(),
            &self.config.viewer_fallback,
        );
        let praise_count = self.session.advance();
        self.session.note_shown(id);
        self.current = Some(record.clone());
        self.phase = next;

        tracing::info!(%id, praise_count, "praise shown");
        Ok(ShownPraise {
            record,
            text,
            praise_count,
        })
    }

    /// Record the visitor's thanks for the praise on display.
    pub async fn thank(&mut self) -> Result<ThankOutcome, VisitError> {
        let next = self.phase.transition(VisitEvent::ThanksRecorded)?;
        let Some(shown) = self.current.as_ref() else {
            return Err(VisitError::NothingShown { action: "thank" });
        };
        let id = shown.id;

        let tracker = EngagementTracker::new(&self.repository, self.config.thanks_retry_limit);
        let record = tracker.record_thanks(id).await?;

        let viewer = self.display_name().to_string();
        let reply = thank_reply(&mut self.rng, &viewer);

        self.current = Some(record.clone());
        self.phase = next;
        Ok(ThankOutcome { record, reply })
    }

    /// Open the share dialog over the praise on display.
    pub fn open_share(&mut self) -> Result<(), VisitError> {
        if self.current.is_none() {
            return Err(VisitError::NothingShown { action: "share" });
        }
        self.phase = self.phase.transition(VisitEvent::ShareOpened)?;
        Ok(())
    }

    pub fn close_share(&mut self) -> Result<(), VisitError> {
        self.phase = self.phase.transition(VisitEvent::ShareClosed)?;
        Ok(())
    }

    /// Compose the outbound payload for the praise on display.
    pub fn share_payload(&self, recipient: &str) -> Result<SharePayload, VisitError> {
        let Some(shown) = self.current.as_ref() else {
            return Err(VisitError::NothingShown { action: "share" });
        };
        Ok(SharePayload::compose(
            shown,
            recipient,
            &self.config.recipient_fallback,
            &self.config.site_url,
        ))
    }

    /// Hand the payload to the host's native share facility.
    pub fn share_with(
        &mut self,
        target: &dyn ShareTarget,
        recipient: &str,
    ) -> Result<SharePayload, VisitError> {
        let next = self.phase.transition(VisitEvent::ShareDelivered)?;
        let payload = self.share_payload(recipient)?;
        target.share_text(payload.text()).map_err(VisitError::Engine)?;
        self.phase = next;
        tracing::info!("praise shared");
        Ok(payload)
    }

    /// Hand the payload to the host's clipboard. Reports independently of
    /// [`share_with`](Self::share_with).
    pub fn copy_with(
        &mut self,
        target: &dyn ShareTarget,
        recipient: &str,
    ) -> Result<SharePayload, VisitError> {
        let next = self.phase.transition(VisitEvent::ShareCopied)?;
        let payload = self.share_payload(recipient)?;
        target.copy_text(payload.text()).map_err(VisitError::Engine)?;
        self.phase = next;
        tracing::info!("praise copied");
        Ok(payload)
    }

    /// The leaderboard, bounded by the configured limit.
    pub async fn top_praises(&self) -> Result<Vec<PraiseRecord>, VisitError> {
        let top = self
            .repository
            .top_by_thanks(self.config.leaderboard_limit)
            .await?;
        Ok(top)
    }
}
