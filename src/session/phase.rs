use thiserror::Error;

/// The phase a visit is in, as the UI sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitPhase {
    /// No confirmed display name yet; the name form is up.
    Unidentified,
    /// Identified, nothing on display.
    Idle,
    /// A praise is on display.
    MessageShown,
    /// The share dialog is open over the displayed praise.
    Sharing,
}

/// Events the UI raises against the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitEvent {
    IdentitySubmitted,
    IdentityCleared,
    PraiseRequested,
    ThanksRecorded,
    ShareOpened,
    ShareDelivered,
    ShareCopied,
    ShareClosed,
}

#[derive(Debug, Clone, Copy, Error)]
#[error("{event:?} is not allowed in phase {phase:?}")]
pub struct PhaseError {
    pub phase: VisitPhase,
    pub event: VisitEvent,
}

impl VisitPhase {
    /// The transition table. Every pair not listed is rejected; there are no
    /// implicit self-loops.
    pub fn transition(self, event: VisitEvent) -> Result<VisitPhase, PhaseError> {
        use VisitEvent::*;
        use VisitPhase::*;

        let next = match (self, event) {
            (Unidentified, IdentitySubmitted) => Idle,
            // Renouncing the name is allowed from anywhere.
            (_, IdentityCleared) => Unidentified,
            (Idle | MessageShown, PraiseRequested) => MessageShown,
            (MessageShown, ThanksRecorded) => MessageShown,
            (MessageShown, ShareOpened) => Sharing,
            (Sharing, ShareDelivered) => Sharing,
            (Sharing, ShareCopied) => Sharing,
            (Sharing, ShareClosed) => MessageShown,
            (phase, event) => return Err(PhaseError { phase, event }),
        };
        Ok(next)
    }
}
