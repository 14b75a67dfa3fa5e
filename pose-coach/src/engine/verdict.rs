//! Outcome of one analyzer step
//!
//! Only `Accepted` moves the session forward. Every other outcome hands
//! back the previous state with an updated confidence and, where useful,
//! a line telling the performer what to fix.

use tracing::warn;

use crate::session::{Phase, SessionState};

/// Feedback when the session's phase belongs to a different exercise family
pub const WRONG_SESSION_FEEDBACK: &str = "Exercise changed, reset the session to continue";

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Frame analyzed, state advanced
    Accepted { state: SessionState },
    /// Required landmarks below the confidence threshold
    NotVisible { previous: SessionState, confidence: f32, focus: String },
    /// Geometry could not be measured (missing points, zero-length rays)
    Degenerate { previous: SessionState, confidence: f32 },
    /// Transition outside the family's phase graph
    Rejected { previous: SessionState, confidence: f32, attempted: Phase },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// Session state to hand back to the caller
    pub fn into_state(self) -> SessionState {
        match self {
            Verdict::Accepted { state } => state,
            Verdict::NotVisible { previous, confidence, focus } => previous
                .hold_with_feedback(confidence, format!("Not clearly visible: keep your {focus} in frame")),
            Verdict::Degenerate { previous, confidence } => previous.with_confidence(confidence),
            Verdict::Rejected { previous, confidence, attempted } => {
                warn!(
                    from = previous.phase.as_str(),
                    to = attempted.as_str(),
                    "phase transition rejected"
                );
                previous.hold_with_feedback(confidence, WRONG_SESSION_FEEDBACK)
            }
        }
    }
}

/// Stamp an advanced state with the frame's confidence and timestamp
pub fn accept(mut state: SessionState, confidence: f32, now_ms: f64) -> SessionState {
    state.confidence = confidence;
    state.last_update_ms = Some(now_ms);
    state
}
