//! Session state tracking
//!
//! The only mutable data in the engine. The caller owns it, passes it into
//! every analyzer call and stores whatever comes back:
//! - Current phase and last active side
//! - Rep count and accumulated hold time
//! - Per-frame form score, feedback and confidence
//! - Baseline geometry captured on the first trusted frame

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::pose::Side;

/// Geometry captured once per session for displacement-based exercises
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Reference y coordinate (e.g. ankle height when standing flat)
    pub anchor_y: f32,
    /// Torso length at capture time
    pub body_scale: f32,
}

/// Complete per-workout state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    /// Completed repetitions (never decreases within a session)
    pub rep_count: u32,
    /// Seconds spent in a validated hold
    pub hold_time_seconds: f64,
    /// Technique quality (0-100)
    pub form_score: f32,
    pub form_feedback: String,
    /// Validity score of the frame that produced this state
    pub confidence: f32,
    pub baseline: Option<Baseline>,
    /// Caller timestamp (ms) of the last accepted frame
    pub last_update_ms: Option<f64>,
    /// Last non-neutral side, for alternating exercises
    pub last_side: Option<Side>,
}

impl SessionState {
    /// Fresh session: idle phase, zero counters
    pub fn new() -> Self {
        SessionState {
            phase: Phase::Idle,
            rep_count: 0,
            hold_time_seconds: 0.0,
            form_score: 0.0,
            form_feedback: String::new(),
            confidence: 0.0,
            baseline: None,
            last_update_ms: None,
            last_side: None,
        }
    }

    /// Clear phase, counters, baseline and timestamps. Idempotent.
    pub fn reset(&mut self) {
        *self = SessionState::new();
    }

    /// Manual "add rep" from the caller
    pub fn add_rep(&mut self) {
        self.rep_count = self.rep_count.saturating_add(1);
    }

    /// Store the baseline unless one was already captured.
    ///
    /// Returns the baseline in effect.
    pub fn capture_baseline(&mut self, baseline: Baseline) -> Baseline {
        *self.baseline.get_or_insert(baseline)
    }

    /// Previous state kept as-is apart from the validity score
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Previous state kept as-is, with the current validity and an explanation
    pub fn hold_with_feedback(mut self, confidence: f32, feedback: impl Into<String>) -> Self {
        self.confidence = confidence;
        self.form_feedback = feedback.into();
        self
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
