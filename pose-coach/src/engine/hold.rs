//! Isometric-hold engine
//!
//! A posture is valid only while every constraint passes. Valid frames
//! accrue wall-clock time since the previous accepted frame; invalid frames
//! pause accrual without losing what was already held.

use tracing::debug;

use super::form::{Check, FormReport};
use super::verdict::{accept, Verdict};
use crate::geometry::ConfidenceGate;
use crate::pose::{Frame, Joint};
use crate::session::{Phase, SessionState};

/// Largest frame gap (ms) credited as hold time
pub const DEFAULT_MAX_HOLD_GAP_MS: f64 = 500.0;

/// Configuration record for one isometric hold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldSpec {
    /// Joints whose visibility gates the frame (more visible side is used)
    pub joints: &'static [Joint],
    /// All must pass for the pose to count as held
    pub constraints: &'static [Check],
    /// Score-only refinements that never invalidate the hold
    pub checks: &'static [Check],
    /// Feedback while holding cleanly
    pub holding: &'static str,
}

pub struct HoldValidator<'a> {
    spec: &'a HoldSpec,
    gate: ConfidenceGate,
    max_gap_ms: f64,
}

impl<'a> HoldValidator<'a> {
    pub fn new(spec: &'a HoldSpec, gate: ConfidenceGate, max_gap_ms: f64) -> Self {
        Self { spec, gate, max_gap_ms }
    }

    /// Seconds to credit for a frame arriving `now_ms`, given the previous state
    pub fn accrual(&self, previous: &SessionState, valid: bool, now_ms: f64) -> f64 {
        if !valid || previous.phase != Phase::Holding {
            return 0.0;
        }
        let Some(last) = previous.last_update_ms else {
            return 0.0;
        };
        let delta = now_ms - last;
        if delta > 0.0 && delta <= self.max_gap_ms {
            delta / 1000.0
        } else {
            debug!(delta_ms = delta, "hold gap discarded");
            0.0
        }
    }

    /// Process one frame
    pub fn step(&self, frame: &Frame, previous: SessionState, now_ms: f64, focus: &str) -> Verdict {
        let (side, confidence) = self.gate.best_side(self.spec.joints, frame);
        if !self.gate.passes(confidence) {
            return Verdict::NotVisible { previous, confidence, focus: focus.to_string() };
        }

        let constraints = FormReport::evaluate(self.spec.constraints, frame, side);
        if constraints.unmeasured > 0 {
            return Verdict::Degenerate { previous, confidence };
        }

        let valid = constraints.is_clean();
        let phase = if valid { Phase::Holding } else { Phase::Invalid };
        if !previous.phase.can_advance_to(phase) {
            return Verdict::Rejected { previous, confidence, attempted: phase };
        }

        let credited = self.accrual(&previous, valid, now_ms);
        let mut state = previous;
        if state.phase != phase {
            debug!(from = state.phase.as_str(), to = phase.as_str(), "hold phase change");
        }
        state.phase = phase;
        state.hold_time_seconds += credited;

        let mut report = FormReport::evaluate(self.spec.checks, frame, side);
        report.violations.extend(constraints.violations);
        state.form_score = report.score();
        state.form_feedback = report.feedback(self.spec.holding).to_string();

        Verdict::Accepted { state: accept(state, confidence, now_ms) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::form::{CheckKind, Severity};
    use crate::pose::{BODY_LINE, ELBOW};
    use crate::test_support::{plank, with_confidence};

    const PLANK: HoldSpec = HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Ankle],
        constraints: &[Check::new(
            CheckKind::AngleAtLeast { triple: BODY_LINE, min: 165.0 },
            Severity::Alignment,
            30.0,
            "Keep your hips in line",
        )],
        checks: &[Check::new(
            CheckKind::AngleWithin { triple: ELBOW, min: 75.0, max: 105.0 },
            Severity::Alignment,
            10.0,
            "Elbows under shoulders",
        )],
        holding: "Strong hold",
    };

    fn validator() -> HoldValidator<'static> {
        HoldValidator::new(&PLANK, ConfidenceGate::default(), DEFAULT_MAX_HOLD_GAP_MS)
    }

    fn feed(state: SessionState, frame: &Frame, t: f64) -> SessionState {
        validator().step(frame, state, t, "full body").into_state()
    }

    #[test]
    fn test_ten_frames_accrue() {
        let good = plank(180.0);
        let state = (0..10).fold(SessionState::new(), |s, i| feed(s, &good, i as f64 * 100.0));
        assert!((state.hold_time_seconds - 0.9).abs() < 1e-6);
        assert_eq!(state.phase, Phase::Holding);
        assert_eq!(state.form_feedback, "Strong hold");
        assert_eq!(state.form_score, 100.0);
    }

    #[test]
    fn test_gap_not_credited() {
        let good = plank(180.0);
        let mut state = (0..10).fold(SessionState::new(), |s, i| feed(s, &good, i as f64 * 100.0));
        state = feed(state, &good, 900.0 + 2000.0);
        assert!((state.hold_time_seconds - 0.9).abs() < 1e-6);
        state = feed(state, &good, 2900.0 + 100.0);
        assert!((state.hold_time_seconds - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_five_second_gap() {
        let good = plank(180.0);
        let state = feed(feed(SessionState::new(), &good, 0.0), &good, 5000.0);
        assert_eq!(state.hold_time_seconds, 0.0);
    }

    #[test]
    fn test_invalid_pauses_without_reset() {
        let good = plank(180.0);
        let sagging = plank(140.0);
        let mut state = SessionState::new();
        for (i, frame) in [&good, &good, &good, &sagging, &sagging, &good, &good].iter().enumerate() {
            state = feed(state, frame, i as f64 * 100.0);
            if i == 3 {
                assert_eq!(state.phase, Phase::Invalid);
                assert_eq!(state.form_feedback, "Keep your hips in line");
                assert!(state.form_score < 100.0);
            }
        }
        // credited: 0→1, 1→2, then 5→6 only
        assert!((state.hold_time_seconds - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_low_confidence_keeps_state() {
        let good = plank(180.0);
        let state = feed(feed(SessionState::new(), &good, 0.0), &good, 100.0);
        let blurry = with_confidence(&good, 0.1);
        let after = feed(state.clone(), &blurry, 200.0);
        assert_eq!(after.phase, Phase::Holding);
        assert_eq!(after.hold_time_seconds, state.hold_time_seconds);
        assert_eq!(after.last_update_ms, Some(100.0));
    }

    #[test]
    fn test_rejects_foreign_phase() {
        let mut previous = SessionState::new();
        previous.phase = Phase::Extended;
        let verdict = validator().step(&plank(180.0), previous, 0.0, "full body");
        assert!(matches!(verdict, Verdict::Rejected { .. }));
    }
}
