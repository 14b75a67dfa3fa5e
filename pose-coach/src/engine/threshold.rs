//! Dynamic-rep engine - dual-threshold state machine
//!
//! The controlling metric (a joint angle, or lift above a captured
//! baseline) moves between two thresholds:
//! - metric <= low  → Contracted
//! - metric >= high → Extended
//! - in between     → keep the previous phase (dead zone)
//!
//! One rep is counted on the exercise's completing transition only.

use tracing::{debug, info};

use super::form::{Check, FormReport, Severity, Violation};
use super::verdict::{accept, Verdict};
use crate::geometry::{confidence_of, joint_center, torso_length, triple_angle, ConfidenceGate};
use crate::pose::{Frame, Joint, JointTriple, Landmark, Side};
use crate::session::{Baseline, Phase, SessionState};

/// Points deducted when a rep stops right at a threshold instead of the excellent mark
const RANGE_PENALTY: f32 = 25.0;

/// Quantity the thresholds are applied to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// Joint angle in degrees; the most visible candidate triple and side is used
    Angle(&'static [JointTriple]),
    /// Upward travel of a joint above its session baseline, in torso lengths
    Lift(Joint),
}

/// Which transition completes a repetition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountOn {
    /// Contracted → Extended
    Extension,
    /// Extended → Contracted
    Contraction,
}

/// Phase thresholds; the excellent marks lie beyond them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub low: f32,
    pub high: f32,
    pub excellent_low: f32,
    pub excellent_high: f32,
}

impl Thresholds {
    pub const fn new(low: f32, high: f32, excellent_low: f32, excellent_high: f32) -> Self {
        Self { low, high, excellent_low, excellent_high }
    }

    pub fn is_valid(&self) -> bool {
        self.low < self.high && self.excellent_low <= self.low && self.excellent_high >= self.high
    }
}

/// Coaching lines used when form is clean
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cues {
    /// Contracted but short of the excellent mark
    pub deeper: &'static str,
    /// Extended but short of the excellent mark
    pub extend: &'static str,
    pub contracted: &'static str,
    pub extended: &'static str,
    /// Between thresholds
    pub moving: &'static str,
}

/// Configuration record for one dynamic-rep exercise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdSpec {
    pub metric: Metric,
    pub thresholds: Thresholds,
    pub count_on: CountOn,
    /// Secondary form checks
    pub checks: &'static [Check],
    pub cues: Cues,
}

/// Dual-threshold state machine for one analyzer call
pub struct ThresholdStateMachine<'a> {
    spec: &'a ThresholdSpec,
    thresholds: Thresholds,
    gate: ConfidenceGate,
}

impl<'a> ThresholdStateMachine<'a> {
    pub fn new(spec: &'a ThresholdSpec, thresholds: Thresholds, gate: ConfidenceGate) -> Self {
        Self { spec, thresholds, gate }
    }

    /// Hysteresis: only cross into a phase beyond its threshold
    pub fn next_phase(&self, current: Phase, value: f32) -> Phase {
        if value <= self.thresholds.low {
            Phase::Contracted
        } else if value >= self.thresholds.high {
            Phase::Extended
        } else {
            current
        }
    }

    /// Whether moving `from` → `to` completes a repetition
    pub fn completes_rep(&self, from: Phase, to: Phase) -> bool {
        match self.spec.count_on {
            CountOn::Extension => from == Phase::Contracted && to == Phase::Extended,
            CountOn::Contraction => from == Phase::Extended && to == Phase::Contracted,
        }
    }

    /// Process one frame
    pub fn step(&self, frame: &Frame, previous: SessionState, now_ms: f64, focus: &str) -> Verdict {
        let (side, confidence) = self.select(frame);
        if !self.gate.passes(confidence) {
            return Verdict::NotVisible { previous, confidence, focus: focus.to_string() };
        }

        let mut captured = None;
        let measured = match self.spec.metric {
            Metric::Angle(candidates) => self.best_angle(frame, candidates),
            Metric::Lift(joint) => lift_baseline(frame, joint).map(|(y, candidate)| {
                let base = previous.baseline.unwrap_or_else(|| {
                    captured = Some(candidate);
                    candidate
                });
                ((base.anchor_y - y) / base.body_scale, side)
            }),
        };

        // the measured side may differ from the most visible one
        let Some((value, side)) = measured else {
            return Verdict::Degenerate { previous, confidence };
        };

        let phase = self.next_phase(previous.phase, value);
        if !previous.phase.can_advance_to(phase) {
            return Verdict::Rejected { previous, confidence, attempted: phase };
        }

        let mut state = previous;
        if let Some(candidate) = captured {
            let base = state.capture_baseline(candidate);
            info!(anchor_y = base.anchor_y, body_scale = base.body_scale, "baseline captured");
        }
        if state.phase != phase {
            debug!(from = state.phase.as_str(), to = phase.as_str(), value, "phase change");
        }
        if self.completes_rep(state.phase, phase) {
            state.rep_count = state.rep_count.saturating_add(1);
            debug!(reps = state.rep_count, "rep counted");
        }
        state.phase = phase;

        let mut report = FormReport::evaluate(self.spec.checks, frame, side);
        report.violations.extend(self.range_violation(value));
        state.form_score = report.score();
        state.form_feedback = report.feedback(self.clean_cue(value)).to_string();

        Verdict::Accepted { state: accept(state, confidence, now_ms) }
    }

    /// Side of the most visible candidate, with its confidence
    fn select(&self, frame: &Frame) -> (Side, f32) {
        match self.spec.metric {
            Metric::Angle(candidates) => ranked_triples(frame, candidates)
                .first()
                .map_or((Side::Left, 0.0), |(_, s, c)| (*s, *c)),
            Metric::Lift(joint) => {
                let (side, _) = self.gate.best_side(&[Joint::Hip, Joint::Knee, joint], frame);
                let landmarks: Vec<Landmark> = [Joint::Shoulder, Joint::Hip, joint]
                    .iter()
                    .flat_map(|j| Side::BOTH.map(|s| j.on(s)))
                    .collect();
                (side, confidence_of(&landmarks, frame))
            }
        }
    }

    /// Angle and side of the most confident candidate that clears the gate and can be measured
    fn best_angle(&self, frame: &Frame, candidates: &[JointTriple]) -> Option<(f32, Side)> {
        ranked_triples(frame, candidates)
            .into_iter()
            .filter(|(_, _, c)| self.gate.passes(*c))
            .find_map(|(t, s, _)| triple_angle(frame, t, s).map(|a| (a, s)))
    }

    fn range_violation(&self, value: f32) -> Option<Violation> {
        let t = &self.thresholds;
        let (shortfall, span, message) = if value <= t.low {
            (value - t.excellent_low, t.low - t.excellent_low, self.spec.cues.deeper)
        } else if value >= t.high {
            (t.excellent_high - value, t.excellent_high - t.high, self.spec.cues.extend)
        } else {
            return None;
        };
        if shortfall <= 0.0 {
            return None;
        }
        let ratio = if span > 0.0 { (shortfall / span).min(1.0) } else { 1.0 };
        Some(Violation { severity: Severity::Range, penalty: RANGE_PENALTY * ratio, message })
    }

    fn clean_cue(&self, value: f32) -> &'static str {
        if value <= self.thresholds.low {
            self.spec.cues.contracted
        } else if value >= self.thresholds.high {
            self.spec.cues.extended
        } else {
            self.spec.cues.moving
        }
    }
}

/// Every candidate triple on both sides, most confident first.
///
/// Stable sort, so ties keep catalog order with the left side first.
fn ranked_triples(frame: &Frame, candidates: &[JointTriple]) -> Vec<(JointTriple, Side, f32)> {
    let mut ranked: Vec<(JointTriple, Side, f32)> = candidates
        .iter()
        .flat_map(|t| Side::BOTH.map(|s| (*t, s, confidence_of(&t.on(s), frame))))
        .collect();
    ranked.sort_by(|a, b| b.2.total_cmp(&a.2));
    ranked
}

/// Current joint height and a baseline candidate built from this frame
fn lift_baseline(frame: &Frame, joint: Joint) -> Option<(f32, Baseline)> {
    let y = joint_center(frame, joint)?.y;
    let body_scale = torso_length(frame)?;
    Some((y, Baseline { anchor_y: y, body_scale }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::form::CheckKind;
    use crate::pose::{Landmark, ELBOW};
    use crate::test_support::{elbow_angle, set, standing, with_confidence};

    const CUES: Cues = Cues {
        deeper: "Curl higher",
        extend: "Lower all the way",
        contracted: "Squeeze",
        extended: "Good extension",
        moving: "Controlled",
    };

    const CURL: ThresholdSpec = ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(60.0, 150.0, 45.0, 160.0),
        count_on: CountOn::Extension,
        checks: &[],
        cues: CUES,
    };

    fn run(spec: &ThresholdSpec, frames: &[Frame]) -> SessionState {
        let machine = ThresholdStateMachine::new(spec, spec.thresholds, ConfidenceGate::default());
        frames.iter().enumerate().fold(SessionState::new(), |state, (i, frame)| {
            machine.step(frame, state, i as f64 * 100.0, "arms").into_state()
        })
    }

    #[test]
    fn test_full_cycle_counts_once() {
        let angles = [170.0, 150.0, 90.0, 40.0, 90.0, 150.0, 170.0];
        let frames: Vec<Frame> = angles.iter().map(|a| elbow_angle(*a)).collect();
        let state = run(&CURL, &frames);
        assert_eq!(state.rep_count, 1);
        assert_eq!(state.phase, Phase::Extended);
    }

    #[test]
    fn test_dead_zone_holds_phase() {
        let machine = ThresholdStateMachine::new(&CURL, CURL.thresholds, ConfidenceGate::default());
        assert_eq!(machine.next_phase(Phase::Contracted, 100.0), Phase::Contracted);
        assert_eq!(machine.next_phase(Phase::Extended, 100.0), Phase::Extended);
        assert_eq!(machine.next_phase(Phase::Idle, 100.0), Phase::Idle);
        assert_eq!(machine.next_phase(Phase::Extended, 60.0), Phase::Contracted);
        assert_eq!(machine.next_phase(Phase::Contracted, 150.0), Phase::Extended);
    }

    #[test]
    fn test_jitter_around_threshold() {
        let angles = [170.0, 40.0, 140.0, 70.0, 145.0, 65.0, 170.0];
        let frames: Vec<Frame> = angles.iter().map(|a| elbow_angle(*a)).collect();
        assert_eq!(run(&CURL, &frames).rep_count, 1);
    }

    #[test]
    fn test_reverse_transition_not_counted() {
        let frames = [elbow_angle(40.0), elbow_angle(170.0), elbow_angle(40.0)];
        let state = run(&CURL, &frames);
        assert_eq!(state.rep_count, 1);
        assert_eq!(state.phase, Phase::Contracted);
    }

    #[test]
    fn test_count_on_contraction() {
        let spec = ThresholdSpec { count_on: CountOn::Contraction, ..CURL };
        let frames = [elbow_angle(170.0), elbow_angle(40.0), elbow_angle(40.0), elbow_angle(170.0)];
        assert_eq!(run(&spec, &frames).rep_count, 1);
    }

    #[test]
    fn test_identical_frame_twice() {
        let frames = [elbow_angle(40.0), elbow_angle(170.0), elbow_angle(170.0)];
        assert_eq!(run(&CURL, &frames).rep_count, 1);
    }

    #[test]
    fn test_low_confidence_never_transitions() {
        let machine = ThresholdStateMachine::new(&CURL, CURL.thresholds, ConfidenceGate::default());
        let mut state = SessionState::new();
        state.phase = Phase::Contracted;
        state.rep_count = 7;
        let blurry = with_confidence(&elbow_angle(170.0), 0.2);
        let next = machine.step(&blurry, state, 0.0, "arms").into_state();
        assert_eq!(next.phase, Phase::Contracted);
        assert_eq!(next.rep_count, 7);
        assert!((next.confidence - 0.2).abs() < 1e-6);
        assert!(next.form_feedback.contains("arms"));
    }

    #[test]
    fn test_missing_wrist_is_degenerate() {
        let machine = ThresholdStateMachine::new(&CURL, CURL.thresholds, ConfidenceGate::default());
        let mut frame = elbow_angle(40.0);
        frame.remove(Landmark::LeftWrist);
        frame.remove(Landmark::RightWrist);
        let verdict = machine.step(&frame, SessionState::new(), 0.0, "arms");
        assert!(matches!(verdict, Verdict::Degenerate { .. }));
    }

    #[test]
    fn test_falls_back_to_other_side() {
        let machine = ThresholdStateMachine::new(&CURL, CURL.thresholds, ConfidenceGate::default());
        let mut frame = elbow_angle(40.0);
        frame.remove(Landmark::LeftWrist);
        let state = machine.step(&frame, SessionState::new(), 0.0, "arms").into_state();
        assert_eq!(state.phase, Phase::Contracted);
    }

    #[test]
    fn test_form_checked_on_measured_side() {
        const TUCKED: ThresholdSpec = ThresholdSpec {
            checks: &[Check::new(
                CheckKind::HorizontalOffset { joint: Joint::Elbow, anchor: Joint::Shoulder, max: 0.25 },
                Severity::Alignment,
                20.0,
                "Keep your elbows tucked",
            )],
            ..CURL
        };
        // left arm ranks first but cannot be measured; its elbow is flared
        let mut frame = elbow_angle(40.0);
        frame.remove(Landmark::LeftWrist);
        set(&mut frame, Landmark::LeftElbow, 0.80, 0.40);

        let state = run(&TUCKED, &[frame]);
        assert_eq!(state.phase, Phase::Contracted);
        assert_eq!(state.form_score, 100.0);
        assert_eq!(state.form_feedback, "Squeeze");
    }

    #[test]
    fn test_range_score_saturates() {
        let shallow = run(&CURL, &[elbow_angle(58.0)]);
        let deep = run(&CURL, &[elbow_angle(40.0)]);
        assert!(shallow.form_score < deep.form_score);
        assert_eq!(deep.form_score, 100.0);
        assert_eq!(deep.form_feedback, "Squeeze");
        assert_eq!(shallow.form_feedback, "Curl higher");
    }

    #[test]
    fn test_lift_uses_baseline() {
        const RAISE: ThresholdSpec = ThresholdSpec {
            metric: Metric::Lift(Joint::Ankle),
            thresholds: Thresholds::new(0.04, 0.10, 0.02, 0.15),
            count_on: CountOn::Extension,
            checks: &[],
            cues: CUES,
        };
        let flat = standing();
        let mut raised = standing();
        // 0.045 up at torso length 0.3 → lift 0.15
        set(&mut raised, Landmark::LeftAnkle, 0.56, 0.905);
        set(&mut raised, Landmark::RightAnkle, 0.44, 0.905);

        let state = run(&RAISE, &[flat.clone(), raised.clone(), flat.clone(), raised.clone()]);
        assert_eq!(state.rep_count, 2);
        assert_eq!(state.baseline.map(|b| b.anchor_y), Some(0.95));

        // a session that starts mid-raise keeps its first baseline
        let state = run(&RAISE, &[raised, flat]);
        assert_eq!(state.baseline.map(|b| b.anchor_y), Some(0.905));
        assert_eq!(state.rep_count, 0);
    }
}
