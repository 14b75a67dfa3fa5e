//! Alternating-bilateral engine
//!
//! Each frame is classified as left, right or neutral. A rep is counted
//! whenever the performer reaches a side different from the last side they
//! reached, so passing through neutral never double-counts.

use tracing::debug;

use super::form::{Check, FormReport};
use super::verdict::{accept, Verdict};
use crate::geometry::{confidence_of, distance, joint_center, torso_length, triple_angle, ConfidenceGate};
use crate::pose::{Frame, Joint, Landmark, Side, ARM_RAISE};
use crate::session::{Phase, SessionState};

/// How the active side is recognized
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SideRule {
    /// Elbow brought within `reach` torso lengths of the opposite knee (bicycle crunch)
    ElbowToOppositeKnee { reach: f32 },
    /// Knee drawn within `reach` torso lengths of the same-side shoulder (mountain climber)
    KneeToChest { reach: f32 },
    /// Knee raised to within `height` torso lengths of hip level; negative is below the hip (high knees)
    KneeLift { height: f32 },
    /// Hands carried toward one hip, `margin` closer than to the other (Russian twist)
    HandsToHip { margin: f32 },
    /// One arm raised to `min_angle` at the shoulder, `margin` degrees above the other (bird dog)
    ArmReach { min_angle: f32, margin: f32 },
}

impl SideRule {
    /// Joints that must be visible on both sides
    pub fn joints(&self) -> &'static [Joint] {
        match self {
            SideRule::ElbowToOppositeKnee { .. } => &[Joint::Shoulder, Joint::Elbow, Joint::Hip, Joint::Knee],
            SideRule::KneeToChest { .. } => &[Joint::Shoulder, Joint::Hip, Joint::Knee],
            SideRule::KneeLift { .. } => &[Joint::Shoulder, Joint::Hip, Joint::Knee],
            SideRule::HandsToHip { .. } => &[Joint::Shoulder, Joint::Wrist, Joint::Hip],
            SideRule::ArmReach { .. } => &[Joint::Shoulder, Joint::Wrist, Joint::Hip],
        }
    }

    /// `Some(None)` is neutral; `None` means the frame cannot be classified
    pub fn classify(&self, frame: &Frame) -> Option<Option<Side>> {
        match *self {
            SideRule::ElbowToOppositeKnee { reach } => {
                let scale = torso_length(frame)?;
                pick_smallest(|side| {
                    let elbow = frame.position(Joint::Elbow.on(side))?;
                    let knee = frame.position(Joint::Knee.on(side.opposite()))?;
                    Some(distance(elbow, knee) / scale)
                }, reach)
            }
            SideRule::KneeToChest { reach } => {
                let scale = torso_length(frame)?;
                pick_smallest(|side| {
                    let knee = frame.position(Joint::Knee.on(side))?;
                    let shoulder = frame.position(Joint::Shoulder.on(side))?;
                    Some(distance(knee, shoulder) / scale)
                }, reach)
            }
            SideRule::KneeLift { height } => {
                let scale = torso_length(frame)?;
                // negate so "closest" means "highest"
                pick_smallest(|side| {
                    let knee = frame.position(Joint::Knee.on(side))?;
                    let hip = frame.position(Joint::Hip.on(side))?;
                    Some((knee.y - hip.y) / scale)
                }, -height)
            }
            SideRule::HandsToHip { margin } => {
                let hands = joint_center(frame, Joint::Wrist)?;
                let left = distance(hands, frame.position(Landmark::LeftHip)?);
                let right = distance(hands, frame.position(Landmark::RightHip)?);
                Some(if left < right * (1.0 - margin) {
                    Some(Side::Left)
                } else if right < left * (1.0 - margin) {
                    Some(Side::Right)
                } else {
                    None
                })
            }
            SideRule::ArmReach { min_angle, margin } => {
                let left = triple_angle(frame, ARM_RAISE, Side::Left);
                let right = triple_angle(frame, ARM_RAISE, Side::Right);
                if left.is_none() && right.is_none() {
                    return None;
                }
                let l = left.unwrap_or(0.0);
                let r = right.unwrap_or(0.0);
                Some(if l >= min_angle && l - r >= margin {
                    Some(Side::Left)
                } else if r >= min_angle && r - l >= margin {
                    Some(Side::Right)
                } else {
                    None
                })
            }
        }
    }
}

/// Side whose measure is smallest and within `limit`; ties are neutral
fn pick_smallest(measure: impl Fn(Side) -> Option<f32>, limit: f32) -> Option<Option<Side>> {
    let left = measure(Side::Left);
    let right = measure(Side::Right);
    let side = match (left, right) {
        (None, None) => return None,
        (Some(l), None) => (l <= limit).then_some(Side::Left),
        (None, Some(r)) => (r <= limit).then_some(Side::Right),
        (Some(l), Some(r)) if l < r => (l <= limit).then_some(Side::Left),
        (Some(l), Some(r)) if r < l => (r <= limit).then_some(Side::Right),
        _ => None,
    };
    Some(side)
}

/// Configuration record for one alternating exercise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlternatorSpec {
    pub rule: SideRule,
    pub checks: &'static [Check],
    /// Feedback on a clean side frame
    pub active: &'static str,
    /// Feedback on a clean neutral frame
    pub neutral: &'static str,
}

pub struct SideAlternator<'a> {
    spec: &'a AlternatorSpec,
    gate: ConfidenceGate,
}

impl<'a> SideAlternator<'a> {
    pub fn new(spec: &'a AlternatorSpec, gate: ConfidenceGate) -> Self {
        Self { spec, gate }
    }

    /// Phase for a classified side, and whether reaching it completes a rep
    pub fn advance(last_side: Option<Side>, side: Option<Side>) -> (Phase, bool) {
        match side {
            None => (Phase::Neutral, false),
            Some(Side::Left) => (Phase::Left, last_side != Some(Side::Left)),
            Some(Side::Right) => (Phase::Right, last_side != Some(Side::Right)),
        }
    }

    /// Process one frame
    pub fn step(&self, frame: &Frame, previous: SessionState, now_ms: f64, focus: &str) -> Verdict {
        let required: Vec<Landmark> = self
            .spec
            .rule
            .joints()
            .iter()
            .flat_map(|j| Side::BOTH.map(|s| j.on(s)))
            .collect();
        let confidence = confidence_of(&required, frame);
        if !self.gate.passes(confidence) {
            return Verdict::NotVisible { previous, confidence, focus: focus.to_string() };
        }

        let Some(side) = self.spec.rule.classify(frame) else {
            return Verdict::Degenerate { previous, confidence };
        };

        let (phase, counts) = Self::advance(previous.last_side, side);
        if !previous.phase.can_advance_to(phase) {
            return Verdict::Rejected { previous, confidence, attempted: phase };
        }

        let mut state = previous;
        if state.phase != phase {
            debug!(from = state.phase.as_str(), to = phase.as_str(), "side change");
        }
        if counts {
            state.rep_count = state.rep_count.saturating_add(1);
            debug!(reps = state.rep_count, "rep counted");
        }
        state.phase = phase;
        if side.is_some() {
            state.last_side = side;
        }

        let active = side.unwrap_or_else(|| self.gate.best_side(self.spec.rule.joints(), frame).0);
        let report = FormReport::evaluate(self.spec.checks, frame, active);
        let cue = if side.is_some() { self.spec.active } else { self.spec.neutral };
        state.form_score = report.score();
        state.form_feedback = report.feedback(cue).to_string();

        Verdict::Accepted { state: accept(state, confidence, now_ms) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arm_reach, bicycle, climber, set, standing, twist, with_confidence};

    const TWIST: AlternatorSpec = AlternatorSpec {
        rule: SideRule::HandsToHip { margin: 0.25 },
        checks: &[],
        active: "Nice twist",
        neutral: "Rotate to the side",
    };

    const CLIMBER: AlternatorSpec = AlternatorSpec {
        rule: SideRule::KneeToChest { reach: 0.9 },
        checks: &[],
        active: "Drive the knee",
        neutral: "Switch legs",
    };

    const BICYCLE: AlternatorSpec = AlternatorSpec {
        rule: SideRule::ElbowToOppositeKnee { reach: 0.6 },
        checks: &[],
        active: "Elbow to knee",
        neutral: "Switch sides",
    };

    const BIRD_DOG: AlternatorSpec = AlternatorSpec {
        rule: SideRule::ArmReach { min_angle: 150.0, margin: 40.0 },
        checks: &[],
        active: "Reach long",
        neutral: "Switch arms",
    };

    /// Frames for N, L, N, R, N, L
    fn alternating(make: fn(Option<Side>) -> Frame) -> Vec<Frame> {
        use Side::*;
        [None, Some(Left), None, Some(Right), None, Some(Left)].into_iter().map(make).collect()
    }

    fn run(spec: &AlternatorSpec, frames: &[Frame]) -> SessionState {
        let machine = SideAlternator::new(spec, ConfidenceGate::default());
        frames.iter().enumerate().fold(SessionState::new(), |s, (i, f)| {
            machine.step(f, s, i as f64 * 100.0, "full body").into_state()
        })
    }

    #[test]
    fn test_side_sequence_counts() {
        use Side::*;
        let sides = [None, Some(Left), None, Some(Right), None, Some(Left)];
        let mut last = None;
        let mut reps = 0;
        for side in sides {
            let (_, counts) = SideAlternator::advance(last, side);
            reps += counts as u32;
            if side.is_some() {
                last = side;
            }
        }
        assert_eq!(reps, 3);
    }

    #[test]
    fn test_same_side_through_neutral() {
        let (_, first) = SideAlternator::advance(None, Some(Side::Left));
        let (phase, again) = SideAlternator::advance(Some(Side::Left), Some(Side::Left));
        assert!(first);
        assert!(!again);
        assert_eq!(phase, Phase::Left);
        assert_eq!(SideAlternator::advance(Some(Side::Left), None), (Phase::Neutral, false));
    }

    #[test]
    fn test_twist_frames() {
        let machine = SideAlternator::new(&TWIST, ConfidenceGate::default());
        let frames = [
            twist(None),
            twist(Some(Side::Left)),
            twist(None),
            twist(Some(Side::Right)),
            twist(None),
            twist(Some(Side::Left)),
        ];
        let state = frames.iter().enumerate().fold(SessionState::new(), |s, (i, f)| {
            machine.step(f, s, i as f64 * 100.0, "upper body").into_state()
        });
        assert_eq!(state.rep_count, 3);
        assert_eq!(state.phase, Phase::Left);
        assert_eq!(state.last_side, Some(Side::Left));
        assert_eq!(state.form_feedback, "Nice twist");
    }

    #[test]
    fn test_repeated_frames_do_not_count() {
        let machine = SideAlternator::new(&TWIST, ConfidenceGate::default());
        let left = twist(Some(Side::Left));
        let state = (0..5).fold(SessionState::new(), |s, i| {
            machine.step(&left, s, i as f64 * 100.0, "upper body").into_state()
        });
        assert_eq!(state.rep_count, 1);
    }

    #[test]
    fn test_low_confidence_no_transition() {
        let machine = SideAlternator::new(&TWIST, ConfidenceGate::default());
        let state = machine.step(&twist(Some(Side::Left)), SessionState::new(), 0.0, "upper body").into_state();
        let blurry = with_confidence(&twist(Some(Side::Right)), 0.2);
        let after = machine.step(&blurry, state, 100.0, "upper body").into_state();
        assert_eq!(after.phase, Phase::Left);
        assert_eq!(after.rep_count, 1);
    }

    #[test]
    fn test_knee_lift_rule() {
        let rule = SideRule::KneeLift { height: -0.25 };
        let mut frame = standing();
        assert_eq!(rule.classify(&frame), Some(None));
        // right knee up to just below hip level
        set(&mut frame, Landmark::RightKnee, 0.44, 0.60);
        assert_eq!(rule.classify(&frame), Some(Some(Side::Right)));
    }

    #[test]
    fn test_knee_to_chest_rule() {
        let rule = CLIMBER.rule;
        assert_eq!(rule.classify(&climber(None)), Some(None));
        assert_eq!(rule.classify(&climber(Some(Side::Left))), Some(Some(Side::Left)));
        assert_eq!(rule.classify(&climber(Some(Side::Right))), Some(Some(Side::Right)));

        // drawn in, but not far enough
        let mut frame = climber(None);
        set(&mut frame, Landmark::RightKnee, 0.60, 0.50);
        assert_eq!(rule.classify(&frame), Some(None));
    }

    #[test]
    fn test_climber_frames() {
        let state = run(&CLIMBER, &alternating(climber));
        assert_eq!(state.rep_count, 3);
        assert_eq!(state.phase, Phase::Left);
        assert_eq!(state.form_feedback, "Drive the knee");
    }

    #[test]
    fn test_elbow_to_opposite_knee_rule() {
        let rule = BICYCLE.rule;
        assert_eq!(rule.classify(&bicycle(None)), Some(None));
        assert_eq!(rule.classify(&bicycle(Some(Side::Left))), Some(Some(Side::Left)));
        assert_eq!(rule.classify(&bicycle(Some(Side::Right))), Some(Some(Side::Right)));

        // elbow lowered, short of the knee
        let mut frame = standing();
        set(&mut frame, Landmark::LeftElbow, 0.60, 0.55);
        assert_eq!(rule.classify(&frame), Some(None));
    }

    #[test]
    fn test_bicycle_frames() {
        let state = run(&BICYCLE, &alternating(bicycle));
        assert_eq!(state.rep_count, 3);
        assert_eq!(state.last_side, Some(Side::Left));
    }

    #[test]
    fn test_arm_reach_rule() {
        let rule = BIRD_DOG.rule;
        assert_eq!(rule.classify(&arm_reach(None)), Some(None));
        assert_eq!(rule.classify(&arm_reach(Some(Side::Left))), Some(Some(Side::Left)));
        assert_eq!(rule.classify(&arm_reach(Some(Side::Right))), Some(Some(Side::Right)));

        // a missing arm reads as lowered
        let mut frame = arm_reach(Some(Side::Right));
        frame.remove(Landmark::LeftWrist);
        assert_eq!(rule.classify(&frame), Some(Some(Side::Right)));
        frame.remove(Landmark::RightWrist);
        assert_eq!(rule.classify(&frame), None);
    }

    #[test]
    fn test_bird_dog_frames() {
        let frames = alternating(arm_reach);
        let state = run(&BIRD_DOG, &frames[..4]);
        assert_eq!(state.rep_count, 2);
        assert_eq!(state.phase, Phase::Right);
        assert_eq!(state.form_feedback, "Reach long");
    }
}
