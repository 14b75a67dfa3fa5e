//! Form scoring - geometric checks and feedback selection
//!
//! Every analyzer describes good technique as a list of `Check`s. Each
//! frame the checks are measured against the current geometry only; the
//! failing ones become `Violation`s that lower the score, and the most
//! important violation becomes the single feedback line.

use crate::geometry::{triple_angle, torso_length};
use crate::pose::{Frame, Joint, JointTriple, Side};

/// Angle overshoot (degrees) that counts as a full-strength violation
const ANGLE_SPAN: f32 = 30.0;

/// Vertical overshoot (torso lengths) that counts as a full-strength violation
const HEIGHT_SPAN: f32 = 0.25;

/// Fraction of a check's penalty applied at the first sign of a violation
const MIN_PENALTY_SHARE: f32 = 0.5;

/// Feedback priority, lowest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Depth / range of motion
    Range,
    /// Joint alignment and posture
    Alignment,
    /// Risk of strain
    Safety,
}

/// Which body side(s) a check is measured on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sides {
    /// The side the analyzer is tracking this frame
    Active,
    /// Both sides must pass; the worse one counts
    Both,
    /// Either side may pass; the better one counts
    Either,
}

/// Geometric measurement behind a check
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckKind {
    AngleAtLeast { triple: JointTriple, min: f32 },
    AngleAtMost { triple: JointTriple, max: f32 },
    AngleWithin { triple: JointTriple, min: f32, max: f32 },
    /// |joint.x - anchor.x| must stay within `max` torso lengths
    HorizontalOffset { joint: Joint, anchor: Joint, max: f32 },
    /// |joint.y - anchor.y| must stay within `max` torso lengths
    VerticalOffset { joint: Joint, anchor: Joint, max: f32 },
    /// `joint` must sit at least `margin` torso lengths above `anchor`
    Above { joint: Joint, anchor: Joint, opposite: bool, margin: f32 },
    /// Left and right `joint` heights may differ by at most `max` torso lengths
    Level { joint: Joint, max: f32 },
}

impl CheckKind {
    /// How far the geometry is outside the allowed region.
    ///
    /// 0 means the check passes; 1 or more is a full-strength violation.
    /// `None` if the landmarks needed are missing.
    pub fn excess(&self, frame: &Frame, side: Side, scale: Option<f32>) -> Option<f32> {
        match *self {
            CheckKind::AngleAtLeast { triple, min } => {
                let angle = triple_angle(frame, triple, side)?;
                Some(((min - angle) / ANGLE_SPAN).max(0.0))
            }
            CheckKind::AngleAtMost { triple, max } => {
                let angle = triple_angle(frame, triple, side)?;
                Some(((angle - max) / ANGLE_SPAN).max(0.0))
            }
            CheckKind::AngleWithin { triple, min, max } => {
                let angle = triple_angle(frame, triple, side)?;
                let outside = (min - angle).max(angle - max).max(0.0);
                Some(outside / ANGLE_SPAN)
            }
            CheckKind::HorizontalOffset { joint, anchor, max } => {
                let j = frame.position(joint.on(side))?;
                let a = frame.position(anchor.on(side))?;
                Some(relative_overshoot((j.x - a.x).abs() / scale?, max))
            }
            CheckKind::VerticalOffset { joint, anchor, max } => {
                let j = frame.position(joint.on(side))?;
                let a = frame.position(anchor.on(side))?;
                Some(relative_overshoot((j.y - a.y).abs() / scale?, max))
            }
            CheckKind::Above { joint, anchor, opposite, margin } => {
                let anchor_side = if opposite { side.opposite() } else { side };
                let j = frame.position(joint.on(side))?;
                let a = frame.position(anchor.on(anchor_side))?;
                // image y grows downward
                let required = a.y - margin * scale?;
                Some(((j.y - required) / scale? / HEIGHT_SPAN).max(0.0))
            }
            CheckKind::Level { joint, max } => {
                let l = frame.position(joint.on(Side::Left))?;
                let r = frame.position(joint.on(Side::Right))?;
                Some(relative_overshoot((l.y - r.y).abs() / scale?, max))
            }
        }
    }
}

fn relative_overshoot(value: f32, max: f32) -> f32 {
    if value <= max {
        0.0
    } else if max > 0.0 {
        (value - max) / max
    } else {
        1.0
    }
}

/// One form rule with its penalty and correction cue
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Check {
    pub kind: CheckKind,
    pub sides: Sides,
    pub severity: Severity,
    /// Points deducted for a full-strength violation
    pub penalty: f32,
    pub message: &'static str,
}

impl Check {
    pub const fn new(kind: CheckKind, severity: Severity, penalty: f32, message: &'static str) -> Self {
        Self { kind, sides: Sides::Active, severity, penalty, message }
    }

    pub const fn on(self, sides: Sides) -> Self {
        Self { sides, ..self }
    }

    /// Violation strength on the relevant side(s), `None` if unmeasurable
    pub fn measure(&self, frame: &Frame, active: Side, scale: Option<f32>) -> Option<f32> {
        match self.sides {
            Sides::Active => self.kind.excess(frame, active, scale),
            Sides::Both => Side::BOTH
                .iter()
                .filter_map(|s| self.kind.excess(frame, *s, scale))
                .reduce(f32::max),
            Sides::Either => Side::BOTH
                .iter()
                .filter_map(|s| self.kind.excess(frame, *s, scale))
                .reduce(f32::min),
        }
    }

    fn violation(&self, excess: f32) -> Option<Violation> {
        (excess > 0.0).then(|| Violation {
            severity: self.severity,
            penalty: self.penalty * (MIN_PENALTY_SHARE + (1.0 - MIN_PENALTY_SHARE) * excess.min(1.0)),
            message: self.message,
        })
    }
}

/// A failed check for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Violation {
    pub severity: Severity,
    /// Points actually deducted
    pub penalty: f32,
    pub message: &'static str,
}

/// Result of measuring a set of checks on one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormReport {
    pub violations: Vec<Violation>,
    /// Checks that could not be measured (missing landmarks)
    pub unmeasured: usize,
}

impl FormReport {
    /// Measure every check against the frame
    pub fn evaluate(checks: &[Check], frame: &Frame, active: Side) -> Self {
        let scale = torso_length(frame);
        let mut report = FormReport::default();
        for check in checks {
            match check.measure(frame, active, scale) {
                Some(excess) => report.violations.extend(check.violation(excess)),
                None => report.unmeasured += 1,
            }
        }
        report
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// 100 minus all penalties, clamped to [0, 100]
    pub fn score(&self) -> f32 {
        let deducted: f32 = self.violations.iter().map(|v| v.penalty).sum();
        (100.0 - deducted).clamp(0.0, 100.0)
    }

    /// Most actionable violation: highest severity, then largest penalty
    pub fn top(&self) -> Option<&Violation> {
        self.violations.iter().max_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then(a.penalty.total_cmp(&b.penalty))
        })
    }

    /// Feedback line: the top violation, or `fallback` when form is clean
    pub fn feedback(&self, fallback: &'static str) -> &'static str {
        self.top().map_or(fallback, |v| v.message)
    }
}
