//! Exercise families and their phase graphs

use serde::{Deserialize, Serialize};

/// State-machine shape shared by a group of exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Counted by completing a flex/extend cycle (curl, squat, press)
    DynamicRep,
    /// Held posture, accumulates hold time (plank, stretches)
    IsometricHold,
    /// Alternates sides each repetition (mountain climbers, twists)
    AlternatingBilateral,
}

impl Family {
    /// Parse a family label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "dynamic-rep" | "dynamic" | "reps" | "rep" => Some(Family::DynamicRep),
            "isometric-hold" | "isometric" | "hold" | "static" => Some(Family::IsometricHold),
            "alternating-bilateral" | "alternating" | "bilateral" => Some(Family::AlternatingBilateral),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Family::DynamicRep => "dynamic-rep",
            Family::IsometricHold => "isometric-hold",
            Family::AlternatingBilateral => "alternating-bilateral",
        }
    }
}

/// Current discrete state of a session's state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh session, nothing classified yet
    #[default]
    Idle,
    /// Controlling metric at or below the low threshold
    Contracted,
    /// Controlling metric at or above the high threshold
    Extended,
    /// Posture satisfies every hold constraint
    Holding,
    /// Posture breaks at least one hold constraint
    Invalid,
    Left,
    Right,
    Neutral,
}

impl Phase {
    /// Family whose graph this phase belongs to; `None` for `Idle`
    pub fn family(self) -> Option<Family> {
        match self {
            Phase::Idle => None,
            Phase::Contracted | Phase::Extended => Some(Family::DynamicRep),
            Phase::Holding | Phase::Invalid => Some(Family::IsometricHold),
            Phase::Left | Phase::Right | Phase::Neutral => Some(Family::AlternatingBilateral),
        }
    }

    /// Whether `next` is reachable from this phase.
    ///
    /// `Idle` can enter any family; otherwise moves stay inside one family.
    pub fn can_advance_to(self, next: Phase) -> bool {
        match (self.family(), next.family()) {
            (_, None) => self == Phase::Idle,
            (None, Some(_)) => true,
            (Some(from), Some(to)) => from == to,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Contracted => "contracted",
            Phase::Extended => "extended",
            Phase::Holding => "holding",
            Phase::Invalid => "invalid",
            Phase::Left => "left",
            Phase::Right => "right",
            Phase::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parse() {
        assert_eq!(Family::parse("dynamic-rep"), Some(Family::DynamicRep));
        assert_eq!(Family::parse("Isometric Hold"), Some(Family::IsometricHold));
        assert_eq!(Family::parse("alternating_bilateral"), Some(Family::AlternatingBilateral));
        assert_eq!(Family::parse("unknown"), None);
    }

    #[test]
    fn test_transitions_within_family() {
        assert!(Phase::Contracted.can_advance_to(Phase::Extended));
        assert!(Phase::Extended.can_advance_to(Phase::Extended));
        assert!(Phase::Holding.can_advance_to(Phase::Invalid));
        assert!(Phase::Neutral.can_advance_to(Phase::Left));
    }

    #[test]
    fn test_cross_family_rejected() {
        assert!(!Phase::Extended.can_advance_to(Phase::Holding));
        assert!(!Phase::Left.can_advance_to(Phase::Contracted));
        assert!(!Phase::Holding.can_advance_to(Phase::Idle));
    }

    #[test]
    fn test_idle_enters_any() {
        assert!(Phase::Idle.can_advance_to(Phase::Contracted));
        assert!(Phase::Idle.can_advance_to(Phase::Holding));
        assert!(Phase::Idle.can_advance_to(Phase::Neutral));
        assert!(Phase::Idle.can_advance_to(Phase::Idle));
    }
}
