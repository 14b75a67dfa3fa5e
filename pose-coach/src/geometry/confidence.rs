//! Confidence gate - visibility precondition for every analyzer
//!
//! When the landmarks an exercise depends on fall below the threshold the
//! frame is not trusted: the analyzer keeps its previous state instead of
//! reacting to a guessed pose.

use crate::pose::{Frame, Joint, Landmark, Side};

/// Default minimum mean confidence
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Mean confidence across the named landmarks present in the frame.
///
/// Missing landmarks are skipped; returns 0 if none are present.
pub fn confidence_of(landmarks: &[Landmark], frame: &Frame) -> f32 {
    let (sum, count) = landmarks
        .iter()
        .filter_map(|l| frame.confidence(*l))
        .fold((0.0, 0usize), |(sum, count), c| (sum + c, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

/// Confidence of a set of side-agnostic joints on one side
pub fn side_confidence(joints: &[Joint], side: Side, frame: &Frame) -> f32 {
    let landmarks: Vec<Landmark> = joints.iter().map(|j| j.on(side)).collect();
    confidence_of(&landmarks, frame)
}

/// Confidence gate for one analyzer call
#[derive(Clone, Copy, Debug)]
pub struct ConfidenceGate {
    /// Minimum confidence to accept the frame
    threshold: f32,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a validity score clears the gate
    pub fn passes(&self, confidence: f32) -> bool {
        confidence >= self.threshold
    }

    /// Pick the more visible side for the given joints.
    ///
    /// Ties go to the left side.
    pub fn best_side(&self, joints: &[Joint], frame: &Frame) -> (Side, f32) {
        let left = side_confidence(joints, Side::Left, frame);
        let right = side_confidence(joints, Side::Right, frame);
        if right > left {
            (Side::Right, right)
        } else {
            (Side::Left, left)
        }
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONFIDENCE)
    }
}
