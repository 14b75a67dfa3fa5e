//! Body-scale helpers
//!
//! Form tolerances are expressed as fractions of torso length so the same
//! thresholds work for pixel and normalized coordinates alike.

use nalgebra::Point2;

use crate::pose::{Frame, Joint, Side};

/// Torso lengths below this are treated as unmeasurable
const MIN_TORSO_LENGTH: f32 = 1e-3;

pub fn midpoint(a: Point2<f32>, b: Point2<f32>) -> Point2<f32> {
    nalgebra::center(&a, &b)
}

pub fn distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}

/// Midpoint of a joint's left and right landmarks, or whichever one is present
pub fn joint_center(frame: &Frame, joint: Joint) -> Option<Point2<f32>> {
    let left = frame.position(joint.on(Side::Left));
    let right = frame.position(joint.on(Side::Right));
    match (left, right) {
        (Some(l), Some(r)) => Some(midpoint(l, r)),
        (one, other) => one.or(other),
    }
}

/// Distance from shoulder center to hip center.
///
/// Falls back to a single side when only one shoulder/hip pair is visible.
pub fn torso_length(frame: &Frame) -> Option<f32> {
    let length = match (joint_center(frame, Joint::Shoulder), joint_center(frame, Joint::Hip)) {
        (Some(shoulders), Some(hips)) => distance(shoulders, hips),
        _ => return None,
    };
    (length >= MIN_TORSO_LENGTH).then_some(length)
}
