//! Geometry module - joint angles, confidence and body scale
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod body;
mod confidence;

pub use angles::{angle_at_vertex, triple_angle};
pub use body::{distance, joint_center, midpoint, torso_length};
pub use confidence::{confidence_of, side_confidence, ConfidenceGate, DEFAULT_MIN_CONFIDENCE};
