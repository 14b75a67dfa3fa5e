//! Pose module - canonical landmarks and the keypoint normalizer
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod landmark;

pub use frame::{Frame, Keypoint, FLAT_FRAME_LEN, VALUES_PER_KEYPOINT};
pub use landmark::{
    Joint, JointTriple, Landmark, Side, LANDMARK_COUNT,
    // Common joint triples
    ARM_RAISE, BODY_LINE, ELBOW, HIP, KNEE, SHOULDER,
};
