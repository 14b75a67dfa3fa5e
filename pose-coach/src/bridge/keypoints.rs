//! Keypoint buffers from JavaScript
//!
//! Two layouts are accepted: a flat COCO-ordered Float32Array of
//! 17 × (x, y, confidence), or a names array plus 3 floats per name.

use crate::error::PoseCoachError;
use crate::pose::{Frame, VALUES_PER_KEYPOINT};

/// Frame from a names array and a parallel (x, y, confidence) buffer
pub fn frame_from_named(names: &[String], data: &[f32]) -> Result<Frame, PoseCoachError> {
    let expected = names.len() * VALUES_PER_KEYPOINT;
    if data.len() != expected {
        return Err(PoseCoachError::BufferLength { expected, actual: data.len() });
    }

    let samples = names
        .iter()
        .zip(data.chunks_exact(VALUES_PER_KEYPOINT))
        .map(|(name, v)| (name.as_str(), v[0], v[1], v[2]));
    Ok(Frame::from_named(samples))
}

/// Names from a JS array; non-string entries become empty (and are skipped)
pub fn names_from_js(names: &js_sys::Array) -> Vec<String> {
    names.iter().map(|v| v.as_string().unwrap_or_default()).collect()
}

/// Log a rejected buffer to the browser console
pub fn warn_rejected(err: &PoseCoachError) {
    web_sys::console::warn_1(&format!("Keypoint buffer rejected: {err}").into());
}
