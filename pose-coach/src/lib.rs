//! Pose Coach - exercise rep counting and form feedback
//!
//! Turns per-frame body keypoints into rep counts, hold time, a form score
//! and one coaching line. Entry point for the WASM module; contains only:
//! - Module declarations and public re-exports
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod exercises;
pub mod geometry;
pub mod pose;
pub mod session;

#[cfg(test)]
mod test_support;

pub use bridge::CoachSession;
pub use config::{EngineConfig, ExerciseOverride};
pub use engine::{Engine, ExerciseDescriptor};
pub use error::PoseCoachError;
pub use exercises::{Dispatch, MatchKind};
pub use pose::{Frame, Keypoint, Landmark};
pub use session::{Family, Phase, SessionState};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
