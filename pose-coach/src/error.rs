//! Errors for the few fallible surfaces: config loading and frame buffers
//!
//! Per-frame analysis never fails; it degrades to the previous state.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum PoseCoachError {
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid keypoint buffer length: {actual} (expected {expected})")]
    BufferLength { expected: usize, actual: usize },
}

impl From<PoseCoachError> for JsValue {
    fn from(err: PoseCoachError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
