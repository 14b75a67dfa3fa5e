//! CoachSession - one workout session owned by JavaScript
//!
//! Wraps the engine, the resolved exercise and the session state so the
//! page only passes keypoints and timestamps in and reads results out.

use wasm_bindgen::prelude::*;

use super::keypoints::{frame_from_named, names_from_js, warn_rejected};
use crate::config::EngineConfig;
use crate::engine::{Engine, ExerciseDescriptor};
use crate::error::PoseCoachError;
use crate::exercises::Dispatch;
use crate::pose::Frame;
use crate::session::SessionState;

#[wasm_bindgen]
pub struct CoachSession {
    engine: Engine,
    descriptor: ExerciseDescriptor,
    dispatch: Dispatch,
    state: SessionState,
}

impl CoachSession {
    fn build(engine: Engine, exercise: &str, family: &str) -> Self {
        let descriptor = ExerciseDescriptor::parse(exercise, family);
        let dispatch = engine.dispatch(&descriptor);
        Self { engine, descriptor, dispatch, state: SessionState::new() }
    }

    fn try_with_config(exercise: &str, family: &str, config_toml: &str) -> Result<Self, PoseCoachError> {
        let config = EngineConfig::from_toml_str(config_toml)?;
        Ok(Self::build(Engine::new(config), exercise, family))
    }

    fn announce(&self) {
        console_log!(
            "Exercise '{}' -> {} ({})",
            self.descriptor.name,
            self.dispatch.exercise.id,
            self.dispatch.kind.as_str()
        );
    }

    fn switch(&mut self, exercise: &str, family: &str) {
        self.descriptor = ExerciseDescriptor::parse(exercise, family);
        self.dispatch = self.engine.dispatch(&self.descriptor);
        self.state.reset();
    }

    fn ingest(&mut self, frame: &Frame, timestamp_ms: f64) {
        let previous = std::mem::take(&mut self.state);
        self.state = self.engine.analyze_with(&self.dispatch, frame, previous, timestamp_ms);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

#[wasm_bindgen]
impl CoachSession {
    /// Start a session with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(exercise: &str, family: &str) -> CoachSession {
        let session = Self::build(Engine::default(), exercise, family);
        session.announce();
        session
    }

    /// Start a session with a TOML configuration
    pub fn with_config(exercise: &str, family: &str, config_toml: &str) -> Result<CoachSession, JsValue> {
        let session = Self::try_with_config(exercise, family, config_toml)?;
        session.announce();
        Ok(session)
    }

    /// Analyze a flat COCO-ordered buffer (17 × x, y, confidence)
    pub fn analyze_flat(&mut self, data: &[f32], timestamp_ms: f64) -> Result<(), JsValue> {
        let frame = Frame::from_coco_flat(data).inspect_err(warn_rejected)?;
        self.ingest(&frame, timestamp_ms);
        Ok(())
    }

    /// Analyze named keypoints: `names[i]` owns `data[3i..3i+3]`
    pub fn analyze_named(&mut self, names: js_sys::Array, data: &[f32], timestamp_ms: f64) -> Result<(), JsValue> {
        let frame = frame_from_named(&names_from_js(&names), data).inspect_err(warn_rejected)?;
        self.ingest(&frame, timestamp_ms);
        Ok(())
    }

    /// Manual rep from the UI
    pub fn add_rep(&mut self) {
        self.state.add_rep();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Switch exercise; the session starts over
    pub fn set_exercise(&mut self, exercise: &str, family: &str) {
        self.switch(exercise, family);
        self.announce();
    }

    // ========================================================================
    // GETTERS
    // ========================================================================

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.state.phase.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn rep_count(&self) -> u32 {
        self.state.rep_count
    }

    #[wasm_bindgen(getter)]
    pub fn hold_time_seconds(&self) -> f64 {
        self.state.hold_time_seconds
    }

    #[wasm_bindgen(getter)]
    pub fn form_score(&self) -> f32 {
        self.state.form_score
    }

    #[wasm_bindgen(getter)]
    pub fn form_feedback(&self) -> String {
        self.state.form_feedback.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn confidence(&self) -> f32 {
        self.state.confidence
    }

    /// Timestamp of the last accepted frame, if any
    #[wasm_bindgen(getter)]
    pub fn last_update_ms(&self) -> Option<f64> {
        self.state.last_update_ms
    }

    /// Last side reached in an alternating exercise
    #[wasm_bindgen(getter)]
    pub fn last_side(&self) -> Option<String> {
        self.state.last_side.map(|s| s.as_str().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn has_baseline(&self) -> bool {
        self.state.baseline.is_some()
    }

    /// Name as given by the caller
    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.descriptor.name.clone()
    }

    /// Family of the exercise actually being analyzed
    #[wasm_bindgen(getter)]
    pub fn family(&self) -> String {
        self.dispatch.exercise.family().as_str().to_string()
    }

    /// Catalog id the name resolved to
    pub fn matched_exercise(&self) -> String {
        self.dispatch.exercise.id.to_string()
    }

    pub fn match_kind(&self) -> String {
        self.dispatch.kind.as_str().to_string()
    }

    pub fn was_fallback(&self) -> bool {
        self.dispatch.is_fallback()
    }
}
