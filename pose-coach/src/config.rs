//! Engine configuration (TOML)
//!
//! ```toml
//! min_confidence = 0.5
//! max_hold_gap_ms = 500.0
//!
//! [exercises.squat]
//! low = 95.0
//! high = 165.0
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{Analyzer, Thresholds, DEFAULT_MAX_HOLD_GAP_MS};
use crate::error::PoseCoachError;
use crate::exercises::find_exercise;
use crate::geometry::DEFAULT_MIN_CONFIDENCE;

/// Per-exercise overrides; unset fields keep the catalog value
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseOverride {
    pub low: Option<f32>,
    pub high: Option<f32>,
    pub excellent_low: Option<f32>,
    pub excellent_high: Option<f32>,
    pub min_confidence: Option<f32>,
}

impl ExerciseOverride {
    fn apply(&self, base: Thresholds) -> Thresholds {
        Thresholds {
            low: self.low.unwrap_or(base.low),
            high: self.high.unwrap_or(base.high),
            excellent_low: self.excellent_low.unwrap_or(base.excellent_low),
            excellent_high: self.excellent_high.unwrap_or(base.excellent_high),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Landmark confidence required before a frame is analyzed
    pub min_confidence: f32,
    /// Largest frame gap credited as hold time
    pub max_hold_gap_ms: f64,
    /// Keyed by canonical exercise id
    pub exercises: HashMap<String, ExerciseOverride>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_hold_gap_ms: DEFAULT_MAX_HOLD_GAP_MS,
            exercises: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate
    pub fn from_toml_str(content: &str) -> Result<Self, PoseCoachError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, PoseCoachError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PoseCoachError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PoseCoachError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), PoseCoachError> {
        check_confidence("min_confidence", self.min_confidence)?;
        if !(self.max_hold_gap_ms.is_finite() && self.max_hold_gap_ms > 0.0) {
            return Err(PoseCoachError::InvalidConfig(format!(
                "max_hold_gap_ms must be positive, got {}",
                self.max_hold_gap_ms
            )));
        }

        for (id, over) in &self.exercises {
            let exercise = find_exercise(id)
                .ok_or_else(|| PoseCoachError::InvalidConfig(format!("unknown exercise id `{id}`")))?;
            if let Some(c) = over.min_confidence {
                check_confidence(&format!("exercises.{id}.min_confidence"), c)?;
            }
            match &exercise.analyzer {
                Analyzer::Threshold(spec) => {
                    let merged = over.apply(spec.thresholds);
                    if !merged.is_valid() {
                        return Err(PoseCoachError::InvalidConfig(format!(
                            "exercises.{id}: need excellent_low <= low < high <= excellent_high, got {merged:?}"
                        )));
                    }
                }
                _ if over.low.is_some()
                    || over.high.is_some()
                    || over.excellent_low.is_some()
                    || over.excellent_high.is_some() =>
                {
                    return Err(PoseCoachError::InvalidConfig(format!(
                        "exercises.{id}: thresholds only apply to dynamic-rep exercises"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Confidence threshold for one exercise
    pub fn min_confidence_for(&self, id: &str) -> f32 {
        self.exercises
            .get(id)
            .and_then(|o| o.min_confidence)
            .unwrap_or(self.min_confidence)
    }

    /// Catalog thresholds with any override merged in
    pub fn thresholds_for(&self, id: &str, defaults: Thresholds) -> Thresholds {
        let Some(over) = self.exercises.get(id) else {
            return defaults;
        };
        let merged = over.apply(defaults);
        if merged.is_valid() {
            merged
        } else {
            warn!(exercise = id, "invalid threshold override ignored");
            defaults
        }
    }
}

fn check_confidence(field: &str, value: f32) -> Result<(), PoseCoachError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PoseCoachError::InvalidConfig(format!("{field} must be in [0, 1], got {value}")))
    }
}
