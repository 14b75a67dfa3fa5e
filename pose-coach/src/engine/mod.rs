//! Engine module - per-family analyzers and the dispatching entry point
//!
//! Re-exports only. All logic in submodules.

mod alternator;
mod analyze;
mod form;
mod hold;
mod threshold;
mod verdict;

pub use alternator::{AlternatorSpec, SideAlternator, SideRule};
pub use analyze::{Analyzer, Engine, ExerciseDescriptor};
pub use form::{Check, CheckKind, FormReport, Severity, Sides, Violation};
pub use hold::{HoldSpec, HoldValidator, DEFAULT_MAX_HOLD_GAP_MS};
pub use threshold::{Cues, CountOn, Metric, ThresholdSpec, ThresholdStateMachine, Thresholds};
pub use verdict::{accept, Verdict, WRONG_SESSION_FEEDBACK};
