//! Engine entry point: dispatch an exercise and run one frame through it
//!
//! `(frame, descriptor, previous state, now) -> new state`. The engine
//! holds only immutable configuration; session state is passed in by value
//! and handed back, so one engine can serve any number of sessions.

use super::alternator::{AlternatorSpec, SideAlternator};
use super::hold::{HoldSpec, HoldValidator};
use super::threshold::{ThresholdSpec, ThresholdStateMachine};
use crate::config::EngineConfig;
use crate::exercises::{Dispatch, Registry};
use crate::geometry::ConfidenceGate;
use crate::pose::Frame;
use crate::session::{Family, SessionState};

/// Which engine an exercise runs on, with its configuration record
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Analyzer {
    Threshold(ThresholdSpec),
    Hold(HoldSpec),
    Alternating(AlternatorSpec),
}

impl Analyzer {
    pub fn family(&self) -> Family {
        match self {
            Analyzer::Threshold(_) => Family::DynamicRep,
            Analyzer::Hold(_) => Family::IsometricHold,
            Analyzer::Alternating(_) => Family::AlternatingBilateral,
        }
    }
}

/// What the caller says it is doing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseDescriptor {
    pub name: String,
    /// `None` when the caller does not know the family
    pub family: Option<Family>,
}

impl ExerciseDescriptor {
    pub fn new(name: impl Into<String>, family: Option<Family>) -> Self {
        Self { name: name.into(), family }
    }

    /// Descriptor from a name and a free-form family label
    pub fn parse(name: &str, family: &str) -> Self {
        Self::new(name, Family::parse(family))
    }
}

/// Stateless analysis engine
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    registry: Registry,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, registry: Registry::new() }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve a descriptor to an analyzer and log the match; never fails
    pub fn dispatch(&self, descriptor: &ExerciseDescriptor) -> Dispatch {
        self.registry.resolve(descriptor)
    }

    /// Analyze one frame.
    ///
    /// Resolves the descriptor silently on every call; callers that want the
    /// match logged once resolve with `dispatch` and use `analyze_with`.
    pub fn analyze(
        &self,
        frame: &Frame,
        descriptor: &ExerciseDescriptor,
        previous: SessionState,
        now_ms: f64,
    ) -> SessionState {
        let dispatch = self.registry.find(descriptor);
        self.analyze_with(&dispatch, frame, previous, now_ms)
    }

    /// Analyze one frame with an already resolved exercise
    pub fn analyze_with(
        &self,
        dispatch: &Dispatch,
        frame: &Frame,
        previous: SessionState,
        now_ms: f64,
    ) -> SessionState {
        let exercise = dispatch.exercise;
        let gate = ConfidenceGate::new(self.config.min_confidence_for(exercise.id));

        let verdict = match &exercise.analyzer {
            Analyzer::Threshold(spec) => {
                let thresholds = self.config.thresholds_for(exercise.id, spec.thresholds);
                ThresholdStateMachine::new(spec, thresholds, gate).step(frame, previous, now_ms, exercise.focus)
            }
            Analyzer::Hold(spec) => HoldValidator::new(spec, gate, self.config.max_hold_gap_ms)
                .step(frame, previous, now_ms, exercise.focus),
            Analyzer::Alternating(spec) => {
                SideAlternator::new(spec, gate).step(frame, previous, now_ms, exercise.focus)
            }
        };
        verdict.into_state()
    }
}
