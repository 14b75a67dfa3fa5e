//! Session Management: per-workout state and phase graphs
//!
//! # Components
//! - `state.rs`: SessionState threaded through every analyzer call
//! - `phase.rs`: exercise families and the phases each may move between

mod phase;
mod state;

pub use phase::{Family, Phase};
pub use state::{Baseline, SessionState};
