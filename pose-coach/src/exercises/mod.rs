//! Exercises module - static catalog and name dispatch
//!
//! Re-exports only. All logic in submodules.

mod catalog;
mod registry;

pub use catalog::{find_exercise, BodyRegion, Exercise, CATALOG, GENERIC};
pub use registry::{normalize_name, Dispatch, MatchKind, Registry};
