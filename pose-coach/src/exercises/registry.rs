//! Exercise dispatcher - descriptor to catalog record
//!
//! Resolution never fails. Names are normalized (lowercase, runs of
//! non-alphanumerics to `_`) and tried in order: exact id or alias, the
//! best catalog keyword contained in the name, a default for the declared
//! family, and finally the generic analyzer.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::catalog::{family_default, BodyRegion, Exercise, CATALOG, GENERIC};
use crate::engine::ExerciseDescriptor;
use crate::session::Family;

/// How a descriptor was matched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Alias,
    /// Fuzzy: a catalog keyword appears in the name
    Keyword,
    /// Unknown name, default exercise for the declared family
    FamilyDefault,
    /// Unknown name and family
    Generic,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Alias => "alias",
            MatchKind::Keyword => "keyword",
            MatchKind::FamilyDefault => "family_default",
            MatchKind::Generic => "generic",
        }
    }
}

/// Resolved exercise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dispatch {
    pub exercise: &'static Exercise,
    pub kind: MatchKind,
}

impl Dispatch {
    /// Anything other than an exact or alias match
    pub fn is_fallback(&self) -> bool {
        !matches!(self.kind, MatchKind::Exact | MatchKind::Alias)
    }
}

/// Lowercase; collapse runs of non-alphanumerics into one `_`; trim the ends
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Name index over the static catalog
#[derive(Clone, Debug)]
pub struct Registry {
    names: HashMap<&'static str, (&'static Exercise, MatchKind)>,
}

impl Registry {
    pub fn new() -> Self {
        let mut names = HashMap::new();
        for exercise in CATALOG {
            names.insert(exercise.id, (exercise, MatchKind::Exact));
            for alias in exercise.aliases {
                names.entry(*alias).or_insert((exercise, MatchKind::Alias));
            }
        }
        Self { names }
    }

    /// Number of catalog records indexed
    pub fn len(&self) -> usize {
        CATALOG.len()
    }

    pub fn is_empty(&self) -> bool {
        CATALOG.is_empty()
    }

    /// Catalog record by id or alias, no fallback
    pub fn lookup(&self, name: &str) -> Option<&'static Exercise> {
        self.names.get(normalize_name(name).as_str()).map(|(e, _)| *e)
    }

    /// Resolve without logging; for per-frame callers
    pub fn find(&self, descriptor: &ExerciseDescriptor) -> Dispatch {
        let name = normalize_name(&descriptor.name);
        if let Some(&(exercise, kind)) = self.names.get(name.as_str()) {
            return Dispatch { exercise, kind };
        }

        let region = BodyRegion::from_name(&name);
        if let Some(exercise) = keyword_match(&name, descriptor.family, region) {
            return Dispatch { exercise, kind: MatchKind::Keyword };
        }

        match descriptor.family {
            Some(family) => Dispatch { exercise: family_default(family, region), kind: MatchKind::FamilyDefault },
            None => Dispatch { exercise: &GENERIC, kind: MatchKind::Generic },
        }
    }

    /// Resolve and log how the name was matched
    pub fn resolve(&self, descriptor: &ExerciseDescriptor) -> Dispatch {
        let dispatch = self.find(descriptor);
        let exercise = dispatch.exercise.id;
        let kind = dispatch.kind.as_str();
        match dispatch.kind {
            MatchKind::Exact | MatchKind::Alias => {
                debug!(name = %descriptor.name, exercise, kind, "exercise matched");
            }
            MatchKind::Keyword => {
                info!(name = %descriptor.name, exercise, "fuzzy exercise match");
            }
            MatchKind::FamilyDefault | MatchKind::Generic => {
                warn!(
                    name = %descriptor.name,
                    family = descriptor.family.map(|f| f.as_str()).unwrap_or("unknown"),
                    exercise,
                    kind,
                    "unrecognized exercise, using fallback"
                );
            }
        }
        dispatch
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Best keyword contained in `name` among records of the declared family
/// and a compatible region.
///
/// A keyword found in the last word (the movement, as in "front squat")
/// beats one found in a modifier; then longer beats shorter; then catalog
/// order.
fn keyword_match(name: &str, family: Option<Family>, region: Option<BodyRegion>) -> Option<&'static Exercise> {
    let last_word = name.rsplit('_').next().unwrap_or(name);
    let candidates = CATALOG
        .iter()
        .filter(|e| family.map_or(true, |f| e.family() == f))
        .filter(|e| region.map_or(true, |r| e.region.compatible_with(r)));

    let mut best: Option<(&'static Exercise, (bool, usize))> = None;
    for exercise in candidates {
        for keyword in exercise.keywords.iter().filter(|k| name.contains(*k)) {
            let rank = (last_word.contains(keyword) || name.ends_with(keyword), keyword.len());
            if best.map_or(true, |(_, r)| rank > r) {
                best = Some((exercise, rank));
            }
        }
    }
    best.map(|(exercise, _)| exercise)
}
