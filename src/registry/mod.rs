//! Pattern registries: compiled, per-class sets of literal 10-mers or
//! regular expressions loaded from the on-disk registry files.

mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{load_registry_dir, CompiledRegistries};

/// The nine motif classes that own a pattern registry (Hybrid and
/// Non-B_DNA_Clusters are synthesized, never scanned directly).
pub const REGISTRY_CLASSES: [&str; 9] = [
    "A-philic_DNA",
    "Z-DNA",
    "Curved_DNA",
    "G-Quadruplex",
    "i-Motif",
    "R-Loop",
    "Slipped_DNA",
    "Triplex",
    "Cruciform",
];

/// The kind of body a [`Pattern`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    Literal10mer,
    Regex,
}

impl PatternKind {
    fn label(self) -> &'static str {
        match self {
            PatternKind::Literal10mer => "Literal10mer",
            PatternKind::Regex => "Regex",
        }
    }
}

/// One registry entry: a single pattern body plus the subclass and scoring
/// scalar it contributes when matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: u32,
    pub kind: PatternKind,
    pub body: String,
    pub subclass: String,
    pub scalar: f64,
    #[serde(default)]
    pub method: String,
}

/// A compiled, reusable registry for one motif class: the raw pattern table
/// plus whatever the scanner needed to precompile (populated by
/// [`crate::scanner`]).
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    pub class: String,
    pub kind: PatternKind,
    pub patterns: Vec<Pattern>,
}

impl PatternRegistry {
    pub fn pattern(&self, id: u32) -> Option<&Pattern> {
        // Ids are dense and 1-based by construction (loader::assign_ids).
        self.patterns.get(id.checked_sub(1)? as usize)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn validate_pattern(class: &str, pattern: &Pattern) -> Result<(), crate::error::RegistryError> {
    match pattern.kind {
        PatternKind::Literal10mer => {
            let valid = pattern.body.len() == 10
                && pattern.body.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'));
            if !valid {
                return Err(crate::error::RegistryError::Inconsistent {
                    class: class.to_string(),
                    id: pattern.id,
                    body: pattern.body.clone(),
                    kind: pattern.kind.label(),
                });
            }
        }
        PatternKind::Regex => {
            if pattern.body.is_empty() {
                return Err(crate::error::RegistryError::Inconsistent {
                    class: class.to_string(),
                    id: pattern.id,
                    body: pattern.body.clone(),
                    kind: pattern.kind.label(),
                });
            }
            if let Err(e) = regex::Regex::new(&pattern.body) {
                return Err(crate::error::RegistryError::CompileFailure {
                    class: class.to_string(),
                    id: pattern.id,
                    body: pattern.body.clone(),
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(())
}
