// Clippy allows for the whole crate
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::type_complexity)]

//! nonb-scanner: a detection engine for non-canonical (non-B) DNA structural
//! motifs.
//!
//! Given a single raw DNA sequence, [`engine::ScanEngine`] runs nine
//! independent class detectors (G-quadruplex, i-Motif, Z-DNA, A-philic DNA,
//! Curved DNA, Cruciform, R-Loop, Triplex, Slipped DNA), resolves overlap
//! within and across classes, and synthesizes `Hybrid` and
//! `Non-B_DNA_Clusters` motifs over regions of dense cross-class overlap.
//!
//! # Example
//!
//! ```rust,no_run
//! use nonb_scanner::engine::{ScanEngine, ScanOptions};
//! use nonb_scanner::registry::load_registry_dir;
//! use std::path::Path;
//!
//! let registries = load_registry_dir(Path::new("registries")).unwrap();
//! let engine = ScanEngine::new(registries);
//! let motifs = engine.scan("GGGTTAGGGTTAGGGTTAGGG", ScanOptions::default()).unwrap();
//! ```

pub mod cluster;
pub mod config;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod hybrid;
pub mod interval;
pub mod motif;
pub mod parallel;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod sequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{ScanEngine, ScanOptions};
    pub use crate::error::{RegistryError, ScanError};
    pub use crate::motif::{Motif, MotifClass};
    pub use crate::registry::load_registry_dir;
    pub use crate::resolver::ResolveMode;
    pub use crate::sequence::Sequence;
}

#[cfg(test)]
mod tests {
    use crate::engine::{ScanEngine, ScanOptions};
    use crate::registry::CompiledRegistries;

    #[test]
    fn scan_rejects_invalid_sequence_before_touching_any_detector() {
        let engine = ScanEngine::new(CompiledRegistries::empty_for_tests());
        assert!(engine.scan("ACGTXYZ", ScanOptions::default()).is_err());
    }
}
