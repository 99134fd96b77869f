//! The public scan entry point: orchestrates the nine
//! detectors, the cross-class resolver, the hybrid synthesizer, and the
//! cluster synthesizer into one unified motif list.

use crate::cluster;
use crate::detectors::{self, Detector};
use crate::error::ScanResult;
use crate::motif::Motif;
use crate::parallel;
use crate::registry::CompiledRegistries;
use crate::resolver::{self, ResolveMode};
use crate::sequence::Sequence;

/// Per-scan knobs (distinct from the process-wide caps in
/// [`crate::config`]).
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub mode: ResolveMode,
    pub cluster_window: usize,
    pub cluster_step: usize,
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ResolveMode::Strict,
            cluster_window: 1000,
            cluster_step: 100,
            parallel: true,
        }
    }
}

/// Owns the compiled registries and the fixed detector table; construct once
/// per process and reuse across scans.
pub struct ScanEngine {
    registries: CompiledRegistries,
    detectors: Vec<Box<dyn Detector>>,
}

impl ScanEngine {
    pub fn new(registries: CompiledRegistries) -> Self {
        Self {
            registries,
            detectors: detectors::detector_table(),
        }
    }

    /// Runs the full pipeline on `raw` and returns the final, id-assigned
    /// motif list.
    pub fn scan(&self, raw: &str, options: ScanOptions) -> ScanResult<Vec<Motif>> {
        let sequence = Sequence::new(raw)?;

        let per_detector = parallel::fan_out(&self.detectors, options.parallel, |detector| {
            detector.detect(&sequence, &self.registries)
        });
        let union: Vec<_> = per_detector.into_iter().flatten().collect();

        let mut resolved = resolver::resolve(union, options.mode);
        let clusters = cluster::synthesize(&resolved, options.cluster_window, options.cluster_step);
        resolved.extend(clusters);
        resolved.sort_by_key(|c| c.span.start);

        let motifs = resolved
            .into_iter()
            .map(|candidate| Motif::from_candidate(candidate, sequence.as_str()))
            .collect();
        Ok(motifs)
    }
}
