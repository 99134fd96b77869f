//! The k-mer detectors: Z-DNA and A-philic_DNA both
//! score a sequence by redistributing each literal 10-mer match's scalar
//! evenly across its ten bases, then merging touching contribution runs into
//! regions.

use crate::motif::{Candidate, MotifClass};
use crate::registry::{CompiledRegistries, Pattern};
use crate::scanner;
use crate::sequence::Sequence;

use super::{resolve_intraclass, Detector};

const MERGE_GAP: usize = 0;

/// Shared by every literal-10mer registry: find matches,
/// redistribute their scalar across the ten bases they cover, merge
/// touching/overlapping contribution runs into scored regions.
fn run_kmer_detector(sequence: &Sequence, registry: &crate::registry::PatternRegistry) -> Vec<(usize, usize, f64)> {
    let bytes = sequence.as_bytes();
    let matches = scanner::scan(registry, bytes);

    let mut contrib = vec![0.0f64; bytes.len()];
    for m in &matches {
        if sequence.contains_n(m.start, m.end) {
            continue; // an N disqualifies the match's contribution entirely.
        }
        let pattern = registry
            .pattern(m.pattern_id)
            .expect("scanner only emits ids present in its own registry");
        let per_base = pattern.scalar / (m.end - m.start) as f64;
        for slot in contrib.iter_mut().take(m.end).skip(m.start) {
            *slot += per_base;
        }
    }

    merge_contribution_runs(&contrib)
}

/// Merges contiguous (gap <= [`MERGE_GAP`]) non-zero runs of `contrib` into
/// `(start, end, score)` regions, `score` being the sum of the run.
fn merge_contribution_runs(contrib: &[f64]) -> Vec<(usize, usize, f64)> {
    let mut regions = Vec::new();
    let mut i = 0;
    while i < contrib.len() {
        if contrib[i] == 0.0 {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i + 1;
        let mut sum = contrib[i];
        let mut gap = 0;
        let mut j = end;
        while j < contrib.len() {
            if contrib[j] == 0.0 {
                gap += 1;
                if gap > MERGE_GAP {
                    break;
                }
            } else {
                sum += contrib[j];
                end = j + 1;
                gap = 0;
            }
            j += 1;
        }
        regions.push((start, end, sum));
        i = end;
    }
    regions
}

/// A pure rotation-of-CGG repeat of at least 12bp qualifies a merged Z-DNA
/// region for the eGZ subclass ("eGZ").
fn is_pure_cgg_repeat(region: &str) -> bool {
    if region.len() < 12 {
        return false;
    }
    for rotation in ["CGG", "GGC", "GCG"] {
        let needle = rotation.repeat(4);
        if region.contains(&needle) {
            return true;
        }
    }
    false
}

pub struct ZDnaDetector;

impl Detector for ZDnaDetector {
    fn class(&self) -> MotifClass {
        MotifClass::ZDna
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("Z-DNA") else {
            return Vec::new();
        };
        let regions = run_kmer_detector(sequence, registry);
        let candidates = regions
            .into_iter()
            .map(|(start, end, score)| {
                let subclass = if is_pure_cgg_repeat(sequence.slice(start, end)) {
                    "eGZ"
                } else {
                    "Z-DNA"
                };
                Candidate::new(
                    MotifClass::ZDna,
                    subclass,
                    crate::interval::Span::new(start, end),
                    score,
                    "kmer_redistribution",
                )
            })
            .collect();
        resolve_intraclass(candidates)
    }
}

pub struct APhilicDetector;

impl Detector for APhilicDetector {
    fn class(&self) -> MotifClass {
        MotifClass::APhilicDna
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("A-philic_DNA") else {
            return Vec::new();
        };
        let regions = run_kmer_detector(sequence, registry);
        let candidates = regions
            .into_iter()
            .map(|(start, end, score)| {
                Candidate::new(
                    MotifClass::APhilicDna,
                    "A-philic_DNA",
                    crate::interval::Span::new(start, end),
                    score,
                    "kmer_redistribution",
                )
            })
            .collect();
        resolve_intraclass(candidates)
    }
}

#[allow(dead_code)]
fn pattern_for_test(id: u32, body: &str, scalar: f64) -> Pattern {
    Pattern {
        id,
        kind: crate::registry::PatternKind::Literal10mer,
        body: body.to_string(),
        subclass: "test".to_string(),
        scalar,
        method: "log2_odds".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PatternKind, PatternRegistry};

    fn registry_of(patterns: Vec<Pattern>) -> PatternRegistry {
        PatternRegistry {
            class: "Z-DNA".to_string(),
            kind: PatternKind::Literal10mer,
            patterns,
        }
    }

    #[test]
    fn merges_overlapping_matches_into_one_region() {
        let seq = Sequence::new(&"CG".repeat(6)).unwrap(); // 12bp, CGCGCGCGCGCG
        let body = seq.as_str()[0..10].to_string();
        let registry = registry_of(vec![pattern_for_test(1, &body, 2.0)]);
        let regions = run_kmer_detector(&seq, &registry);
        // matches at offsets 0 and 2 (period-2 repeat) merge into one region
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].0, 0);
        assert_eq!(regions[0].1, 12);
    }

    #[test]
    fn n_disqualifies_overlapping_match() {
        let seq = Sequence::new("AAAAANAAAAAAAAAA").unwrap();
        let registry = registry_of(vec![pattern_for_test(1, "AAAAAAAAAA", 1.0)]);
        let regions = run_kmer_detector(&seq, &registry);
        // only the window [6, 16) is N-free
        assert_eq!(regions, vec![(6, 16, 1.0)]);
    }

    #[test]
    fn recognizes_egz_subclass() {
        let region = "CGGCGGCGGCGG";
        assert!(is_pure_cgg_repeat(region));
        assert!(!is_pure_cgg_repeat("ACGTACGTACGT"));
    }
}
