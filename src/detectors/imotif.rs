//! i-Motif detector: the canonical subclass mirrors
//! G-Quadruplex's G4Hunter scoring with C positive and G negative; the six
//! AC-motif variants are detected by their explicit registry regexes alone
//! and scored by the registry's per-pattern scalar.

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{mean_signed, resolve_intraclass, signed_run_array, Detector};

/// Canonical i-Motif G4Hunter-style acceptance threshold.
const CANONICAL_THRESHOLD: f64 = 0.5;

pub struct IMotifDetector;

impl Detector for IMotifDetector {
    fn class(&self) -> MotifClass {
        MotifClass::IMotif
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("i-Motif") else {
            return Vec::new();
        };
        let matches = scanner::scan(registry, sequence.as_bytes());
        let array = signed_run_array(sequence.as_bytes(), b'C', b'G');

        let mut candidates = Vec::with_capacity(matches.len());
        for m in &matches {
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let span = Span::new(m.start, m.end);

            let score = if pattern.subclass == "Canonical i-Motif" {
                let mean = mean_signed(&array, span);
                if mean.abs() < CANONICAL_THRESHOLD {
                    continue;
                }
                mean.abs()
            } else {
                pattern.scalar
            };

            candidates.push(Candidate::new(
                MotifClass::IMotif,
                pattern.subclass.clone(),
                span,
                score,
                pattern_method(&pattern.subclass),
            ));
        }
        resolve_intraclass(candidates)
    }
}

fn pattern_method(subclass: &str) -> &'static str {
    if subclass == "Canonical i-Motif" {
        "imotif_hunter"
    } else {
        "ac_motif"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CompiledRegistries, PatternKind, PatternRegistry};

    #[test]
    fn canonical_imotif_run_scores_above_threshold() {
        let sequence = Sequence::new("CCCTTACCCTTACCCTTACCC").unwrap();
        let array = signed_run_array(sequence.as_bytes(), b'C', b'G');
        let mean = mean_signed(&array, Span::new(0, sequence.len()));
        assert!(mean.abs() >= CANONICAL_THRESHOLD);
    }

    #[test]
    fn ac_motif_method_label() {
        assert_eq!(pattern_method("AC-motif type 1"), "ac_motif");
        assert_eq!(pattern_method("Canonical i-Motif"), "imotif_hunter");
    }

    #[test]
    fn candidate_containing_n_is_still_scored_not_dropped() {
        // Unlike Z-DNA, A-philic, and G-Quadruplex, i-Motif candidates are not
        // disqualified by an ambiguous base: the N just contributes 0 to the
        // signed run array.
        let sequence = Sequence::new("CCCTTNCCCTTACCCTTACCC").unwrap();
        let registry = PatternRegistry {
            class: "i-Motif".to_string(),
            kind: PatternKind::Regex,
            patterns: vec![crate::registry::Pattern {
                id: 1,
                kind: PatternKind::Regex,
                body: r"C{3,5}\w{1,7}C{3,5}\w{1,7}C{3,5}\w{1,7}C{3,5}".to_string(),
                subclass: "Canonical i-Motif".to_string(),
                scalar: 1.0,
                method: "imotif_hunter".to_string(),
            }],
        };
        let registries = CompiledRegistries::single_for_tests("i-Motif", registry);
        let candidates = IMotifDetector.detect(&sequence, &registries);
        assert!(candidates.iter().any(|c| c.subclass == "Canonical i-Motif"));
    }
}
