//! Triplex detector: homopurine/homopyrimidine tracts
//! score by length and base-composition purity; mirror-repeat seeds are
//! walked outward from their center to find the true mirror-symmetric arm,
//! bounded by [`crate::config::triplex_mirror_max_centers`].

use crate::config;
use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{purity, resolve_intraclass, Detector};

pub struct TriplexDetector;

impl Detector for TriplexDetector {
    fn class(&self) -> MotifClass {
        MotifClass::Triplex
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("Triplex") else {
            return Vec::new();
        };
        let matches = scanner::scan(registry, sequence.as_bytes());
        let bytes = sequence.as_bytes();

        let mut budget = config::triplex_mirror_max_centers();
        let mut candidates = Vec::with_capacity(matches.len());
        for m in &matches {
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let span = Span::new(m.start, m.end);

            match pattern.subclass.as_str() {
                "Homopurine tract" => {
                    let score = span.len() as f64 * purity(sequence, span, b'A', b'G');
                    candidates.push(Candidate::new(MotifClass::Triplex, "Homopurine tract", span, score, "purity"));
                }
                "Homopyrimidine tract" => {
                    let score = span.len() as f64 * purity(sequence, span, b'C', b'T');
                    candidates.push(Candidate::new(MotifClass::Triplex, "Homopyrimidine tract", span, score, "purity"));
                }
                "Mirror repeat (purine)" | "Mirror repeat (pyrimidine)" => {
                    if budget == 0 {
                        continue;
                    }
                    budget -= 1;
                    if let Some(arm) = widest_mirror_arm(bytes, span) {
                        let score = arm as f64 * 2.0 + 1.0;
                        candidates.push(Candidate::new(
                            MotifClass::Triplex,
                            pattern.subclass.clone(),
                            span,
                            score,
                            "mirror_repeat",
                        ));
                    }
                }
                other => log::warn!("unexpected Triplex subclass {other}"),
            }
        }
        resolve_intraclass(candidates)
    }
}

/// Walks outward from `span`'s midpoint comparing `seq[center-k]` against
/// `seq[center+k-1]` (mirror symmetry, not complementary base-pairing) to
/// find the longest mirror-symmetric arm contained in `span`.
fn widest_mirror_arm(bytes: &[u8], span: Span) -> Option<usize> {
    if span.len() < 2 {
        return None;
    }
    let center = span.start + span.len() / 2;
    let max_arm = center.min(span.end - center);
    let mut arm = 0;
    while arm < max_arm {
        let left = center - arm - 1;
        let right = center + arm;
        if left < span.start || right >= span.end || bytes[left] != bytes[right] {
            break;
        }
        arm += 1;
    }
    if arm == 0 {
        None
    } else {
        Some(arm)
    }
}
