//! R-Loop detector: each RLFS model is a G-rich regex
//! seed; a candidate survives only if it is GC-rich enough to plausibly form
//! the displaced single strand, and scores by how skewed and how long its
//! G-richness is.

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{gc_fraction, gc_skew, resolve_intraclass, Detector};

/// RLFS model 2's long-loop spacer makes weak GC runs too common to trust at
/// the default bar, so it is held to a stricter GC-fraction floor.
fn gc_floor_for(subclass: &str) -> f64 {
    match subclass {
        "RLFS model 2" => 0.6,
        _ => 0.5,
    }
}

pub struct RLoopDetector;

impl Detector for RLoopDetector {
    fn class(&self) -> MotifClass {
        MotifClass::RLoop
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("R-Loop") else {
            return Vec::new();
        };
        let matches = scanner::scan(registry, sequence.as_bytes());

        let mut candidates = Vec::with_capacity(matches.len());
        for m in &matches {
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let span = Span::new(m.start, m.end);
            let gc = gc_fraction(sequence, span);
            if gc < gc_floor_for(&pattern.subclass) {
                continue;
            }
            let skew = gc_skew(sequence, span).abs();
            let score = gc * skew * span.len() as f64;
            if score <= 0.0 {
                continue;
            }
            candidates.push(Candidate::new(
                MotifClass::RLoop,
                pattern.subclass.clone(),
                span,
                score,
                "gc_skew",
            ));
        }
        resolve_intraclass(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_rich_skewed_span_produces_positive_score() {
        let sequence = Sequence::new("GGGGACGTGGGGACGTGGGG").unwrap();
        let span = Span::new(0, sequence.len());
        let gc = gc_fraction(&sequence, span);
        let skew = gc_skew(&sequence, span).abs();
        assert!(gc >= 0.5);
        assert!(skew > 0.0);
    }

    #[test]
    fn at_rich_span_has_no_gc_content() {
        let sequence = Sequence::new("ATATATATAT").unwrap();
        let span = Span::new(0, sequence.len());
        assert_eq!(gc_fraction(&sequence, span), 0.0);
    }
}
