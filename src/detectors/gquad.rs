//! G-Quadruplex detector: registry regexes delimit
//! candidate runs of G-tracts; G4Hunter scores them, and candidates below
//! their subclass's threshold are dropped before intra-class resolution.

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{mean_signed, resolve_intraclass_with_tiebreak, signed_run_array, Detector};

/// G4Hunter acceptance threshold per subclass ("1.2
/// canonical, 0.4 imperfect, 0.3 relaxed/multimeric, 0.5 else").
fn threshold_for(subclass: &str) -> f64 {
    match subclass {
        "Canonical G4" => 1.2,
        "Imperfect G4" => 0.4,
        "Relaxed G4" | "Multimeric G4" => 0.3,
        _ => 0.5,
    }
}

/// Lower rank = more specific; used only to break exact ties after score and
/// length, preferring the more specific subclass.
fn specificity_rank(subclass: &str) -> i32 {
    match subclass {
        "Canonical G4" => 0,
        "Bulged G4" => 1,
        "Relaxed G4" => 2,
        "Long-loop G4" => 3,
        "Multimeric G4" => 4,
        "Imperfect G4" => 5,
        "G-Triplex" => 6,
        _ => 7,
    }
}

pub struct GQuadruplexDetector;

impl Detector for GQuadruplexDetector {
    fn class(&self) -> MotifClass {
        MotifClass::GQuadruplex
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("G-Quadruplex") else {
            return Vec::new();
        };
        let matches = scanner::scan(registry, sequence.as_bytes());
        let array = signed_run_array(sequence.as_bytes(), b'G', b'C');

        let mut candidates = Vec::with_capacity(matches.len());
        for m in &matches {
            if sequence.contains_n(m.start, m.end) {
                continue;
            }
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let span = Span::new(m.start, m.end);
            let mean = mean_signed(&array, span);
            if mean.abs() < threshold_for(&pattern.subclass) {
                continue;
            }
            candidates.push(Candidate::new(
                MotifClass::GQuadruplex,
                pattern.subclass.clone(),
                span,
                mean.abs(),
                "g4hunter",
            ));
        }
        resolve_intraclass_with_tiebreak(candidates, |c| specificity_rank(&c.subclass))
    }
}
