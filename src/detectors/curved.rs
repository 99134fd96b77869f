//! Curved DNA detector: A/T tracts score by length alone
//! ("Local Curvature"); phased A/T-tract arrays ("Global curvature") score by
//! how many tracts they string together, how long each is, and how close
//! their spacing sits to the ~10.5bp helical repeat.

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{resolve_intraclass, Detector};

const HELICAL_REPEAT: f64 = 10.5;
const PHASE_TOLERANCE: f64 = 5.0;

pub struct CurvedDnaDetector;

impl Detector for CurvedDnaDetector {
    fn class(&self) -> MotifClass {
        MotifClass::CurvedDna
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("Curved_DNA") else {
            return Vec::new();
        };
        let matches = scanner::scan(registry, sequence.as_bytes());

        let mut candidates = Vec::with_capacity(matches.len());
        for m in &matches {
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let span = Span::new(m.start, m.end);
            let score = match pattern.subclass.as_str() {
                "Local Curvature" => span.len() as f64,
                "Global curvature" => score_phased_array(sequence.slice(m.start, m.end)),
                other => {
                    log::warn!("unexpected Curved_DNA subclass {other}");
                    continue;
                }
            };
            candidates.push(Candidate::new(
                MotifClass::CurvedDna,
                pattern.subclass.clone(),
                span,
                score,
                "phased_array",
            ));
        }
        resolve_intraclass(candidates)
    }
}

/// `tract_count * mean_tract_length * phase_quality`, where `phase_quality`
/// penalizes spacing that drifts from the ~10.5bp helical repeat.
fn score_phased_array(matched_text: &str) -> f64 {
    let tracts = find_at_tracts(matched_text.as_bytes());
    if tracts.is_empty() {
        return 0.0;
    }
    let tract_count = tracts.len() as f64;
    let mean_length: f64 =
        tracts.iter().map(|t| t.len() as f64).sum::<f64>() / tract_count;

    let phase_quality = if tracts.len() < 2 {
        1.0
    } else {
        let gaps: Vec<f64> = tracts
            .windows(2)
            .map(|pair| (pair[1].start as f64) - (pair[0].start as f64))
            .collect();
        let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
        (1.0 - (mean_gap - HELICAL_REPEAT).abs() / PHASE_TOLERANCE).clamp(0.0, 1.0)
    };

    tract_count * mean_length * phase_quality
}

/// Homopolymer A or T runs of length >= 3 within `bytes`, used to recover the
/// individual tracts embedded in a phased-array match.
fn find_at_tracts(bytes: &[u8]) -> Vec<Span> {
    let mut tracts = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'A' || b == b'T' {
            let start = i;
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b {
                j += 1;
            }
            if j - start >= 3 {
                tracts.push(Span::new(start, j));
            }
            i = j;
        } else {
            i += 1;
        }
    }
    tracts
}
