//! The nine class detectors and the intra-class
//! resolver they all finish with.

mod cruciform;
mod curved;
mod gquad;
mod imotif;
mod kmer;
mod rloop;
mod slipped;
mod triplex;

use std::cmp::Ordering;

use crate::interval::{greedy_non_overlapping, Span};
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::sequence::Sequence;

/// A detector is a pure function of `(sequence, registries)`. Boxed trait
/// objects give us an explicit class-to-handler table, in place of
/// reflection-based discovery.
pub trait Detector: Sync + Send {
    fn class(&self) -> MotifClass;
    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate>;
}

/// The fixed, ordered table of all nine class detectors.
pub fn detector_table() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(curved::CurvedDnaDetector),
        Box::new(slipped::SlippedDnaDetector),
        Box::new(cruciform::CruciformDetector),
        Box::new(rloop::RLoopDetector),
        Box::new(triplex::TriplexDetector),
        Box::new(gquad::GQuadruplexDetector),
        Box::new(imotif::IMotifDetector),
        Box::new(kmer::ZDnaDetector),
        Box::new(kmer::APhilicDetector),
    ]
}

/// The intra-class resolver shared by every interval detector (steps
/// 1-4): score, sort by `(-score, -length, start)`, greedily keep
/// non-overlapping candidates, re-sort by start.
pub fn resolve_intraclass(candidates: Vec<Candidate>) -> Vec<Candidate> {
    resolve_intraclass_with_tiebreak(candidates, |_| 0)
}

/// Like [`resolve_intraclass`], but with an extra tie-break key evaluated
/// after length and before start — used by G-Quadruplex to prefer more
/// specific subclasses (canonical > bulged > ...) among equally-scored,
/// equal-length, equal-start candidates.
pub fn resolve_intraclass_with_tiebreak(
    mut candidates: Vec<Candidate>,
    tiebreak: impl Fn(&Candidate) -> i32,
) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.length().cmp(&a.length()))
            .then_with(|| tiebreak(a).cmp(&tiebreak(b)))
            .then_with(|| a.span.start.cmp(&b.span.start))
    });
    let mut kept = greedy_non_overlapping(candidates, |c| c.span);
    kept.sort_by_key(|c| c.span.start);
    kept
}

/// GC fraction of `seq[span]`.
pub fn gc_fraction(seq: &Sequence, span: Span) -> f64 {
    let bytes = &seq.as_bytes()[span.start..span.end];
    if bytes.is_empty() {
        return 0.0;
    }
    let gc = bytes.iter().filter(|&&b| b == b'G' || b == b'C').count();
    gc as f64 / bytes.len() as f64
}

/// `(G - C) / (G + C)` over `seq[span]`, 0 when there is no G/C at all.
pub fn gc_skew(seq: &Sequence, span: Span) -> f64 {
    let bytes = &seq.as_bytes()[span.start..span.end];
    let g = bytes.iter().filter(|&&b| b == b'G').count() as f64;
    let c = bytes.iter().filter(|&&b| b == b'C').count() as f64;
    if g + c == 0.0 {
        0.0
    } else {
        (g - c) / (g + c)
    }
}

/// Fraction of `dominant_a`/`dominant_b` bases within `seq[span]`, used by
/// the Triplex detector's homopurine/homopyrimidine tracts.
pub fn purity(seq: &Sequence, span: Span, dominant_a: u8, dominant_b: u8) -> f64 {
    let bytes = &seq.as_bytes()[span.start..span.end];
    if bytes.is_empty() {
        return 0.0;
    }
    let matching = bytes
        .iter()
        .filter(|&&b| b == dominant_a || b == dominant_b)
        .count();
    matching as f64 / bytes.len() as f64
}

/// The G4Hunter / i-Motif signed-run-length array,
/// parameterized by which base is "positive" (G for G-quadruplex, C for
/// i-Motif) so both detectors share one implementation.
pub fn signed_run_array(bytes: &[u8], positive: u8, negative: u8) -> Vec<i32> {
    let mut out = vec![0i32; bytes.len()];
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == positive || b == negative {
            let sign = if b == positive { 1 } else { -1 };
            let mut run_len = 1;
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b {
                run_len += 1;
                j += 1;
            }
            let capped = run_len.min(4) as i32;
            for slot in out.iter_mut().take(j).skip(i) {
                *slot = sign * capped;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    out
}

/// Mean of a signed-run array over `[start, end)`; `0.0` for an empty span.
pub fn mean_signed(array: &[i32], span: Span) -> f64 {
    if span.is_empty() {
        return 0.0;
    }
    let sum: i32 = array[span.start..span.end].iter().sum();
    sum as f64 / span.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_run_array_caps_at_four() {
        let bytes = b"GGGGGGG"; // 7 G's in a row
        let array = signed_run_array(bytes, b'G', b'C');
        assert_eq!(array, vec![4, 4, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn signed_run_array_handles_mixed_runs() {
        let bytes = b"GGCCCA";
        let array = signed_run_array(bytes, b'G', b'C');
        assert_eq!(array, vec![2, 2, -3, -3, -3, 0]);
    }

    #[test]
    fn resolve_intraclass_keeps_highest_scoring_non_overlapping() {
        let candidates = vec![
            Candidate::new(MotifClass::GQuadruplex, "Canonical G4", Span::new(0, 20), 1.0, "g4hunter"),
            Candidate::new(MotifClass::GQuadruplex, "Canonical G4", Span::new(10, 30), 2.0, "g4hunter"),
            Candidate::new(MotifClass::GQuadruplex, "Canonical G4", Span::new(40, 50), 0.5, "g4hunter"),
        ];
        let resolved = resolve_intraclass(candidates);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].span, Span::new(10, 30));
        assert_eq!(resolved[1].span, Span::new(40, 50));
    }
}
