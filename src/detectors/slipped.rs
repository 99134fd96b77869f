//! Slipped DNA detector: registry regexes only seed
//! candidate windows — the actual short-tandem-repeat periodicity and the
//! direct-repeat search are validated algorithmically here, not by the
//! scanner, and both share [`crate::config::slipped_iteration_cap`].

use crate::config;
use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::Sequence;

use super::{resolve_intraclass, Detector};

const DIRECT_REPEAT_MIN_LEN: usize = 10;
const DIRECT_REPEAT_MAX_SPAN: usize = 100;

/// Minimum number of unit repeats required for a run to count as an STR,
/// looser for longer units since they need fewer copies to be biologically
/// notable.
fn min_repeats(unit: usize) -> usize {
    (12 / unit.max(1)).max(3)
}

pub struct SlippedDnaDetector;

impl Detector for SlippedDnaDetector {
    fn class(&self) -> MotifClass {
        MotifClass::SlippedDna
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("Slipped_DNA") else {
            return Vec::new();
        };
        let bytes = sequence.as_bytes();
        let matches = scanner::scan(registry, bytes);

        let mut budget = config::slipped_iteration_cap();
        let mut candidates = Vec::new();

        for m in &matches {
            let pattern = registry
                .pattern(m.pattern_id)
                .expect("scanner only emits ids present in its own registry");
            let unit = pattern.scalar.round() as usize;
            if let Some((span, repeats)) = widest_periodic_run(bytes, m.start, m.end, unit, &mut budget) {
                candidates.push(Candidate::new(
                    MotifClass::SlippedDna,
                    pattern.subclass.clone(),
                    span,
                    (unit * repeats) as f64,
                    "str_repeat",
                ));
            }
            if budget == 0 {
                break;
            }
        }

        candidates.extend(find_direct_repeats(bytes, &mut budget));
        resolve_intraclass(candidates)
    }
}

/// Finds the longest periodic run of period `unit` contained in
/// `bytes[window_start..window_end)` with at least [`min_repeats`] copies.
fn widest_periodic_run(
    bytes: &[u8],
    window_start: usize,
    window_end: usize,
    unit: usize,
    budget: &mut u64,
) -> Option<(Span, usize)> {
    if unit == 0 {
        return None;
    }
    let required = min_repeats(unit);
    let mut best: Option<(Span, usize)> = None;

    let mut start = window_start;
    while start + unit < window_end {
        if *budget == 0 {
            break;
        }
        *budget -= 1;

        let mut repeats = 1;
        let mut cursor = start;
        while cursor + 2 * unit <= window_end && bytes[cursor..cursor + unit] == bytes[cursor + unit..cursor + 2 * unit] {
            repeats += 1;
            cursor += unit;
        }
        if repeats >= required {
            let span = Span::new(start, start + repeats * unit);
            let better = match &best {
                Some((s, _)) => span.len() > s.len(),
                None => true,
            };
            if better {
                best = Some((span, repeats));
            }
        }
        start += 1;
    }
    best
}

/// Naive O(n^2)-bounded direct-repeat search: two equal, non-overlapping
/// substrings of at least [`DIRECT_REPEAT_MIN_LEN`] bases within
/// [`DIRECT_REPEAT_MAX_SPAN`] bases of each other.
fn find_direct_repeats(bytes: &[u8], budget: &mut u64) -> Vec<Candidate> {
    let mut out = Vec::new();
    if bytes.len() < DIRECT_REPEAT_MIN_LEN * 2 {
        return out;
    }
    for i in 0..=bytes.len() - DIRECT_REPEAT_MIN_LEN {
        if *budget == 0 {
            break;
        }
        let max_j = (i + DIRECT_REPEAT_MAX_SPAN).min(bytes.len() - DIRECT_REPEAT_MIN_LEN);
        let mut j = i + DIRECT_REPEAT_MIN_LEN;
        while j <= max_j {
            if *budget == 0 {
                break;
            }
            *budget -= 1;
            if bytes[i..i + DIRECT_REPEAT_MIN_LEN] == bytes[j..j + DIRECT_REPEAT_MIN_LEN] {
                let span = Span::new(i, j + DIRECT_REPEAT_MIN_LEN);
                out.push(Candidate::new(
                    MotifClass::SlippedDna,
                    "Direct Repeat",
                    span,
                    DIRECT_REPEAT_MIN_LEN as f64,
                    "direct_repeat",
                ));
                break; // one hit per start is enough to seed resolution
            }
            j += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_repeats_is_looser_for_longer_units() {
        assert!(min_repeats(1) > min_repeats(3));
        assert!(min_repeats(9) >= 3);
    }

    #[test]
    fn finds_dinucleotide_repeat_run() {
        let seq = "AT".repeat(10); // 20bp, period 2
        let bytes = seq.as_bytes();
        let mut budget = 10_000;
        let found = widest_periodic_run(bytes, 0, bytes.len(), 2, &mut budget);
        assert!(found.is_some());
        let (span, repeats) = found.unwrap();
        assert!(repeats >= min_repeats(2));
        assert_eq!(span.start, 0);
    }

    #[test]
    fn finds_direct_repeat_within_window() {
        let seq = "ACGTACGTAC".to_string() + &"N".repeat(20) + "ACGTACGTAC";
        let bytes = seq.as_bytes();
        let mut budget = 1_000_000;
        let hits = find_direct_repeats(bytes, &mut budget);
        assert!(!hits.is_empty());
    }

    #[test]
    fn direct_repeat_respects_budget() {
        let seq = "ACGTACGTAC".repeat(5);
        let bytes = seq.as_bytes();
        let mut budget = 0;
        let hits = find_direct_repeats(bytes, &mut budget);
        assert!(hits.is_empty());
    }
}
