//! Literal 10-mer scanning (A-philic_DNA, Z-DNA registries).

use super::Match;
use crate::registry::Pattern;

#[cfg(feature = "fast-scan")]
pub fn scan_fast(patterns: &[Pattern], seq: &[u8]) -> Vec<Match> {
    use aho_corasick::{AhoCorasick, MatchKind};

    let bodies: Vec<&[u8]> = patterns.iter().map(|p| p.body.as_bytes()).collect();
    let automaton = AhoCorasick::builder()
        .match_kind(MatchKind::Standard)
        .build(&bodies)
        .expect("literal 10-mer patterns always compile");

    automaton
        .find_overlapping_iter(seq)
        .map(|m| Match {
            start: m.start(),
            end: m.end(),
            pattern_id: patterns[m.pattern().as_usize()].id,
        })
        .collect()
}

/// Correct, unoptimized fallback: a direct substring comparison at every
/// offset for every pattern. O(n * patterns.len() * 10) but unambiguous.
pub fn scan_fallback(patterns: &[Pattern], seq: &[u8]) -> Vec<Match> {
    let mut matches = Vec::new();
    if seq.len() < 10 {
        return matches;
    }
    for pattern in patterns {
        let body = pattern.body.as_bytes();
        for start in 0..=seq.len() - 10 {
            if &seq[start..start + 10] == body {
                matches.push(Match {
                    start,
                    end: start + 10,
                    pattern_id: pattern.id,
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PatternKind;

    fn pattern(id: u32, body: &str) -> Pattern {
        Pattern {
            id,
            kind: PatternKind::Literal10mer,
            body: body.to_string(),
            subclass: "test".to_string(),
            scalar: 1.0,
            method: "log2_odds".to_string(),
        }
    }

    #[test]
    fn fallback_finds_overlapping_matches() {
        let patterns = vec![pattern(1, "AAAAAAAAAA")];
        let matches = scan_fallback(&patterns, b"AAAAAAAAAAAAAAAAAAAA");
        assert_eq!(matches.len(), 11);
    }

    #[test]
    fn fallback_handles_short_sequence() {
        let patterns = vec![pattern(1, "AAAAAAAAAA")];
        assert!(scan_fallback(&patterns, b"ACGT").is_empty());
    }

    #[cfg(feature = "fast-scan")]
    #[test]
    fn fast_matches_fallback_on_mixed_patterns() {
        let patterns = vec![pattern(1, "AAAAAAAAAA"), pattern(2, "ACGTACGTAC")];
        let seq = b"ACGTACGTACAAAAAAAAAAAAAAA";
        let mut fast = scan_fast(&patterns, seq);
        let mut fallback = scan_fallback(&patterns, seq);
        fast.sort_by_key(|m| (m.start, m.pattern_id));
        fallback.sort_by_key(|m| (m.start, m.pattern_id));
        assert_eq!(fast, fallback);
    }
}
