//! The multi-pattern scanner: given a compiled registry
//! and a sequence, returns every `(start, end, pattern_id)` match, with a
//! fast automaton-backed path and a correct fallback that must agree on the
//! output set bit-for-bit.

mod literal;
mod regex_multi;

use crate::registry::{PatternKind, PatternRegistry};

/// One scanner hit. Overlap between matches is expected and preserved —
/// merging/aggregation is a detector concern, not the scanner's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub pattern_id: u32,
}

/// Scan `seq` against `registry` using whichever engine is available,
/// returning matches in the canonical `(start, pattern_id, end)` order.
pub fn scan(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    let mut matches = match registry.kind {
        PatternKind::Literal10mer => scan_literal(registry, seq),
        PatternKind::Regex => scan_regex(registry, seq),
    };
    canonicalize(&mut matches);
    matches
}

/// Scan using the correct, unoptimized fallback regardless of which fast
/// engine is compiled in. Used to prove fallback parity.
pub fn scan_fallback_only(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    let mut matches = match registry.kind {
        PatternKind::Literal10mer => literal::scan_fallback(&registry.patterns, seq),
        PatternKind::Regex => regex_multi::scan_fallback(&registry.patterns, seq),
    };
    canonicalize(&mut matches);
    matches
}

fn canonicalize(matches: &mut [Match]) {
    matches.sort_by(|a, b| (a.start, a.pattern_id, a.end).cmp(&(b.start, b.pattern_id, b.end)));
}

#[cfg(feature = "fast-scan")]
fn scan_literal(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    literal::scan_fast(&registry.patterns, seq)
}

#[cfg(not(feature = "fast-scan"))]
fn scan_literal(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    log::warn!("fast-scan feature disabled; using fallback literal scanner for {}", registry.class);
    literal::scan_fallback(&registry.patterns, seq)
}

#[cfg(feature = "fast-scan")]
fn scan_regex(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    regex_multi::scan_fast(&registry.patterns, seq)
}

#[cfg(not(feature = "fast-scan"))]
fn scan_regex(registry: &PatternRegistry, seq: &[u8]) -> Vec<Match> {
    log::warn!("fast-scan feature disabled; using fallback regex scanner for {}", registry.class);
    regex_multi::scan_fallback(&registry.patterns, seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Pattern;

    fn literal_registry() -> PatternRegistry {
        PatternRegistry {
            class: "A-philic_DNA".to_string(),
            kind: PatternKind::Literal10mer,
            patterns: vec![Pattern {
                id: 1,
                kind: PatternKind::Literal10mer,
                body: "AAAAAAAAAA".to_string(),
                subclass: "A-philic_DNA".to_string(),
                scalar: 2.0,
                method: "log2_odds".to_string(),
            }],
        }
    }

    #[test]
    fn poly_a_produces_overlapping_matches() {
        let registry = literal_registry();
        let seq = b"AAAAAAAAAAAAAAAAAAAA"; // 20 A's -> 11 overlapping 10-mers
        let matches = scan(&registry, seq);
        assert_eq!(matches.len(), 11);
        assert_eq!(matches[0].start, 0);
        assert_eq!(matches[10].start, 10);
    }

    #[cfg(feature = "fast-scan")]
    #[test]
    fn fast_and_fallback_agree() {
        let registry = literal_registry();
        let seq = b"AAAAAAAAAAAAAAAAAAAA";
        let fast = scan(&registry, seq);
        let fallback = scan_fallback_only(&registry, seq);
        assert_eq!(fast, fallback);
    }
}
