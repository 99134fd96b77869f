//! Cross-class overlap resolution: greedy strict-mode
//! selection, plus the hybrid mode that folds displaced motifs back in as
//! synthetic `Hybrid` records via [`crate::hybrid`].

use std::cmp::Ordering;

use crate::hybrid;
use crate::interval::greedy_non_overlapping;
use crate::motif::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    Strict,
    Hybrid,
}

/// Total ordering over candidates for cross-class resolution: `(-score,
/// -length, start, class name)` — the class-name tie-break is what makes the
/// comparator total.
fn cross_class_cmp(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.length().cmp(&a.length()))
        .then_with(|| a.span.start.cmp(&b.span.start))
        .then_with(|| a.class.to_string().cmp(&b.class.to_string()))
}

/// Strict-mode: sort by the total order, greedily keep non-overlapping
/// candidates, return sorted by start.
fn strict_accept(input: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = input.to_vec();
    sorted.sort_by(cross_class_cmp);
    let mut accepted = greedy_non_overlapping(sorted, |c| c.span);
    accepted.sort_by_key(|c| c.span.start);
    accepted
}

/// Applies the cross-class resolver to the union of per-class
/// candidates, returning the final candidate list (strict accepted set, plus
/// synthetic `Hybrid` candidates when `mode` is [`ResolveMode::Hybrid`]).
pub fn resolve(input: Vec<Candidate>, mode: ResolveMode) -> Vec<Candidate> {
    let accepted = strict_accept(&input);
    match mode {
        ResolveMode::Strict => accepted,
        ResolveMode::Hybrid => {
            let mut output = accepted;
            output.extend(hybrid::synthesize(&input));
            output.sort_by_key(|c| c.span.start);
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Span;
    use crate::motif::MotifClass;

    fn candidate(class: MotifClass, start: usize, end: usize, score: f64) -> Candidate {
        Candidate::new(class, "test", Span::new(start, end), score, "test")
    }

    #[test]
    fn strict_mode_drops_lower_scoring_overlap() {
        let input = vec![
            candidate(MotifClass::GQuadruplex, 0, 20, 1.0),
            candidate(MotifClass::ZDna, 10, 30, 2.0),
        ];
        let resolved = resolve(input, ResolveMode::Strict);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].class, MotifClass::ZDna);
    }

    #[test]
    fn hybrid_mode_keeps_accepted_plus_synthetics() {
        let input = vec![
            candidate(MotifClass::GQuadruplex, 0, 20, 1.0),
            candidate(MotifClass::ZDna, 10, 30, 2.0),
        ];
        let resolved = resolve(input, ResolveMode::Hybrid);
        assert!(resolved.iter().any(|c| c.class == MotifClass::ZDna));
        assert!(resolved.iter().any(|c| c.class == MotifClass::Hybrid));
    }

    #[test]
    fn disjoint_candidates_all_survive_strict_mode() {
        let input = vec![
            candidate(MotifClass::GQuadruplex, 0, 10, 1.0),
            candidate(MotifClass::ZDna, 50, 60, 1.0),
        ];
        let resolved = resolve(input, ResolveMode::Strict);
        assert_eq!(resolved.len(), 2);
    }
}
