//! Synthesizes `Hybrid` motifs over clusters of cross-class overlap.

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};

/// For every maximal *clique* of pairwise-overlapping candidates spanning
/// ≥2 distinct classes, emit one synthetic `Hybrid` candidate covering the
/// clique's interval union.
///
/// A clique requires every member to overlap every other member, not merely
/// a chain of overlaps — three candidates A/B/C where A overlaps B and B
/// overlaps C but A and C are disjoint must NOT be folded into one cluster
/// just because B bridges them. For intervals, a family pairwise overlaps
/// iff it has a common intersection point (Helly's theorem in one
/// dimension), so a running `[max_start, min_end)` intersection is enough to
/// test whether the next candidate belongs to the current clique.
pub fn synthesize(input: &[Candidate]) -> Vec<Candidate> {
    let mut sorted: Vec<&Candidate> = input.iter().collect();
    sorted.sort_by_key(|c| c.span.start);

    let mut synthetics = Vec::new();
    let mut cluster: Vec<&Candidate> = Vec::new();
    let mut intersection_start = 0usize;
    let mut intersection_end = 0usize;

    for candidate in sorted {
        let overlaps_clique =
            !cluster.is_empty() && candidate.span.start < intersection_end && intersection_start < candidate.span.end;
        if overlaps_clique {
            intersection_start = intersection_start.max(candidate.span.start);
            intersection_end = intersection_end.min(candidate.span.end);
            cluster.push(candidate);
        } else {
            emit_if_hybrid(&cluster, &mut synthetics);
            cluster.clear();
            cluster.push(candidate);
            intersection_start = candidate.span.start;
            intersection_end = candidate.span.end;
        }
    }
    emit_if_hybrid(&cluster, &mut synthetics);
    synthetics
}

fn emit_if_hybrid(cluster: &[&Candidate], out: &mut Vec<Candidate>) {
    let mut classes: Vec<MotifClass> = cluster.iter().map(|c| c.class).collect();
    classes.sort();
    classes.dedup();
    if classes.len() < 2 {
        return;
    }

    let start = cluster.iter().map(|c| c.span.start).min().unwrap();
    let end = cluster.iter().map(|c| c.span.end).max().unwrap();

    let mut by_score = cluster.to_vec();
    by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    let mut dominant = Vec::new();
    for c in &by_score {
        if !dominant.contains(&c.class) {
            dominant.push(c.class);
        }
        if dominant.len() == 2 {
            break;
        }
    }
    let subclass = if dominant.len() == 2 {
        format!("{}_{}_Overlap", dominant[0], dominant[1])
    } else {
        format!("{}_Overlap", dominant[0])
    };

    let score = cluster.iter().map(|c| c.score).fold(f64::MIN, f64::max);

    out.push(Candidate::new(
        MotifClass::Hybrid,
        subclass,
        Span::new(start, end),
        score,
        "HybridOverlap",
    ));
}
