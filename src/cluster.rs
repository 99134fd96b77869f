//! Synthesizes `Non-B_DNA_Clusters` motifs over high-density regions of the
//! final motif list.

use std::collections::HashSet;

use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};

const MIN_MOTIFS: usize = 3;
const MIN_CLASSES: usize = 3;

/// Slides a `window`-wide, `step`-wide window across `motifs` (assumed
/// sorted by start); any window containing ≥3 motifs from ≥3 distinct
/// classes is a cluster. Adjacent/overlapping cluster windows are merged
/// into their minimal covering interval before emitting one synthetic motif
/// per merged cluster.
pub fn synthesize(motifs: &[Candidate], window: usize, step: usize) -> Vec<Candidate> {
    if motifs.is_empty() || window == 0 || step == 0 {
        return Vec::new();
    }
    let sequence_end = motifs.iter().map(|m| m.span.end).max().unwrap_or(0);

    let mut windows = Vec::new();
    let mut start = 0;
    while start < sequence_end {
        let span = Span::new(start, start + window);
        if is_dense(motifs, span) {
            windows.push(span);
        }
        start += step;
    }

    merge_windows(windows)
        .into_iter()
        .map(|span| synthesize_one(motifs, span))
        .collect()
}

fn is_dense(motifs: &[Candidate], window: Span) -> bool {
    let mut classes = HashSet::new();
    let mut count = 0;
    for m in motifs {
        if m.span.overlaps(&window) {
            count += 1;
            classes.insert(m.class);
        }
    }
    count >= MIN_MOTIFS && classes.len() >= MIN_CLASSES
}

fn merge_windows(mut windows: Vec<Span>) -> Vec<Span> {
    windows.sort();
    let mut merged: Vec<Span> = Vec::new();
    for window in windows {
        match merged.last_mut() {
            Some(last) if window.start <= last.end => {
                *last = last.union(&window);
            }
            _ => merged.push(window),
        }
    }
    merged
}

fn synthesize_one(motifs: &[Candidate], span: Span) -> Candidate {
    let contained: Vec<&Candidate> = motifs.iter().filter(|m| m.span.overlaps(&span)).collect();
    let classes: HashSet<MotifClass> = contained.iter().map(|m| m.class).collect();
    let density = contained.len() as f64 / span.len() as f64 * 1000.0;
    let score = classes.len() as f64 * density;
    Candidate::new(
        MotifClass::NonBDnaClusters,
        format!("Mixed_Cluster_{}_classes", classes.len()),
        span,
        score,
        "ClusterDensity",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Span;

    fn candidate(class: MotifClass, start: usize, end: usize) -> Candidate {
        Candidate::new(class, "test", Span::new(start, end), 1.0, "test")
    }

    #[test]
    fn dense_window_with_three_classes_forms_a_cluster() {
        let motifs = vec![
            candidate(MotifClass::GQuadruplex, 10, 20),
            candidate(MotifClass::ZDna, 30, 40),
            candidate(MotifClass::Cruciform, 50, 60),
        ];
        let clusters = synthesize(&motifs, 1000, 100);
        assert!(!clusters.is_empty());
        assert_eq!(clusters[0].class, MotifClass::NonBDnaClusters);
    }

    #[test]
    fn sparse_motifs_produce_no_cluster() {
        let motifs = vec![
            candidate(MotifClass::GQuadruplex, 10, 20),
            candidate(MotifClass::ZDna, 5000, 5010),
        ];
        let clusters = synthesize(&motifs, 1000, 100);
        assert!(clusters.is_empty());
    }

    #[test]
    fn merge_windows_joins_overlapping_spans() {
        let merged = merge_windows(vec![Span::new(0, 100), Span::new(50, 150), Span::new(300, 400)]);
        assert_eq!(merged, vec![Span::new(0, 150), Span::new(300, 400)]);
    }
}
