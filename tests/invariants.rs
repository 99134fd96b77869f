//! Quantified invariants: no two accepted motifs of the same resolution
//! step strictly overlap, motif ids are well-formed, and scanning is
//! deterministic.

use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nonb_scanner::engine::{ScanEngine, ScanOptions};
use nonb_scanner::registry::load_registry_dir;
use nonb_scanner::resolver::ResolveMode;

fn engine() -> ScanEngine {
    let registries = load_registry_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("registries").as_path())
        .expect("bundled registries must load");
    ScanEngine::new(registries)
}

const SAMPLE: &str = "GGGTTAGGGTTAGGGTTAGGGAAAAAAAAAACGCGCGCGCGCGCGCGCGATATATATATATATAT\
CCCTTACCCTTACCCTTACCCGGGGGGGGGGGGAAACCCAAACCCAAACCCTTTTTTTTTTTTAAAA";

/// A deterministic pseudo-random ACGTN sequence for invariant checks that
/// need coverage beyond the hand-picked `SAMPLE` without becoming flaky.
fn random_sequence(seed: u64, len: usize) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];
    (0..len)
        .map(|_| {
            if rng.gen_range(0..20) == 0 {
                'N' // rare, like a real assembly gap
            } else {
                ALPHABET[rng.gen_range(0..4)]
            }
        })
        .collect()
}

#[test]
fn strict_mode_never_emits_overlapping_motifs() {
    let motifs = engine()
        .scan(SAMPLE, ScanOptions { mode: ResolveMode::Strict, ..Default::default() })
        .unwrap();
    for i in 0..motifs.len() {
        for j in (i + 1)..motifs.len() {
            let a = motifs[i].span();
            let b = motifs[j].span();
            assert!(!a.overlaps(&b), "strict mode accepted overlapping motifs: {:?} / {:?}", motifs[i].id, motifs[j].id);
        }
    }
}

#[test]
fn motif_ids_are_well_formed() {
    let motifs = engine().scan(SAMPLE, ScanOptions::default()).unwrap();
    for motif in &motifs {
        assert!(motif.id.contains('_'), "id {} missing separators", motif.id);
        assert!(motif.id.ends_with(&format!("{}-{}", motif.start + 1, motif.end)));
    }
}

#[test]
fn scanning_is_deterministic() {
    let engine = engine();
    let first = engine.scan(SAMPLE, ScanOptions::default()).unwrap();
    let second = engine.scan(SAMPLE, ScanOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_sequence_yields_no_motifs() {
    let motifs = engine().scan("", ScanOptions::default()).unwrap();
    assert!(motifs.is_empty());
}

#[test]
fn invalid_alphabet_is_rejected() {
    let result = engine().scan("ACGTXQZ", ScanOptions::default());
    assert!(result.is_err());
}

#[test]
fn random_sequences_never_overlap_in_strict_mode_and_scan_deterministically() {
    let e = engine();
    for seed in 0..8u64 {
        let sequence = random_sequence(seed, 400);
        let first = e
            .scan(&sequence, ScanOptions { mode: ResolveMode::Strict, ..Default::default() })
            .unwrap();
        let second = e
            .scan(&sequence, ScanOptions { mode: ResolveMode::Strict, ..Default::default() })
            .unwrap();
        assert_eq!(first, second, "seed {seed} scan was not deterministic");
        for i in 0..first.len() {
            for j in (i + 1)..first.len() {
                assert!(
                    !first[i].span().overlaps(&first[j].span()),
                    "seed {seed} strict mode accepted overlapping motifs: {:?} / {:?}",
                    first[i].id,
                    first[j].id
                );
            }
        }
    }
}
