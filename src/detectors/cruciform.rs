//! Cruciform detector: registry `[AT]{12,}` matches seed
//! candidate windows; within each window the detector searches arm/spacer
//! combinations for a true inverted repeat (`arm` equals the reverse
//! complement of the other `arm`, separated by `spacer` unpaired bases).

use crate::config;
use crate::interval::Span;
use crate::motif::{Candidate, MotifClass};
use crate::registry::CompiledRegistries;
use crate::scanner;
use crate::sequence::{reverse_complement, Sequence};

use super::{gc_fraction, resolve_intraclass, Detector};

const MIN_ARM: usize = 6;
const MAX_ARM: usize = 20;
const MAX_SPACER: usize = 20;

pub struct CruciformDetector;

impl Detector for CruciformDetector {
    fn class(&self) -> MotifClass {
        MotifClass::Cruciform
    }

    fn detect(&self, sequence: &Sequence, registries: &CompiledRegistries) -> Vec<Candidate> {
        let Some(registry) = registries.get("Cruciform") else {
            return Vec::new();
        };
        let bytes = sequence.as_bytes();
        let matches = scanner::scan(registry, bytes);

        let step = if sequence.len() > config::LONG_SEQUENCE_THRESHOLD {
            4
        } else if sequence.len() > config::CRUCIFORM_WINDOW_THRESHOLD {
            2
        } else {
            1
        };

        let mut budget = config::cruciform_iteration_cap();
        let mut candidates = Vec::new();
        for m in &matches {
            candidates.extend(find_inverted_repeats(
                sequence,
                bytes,
                m.start,
                m.end,
                step,
                &mut budget,
            ));
            if budget == 0 {
                break;
            }
        }
        resolve_intraclass(candidates)
    }
}

fn find_inverted_repeats(
    sequence: &Sequence,
    bytes: &[u8],
    window_start: usize,
    window_end: usize,
    step: usize,
    budget: &mut u64,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut start = window_start;
    while start < window_end {
        if *budget == 0 {
            break;
        }
        for arm in MIN_ARM..=MAX_ARM {
            for spacer in 1..=MAX_SPACER {
                if *budget == 0 {
                    break;
                }
                *budget -= 1;

                let left_end = start + arm;
                let right_start = left_end + spacer;
                let right_end = right_start + arm;
                if right_end > window_end || right_end > bytes.len() {
                    continue;
                }

                let left = &bytes[start..left_end];
                let right = &bytes[right_start..right_end];
                if reverse_complement(right) == left {
                    let span = Span::new(start, right_end);
                    let gc = gc_fraction(sequence, span);
                    let stability = 0.5 + gc * 0.5;
                    out.push(Candidate::new(
                        MotifClass::Cruciform,
                        "Cruciform",
                        span,
                        arm as f64 * stability,
                        "inverted_repeat",
                    ));
                }
            }
        }
        start += step;
    }
    out
}
