//! Process-wide configuration for detector runtime behavior.
//!
//! These knobs are distinct from a single scan's [`crate::engine::ScanOptions`]:
//! they bound detector inner-loop work (iteration caps) and are set
//! once at process start, then read on the hot path without adding overhead
//! to the detectors themselves.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Hard cap on inverted-repeat arm/spacer combinations tried per cruciform
/// sliding window.
static CRUCIFORM_ITERATION_CAP: AtomicU64 = AtomicU64::new(20_000);

/// Hard cap on mirror-repeat centers tried by the triplex detector; chosen to
/// keep the search linear in sequence length rather than reproducing the
/// source's undocumented constant.
static TRIPLEX_MIRROR_MAX_CENTERS: AtomicU64 = AtomicU64::new(50_000);

/// Hard cap on STR candidate windows tried per sequence by the slipped-DNA
/// detector.
static SLIPPED_ITERATION_CAP: AtomicU64 = AtomicU64::new(50_000);

/// Sequence length above which cruciform/slipped-DNA detectors switch from a
/// dense scan to step-size sampling.
pub const LONG_SEQUENCE_THRESHOLD: usize = 50_000;

/// Sequence length above which the cruciform detector uses a sliding window
/// instead of scanning every center.
pub const CRUCIFORM_WINDOW_THRESHOLD: usize = 1_000;

#[inline]
pub fn cruciform_iteration_cap() -> u64 {
    CRUCIFORM_ITERATION_CAP.load(Ordering::Acquire)
}

#[inline]
pub fn set_cruciform_iteration_cap(cap: u64) {
    CRUCIFORM_ITERATION_CAP.store(cap, Ordering::Release);
}

#[inline]
pub fn triplex_mirror_max_centers() -> u64 {
    TRIPLEX_MIRROR_MAX_CENTERS.load(Ordering::Acquire)
}

#[inline]
pub fn set_triplex_mirror_max_centers(cap: u64) {
    TRIPLEX_MIRROR_MAX_CENTERS.store(cap, Ordering::Release);
}

#[inline]
pub fn slipped_iteration_cap() -> u64 {
    SLIPPED_ITERATION_CAP.load(Ordering::Acquire)
}

#[inline]
pub fn set_slipped_iteration_cap(cap: u64) {
    SLIPPED_ITERATION_CAP.store(cap, Ordering::Release);
}

/// Default on-disk registry root, resolved once: the `NONB_REGISTRY_DIR`
/// environment variable if set, otherwise the registries checked into the
/// crate.
pub fn default_registry_dir() -> &'static str {
    static DIR: OnceLock<String> = OnceLock::new();
    DIR.get_or_init(|| {
        std::env::var("NONB_REGISTRY_DIR")
            .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/registries").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_positive() {
        assert!(cruciform_iteration_cap() > 0);
        assert!(triplex_mirror_max_centers() > 0);
        assert!(slipped_iteration_cap() > 0);
    }

    #[test]
    fn caps_are_mutable_process_wide() {
        let original = cruciform_iteration_cap();
        set_cruciform_iteration_cap(123);
        assert_eq!(cruciform_iteration_cap(), 123);
        set_cruciform_iteration_cap(original);
    }

    #[test]
    fn registry_dir_resolves_to_something_nonempty() {
        assert!(!default_registry_dir().is_empty());
    }
}
