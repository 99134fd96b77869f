//! Parallel execution utilities built on Rayon.
//!
//! The detection pipeline fans a fixed table of per-class detectors out
//! across a sequence, via a work-stealing pool sized to `min(9, cores)`.
//! This module provides the generic fan-out primitive; `engine` supplies the
//! detector table itself.

use rayon::prelude::*;

/// Run `f` over every item in `items`, either via Rayon's work-stealing pool
/// or sequentially, preserving input order in the output either way.
///
/// Parallelism is applied at the detector level only ("do not introduce
/// parallelism below the detector level") — `f` itself must not spawn further
/// Rayon work.
pub fn fan_out<T, R, F>(items: &[T], parallel: bool, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if parallel {
        items.par_iter().map(|item| f(item)).collect()
    } else {
        items.iter().map(|item| f(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_preserves_order_parallel_and_sequential() {
        let items: Vec<i32> = (0..9).collect();

        let sequential = fan_out(&items, false, |x| x * 2);
        let parallel = fan_out(&items, true, |x| x * 2);

        let expected: Vec<i32> = items.iter().map(|x| x * 2).collect();
        assert_eq!(sequential, expected);
        assert_eq!(parallel, expected);
    }
}
