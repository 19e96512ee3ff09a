//! Instrumented binary search
//!
//! One comparison is counted per halving step. Not-found is `None`; the
//! comparison count is returned either way, and the worst case on a sequence
//! of length n is `floor(log2 n) + 1` comparisons.

use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Input sizes swept by [`run_search_experiment`]
pub const SWEEP_SIZES: [usize; 5] = [100, 500, 1000, 5000, 10_000];

/// Value range for the random sweep inputs
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = 0..=10_000;

/// Outcome of one binary search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index of a matching element, or `None` when absent
    pub index: Option<usize>,
    /// Halving steps taken
    pub comparisons: u64,
}

/// Binary search over a sorted slice, counting halving steps.
///
/// The slice must be sorted ascending; on duplicate keys any matching index
/// may be returned.
pub fn binary_search(arr: &[i64], target: i64) -> SearchOutcome {
    let mut comparisons = 0u64;
    // Closed interval; signed so `high` can pass below 0 when the target is
    // smaller than every element.
    let mut low = 0i64;
    let mut high = arr.len() as i64 - 1;

    while low <= high {
        comparisons += 1;
        let mid = (low + high) / 2;
        let value = arr[mid as usize];
        if value == target {
            return SearchOutcome {
                index: Some(mid as usize),
                comparisons,
            };
        } else if value < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}

/// Sweep sorted random inputs of increasing size, search every key once, and
/// print the measured average comparison count next to the theoretical
/// `log2 n`.
pub fn run_search_experiment(seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "{:<15} | {:<20} | {:<20}",
        "Input Size (n)", "Avg Comparisons", "Theoretical (log2 n)"
    );
    println!("{}", "-".repeat(65));

    for size in SWEEP_SIZES {
        info!(size, "search sweep step");
        let mut data: Vec<i64> = (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect();
        data.sort_unstable();

        let mut total_comparisons = 0u64;
        for &key in &data {
            let outcome = binary_search(&data, key);
            debug_assert!(outcome.index.is_some());
            total_comparisons += outcome.comparisons;
        }

        let average = total_comparisons as f64 / size as f64;
        let theoretical = (size as f64).log2();
        println!("{size:<15} | {average:<20.2} | {theoretical:<20.2}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_concrete() {
        let arr = vec![2, 3, 10, 14, 23, 55, 89, 99];
        let outcome = binary_search(&arr, 10);
        assert_eq!(outcome.index, Some(2));
        assert_eq!(outcome.comparisons, 3);
    }

    #[test]
    fn test_not_found_sentinel() {
        let arr = vec![2, 3, 10, 14, 23, 55, 89, 99];
        let outcome = binary_search(&arr, 11);
        assert_eq!(outcome.index, None);
        assert!(outcome.comparisons >= 1);
    }

    #[test]
    fn test_worst_case_bound() {
        let n = 1000usize;
        let arr: Vec<i64> = (0..n as i64).collect();
        let bound = (n as f64).log2().floor() as u64 + 1;

        for target in -1..=n as i64 {
            let outcome = binary_search(&arr, target);
            assert!(
                outcome.comparisons <= bound,
                "target {target}: {} > {bound}",
                outcome.comparisons
            );
            if (0..n as i64).contains(&target) {
                assert_eq!(outcome.index, Some(target as usize));
            } else {
                assert_eq!(outcome.index, None);
            }
        }
    }

    #[test]
    fn test_empty_slice() {
        let outcome = binary_search(&[], 5);
        assert_eq!(outcome.index, None);
        assert_eq!(outcome.comparisons, 0);
    }

    #[test]
    fn test_endpoints() {
        let arr = vec![1, 3, 5, 7, 9];
        assert_eq!(binary_search(&arr, 1).index, Some(0));
        assert_eq!(binary_search(&arr, 9).index, Some(4));
    }
}
