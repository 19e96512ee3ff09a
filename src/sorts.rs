//! Instrumented insertion sort and merge sort
//!
//! Both sorts are non-destructive: they clone the input and return the sorted
//! copy together with operation counts. Counting rules:
//!
//! - a comparison is one executed key-vs-element comparison;
//! - an assignment is one element written into the array (a shift during
//!   insertion, or a write-back during a merge).
//!
//! With these rules the counts are pure functions of the input's initial
//! ordering; an already-ascending input of length n costs insertion sort
//! exactly n-1 comparisons and n-1 assignments.

use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Input sizes swept by [`run_sort_experiment`]
pub const SWEEP_SIZES: [usize; 5] = [100, 500, 1000, 2500, 5000];

/// Value range for the random sweep inputs
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = 0..=100_000;

/// Operation counts for one sort call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Executed element comparisons
    pub comparisons: u64,
    /// Element writes into the array
    pub assignments: u64,
}

/// Insertion sort with operation counting.
pub fn insertion_sort(input: &[i64]) -> (Vec<i64>, SortStats) {
    let mut arr = input.to_vec();
    let mut stats = SortStats::default();

    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;

        while j > 0 {
            stats.comparisons += 1;
            if arr[j - 1] > key {
                arr[j] = arr[j - 1];
                stats.assignments += 1;
                j -= 1;
            } else {
                break;
            }
        }

        arr[j] = key;
        stats.assignments += 1;
    }

    (arr, stats)
}

/// Top-down merge sort with operation counting.
pub fn merge_sort(input: &[i64]) -> (Vec<i64>, SortStats) {
    let mut arr = input.to_vec();
    let mut stats = SortStats::default();
    if arr.len() > 1 {
        let high = arr.len() - 1;
        merge_sort_recursive(&mut arr, 0, high, &mut stats);
    }
    (arr, stats)
}

fn merge_sort_recursive(arr: &mut [i64], low: usize, high: usize, stats: &mut SortStats) {
    if low < high {
        let mid = (low + high) / 2;
        merge_sort_recursive(arr, low, mid, stats);
        merge_sort_recursive(arr, mid + 1, high, stats);
        merge(arr, low, mid, high, stats);
    }
}

fn merge(arr: &mut [i64], low: usize, mid: usize, high: usize, stats: &mut SortStats) {
    let left: Vec<i64> = arr[low..=mid].to_vec();
    let right: Vec<i64> = arr[mid + 1..=high].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = low;

    while i < left.len() && j < right.len() {
        stats.comparisons += 1;
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        stats.assignments += 1;
        k += 1;
    }

    while i < left.len() {
        arr[k] = left[i];
        stats.assignments += 1;
        i += 1;
        k += 1;
    }

    while j < right.len() {
        arr[k] = right[j];
        stats.assignments += 1;
        j += 1;
        k += 1;
    }
}

/// Sweep both sorts over random inputs of increasing size and print an
/// aligned comparison table.
pub fn run_sort_experiment(seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "{:<12} | {:<15} | {:<15} | {:<15}",
        "Input Size", "Algorithm", "Comparisons", "Assignments"
    );
    println!("{}", "-".repeat(65));

    for size in SWEEP_SIZES {
        info!(size, "sorting sweep step");
        let input: Vec<i64> = (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect();

        let (_, is_stats) = insertion_sort(&input);
        println!(
            "{:<12} | {:<15} | {:<15} | {:<15}",
            size, "Insertion Sort", is_stats.comparisons, is_stats.assignments
        );

        let (_, ms_stats) = merge_sort(&input);
        println!(
            "{:<12} | {:<15} | {:<15} | {:<15}",
            size, "Merge Sort", ms_stats.comparisons, ms_stats.assignments
        );
        println!("{}", "-".repeat(65));
    }

    Ok(())
}
