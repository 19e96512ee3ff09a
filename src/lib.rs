//! algo-bench - Instrumented benchmarks for classic comparison-based algorithms
//!
//! This library implements two quicksort partition schemes (Lomuto and Hoare),
//! insertion sort, merge sort and binary search, each instrumented to count
//! primitive operations, plus the measurement harness that benchmarks the
//! partition schemes against synthetic input distributions.
//!
//! # Features
//!
//! - Lomuto and Hoare partitioning with per-call swap counts
//! - Synthetic input distributions (random, sorted, reverse-sorted, many duplicates)
//! - Repeated-trial timing harness with averaged metrics
//! - Comparison table rendering (text, markdown, JSON)
//! - Instrumented sorting and searching sweeps
//! - Occurrence-counting binary search tree
//!
//! # Example
//!
//! ```no_run
//! use algo_bench::{experiment, report};
//!
//! let config = experiment::ExperimentConfig::default();
//! let results = experiment::run_partition_experiment(&config).unwrap();
//! println!("{}", report::render_text(&results));
//! ```

pub mod bst;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod partition;
pub mod report;
pub mod runner;
pub mod search;
pub mod sorts;

pub use error::{Error, Result};
