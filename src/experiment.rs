//! Fixed experiment configuration and the cross-product driver
//!
//! The driver enumerates distributions in declared order and runs the trial
//! harness once per configured scheme for each, collecting one report row per
//! distribution with one metrics entry per scheme. All parameters are
//! compiled-in constants; nothing is read from the command line or the
//! environment.

use crate::error::Result;
use crate::generate::Distribution;
use crate::partition::Scheme;
use crate::runner;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of elements per generated sequence
pub const ARRAY_SIZE: usize = 10_000;

/// Trials per (scheme, distribution) pair
pub const NUM_TRIALS: usize = 50;

/// Seed for the experiment RNG; fixed so swap counts reproduce exactly
pub const DEFAULT_SEED: u64 = 42;

/// Immutable configuration for one partition experiment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of elements per generated sequence
    pub array_size: usize,
    /// Trials per (scheme, distribution) pair
    pub trials: usize,
    /// RNG seed
    pub seed: u64,
    /// Distributions to measure, in report row order
    pub distributions: Vec<Distribution>,
    /// Schemes to measure, in report column order
    pub schemes: Vec<Scheme>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            array_size: ARRAY_SIZE,
            trials: NUM_TRIALS,
            seed: DEFAULT_SEED,
            distributions: Distribution::ALL.to_vec(),
            schemes: Scheme::ALL.to_vec(),
        }
    }
}

/// Averaged measurements for one scheme within a report row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeMetrics {
    /// The measured scheme
    pub scheme: Scheme,
    /// Mean time per call, milliseconds
    pub avg_time_ms: f64,
    /// Mean swap count per call
    pub avg_swaps: f64,
}

/// Averaged results for one distribution, all configured schemes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRow {
    /// Distribution label
    pub label: String,
    /// One entry per scheme, in configuration order
    pub metrics: Vec<SchemeMetrics>,
}

/// Full results of one partition experiment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionReport {
    /// Number of elements per generated sequence
    pub array_size: usize,
    /// Trials per (scheme, distribution) pair
    pub trials: usize,
    /// When the experiment was run
    pub date: DateTime<Utc>,
    /// Schemes measured, in report column order
    pub schemes: Vec<Scheme>,
    /// One row per distribution, in configuration order
    pub rows: Vec<DistributionRow>,
}

/// Run the full cross product of configured schemes and distributions.
pub fn run_partition_experiment(config: &ExperimentConfig) -> Result<PartitionReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.distributions.len());

    for &distribution in &config.distributions {
        info!(distribution = distribution.label(), "measuring");

        let mut metrics = Vec::with_capacity(config.schemes.len());
        for &scheme in &config.schemes {
            let trial = runner::run_trials(
                scheme,
                distribution,
                config.array_size,
                config.trials,
                &mut rng,
            )?;
            metrics.push(SchemeMetrics {
                scheme,
                avg_time_ms: trial.avg_time_ms,
                avg_swaps: trial.avg_swaps,
            });
        }

        rows.push(DistributionRow {
            label: distribution.label().to_string(),
            metrics,
        });
    }

    Ok(PartitionReport {
        array_size: config.array_size,
        trials: config.trials,
        date: Utc::now(),
        schemes: config.schemes.clone(),
        rows,
    })
}
