//! Repeated-trial measurement harness
//!
//! One call measures one (scheme, distribution) pair: `trials` independent
//! trials, each on a freshly generated sequence, timed with a monotonic clock
//! around the partition call only. Generator cost is excluded from the timing.
//! Totals are accumulated across the loop and divided once at the end.

use crate::error::{Error, Result};
use crate::generate::Distribution;
use crate::partition::Scheme;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Averaged measurements for one (scheme, distribution) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialMetrics {
    /// Mean wall-clock time per partition call, in milliseconds
    pub avg_time_ms: f64,
    /// Mean swap count per partition call
    pub avg_swaps: f64,
}

/// Run `trials` independent trials of `scheme` on `distribution` inputs.
///
/// Timings are wall-clock and inherently noisy; only the swap counts are
/// reproducible for a fixed RNG state.
pub fn run_trials(
    scheme: Scheme,
    distribution: Distribution,
    size: usize,
    trials: usize,
    rng: &mut StdRng,
) -> Result<TrialMetrics> {
    if size == 0 {
        return Err(Error::EmptyInput("array size must be at least 1".into()));
    }
    if trials == 0 {
        return Err(Error::EmptyInput("trial count must be at least 1".into()));
    }

    let mut total_time_ms = 0.0f64;
    let mut total_swaps = 0u64;

    for _ in 0..trials {
        let mut data = distribution.generate(size, rng);

        let start = Instant::now();
        let result = scheme.partition(&mut data, 0, size - 1)?;
        let elapsed = start.elapsed();

        total_time_ms += elapsed.as_secs_f64() * 1000.0;
        total_swaps += result.swaps;
    }

    let metrics = TrialMetrics {
        avg_time_ms: total_time_ms / trials as f64,
        avg_swaps: total_swaps as f64 / trials as f64,
    };

    debug!(
        scheme = scheme.label(),
        distribution = distribution.label(),
        avg_time_ms = metrics.avg_time_ms,
        avg_swaps = metrics.avg_swaps,
        "trials complete"
    );

    Ok(metrics)
}
