//! Error types for algo-bench

use thiserror::Error;

/// Result type alias for algo-bench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for algo-bench
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid partition range: low={low}, high={high}, len={len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
