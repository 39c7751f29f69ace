//! Error types for u-descriptive.

use thiserror::Error;

/// All errors produced by fallible statistics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The operation is undefined on zero-length input.
    #[error("data is empty")]
    EmptyData,
    /// Two sequences expected to align have different lengths.
    #[error("different lengths on data: {left} vs {right}")]
    DifferentLength { left: usize, right: usize },
    /// Shape statistics are undefined when the spread is zero.
    #[error("standard deviation is null")]
    NullStdDeviation,
    /// Percentile outside `[0, 100]`.
    #[error("invalid percentile {0}, expected a value in [0, 100]")]
    InvalidPercentile(f64),
    /// Quantile index outside `[0, m]`, or `m == 0`.
    #[error("invalid quantile {k} of {m}")]
    InvalidQuantile { k: f64, m: u32 },
    /// Entropy log base equal to 1, negative, or NaN.
    #[error("invalid log base {0}")]
    InvalidLogBase(f64),
    /// Scaling by zero.
    #[error("scale factor is null")]
    NullScaleFactor,
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, StatsError>;
