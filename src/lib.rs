//! # u-descriptive
//!
//! Descriptive statistics primitives for finite numeric samples.
//!
//! This crate provides central tendency, dispersion, shape, and order
//! statistics, a cached aggregator that reuses dependent moments, and a
//! seeded shuffle that keeps chosen positions fixed.
//!
//! ## Modules
//!
//! - [`stats`] — Pure one-shot statistics (mean, median, mode, population
//!   variance, skewness, excess kurtosis, percentile, quantile, entropy,
//!   covariance) and elementary reductions
//! - [`sets`] — Epsilon-tolerant equality, union, intersection, frequency
//! - [`dataset`] — Immutable numeric sample
//! - [`random_variable`] — Dataset with weights, metadata, and a cache
//!   refreshed by an explicit `update`
//! - [`random`] — Seeded, exclusion-aware Fisher-Yates shuffle
//! - [`error`] — Error types
//!
//! ## Quick Start
//!
//! ```
//! use u_descriptive::{stats, CachedRandomVariable, Dataset, UpdateExclusions};
//!
//! let ds = Dataset::new(&[50.0, 55.0, 60.0, 62.0, 65.0, 70.0, 72.0, 75.0, 80.0, 85.0]);
//! assert!((ds.percentile(25.0).unwrap() - 58.75).abs() < 1e-12);
//! assert!(stats::variance(&[4.0, 2.0, 1.0, 3.0]).unwrap() == 1.25);
//!
//! let mut rv = CachedRandomVariable::from_dataset(ds);
//! let report = rv.update(&UpdateExclusions::none());
//! assert!((rv.mean() - 67.4).abs() < 1e-12);
//! // No weights were set, so only the weighted mean warns.
//! assert_eq!(report.warnings().count(), 1);
//! ```
//!
//! ## Conventions
//!
//! - Variance, standard deviation, and covariance divide by `n`.
//! - Kurtosis is excess kurtosis (normal = 0).
//! - Percentiles use the `p·(n+1)/100` rank with linear interpolation.

pub mod dataset;
pub mod error;
pub mod random;
pub mod random_variable;
pub mod sets;
pub mod stats;

pub use dataset::Dataset;
pub use error::{Result, StatsError};
pub use random::{shuffle_with_exclusion, ShuffleConfig};
pub use random_variable::{CachedRandomVariable, UpdateExclusions, UpdateReport};
