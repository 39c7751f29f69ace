//! Random variable with a cache of derived statistics.
//!
//! [`CachedRandomVariable`] wraps a [`Dataset`] together with optional
//! per-element weights and optional descriptive [`Metadata`]. Derived
//! scalars live in a [`Summary`] that is only refreshed by an explicit
//! [`CachedRandomVariable::update`] call; accessors never recompute.
//!
//! # Update order
//!
//! `update` fills the cache in dependency order so each moment reuses the
//! ones before it:
//!
//! ```text
//! mean → median → variance → std_dev → {skewness, kurtosis, max, min, range, weighted_mean}
//! ```
//!
//! The last six fields can each be excluded through [`UpdateExclusions`].
//! Conditions that prevent a field from being computed (no weights, zero
//! spread, empty data) zero the field and are reported per field in the
//! returned [`UpdateReport`]; `update` itself never fails.
//!
//! # Concurrency
//!
//! All mutating operations take `&mut self`. Share across threads behind a
//! lock if needed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::Dataset;
use crate::error::{Result, StatsError};
use crate::stats;

// ============================================================================
// Metadata
// ============================================================================

/// Descriptive labels attached to a random variable.
///
/// - `source`: where the data came from (a sensor, a database, ...)
/// - `category`: free label for grouping variables in multivariate work
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub name: Option<String>,
    pub units: Option<String>,
    pub timestamp: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl Metadata {
    fn apply(&mut self, update: MetaUpdate) {
        let MetaUpdate {
            name,
            units,
            timestamp,
            source,
            category,
        } = update;
        if name.is_some() {
            self.name = name;
        }
        if units.is_some() {
            self.units = units;
        }
        if timestamp.is_some() {
            self.timestamp = timestamp;
        }
        if source.is_some() {
            self.source = source;
        }
        if category.is_some() {
            self.category = category;
        }
    }
}

/// Partial update for [`Metadata`].
///
/// `None` leaves the current value untouched; `Some("")` sets an empty
/// value.
///
/// # Examples
/// ```
/// use u_descriptive::random_variable::MetaUpdate;
/// let update = MetaUpdate::new().name("temperature").units("°C");
/// assert_eq!(update.name.as_deref(), Some("temperature"));
/// assert!(update.source.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaUpdate {
    pub name: Option<String>,
    pub units: Option<String>,
    pub timestamp: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl MetaUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn units(mut self, value: impl Into<String>) -> Self {
        self.units = Some(value.into());
        self
    }

    pub fn timestamp(mut self, value: impl Into<String>) -> Self {
        self.timestamp = Some(value.into());
        self
    }

    pub fn source(mut self, value: impl Into<String>) -> Self {
        self.source = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.units.is_none()
            && self.timestamp.is_none()
            && self.source.is_none()
            && self.category.is_none()
    }
}

// ============================================================================
// Update options and report
// ============================================================================

/// Fields to skip during [`CachedRandomVariable::update`].
///
/// `true` excludes the field; an excluded field is reset to zero. Mean,
/// median, variance, and standard deviation are always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateExclusions {
    pub skewness: bool,
    pub kurtosis: bool,
    pub max: bool,
    pub min: bool,
    pub range: bool,
    pub weighted_mean: bool,
}

impl UpdateExclusions {
    /// Compute every field.
    pub fn none() -> Self {
        Self::default()
    }

    /// Skip every optional field.
    pub fn all() -> Self {
        Self {
            skewness: true,
            kurtosis: true,
            max: true,
            min: true,
            range: true,
            weighted_mean: true,
        }
    }

    pub fn excludes(&self, field: Field) -> bool {
        match field {
            Field::Skewness => self.skewness,
            Field::Kurtosis => self.kurtosis,
            Field::Max => self.max,
            Field::Min => self.min,
            Field::Range => self.range,
            Field::WeightedMean => self.weighted_mean,
        }
    }
}

/// The optional (skippable) cache fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Skewness,
    Kurtosis,
    Max,
    Min,
    Range,
    WeightedMean,
}

impl Field {
    /// All optional fields, in update order.
    pub const ALL: [Field; 6] = [
        Field::Skewness,
        Field::Kurtosis,
        Field::Max,
        Field::Min,
        Field::Range,
        Field::WeightedMean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Skewness => "skewness",
            Field::Kurtosis => "kurtosis",
            Field::Max => "max",
            Field::Min => "min",
            Field::Range => "range",
            Field::WeightedMean => "weighted_mean",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable condition that zeroed a field during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWarning {
    #[error("data is empty")]
    EmptyData,
    #[error("standard deviation is null")]
    NullStdDeviation,
    #[error("weights not defined")]
    MissingWeights,
    #[error("weights sum to zero")]
    NullWeightSum,
}

/// What happened to one optional field during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOutcome {
    /// Recomputed from the current data.
    Computed,
    /// Excluded by the caller and reset to zero.
    Skipped,
    /// Could not be computed; reset to zero.
    Warning(FieldWarning),
}

/// Per-field outcomes of one [`CachedRandomVariable::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    pub skewness: FieldOutcome,
    pub kurtosis: FieldOutcome,
    pub max: FieldOutcome,
    pub min: FieldOutcome,
    pub range: FieldOutcome,
    pub weighted_mean: FieldOutcome,
}

impl UpdateReport {
    fn new() -> Self {
        Self {
            skewness: FieldOutcome::Skipped,
            kurtosis: FieldOutcome::Skipped,
            max: FieldOutcome::Skipped,
            min: FieldOutcome::Skipped,
            range: FieldOutcome::Skipped,
            weighted_mean: FieldOutcome::Skipped,
        }
    }

    pub fn outcome(&self, field: Field) -> FieldOutcome {
        match field {
            Field::Skewness => self.skewness,
            Field::Kurtosis => self.kurtosis,
            Field::Max => self.max,
            Field::Min => self.min,
            Field::Range => self.range,
            Field::WeightedMean => self.weighted_mean,
        }
    }

    fn set(&mut self, field: Field, outcome: FieldOutcome) {
        let slot = match field {
            Field::Skewness => &mut self.skewness,
            Field::Kurtosis => &mut self.kurtosis,
            Field::Max => &mut self.max,
            Field::Min => &mut self.min,
            Field::Range => &mut self.range,
            Field::WeightedMean => &mut self.weighted_mean,
        };
        *slot = outcome;
    }

    /// Iterates over the fields that ended with a warning.
    pub fn warnings(&self) -> impl Iterator<Item = (Field, FieldWarning)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| match self.outcome(field) {
                FieldOutcome::Warning(w) => Some((field, w)),
                _ => None,
            })
    }

    /// Returns `true` if no field ended with a warning.
    pub fn is_clean(&self) -> bool {
        self.warnings().next().is_none()
    }
}

// ============================================================================
// Cached random variable
// ============================================================================

/// Snapshot of every cached statistic.
///
/// Variance, standard deviation, skewness, and kurtosis are population
/// moments; kurtosis is excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub weighted_mean: f64,
}

/// A dataset plus a cache of its descriptive statistics.
///
/// # Examples
/// ```
/// use u_descriptive::random_variable::{CachedRandomVariable, UpdateExclusions};
///
/// let mut rv = CachedRandomVariable::new(&[1.0, 3.5, 2.2]);
/// rv.set_weight(&[0.5, 1.2, 0.75]).unwrap();
/// let report = rv.update(&UpdateExclusions::none());
/// assert!(report.is_clean());
///
/// let expected = (0.5 * 1.0 + 1.2 * 3.5 + 0.75 * 2.2) / (0.5 + 1.2 + 0.75);
/// assert!((rv.weighted_mean() - expected).abs() < 1e-12);
/// assert_eq!(rv.max(), 3.5);
/// ```
#[derive(Debug, Clone)]
pub struct CachedRandomVariable {
    data: Dataset,
    weight: Option<Vec<f64>>,
    meta: Option<Metadata>,
    cache: Summary,
    stale: bool,
}

impl CachedRandomVariable {
    /// Copies `data` into a new variable. The cache is all zeros until
    /// [`update`](Self::update) runs.
    pub fn new(data: &[f64]) -> Self {
        Self::from_dataset(Dataset::new(data))
    }

    pub fn from_dataset(data: Dataset) -> Self {
        Self {
            data,
            weight: None,
            meta: None,
            cache: Summary::default(),
            stale: true,
        }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn weight(&self) -> Option<&[f64]> {
        self.weight.as_deref()
    }

    pub fn meta(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    /// Attaches per-element weights, copying `w`.
    ///
    /// # Errors
    /// - [`StatsError::DifferentLength`] if `w.len()` differs from the data
    ///   length. Previously set weights are kept.
    pub fn set_weight(&mut self, w: &[f64]) -> Result<()> {
        if w.len() != self.data.len() {
            return Err(StatsError::DifferentLength {
                left: w.len(),
                right: self.data.len(),
            });
        }
        self.weight = Some(w.to_vec());
        self.stale = true;
        Ok(())
    }

    pub fn clear_weight(&mut self) {
        if self.weight.take().is_some() {
            self.stale = true;
        }
    }

    /// Applies the fields present in `update`; absent fields keep their
    /// prior value.
    pub fn define_meta(&mut self, update: MetaUpdate) {
        if update.is_empty() {
            return;
        }
        self.meta.get_or_insert_with(Metadata::default).apply(update);
    }

    /// Returns `true` if the weights changed since the last update, or no
    /// update has run yet.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Recomputes the whole cache in dependency order.
    ///
    /// Never fails: excluded fields are reset to zero and reported as
    /// [`FieldOutcome::Skipped`]; fields that cannot be computed are
    /// reset to zero and reported as [`FieldOutcome::Warning`].
    ///
    /// # Edge cases
    /// - Empty data: every field is zero.
    /// - Single element: variance is zero and the shape fields are zeroed
    ///   with [`FieldWarning::NullStdDeviation`].
    pub fn update(&mut self, exclusions: &UpdateExclusions) -> UpdateReport {
        let data = self.data.as_slice();
        let mut cache = Summary::default();
        let mut report = UpdateReport::new();

        if let Ok(mean) = stats::mean(data) {
            cache.mean = mean;
            cache.median = stats::median(data).unwrap_or(mean);
            cache.variance = stats::variance_about(data, mean);
            cache.std_dev = cache.variance.sqrt();
        }

        let (mean, std_dev) = (cache.mean, cache.std_dev);
        let shape = |k: i32| -> std::result::Result<f64, FieldWarning> {
            if data.is_empty() {
                Err(FieldWarning::EmptyData)
            } else if std_dev == 0.0 {
                Err(FieldWarning::NullStdDeviation)
            } else {
                Ok(stats::standardized_moment(data, mean, std_dev, k))
            }
        };

        let (skewness, outcome) = resolve(Field::Skewness, exclusions, || shape(3));
        cache.skewness = skewness;
        report.set(Field::Skewness, outcome);

        let (kurtosis, outcome) = resolve(Field::Kurtosis, exclusions, || Ok(shape(4)? - 3.0));
        cache.kurtosis = kurtosis;
        report.set(Field::Kurtosis, outcome);

        let (max, outcome) = resolve(Field::Max, exclusions, || {
            stats::max(data).map_err(|_| FieldWarning::EmptyData)
        });
        cache.max = max;
        report.set(Field::Max, outcome);

        let (min, outcome) = resolve(Field::Min, exclusions, || {
            stats::min(data).map_err(|_| FieldWarning::EmptyData)
        });
        cache.min = min;
        report.set(Field::Min, outcome);

        let extremes_cached =
            report.max == FieldOutcome::Computed && report.min == FieldOutcome::Computed;
        let (range, outcome) = resolve(Field::Range, exclusions, || {
            if extremes_cached {
                Ok(cache.max - cache.min)
            } else {
                stats::range(data).map_err(|_| FieldWarning::EmptyData)
            }
        });
        cache.range = range;
        report.set(Field::Range, outcome);

        let weight = self.weight.as_deref();
        let (weighted_mean, outcome) = resolve(Field::WeightedMean, exclusions, || {
            weighted_average(data, weight)
        });
        cache.weighted_mean = weighted_mean;
        report.set(Field::WeightedMean, outcome);

        tracing::debug!(
            n = data.len(),
            warnings = report.warnings().count(),
            "random variable cache updated"
        );

        self.cache = cache;
        self.stale = false;
        report
    }

    pub fn summary(&self) -> &Summary {
        &self.cache
    }

    pub fn mean(&self) -> f64 {
        self.cache.mean
    }

    pub fn median(&self) -> f64 {
        self.cache.median
    }

    pub fn variance(&self) -> f64 {
        self.cache.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.cache.std_dev
    }

    pub fn skewness(&self) -> f64 {
        self.cache.skewness
    }

    pub fn kurtosis(&self) -> f64 {
        self.cache.kurtosis
    }

    pub fn min(&self) -> f64 {
        self.cache.min
    }

    pub fn max(&self) -> f64 {
        self.cache.max
    }

    pub fn range(&self) -> f64 {
        self.cache.range
    }

    pub fn weighted_mean(&self) -> f64 {
        self.cache.weighted_mean
    }

    /// Population covariance between the datasets of two variables.
    ///
    /// # Errors
    /// - [`StatsError::DifferentLength`] if the lengths differ.
    /// - [`StatsError::EmptyData`] if both are empty.
    pub fn covariance(&self, other: &CachedRandomVariable) -> Result<f64> {
        self.data.covariance(&other.data)
    }
}

impl From<Dataset> for CachedRandomVariable {
    fn from(data: Dataset) -> Self {
        Self::from_dataset(data)
    }
}

impl From<Vec<f64>> for CachedRandomVariable {
    fn from(data: Vec<f64>) -> Self {
        Self::from_dataset(Dataset::from(data))
    }
}

/// Runs `compute` unless `field` is excluded, zeroing the value on skip
/// or warning.
fn resolve<F>(field: Field, exclusions: &UpdateExclusions, compute: F) -> (f64, FieldOutcome)
where
    F: FnOnce() -> std::result::Result<f64, FieldWarning>,
{
    if exclusions.excludes(field) {
        return (0.0, FieldOutcome::Skipped);
    }
    match compute() {
        Ok(value) => (value, FieldOutcome::Computed),
        Err(warning) => {
            tracing::warn!(%field, %warning, "field zeroed during update");
            (0.0, FieldOutcome::Warning(warning))
        }
    }
}

/// `Σ(xᵢ·wᵢ) / Σwᵢ`.
fn weighted_average(
    data: &[f64],
    weight: Option<&[f64]>,
) -> std::result::Result<f64, FieldWarning> {
    if data.is_empty() {
        return Err(FieldWarning::EmptyData);
    }
    let weight = weight.ok_or(FieldWarning::MissingWeights)?;
    let total_weight = stats::sum(weight);
    if total_weight == 0.0 {
        return Err(FieldWarning::NullWeightSum);
    }
    let weighted: f64 = data.iter().zip(weight).map(|(&x, &w)| x * w).sum();
    Ok(weighted / total_weight)
}

// ============================================================================
// Tests
// ============================================================================
