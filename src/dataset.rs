//! Immutable numeric sample.
//!
//! A [`Dataset`] owns a private copy of its values, so later changes to
//! the caller's buffer never leak into computed statistics. Nothing hands
//! out mutable access to the backing storage.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats;

/// Immutable snapshot of a numeric sequence.
///
/// # Examples
/// ```
/// use u_descriptive::Dataset;
///
/// let mut raw = vec![3.0, 1.0, 2.0];
/// let ds = Dataset::new(&raw);
/// raw[0] = 100.0;
/// assert_eq!(ds.as_slice(), &[3.0, 1.0, 2.0]);
/// assert_eq!(ds.median().unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: Box<[f64]>,
}

impl Dataset {
    /// Copies `data` into a new dataset.
    pub fn new(data: &[f64]) -> Self {
        Self {
            values: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the values in their original order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns an owned copy of the values.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn mean(&self) -> Result<f64> {
        stats::mean(&self.values)
    }

    pub fn median(&self) -> Result<f64> {
        stats::median(&self.values)
    }

    pub fn mode(&self) -> Result<f64> {
        stats::mode(&self.values)
    }

    pub fn variance(&self) -> Result<f64> {
        stats::variance(&self.values)
    }

    pub fn std_dev(&self) -> Result<f64> {
        stats::std_dev(&self.values)
    }

    pub fn skewness(&self) -> Result<f64> {
        stats::skewness(&self.values)
    }

    pub fn kurtosis(&self) -> Result<f64> {
        stats::kurtosis(&self.values)
    }

    pub fn percentile(&self, p: f64) -> Result<f64> {
        stats::percentile(&self.values, p)
    }

    pub fn quantile(&self, k: f64, m: u32) -> Result<f64> {
        stats::quantile(&self.values, k, m)
    }

    pub fn entropy(&self, log_base: f64) -> Result<f64> {
        stats::entropy(&self.values, log_base)
    }

    pub fn min(&self) -> Result<f64> {
        stats::min(&self.values)
    }

    pub fn max(&self) -> Result<f64> {
        stats::max(&self.values)
    }

    pub fn range(&self) -> Result<f64> {
        stats::range(&self.values)
    }

    /// Population covariance with another dataset of the same length.
    pub fn covariance(&self, other: &Dataset) -> Result<f64> {
        stats::covariance(&self.values, &other.values)
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }
}

impl From<&[f64]> for Dataset {
    fn from(values: &[f64]) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for Dataset {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[f64]> for Dataset {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
