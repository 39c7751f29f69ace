//! Set-like comparisons under a floating-point tolerance.
//!
//! Two values `a` and `b` are considered equal when `|a − b| ≤ ε`.
//! `ε = 0` gives exact comparison. All outputs preserve input order so
//! results are reproducible.

use crate::error::{Result, StatsError};

#[inline]
fn close(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Returns `true` if `a` and `b` have the same length and no pair of
/// aligned elements differs by more than `epsilon`.
///
/// Pairs whose difference is NaN (NaN elements, or equal infinities) are
/// not rejected, so `equals(a, a, 0.0)` holds for every `a`.
///
/// # Examples
/// ```
/// use u_descriptive::sets::equals;
/// assert!(equals(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], 1e-9));
/// assert!(!equals(&[1.0, 2.0], &[1.0], 1e-9));
/// ```
pub fn equals(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    // Only a difference known to exceed epsilon rejects; NaN never does.
    a.len() == b.len() && !a.iter().zip(b).any(|(&x, &y)| (x - y).abs() > epsilon)
}

/// Returns the elements of `a`, in order, that have a counterpart in `b`
/// within `epsilon`.
///
/// Duplicates in `a` are kept, mirroring how many times they appear.
///
/// # Complexity
/// Time: O(|a|·|b|)
pub fn intersection(a: &[f64], b: &[f64], epsilon: f64) -> Vec<f64> {
    a.iter()
        .copied()
        .filter(|&x| b.iter().any(|&y| close(x, y, epsilon)))
        .collect()
}

/// Returns the elements of `a` followed by those of `b`, dropping any
/// value within `epsilon` of one already kept.
///
/// # Complexity
/// Time: O((|a|+|b|)·k) for k kept values
///
/// # Examples
/// ```
/// use u_descriptive::sets::union;
/// assert_eq!(union(&[1.0, 2.0, 2.0], &[2.0, 3.0], 0.0), vec![1.0, 2.0, 3.0]);
/// ```
pub fn union(a: &[f64], b: &[f64], epsilon: f64) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::with_capacity(a.len() + b.len());
    for &x in a.iter().chain(b) {
        if !kept.iter().any(|&k| close(k, x, epsilon)) {
            kept.push(x);
        }
    }
    kept
}

/// Counts occurrences of each value, merging values within `epsilon`.
///
/// Each value joins the first existing bucket whose representative is
/// within `epsilon`; otherwise it opens a new bucket with itself as the
/// representative. Buckets are returned in first-occurrence order as
/// `(representative, count)`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::sets::frequency;
/// let f = frequency(&[1.0, 2.0, 1.0 + 1e-12, 3.0, 2.0], 1e-9).unwrap();
/// assert_eq!(f, vec![(1.0, 2), (2.0, 2), (3.0, 1)]);
/// ```
pub fn frequency(data: &[f64], epsilon: f64) -> Result<Vec<(f64, usize)>> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let mut buckets: Vec<(f64, usize)> = Vec::new();
    for &x in data {
        match buckets.iter_mut().find(|(rep, _)| close(*rep, x, epsilon)) {
            Some((_, count)) => *count += 1,
            None => buckets.push((x, 1)),
        }
    }
    Ok(buckets)
}
