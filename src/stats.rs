//! Descriptive statistics over finite numeric samples.
//!
//! Every function here is pure: it borrows its input, works on a private
//! copy when it needs to reorder, and reports undefined cases through
//! [`StatsError`] instead of a sentinel value.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation for O(ε) error
//!   independent of n.
//! - **Variance/StdDev**: two-pass **population** moments (denominator `n`).
//! - **Skewness/Kurtosis**: standardized central moments
//!   `Σ(x−x̄)^k / (n·σ^k)`; kurtosis is reported as *excess* kurtosis.
//! - **Percentile/Quantile**: rank interpolation on the `p·(n+1)/100`
//!   plotting position, clamped to the sample extremes.
//!   Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//!   Packages", *The American Statistician* 50(4), definition 6.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{Result, StatsError};
use crate::sets;

/// Tolerance used to bucket values before computing [`entropy`].
pub const FREQUENCY_EPSILON: f64 = 1e-8;

/// Computes the arithmetic mean using Neumaier compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    Ok(sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a private copy, then returns the middle element (or the average
/// of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let sorted = sort(data);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Returns the most frequent value in `data`.
///
/// Values are compared exactly (`-0.0` and `0.0` count as the same value).
/// When several values share the highest count, the one whose first
/// occurrence comes earliest in `data` wins, so the result never depends
/// on hash iteration order.
///
/// # Complexity
/// Time: O(n) expected, Space: O(k) for k distinct values
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::mode;
/// assert_eq!(mode(&[0.0, 2.0, 3.0, 0.0, 0.0, 1.0, 3.0]).unwrap(), 0.0);
/// // Tie between 1.0 and 2.0: 1.0 appears first.
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0]).unwrap(), 1.0);
/// ```
pub fn mode(data: &[f64]) -> Result<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut slots: HashMap<u64, usize> = HashMap::new();
    for &x in data {
        // Fold -0.0 onto 0.0 so both hash to the same slot.
        let key = if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() };
        match slots.entry(key) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((x, 1));
            }
        }
    }
    counts
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(value, _)| value)
        .ok_or(StatsError::EmptyData)
}

/// Computes the **population** variance (denominator `n`).
///
/// # Formula
/// ```text
/// Var(X) = Σ(xᵢ − x̄)² / n
/// ```
///
/// # Algorithm
/// Two-pass: compensated mean first, then the sum of squared deviations.
/// This avoids the catastrophic cancellation of `E[X²] − (E[X])²`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::variance;
/// assert!((variance(&[4.0, 2.0, 1.0, 3.0]).unwrap() - 1.25).abs() < 1e-15);
/// ```
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    Ok(variance_about(data, m))
}

/// Computes the population standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Computes the skewness (third standardized central moment).
///
/// # Formula
/// ```text
/// γ₁ = Σ(xᵢ − x̄)³ / (n·σ³)
/// ```
/// where `σ` is the population standard deviation. No small-sample bias
/// correction is applied.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::NullStdDeviation`] if `σ = 0` (constant or
///   single-element data).
///
/// # Examples
/// ```
/// use u_descriptive::stats::skewness;
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-14);
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// assert!(skewness(&[2.0]).is_err());
/// ```
pub fn skewness(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    let sd = variance_about(data, m).sqrt();
    if sd == 0.0 {
        return Err(StatsError::NullStdDeviation);
    }
    Ok(standardized_moment(data, m, sd, 3))
}

/// Computes the **excess** kurtosis (fourth standardized moment minus 3).
///
/// # Formula
/// ```text
/// γ₂ = Σ(xᵢ − x̄)⁴ / (n·σ⁴) − 3
/// ```
///
/// A normal distribution scores 0; heavy tails are positive
/// (leptokurtic), light tails negative (platykurtic).
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::NullStdDeviation`] if `σ = 0`.
///
/// # Examples
/// ```
/// use u_descriptive::stats::kurtosis;
/// let k = kurtosis(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((k - (-1.36)).abs() < 1e-12);
/// ```
pub fn kurtosis(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    let sd = variance_about(data, m).sqrt();
    if sd == 0.0 {
        return Err(StatsError::NullStdDeviation);
    }
    Ok(standardized_moment(data, m, sd, 4) - 3.0)
}

/// Computes the `p`-th percentile, `p ∈ [0, 100]`, by rank interpolation.
///
/// # Algorithm
/// For sorted data `x[1..=n]` (1-based):
/// 1. `pos = p·(n + 1) / 100`
/// 2. `pos ≤ 1` → `x[1]`; `pos ≥ n` → `x[n]`
/// 3. integral `pos` → `x[pos]`
/// 4. otherwise `x[⌊pos⌋] + (x[⌊pos⌋+1] − x[⌊pos⌋])·frac(pos)`
///
/// # Complexity
/// Time: O(n log n) (dominated by sort), Space: O(n)
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::InvalidPercentile`] if `p` is outside `[0, 100]` or NaN.
///
/// # Examples
/// ```
/// use u_descriptive::stats::percentile;
/// let data = [50.0, 55.0, 60.0, 62.0, 65.0, 70.0, 72.0, 75.0, 80.0, 85.0];
/// assert!((percentile(&data, 25.0).unwrap() - 58.75).abs() < 1e-12);
/// assert_eq!(percentile(&data, 0.0).unwrap(), 50.0);
/// assert_eq!(percentile(&data, 100.0).unwrap(), 85.0);
/// ```
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    percentile_sorted(&sort(data), p)
}

/// Computes the `p`-th percentile on **pre-sorted** data.
///
/// Avoids the O(n log n) sort when several percentiles are read from the
/// same sample. The caller must guarantee `sorted_data` is in
/// non-decreasing order.
///
/// # Errors
/// Same as [`percentile`].
pub fn percentile_sorted(sorted_data: &[f64], p: f64) -> Result<f64> {
    if sorted_data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }
    Ok(interpolate_rank(sorted_data, p))
}

/// Computes the `k`-th of `m` quantiles.
///
/// Uses the same rank interpolation as [`percentile`] with
/// `p = 100·k/m`, so `quantile(data, 1.0, 4)` is the first quartile.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::InvalidQuantile`] if `m == 0` or `k` is outside
///   `[0, m]`.
///
/// # Examples
/// ```
/// use u_descriptive::stats::quantile;
/// let data = [12.0, 7.0, 18.0, 5.0, 13.0, 15.0, 8.0, 20.0, 22.0, 25.0];
/// assert!((quantile(&data, 1.0, 4).unwrap() - 7.75).abs() < 1e-12);
/// ```
pub fn quantile(data: &[f64], k: f64, m: u32) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    if m == 0 || !(0.0..=f64::from(m)).contains(&k) {
        return Err(StatsError::InvalidQuantile { k, m });
    }
    let p = (100.0 * k / f64::from(m)).min(100.0);
    Ok(interpolate_rank(&sort(data), p))
}

/// Computes the interquartile range, `P75 − P25`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
pub fn iqr(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let sorted = sort(data);
    Ok(interpolate_rank(&sorted, 75.0) - interpolate_rank(&sorted, 25.0))
}

/// Computes the Shannon entropy of the empirical distribution of `data`.
///
/// Values are first grouped into buckets of width [`FREQUENCY_EPSILON`]
/// (see [`sets::frequency`]); each bucket contributes `−p·log(p)`.
///
/// `log_base = 0` selects the natural logarithm (nats); `2` gives bits.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::InvalidLogBase`] if `log_base` is 1, negative, or NaN.
///
/// # Examples
/// ```
/// use u_descriptive::stats::entropy;
/// let bits = entropy(&[1.0, 1.0, 2.0, 2.0], 2.0).unwrap();
/// assert!((bits - 1.0).abs() < 1e-12);
/// ```
pub fn entropy(data: &[f64], log_base: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    if log_base == 1.0 || log_base < 0.0 || log_base.is_nan() {
        return Err(StatsError::InvalidLogBase(log_base));
    }
    let divisor = if log_base == 0.0 { 1.0 } else { log_base.ln() };
    let nf = data.len() as f64;
    let h: f64 = sets::frequency(data, FREQUENCY_EPSILON)?
        .iter()
        .map(|&(_, count)| {
            let p = count as f64 / nf;
            -p * p.ln()
        })
        .sum();
    Ok(h / divisor)
}

/// Computes the population covariance between two aligned samples.
///
/// # Formula
/// ```text
/// Cov(X, Y) = Σ(xᵢ − x̄)(yᵢ − ȳ) / n
/// ```
///
/// # Errors
/// - [`StatsError::DifferentLength`] if `x.len() != y.len()`.
/// - [`StatsError::EmptyData`] if both are empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((covariance(&x, &y).unwrap() - 4.0).abs() < 1e-14);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::DifferentLength {
            left: x.len(),
            right: y.len(),
        });
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let cross: f64 = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a - mean_x) * (b - mean_y))
        .sum();
    Ok(cross / x.len() as f64)
}

// ---------------------------------------------------------------------------
// Elementary reductions
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// An improved Kahan summation that also handles the case where the
/// addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// Returns `0.0` for empty input.
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &x in data {
        let t = total + x;
        if total.abs() >= x.abs() {
            compensation += (total - t) + x;
        } else {
            compensation += (x - t) + total;
        }
        total = t;
    }
    total + compensation
}

/// Returns the minimum value in the slice.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 1.0);
/// ```
pub fn min(data: &[f64]) -> Result<f64> {
    data.iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::EmptyData)
}

/// Returns the maximum value in the slice.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
pub fn max(data: &[f64]) -> Result<f64> {
    data.iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptyData)
}

/// Returns `max(data) − min(data)`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
pub fn range(data: &[f64]) -> Result<f64> {
    Ok(max(data)? - min(data)?)
}

/// Returns an ascending sorted copy of `data`.
///
/// Uses the IEEE 754 total order, so NaN sorts deterministically (after
/// `+∞` for positive NaN) instead of panicking.
pub fn sort(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Returns a descending sorted copy of `data`.
pub fn reverse_sort(data: &[f64]) -> Vec<f64> {
    let mut sorted = sort(data);
    sorted.reverse();
    sorted
}

/// Multiplies every element by `factor`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::NullScaleFactor`] if `factor == 0`.
pub fn scale(data: &[f64], factor: f64) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    if factor == 0.0 {
        return Err(StatsError::NullScaleFactor);
    }
    Ok(data.iter().map(|&x| x * factor).collect())
}

/// Converts `data` to z-scores, `(x − x̄) / σ`.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::NullStdDeviation`] if `σ = 0`.
///
/// # Examples
/// ```
/// use u_descriptive::stats::normalize;
/// let z = normalize(&[1.0, 3.0]).unwrap();
/// assert_eq!(z, vec![-1.0, 1.0]);
/// ```
pub fn normalize(data: &[f64]) -> Result<Vec<f64>> {
    let m = mean(data)?;
    let sd = variance_about(data, m).sqrt();
    if sd == 0.0 {
        return Err(StatsError::NullStdDeviation);
    }
    Ok(data.iter().map(|&x| (x - m) / sd).collect())
}

// ---------------------------------------------------------------------------
// Shared kernels
// ---------------------------------------------------------------------------

/// Population variance about `mean`, the precomputed mean of `data`.
/// `data` must be non-empty.
///
/// A constant sample yields exactly zero, even when its compensated mean
/// is one ulp off the common value.
pub(crate) fn variance_about(data: &[f64], mean: f64) -> f64 {
    if data.iter().all(|&x| x == data[0]) {
        return 0.0;
    }
    let ss: f64 = data
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum();
    ss / data.len() as f64
}

/// `Σ(x − mean)^k / (n·sd^k)`. `data` must be non-empty and `sd > 0`.
pub(crate) fn standardized_moment(data: &[f64], mean: f64, sd: f64, k: i32) -> f64 {
    let central: f64 = data.iter().map(|&x| (x - mean).powi(k)).sum();
    central / (data.len() as f64 * sd.powi(k))
}

/// Rank interpolation on the `p·(n+1)/100` position.
/// `sorted` must be non-empty and `p` within `[0, 100]`.
fn interpolate_rank(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let pos = p * (n + 1) as f64 / 100.0;
    if pos <= 1.0 {
        return sorted[0];
    }
    if pos >= n as f64 {
        return sorted[n - 1];
    }
    // 1 < pos < n, so 1 <= rank <= n - 1
    let rank = pos.floor();
    let lower = sorted[rank as usize - 1];
    let weight = pos - rank;
    if weight == 0.0 {
        return lower;
    }
    let upper = sorted[rank as usize];
    lower + (upper - lower) * weight
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Ok(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyData));
    }

    // --- median ---

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    }

    #[test]
    fn test_median_odd_unsorted() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let data = [3.0, 1.0, 2.0];
        let _ = median(&data);
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), Err(StatsError::EmptyData));
    }

    // --- mode ---

    #[test]
    fn test_mode_basic() {
        let data = [0.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0];
        assert_eq!(mode(&data), Ok(0.0));
    }

    #[test]
    fn test_mode_tie_first_occurrence_wins() {
        assert_eq!(mode(&[5.0, 7.0, 7.0, 5.0]), Ok(5.0));
        assert_eq!(mode(&[7.0, 5.0, 5.0, 7.0]), Ok(7.0));
        // All distinct: the first element.
        assert_eq!(mode(&[9.0, 8.0, 7.0]), Ok(9.0));
    }

    #[test]
    fn test_mode_signed_zero() {
        assert_eq!(mode(&[1.0, -0.0, 0.0, 1.0, 0.0]), Ok(-0.0));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), Err(StatsError::EmptyData));
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_population() {
        assert_eq!(variance(&[4.0, 2.0, 1.0, 3.0]), Ok(1.25));
    }

    #[test]
    fn test_variance_single_is_zero() {
        assert_eq!(variance(&[7.0]), Ok(0.0));
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
    }

    // --- skewness / kurtosis ---

    #[test]
    fn test_skewness_known_value() {
        let s = skewness(&[1.0, 2.0, 3.0, 10.0]).unwrap();
        assert!((s - 1.0182337649086284).abs() < 1e-12, "got {s}");
    }

    #[test]
    fn test_skewness_left_skewed() {
        assert!(skewness(&[-50.0, 1.0, 2.0, 3.0, 4.0]).unwrap() < 0.0);
    }

    #[test]
    fn test_kurtosis_known_value() {
        let k = kurtosis(&[1.0, 2.0, 3.0, 10.0]).unwrap();
        assert!((k - (-0.7696)).abs() < 1e-12, "got {k}");
    }

    #[test]
    fn test_kurtosis_is_excess() {
        // Symmetric two-point distribution: raw kurtosis 1, excess -2.
        let k = kurtosis(&[-1.0, 1.0, -1.0, 1.0]).unwrap();
        assert!((k - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_shape_single_element_null_std_dev() {
        assert_eq!(skewness(&[2.0]), Err(StatsError::NullStdDeviation));
        assert_eq!(kurtosis(&[2.0]), Err(StatsError::NullStdDeviation));
    }

    #[test]
    fn test_shape_constant_null_std_dev() {
        let v = [5.0; 20];
        assert_eq!(skewness(&v), Err(StatsError::NullStdDeviation));
        assert_eq!(kurtosis(&v), Err(StatsError::NullStdDeviation));
    }

    #[test]
    fn test_shape_constant_inexact_mean() {
        // The compensated mean of these samples is not exactly the value.
        for v in [[0.1; 3], [0.7; 3]] {
            assert_eq!(variance(&v), Ok(0.0));
            assert_eq!(skewness(&v), Err(StatsError::NullStdDeviation));
            assert_eq!(kurtosis(&v), Err(StatsError::NullStdDeviation));
            assert_eq!(normalize(&v), Err(StatsError::NullStdDeviation));
        }
        assert_eq!(skewness(&[123.456; 5]), Err(StatsError::NullStdDeviation));
    }

    #[test]
    fn test_shape_empty() {
        assert_eq!(skewness(&[]), Err(StatsError::EmptyData));
        assert_eq!(kurtosis(&[]), Err(StatsError::EmptyData));
    }

    // --- percentile ---

    const SCORES: [f64; 10] = [50.0, 55.0, 60.0, 62.0, 65.0, 70.0, 72.0, 75.0, 80.0, 85.0];

    #[test]
    fn test_percentile_interpolates() {
        assert!((percentile(&SCORES, 25.0).unwrap() - 58.75).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_integral_rank() {
        // n = 9 → pos = 50·10/100 = 5 → fifth element.
        let data = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0];
        assert_eq!(percentile(&data, 50.0), Ok(5.0));
    }

    #[test]
    fn test_percentile_clamps_to_extremes() {
        // pos = 5·11/100 = 0.55 ≤ 1
        assert_eq!(percentile(&SCORES, 5.0), Ok(50.0));
        // pos = 95·11/100 = 10.45 ≥ 10
        assert_eq!(percentile(&SCORES, 95.0), Ok(85.0));
        assert_eq!(percentile(&SCORES, 0.0), Ok(50.0));
        assert_eq!(percentile(&SCORES, 100.0), Ok(85.0));
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let mut shuffled = SCORES;
        shuffled.reverse();
        assert!((percentile(&shuffled, 25.0).unwrap() - 58.75).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_invalid() {
        assert_eq!(
            percentile(&SCORES, -0.1),
            Err(StatsError::InvalidPercentile(-0.1))
        );
        assert_eq!(
            percentile(&SCORES, 100.5),
            Err(StatsError::InvalidPercentile(100.5))
        );
        assert!(matches!(
            percentile(&SCORES, f64::NAN),
            Err(StatsError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile(&[], 50.0), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_percentile_single() {
        assert_eq!(percentile(&[3.0], 37.0), Ok(3.0));
    }

    #[test]
    fn test_percentile_sorted_matches() {
        let sorted = sort(&SCORES);
        for p in [10.0, 25.0, 33.3, 50.0, 75.0, 90.0] {
            assert_eq!(percentile_sorted(&sorted, p), percentile(&SCORES, p));
        }
    }

    // --- quantile ---

    #[test]
    fn test_quantile_first_quartile() {
        let data = [12.0, 7.0, 18.0, 5.0, 13.0, 15.0, 8.0, 20.0, 22.0, 25.0];
        assert!((quantile(&data, 1.0, 4).unwrap() - 7.75).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_matches_percentile() {
        for (k, m) in [(1.0, 4), (2.0, 4), (3.0, 4), (7.0, 10), (0.0, 3), (3.0, 3)] {
            let q = quantile(&SCORES, k, m).unwrap();
            let p = percentile(&SCORES, 100.0 * k / f64::from(m)).unwrap();
            assert!((q - p).abs() < 1e-12, "k={k} m={m}");
        }
    }

    #[test]
    fn test_quantile_invalid() {
        assert_eq!(
            quantile(&SCORES, 5.0, 4),
            Err(StatsError::InvalidQuantile { k: 5.0, m: 4 })
        );
        assert_eq!(
            quantile(&SCORES, -1.0, 4),
            Err(StatsError::InvalidQuantile { k: -1.0, m: 4 })
        );
        assert_eq!(
            quantile(&SCORES, 0.0, 0),
            Err(StatsError::InvalidQuantile { k: 0.0, m: 0 })
        );
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 1.0, 4), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_iqr() {
        // P75: pos = 8.25 → 75 + 5·0.25 = 76.25; P25 = 58.75
        assert!((iqr(&SCORES).unwrap() - 17.5).abs() < 1e-12);
        assert_eq!(iqr(&[]), Err(StatsError::EmptyData));
    }

    // --- entropy ---

    #[test]
    fn test_entropy_bits() {
        assert!((entropy(&[1.0, 1.0, 2.0, 2.0], 2.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_natural() {
        let h = entropy(&[1.0, 1.0, 2.0, 3.0], 0.0).unwrap();
        assert!((h - 1.0397207708399179).abs() < 1e-12, "got {h}");
    }

    #[test]
    fn test_entropy_constant_is_zero() {
        assert_eq!(entropy(&[4.0, 4.0, 4.0], 10.0), Ok(0.0));
    }

    #[test]
    fn test_entropy_buckets_near_values() {
        let h = entropy(&[1.0, 1.0 + 1e-10, 2.0, 2.0], 2.0).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_invalid_base() {
        assert_eq!(
            entropy(&[1.0, 2.0], 1.0),
            Err(StatsError::InvalidLogBase(1.0))
        );
        assert_eq!(
            entropy(&[1.0, 2.0], -2.0),
            Err(StatsError::InvalidLogBase(-2.0))
        );
        assert_eq!(entropy(&[], 2.0), Err(StatsError::EmptyData));
    }

    // --- covariance ---

    #[test]
    fn test_covariance_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((covariance(&x, &y).unwrap() - (-4.0)).abs() < 1e-14);
    }

    #[test]
    fn test_covariance_different_length() {
        assert_eq!(
            covariance(&[1.0, 2.0], &[1.0]),
            Err(StatsError::DifferentLength { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_covariance_empty() {
        assert_eq!(covariance(&[], &[]), Err(StatsError::EmptyData));
    }

    // --- elementary reductions ---

    #[test]
    fn test_sum_precision() {
        // 1e16 + 1 − 1e16 loses the 1 under naive summation.
        assert_eq!(sum(&[1e16, 1.0, -1e16]), 1.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_min_max_range() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(min(&v), Ok(1.0));
        assert_eq!(max(&v), Ok(9.0));
        assert_eq!(range(&v), Ok(8.0));
        assert_eq!(range(&[]), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_sort_and_reverse_sort() {
        let v = [3.0, -1.0, 2.0];
        let sorted = sort(&v);
        assert_eq!(sorted, vec![-1.0, 2.0, 3.0]);
        let mut expected = sorted.clone();
        expected.reverse();
        assert_eq!(reverse_sort(&sorted), expected);
        assert!(sort(&[]).is_empty());
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(&[1.0, -2.0], 3.0), Ok(vec![3.0, -6.0]));
        assert_eq!(scale(&[1.0], 0.0), Err(StatsError::NullScaleFactor));
        assert_eq!(scale(&[], 2.0), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_normalize() {
        let z = normalize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(mean(&z).unwrap().abs() < 1e-12);
        assert!((std_dev(&z).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(normalize(&[1.0, 1.0]), Err(StatsError::NullStdDeviation));
    }
}
