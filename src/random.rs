//! Seeded random permutation with fixed positions.
//!
//! Provides seeded RNG construction and an exclusion-aware Fisher-Yates
//! shuffle that leaves a chosen set of positions untouched.
//!
//! # Reproducibility
//!
//! Every shuffle draws from a generator built from an explicit seed (see
//! [`ShuffleConfig`]); there is no global RNG state. The underlying
//! algorithm (SmallRng) is deterministic for a given seed on the same
//! platform. Seed [`ENTROPY_SEED`] opts into a fresh OS-derived seed and
//! is the only non-reproducible mode.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Seed value meaning "derive a fresh seed from the OS entropy source".
pub const ENTROPY_SEED: u64 = 0;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++ on 64-bit targets).
///
/// # Examples
/// ```
/// use u_descriptive::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Configuration for [`shuffle_with_exclusion`].
///
/// Has no `Default`; the caller always picks the seed.
///
/// # Examples
/// ```
/// use u_descriptive::random::ShuffleConfig;
/// let config = ShuffleConfig::new(3).with_excluded([1, 2, 7]);
/// assert!(config.is_deterministic());
/// assert_eq!(config.excluded_indices.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Generator seed. [`ENTROPY_SEED`] draws a fresh seed per call.
    pub seed: u64,
    /// Positions that keep their value. Indices past the end are ignored.
    #[serde(default)]
    pub excluded_indices: BTreeSet<usize>,
}

impl ShuffleConfig {
    /// Reproducible shuffle with the given seed and no exclusions.
    ///
    /// Passing [`ENTROPY_SEED`] is equivalent to [`ShuffleConfig::from_entropy`].
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            excluded_indices: BTreeSet::new(),
        }
    }

    /// Non-reproducible shuffle seeded from the OS on every call.
    pub fn from_entropy() -> Self {
        Self::new(ENTROPY_SEED)
    }

    /// Adds one position to the exclusion set.
    pub fn exclude(mut self, index: usize) -> Self {
        self.excluded_indices.insert(index);
        self
    }

    /// Adds every position yielded by `indices` to the exclusion set.
    pub fn with_excluded<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.excluded_indices.extend(indices);
        self
    }

    pub fn is_deterministic(&self) -> bool {
        self.seed != ENTROPY_SEED
    }

    fn rng(&self) -> SmallRng {
        if self.is_deterministic() {
            create_rng(self.seed)
        } else {
            SmallRng::from_os_rng()
        }
    }
}

/// Shuffles `slice` in place, keeping every excluded position fixed.
///
/// Builds the generator from `config` and delegates to
/// [`shuffle_with_exclusion_rng`].
///
/// # Guarantees
/// - The result is a permutation of the input multiset.
/// - Every excluded position holds its original value.
/// - For a fixed seed and exclusion set the result is reproducible.
///
/// # Examples
/// ```
/// use u_descriptive::random::{shuffle_with_exclusion, ShuffleConfig};
/// let mut v: Vec<u32> = (0..10).collect();
/// let config = ShuffleConfig::new(3).with_excluded([1, 2, 7]);
/// shuffle_with_exclusion(&mut v, &config);
/// assert_eq!((v[1], v[2], v[7]), (1, 2, 7));
/// let mut sorted = v.clone();
/// sorted.sort();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>());
/// ```
pub fn shuffle_with_exclusion<T>(slice: &mut [T], config: &ShuffleConfig) {
    tracing::trace!(
        len = slice.len(),
        seed = config.seed,
        excluded = config.excluded_indices.len(),
        "exclusion-aware shuffle"
    );
    let mut rng = config.rng();
    shuffle_with_exclusion_rng(slice, &config.excluded_indices, &mut rng);
}

/// Exclusion-aware Fisher-Yates shuffle driven by a caller-supplied RNG.
///
/// # Algorithm
/// 1. Collect the valid positions `0..n` not in `excluded`, once.
/// 2. Walk `i` from `n−1` down to `1`. Excluded positions are skipped;
///    for every other `i`, draw `j` uniformly from the valid positions
///    and swap `i` with `j`.
///
/// Excluded positions are never a swap source or destination, so they
/// keep their values. Unlike the classic Durstenfeld variant, `j` ranges
/// over all valid positions rather than `0..=i`.
///
/// # Complexity
/// Time: O(n), Space: O(n) for the valid-position table
pub fn shuffle_with_exclusion_rng<T, R: Rng>(
    slice: &mut [T],
    excluded: &BTreeSet<usize>,
    rng: &mut R,
) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    let valid: Vec<usize> = (0..n).filter(|i| !excluded.contains(i)).collect();
    if valid.is_empty() {
        return;
    }
    for i in (1..n).rev() {
        if excluded.contains(&i) {
            continue;
        }
        let j = valid[rng.random_range(0..valid.len())];
        slice.swap(i, j);
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn shuffle_is_permutation_and_keeps_exclusions(
            seed in 1_u64..10000,
            data in proptest::collection::vec(0_i32..1000, 0..50),
            excluded in proptest::collection::btree_set(0_usize..60, 0..10),
        ) {
            let mut shuffled = data.clone();
            let config = ShuffleConfig { seed, excluded_indices: excluded.clone() };
            shuffle_with_exclusion(&mut shuffled, &config);

            for &i in excluded.iter().filter(|&&i| i < data.len()) {
                prop_assert_eq!(shuffled[i], data[i]);
            }

            let mut sorted_orig = data.clone();
            let mut sorted_shuf = shuffled;
            sorted_orig.sort();
            sorted_shuf.sort();
            prop_assert_eq!(sorted_orig, sorted_shuf);
        }

        #[test]
        fn shuffle_is_reproducible(
            seed in 1_u64..10000,
            data in proptest::collection::vec(0_i32..1000, 0..50),
        ) {
            let config = ShuffleConfig::new(seed).exclude(0);
            let mut a = data.clone();
            let mut b = data;
            shuffle_with_exclusion(&mut a, &config);
            shuffle_with_exclusion(&mut b, &config);
            prop_assert_eq!(a, b);
        }
    }
}
