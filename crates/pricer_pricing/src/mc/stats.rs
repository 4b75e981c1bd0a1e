//! Streaming sample statistics.
//!
//! [`RunningStats`] accumulates count, mean and the sum of squared
//! deviations (M2) with Welford's update, and combines partial results with
//! the pairwise formula of Chan et al. Merging is deterministic for a fixed
//! merge order, which the simulator relies on for reproducibility.

/// Count, mean and M2 of a stream of samples.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::RunningStats;
///
/// let mut left = RunningStats::new();
/// left.push(1.0);
/// left.push(2.0);
/// let mut right = RunningStats::new();
/// right.push(3.0);
///
/// left.merge(&right);
/// assert_eq!(left.count(), 3);
/// assert_eq!(left.mean(), 2.0);
/// assert_eq!(left.variance(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    /// Empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one sample.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Folds `other` into `self`.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.count += other.count;
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean (NaN when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Unbiased sample variance (NaN for fewer than two samples).
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Standard error of the mean, `sd / √n` (NaN for fewer than two samples).
    #[inline]
    pub fn std_error(&self) -> f64 {
        (self.variance() / self.count as f64).sqrt()
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert!(stats.mean().is_nan());
        assert!(stats.variance().is_nan());
        assert!(stats.std_error().is_nan());
    }

    #[test]
    fn test_single_sample() {
        let stats: RunningStats = [4.5].into_iter().collect();
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.mean(), 4.5);
        assert!(stats.variance().is_nan());
        assert!(stats.std_error().is_nan());
    }

    #[test]
    fn test_known_values() {
        let stats: RunningStats = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_relative_eq!(stats.mean(), 5.0, epsilon = 1e-12);
        // Population variance 4, unbiased 32/7
        assert_relative_eq!(stats.variance(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(stats.std_error(), (32.0 / 7.0 / 8.0_f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_samples_have_zero_variance() {
        let stats: RunningStats = std::iter::repeat(3.25).take(1000).collect();
        assert_eq!(stats.mean(), 3.25);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.std_error(), 0.0);
    }

    #[test]
    fn test_merge_with_empty() {
        let full: RunningStats = [1.0, 2.0, 3.0].into_iter().collect();

        let mut left = RunningStats::new();
        left.merge(&full);
        assert_eq!(left, full);

        let mut right = full;
        right.merge(&RunningStats::new());
        assert_eq!(right, full);
    }

    proptest! {
        #[test]
        fn prop_merge_matches_single_pass(
            xs in prop::collection::vec(-1e3f64..1e3, 2..200),
            split in 0usize..200,
        ) {
            let split = split.min(xs.len());
            let whole: RunningStats = xs.iter().copied().collect();

            let mut left: RunningStats = xs[..split].iter().copied().collect();
            let right: RunningStats = xs[split..].iter().copied().collect();
            left.merge(&right);

            prop_assert_eq!(left.count(), whole.count());
            prop_assert!((left.mean() - whole.mean()).abs() <= 1e-9 * (1.0 + whole.mean().abs()));
            prop_assert!(
                (left.variance() - whole.variance()).abs() <= 1e-8 * (1.0 + whole.variance())
            );
        }
    }
}
