/// Computes the arithmetic mean of `values`.
///
/// Returns `0.0` for an empty slice instead of `NaN`, so callers never have to
/// special-case an empty dataset.
///
/// # Examples
///
/// ```
/// # use cpkit_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the unbiased sample standard deviation around a precomputed `mean`.
///
/// Uses Bessel's correction (divisor `n - 1`). Returns `0.0` when there are
/// fewer than two values, since the sample variance is undefined there.
///
/// # Examples
///
/// ```
/// # use cpkit_stats::descriptive::{mean, sample_std_dev};
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let std_dev = sample_std_dev(&values, mean(&values));
/// assert!((std_dev - 2.138_089_935_299_395).abs() < 1e-12);
///
/// assert_eq!(sample_std_dev(&[42.0], 42.0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Descriptive statistics summarizing a dataset.
///
/// Dispersion is reported as the sample (Bessel-corrected) standard deviation,
/// which is what capability indices are computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use cpkit_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, -2.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.min, -2.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.range(), 7.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let min = values.iter().copied().min_by(f64::total_cmp)?;
        let max = values.iter().copied().max_by(f64::total_cmp)?;
        let mean = mean(&values);
        let std_dev = sample_std_dev(&values, mean);
        Some(Self {
            count: values.len(),
            min,
            max,
            mean,
            std_dev,
        })
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_mean_is_sum_over_count() {
        let values = [0.5, -1.5, 4.0, 2.0];
        assert!((mean(&values) - 1.25).abs() < EPS);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_std_dev_uses_bessel_correction() {
        // Deviations from mean 2.0 are -1, 0, 1 -> sum of squares 2, divisor 2.
        let values = [1.0, 2.0, 3.0];
        assert!((sample_std_dev(&values, 2.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_sample_std_dev_short_inputs_are_zero() {
        assert_eq!(sample_std_dev(&[], 0.0), 0.0);
        assert_eq!(sample_std_dev(&[3.5], 3.5), 0.0);
    }

    #[test]
    fn test_sample_std_dev_is_non_negative() {
        let datasets: [&[f64]; 4] = [
            &[0.0, 0.0, 0.0],
            &[-1.0, -2.0, -3.0],
            &[1e-9, -1e-9],
            &[100.0, 0.001, -50.0, 7.0],
        ];
        for values in datasets {
            assert!(sample_std_dev(values, mean(values)) >= 0.0);
        }
    }

    #[test]
    fn test_sample_std_dev_shift_invariant() {
        let values = [0.001, -0.002, 0.0035, 0.0, -0.0007];
        let base = sample_std_dev(&values, mean(&values));

        let shift = 12.5;
        let shifted = values.iter().map(|v| v + shift).collect::<Vec<_>>();
        let shifted_std_dev = sample_std_dev(&shifted, mean(&values) + shift);

        assert!((base - shifted_std_dev).abs() < 1e-9);
    }

    #[test]
    fn test_descriptive_stats_empty_is_none() {
        assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    }

    #[test]
    fn test_descriptive_stats_single_value() {
        let stats = DescriptiveStats::new([0.25]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 0.25);
        assert_eq!(stats.max, 0.25);
        assert_eq!(stats.mean, 0.25);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range(), 0.0);
    }

    #[test]
    fn test_descriptive_stats_matches_free_functions() {
        let values = [4.0, 1.0, 3.0, 2.0];
        let stats = DescriptiveStats::new(values).unwrap();
        assert!((stats.mean - mean(&values)).abs() < EPS);
        assert!((stats.std_dev - sample_std_dev(&values, 2.5)).abs() < EPS);
    }
}
