//! Central tendency and dispersion over unsorted values.
//!
//! The functions here take the caller's values as-is, sort a private copy and
//! delegate to the matching [`Sample`] method. A `range` selects a half-open
//! sub-range of that sorted copy; `None` selects every value. Use [`Sample`]
//! directly to sort once and compute several statistics.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{error::StatsError, sample::Sample};

/// Mean of the selected values; `0.0` for empty `values` with `range == None`.
///
/// ```
/// use quantbin_stats::descriptive::mean;
///
/// assert_eq!(mean(&[3.0, 1.0, 2.0], None).unwrap(), 2.0);
/// assert_eq!(mean(&[], None).unwrap(), 0.0);
/// ```
pub fn mean(values: &[f64], range: Option<Range<usize>>) -> Result<f64, StatsError> {
    sorted(values).mean(range)
}

/// Variance of the selected values around `mean` (or their own mean).
///
/// See [`Sample::variance`] for the denominator used on ranges that do not
/// start at index 0.
pub fn variance(
    values: &[f64],
    mean: Option<f64>,
    range: Option<Range<usize>>,
) -> Result<f64, StatsError> {
    sorted(values).variance(mean, range)
}

/// Standard deviation of the selected values; `0.0` for empty `values` with
/// `range == None`.
pub fn standard_deviation(values: &[f64], range: Option<Range<usize>>) -> Result<f64, StatsError> {
    sorted(values).standard_deviation(range)
}

/// Median of the selected values; `0.0` for empty `values` with
/// `range == None`.
///
/// ```
/// use quantbin_stats::descriptive::median;
///
/// assert_eq!(median(&[4.0, 2.0, 1.0, 3.0], None).unwrap(), 2.5);
/// assert_eq!(median(&[4.0, 2.0, 1.0, 3.0], Some(1..4)).unwrap(), 3.0);
/// ```
pub fn median(values: &[f64], range: Option<Range<usize>>) -> Result<f64, StatsError> {
    sorted(values).median(range)
}

/// The most frequent values, empty if no value repeats.
///
/// ```
/// use quantbin_stats::descriptive::modes;
///
/// assert_eq!(modes(&[1.0, 1.0, 2.0, 3.0], None).unwrap(), vec![1.0]);
/// assert!(modes(&[1.0, 2.0, 3.0], None).unwrap().is_empty());
/// ```
pub fn modes(values: &[f64], range: Option<Range<usize>>) -> Result<Vec<f64>, StatsError> {
    sorted(values).modes(range)
}

fn sorted(values: &[f64]) -> Sample {
    Sample::new(values.iter().copied())
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// The number of values.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The variance of the dataset (divided by the number of values).
    pub variance: f64,
    /// The standard deviation of the dataset.
    pub std_dev: f64,
    /// Values occurring most often; empty if no value repeats.
    pub modes: Vec<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Ok(DescriptiveStats)` - if the dataset contains at least one value
    /// * `Err(StatsError::EmptySample)` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantbin_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_sample(&Sample::new(values))
    }

    /// Computes descriptive statistics from a sorted [`Sample`].
    pub fn from_sample(sample: &Sample) -> Result<Self, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let mean = sample.mean(None)?;
        let variance = sample.variance(Some(mean), None)?;
        Ok(Self {
            count: sample.len(),
            min: sample.min()?,
            max: sample.max()?,
            mean,
            median: sample.median(None)?,
            variance,
            std_dev: variance.sqrt(),
            modes: sample.modes(None)?,
        })
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn random_values(rng: &mut Pcg32, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-1.0e3..1.0e3)).collect()
    }

    #[test]
    fn test_mean_lies_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for len in 1..50 {
            let values = random_values(&mut rng, len);
            let stats = DescriptiveStats::new(values.iter().copied()).unwrap();
            assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        }
    }

    #[test]
    fn test_dispersion_is_non_negative() {
        let mut rng = Pcg32::seed_from_u64(11);
        for len in 1..50 {
            let values = random_values(&mut rng, len);
            assert!(variance(&values, None, None).unwrap() >= 0.0);
            assert!(standard_deviation(&values, None).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_sorting_first_changes_nothing() {
        let mut rng = Pcg32::seed_from_u64(13);
        let values = random_values(&mut rng, 31);
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);

        for range in [None, Some(0..31), Some(4..20), Some(10..11)] {
            assert_eq!(mean(&values, range.clone()), mean(&sorted, range.clone()));
            assert_eq!(
                median(&values, range.clone()),
                median(&sorted, range.clone())
            );
            assert_eq!(
                variance(&values, None, range.clone()),
                variance(&sorted, None, range.clone())
            );
            assert_eq!(modes(&values, range.clone()), modes(&sorted, range));
        }
    }

    #[test]
    fn test_empty_conveniences() {
        assert_eq!(mean(&[], None).unwrap(), 0.0);
        assert_eq!(median(&[], None).unwrap(), 0.0);
        assert_eq!(standard_deviation(&[], None).unwrap(), 0.0);
        assert_eq!(variance(&[], None, None), Err(StatsError::EmptySample));
        assert_eq!(modes(&[], None), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_out_of_bounds_range() {
        let values = [1.0, 2.0, 3.0];
        let expected = Err(StatsError::InvalidRange {
            start: 2,
            end: 4,
            len: 3,
        });
        assert_eq!(mean(&values, Some(2..4)), expected);
        assert_eq!(median(&values, Some(2..4)), expected);
        assert_eq!(standard_deviation(&values, Some(2..4)), expected);
    }

    #[test]
    fn test_descriptive_stats() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 4.5);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.modes, vec![4.0]);
        assert_eq!(stats.range(), 7.0);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert_eq!(
            DescriptiveStats::new(Vec::new()),
            Err(StatsError::EmptySample)
        );
    }
}
