use std::ops::Range;

use crate::error::StatsError;

/// An owned, ascending-sorted copy of a finite set of `f64` values.
///
/// Input order carries no meaning for any statistic, so a `Sample` sorts once
/// on construction and every operation works on that sorted copy. Range
/// selectors (`[start, end)`) index into the sorted values, which makes every
/// result independent of the order the caller supplied.
///
/// Range-taking methods accept `Option<Range<usize>>`; `None` selects the
/// full sample.
///
/// # Examples
///
/// ```
/// use quantbin_stats::sample::Sample;
///
/// let sample = Sample::new([4.0, 1.0, 3.0, 2.0]);
/// assert_eq!(sample.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(sample.mean(None).unwrap(), 2.5);
/// assert_eq!(sample.median(Some(0..3)).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    sorted: Vec<f64>,
}

impl Sample {
    /// Collects and sorts the given values.
    ///
    /// Sorting uses [`f64::total_cmp`], so `NaN` values sort after every
    /// finite value instead of poisoning the comparison.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Wraps values that are already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: Vec<f64>) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );
        Self {
            sorted: sorted_values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The sorted values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.sorted
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.sorted
    }

    pub fn min(&self) -> Result<f64, StatsError> {
        self.sorted.first().copied().ok_or(StatsError::EmptySample)
    }

    pub fn max(&self) -> Result<f64, StatsError> {
        self.sorted.last().copied().ok_or(StatsError::EmptySample)
    }

    /// Resolves a range selector against this sample.
    ///
    /// `None` selects the whole sample. The resolved range must lie within
    /// the sample and select at least one value.
    pub fn checked_range(&self, range: Option<Range<usize>>) -> Result<Range<usize>, StatsError> {
        let len = self.len();
        let range = range.unwrap_or(0..len);
        if range.start >= range.end || range.end > len {
            return Err(StatsError::invalid_range(range.start, range.end, len));
        }
        Ok(range)
    }

    /// Returns the sorted values selected by `range`.
    pub fn select(&self, range: Option<Range<usize>>) -> Result<&[f64], StatsError> {
        let range = self.checked_range(range)?;
        Ok(&self.sorted[range])
    }

    /// Arithmetic mean of the selected values.
    ///
    /// The full-sample form (`range == None`) returns `0.0` for an empty
    /// sample; an explicit range must select at least one value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantbin_stats::sample::Sample;
    /// assert_eq!(Sample::new([1.0, 2.0, 6.0]).mean(None).unwrap(), 3.0);
    /// assert_eq!(Sample::default().mean(None).unwrap(), 0.0);
    /// assert!(Sample::default().mean(Some(0..0)).is_err());
    /// ```
    pub fn mean(&self, range: Option<Range<usize>>) -> Result<f64, StatsError> {
        if range.is_none() && self.is_empty() {
            return Ok(0.0);
        }
        Ok(mean_of(self.select(range)?))
    }

    /// Variance of the selected values around `mean`.
    ///
    /// When `mean` is `None` the mean of the same selection is used.
    ///
    /// The denominator is the number of selected values, except for ranges
    /// that do not start at index 0, which divide by one less. Callers that
    /// need a uniform population or sample variance must account for this.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantbin_stats::sample::Sample;
    /// let sample = Sample::new([1.0, 2.0, 3.0, 4.0, 5.0]);
    /// // Leading range: sum of squares 2.0 / 3
    /// assert!((sample.variance(None, Some(0..3)).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    /// // Non-leading range: sum of squares 2.0 / (3 - 1)
    /// assert_eq!(sample.variance(None, Some(2..5)).unwrap(), 1.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn variance(
        &self,
        mean: Option<f64>,
        range: Option<Range<usize>>,
    ) -> Result<f64, StatsError> {
        if range.is_none() && self.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let range = self.checked_range(range)?;
        let values = &self.sorted[range.clone()];
        let mean = mean.unwrap_or_else(|| mean_of(values));
        let sum_of_squares = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();

        let count = if range.start > 0 {
            values.len() - 1
        } else {
            values.len()
        };
        if count == 0 {
            return Err(StatsError::invalid_range(range.start, range.end, self.len()));
        }
        Ok(sum_of_squares / count as f64)
    }

    /// Square root of [`Self::variance`] around the mean of the same range.
    ///
    /// The full-sample form returns `0.0` for an empty sample.
    pub fn standard_deviation(&self, range: Option<Range<usize>>) -> Result<f64, StatsError> {
        if range.is_none() && self.is_empty() {
            return Ok(0.0);
        }
        Ok(self.variance(None, range)?.sqrt())
    }

    /// Median of the selected values.
    ///
    /// Even-sized selections average the two middle values. The full-sample
    /// form returns `0.0` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantbin_stats::sample::Sample;
    /// assert_eq!(Sample::new([4.0, 1.0, 3.0, 2.0]).median(None).unwrap(), 2.5);
    /// assert_eq!(Sample::new([3.0, 1.0, 2.0]).median(None).unwrap(), 2.0);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn median(&self, range: Option<Range<usize>>) -> Result<f64, StatsError> {
        if range.is_none() && self.is_empty() {
            return Ok(0.0);
        }
        let values = self.select(range)?;
        let size = values.len();
        if size % 2 == 0 {
            let mid = size / 2;
            Ok((values[mid - 1] + values[mid]) / 2.0)
        } else {
            // f64::round rounds half away from zero: 2.5 -> 3
            let mid = (size as f64 / 2.0).round() as usize;
            Ok(values[mid - 1])
        }
    }

    /// Every value whose occurrence count equals the highest count in the
    /// selection, in ascending order.
    ///
    /// A selection in which no value repeats has no modes, so the result is
    /// empty rather than every value. The full-sample form fails with
    /// [`StatsError::EmptySample`] on an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantbin_stats::sample::Sample;
    /// assert_eq!(Sample::new([1.0, 3.0, 1.0, 2.0]).modes(None).unwrap(), vec![1.0]);
    /// assert!(Sample::new([1.0, 2.0, 3.0]).modes(None).unwrap().is_empty());
    /// ```
    pub fn modes(&self, range: Option<Range<usize>>) -> Result<Vec<f64>, StatsError> {
        if range.is_none() && self.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let values = self.select(range)?;
        let max_occurrence = values
            .chunk_by(|a, b| a == b)
            .map(<[f64]>::len)
            .max()
            .unwrap_or(0);
        if max_occurrence <= 1 {
            return Ok(vec![]);
        }
        Ok(values
            .chunk_by(|a, b| a == b)
            .filter(|group| group.len() == max_occurrence)
            .map(|group| group[0])
            .collect())
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::new(iter)
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[expect(clippy::cast_precision_loss)]
fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_without_touching_input() {
        let input = vec![3.0, -1.0, 2.0];
        let sample = Sample::new(input.iter().copied());
        assert_eq!(sample.as_slice(), &[-1.0, 2.0, 3.0]);
        assert_eq!(input, vec![3.0, -1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Sample::from_sorted(vec![2.0, 1.0]);
    }

    #[test]
    fn test_checked_range() {
        let sample = Sample::new([1.0, 2.0, 3.0]);
        assert_eq!(sample.checked_range(None).unwrap(), 0..3);
        assert_eq!(sample.checked_range(Some(1..3)).unwrap(), 1..3);
        assert_eq!(
            sample.checked_range(Some(1..4)),
            Err(StatsError::invalid_range(1, 4, 3))
        );
        assert_eq!(
            sample.checked_range(Some(2..2)),
            Err(StatsError::invalid_range(2, 2, 3))
        );
        let reversed = Range { start: 2, end: 1 };
        assert!(sample.checked_range(Some(reversed)).is_err());
    }

    #[test]
    fn test_min_max() {
        let sample = Sample::new([5.0, -2.0, 9.5]);
        assert_eq!(sample.min().unwrap(), -2.0);
        assert_eq!(sample.max().unwrap(), 9.5);
        assert_eq!(Sample::default().min(), Err(StatsError::EmptySample));
        assert_eq!(Sample::default().max(), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_mean() {
        let sample = Sample::new([4.0, 1.0, 3.0, 2.0]);
        assert_eq!(sample.mean(None).unwrap(), 2.5);
        assert_eq!(sample.mean(Some(0..2)).unwrap(), 1.5);
        assert_eq!(sample.mean(Some(2..4)).unwrap(), 3.5);
        assert!(sample.mean(Some(0..5)).is_err());
    }

    #[test]
    fn test_mean_empty() {
        let sample = Sample::default();
        assert_eq!(sample.mean(None).unwrap(), 0.0);
        assert_eq!(
            sample.mean(Some(0..0)),
            Err(StatsError::invalid_range(0, 0, 0))
        );
    }

    #[test]
    fn test_variance_leading_range_divides_by_count() {
        let sample = Sample::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(sample.variance(None, None).unwrap(), 4.0);
        assert_eq!(sample.variance(Some(5.0), None).unwrap(), 4.0);
    }

    #[test]
    fn test_variance_non_leading_range_divides_by_count_minus_one() {
        let sample = Sample::new([0.0, 1.0, 2.0, 3.0]);
        // [1, 2, 3], mean 2, squares sum 2, denominator 2
        assert_eq!(sample.variance(None, Some(1..4)).unwrap(), 1.0);
        // explicit mean is used as given
        assert_eq!(sample.variance(Some(0.0), Some(1..4)).unwrap(), 7.0);
    }

    #[test]
    fn test_variance_errors() {
        assert_eq!(
            Sample::default().variance(None, None),
            Err(StatsError::EmptySample)
        );
        // single value past the start leaves a zero denominator
        let sample = Sample::new([1.0, 2.0]);
        assert_eq!(
            sample.variance(None, Some(1..2)),
            Err(StatsError::invalid_range(1, 2, 2))
        );
        assert_eq!(sample.variance(None, Some(0..1)).unwrap(), 0.0);
    }

    #[test]
    fn test_standard_deviation() {
        let sample = Sample::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(sample.standard_deviation(None).unwrap(), 2.0);
        assert_eq!(Sample::default().standard_deviation(None).unwrap(), 0.0);
        assert!(Sample::default().standard_deviation(Some(0..1)).is_err());
    }

    #[test]
    fn test_median() {
        assert_eq!(Sample::new([1.0, 2.0, 3.0, 4.0]).median(None).unwrap(), 2.5);
        assert_eq!(Sample::new([1.0, 2.0, 3.0]).median(None).unwrap(), 2.0);
        assert_eq!(Sample::new([7.0]).median(None).unwrap(), 7.0);
        assert_eq!(
            Sample::new([9.0, 1.0, 5.0, 3.0, 7.0]).median(None).unwrap(),
            5.0
        );
        let sample = Sample::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(sample.median(Some(0..3)).unwrap(), 2.0);
        assert_eq!(sample.median(Some(3..6)).unwrap(), 5.0);
        assert_eq!(sample.median(Some(1..5)).unwrap(), 3.5);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(Sample::default().median(None).unwrap(), 0.0);
        assert!(Sample::new([1.0]).median(Some(1..1)).is_err());
    }

    #[test]
    fn test_modes() {
        assert_eq!(
            Sample::new([1.0, 1.0, 2.0, 3.0]).modes(None).unwrap(),
            vec![1.0]
        );
        assert_eq!(
            Sample::new([3.0, 1.0, 3.0, 1.0, 2.0]).modes(None).unwrap(),
            vec![1.0, 3.0]
        );
        assert!(Sample::new([1.0, 2.0, 3.0]).modes(None).unwrap().is_empty());
        assert_eq!(Sample::new([4.0, 4.0]).modes(None).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_modes_on_sub_range() {
        let sample = Sample::new([1.0, 1.0, 2.0, 3.0, 3.0, 3.0]);
        assert_eq!(sample.modes(None).unwrap(), vec![3.0]);
        assert_eq!(sample.modes(Some(0..3)).unwrap(), vec![1.0]);
        assert!(sample.modes(Some(1..4)).unwrap().is_empty());
    }

    #[test]
    fn test_modes_empty() {
        assert_eq!(Sample::default().modes(None), Err(StatsError::EmptySample));
        assert!(Sample::default().modes(Some(0..0)).is_err());
    }

    #[test]
    fn test_collect_into_sample() {
        let sample = [3.0, 1.0, 2.0].into_iter().collect::<Sample>();
        assert_eq!(sample.into_vec(), vec![1.0, 2.0, 3.0]);
    }
}
