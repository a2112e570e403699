use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{bandwidth::BandwidthRule, error::StatsError, sample::Sample};

/// Upper limit on the number of bins a histogram may have.
///
/// A bin width that would need more bins than this to cover the data range
/// is rejected as [`StatsError::DegenerateBandwidth`].
pub const MAX_BINS: usize = 1 << 20;

/// A histogram whose bin width is chosen from the data.
///
/// The bin width `h` comes from a [`BandwidthRule`] applied to a range of
/// the sorted sample, while the bins always span the full data range
/// `[min, max]`. The number of bins is `k = ceil((max - min) / h)` and the
/// grid is centered on the data, so the slack `h * k - (max - min)` is split
/// evenly below `min` and above `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The rule the bin width was derived with.
    pub rule: BandwidthRule,
    /// The bin width, or `None` for a histogram of an empty sample.
    pub bandwidth: Option<f64>,
    /// Contiguous bins in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single histogram bin.
///
/// `bin_count` is the number of values strictly between `bin_start` and
/// `bin_stop`. A value that falls exactly on a bin edge is counted in
/// neither neighbouring bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin.
    pub bin_start: f64,
    /// Upper edge of the bin, equal to the next bin's `bin_start`.
    pub bin_stop: f64,
    /// Midpoint of the bin.
    pub x_value: f64,
    /// Number of values strictly inside the bin.
    pub bin_count: usize,
}

impl HistogramBin {
    fn new(bin_start: f64, bin_stop: f64, sorted_values: &[f64]) -> Self {
        Self {
            bin_start,
            bin_stop,
            x_value: (bin_start + bin_stop) / 2.0,
            bin_count: count_strictly_between(sorted_values, bin_start, bin_stop),
        }
    }

    /// Returns `true` if `value` lies strictly inside this bin.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.bin_start < value && value < self.bin_stop
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bin_stop - self.bin_start
    }
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points. They are collected and sorted internally.
    /// * `range` - The sorted sub-range the bin width is derived from; `None`
    ///   selects every value.
    /// * `rule` - How the bin width is derived.
    ///
    /// # Returns
    ///
    /// * `Ok(Histogram)` - with no bins if `values` is empty and `range` is `None`
    /// * `Err(StatsError::InvalidRange)` - if `range` does not fit the values
    /// * `Err(StatsError::DegenerateBandwidth)` - if the bin width is not
    ///   positive, the data range is not finite, covering it would take more
    ///   than [`MAX_BINS`] bins, or the width vanishes next to the bin edges
    ///
    /// # Examples
    ///
    /// ```
    /// use quantbin_stats::{bandwidth::BandwidthRule, histogram::Histogram};
    ///
    /// let values = [2.0, 9.0, 4.0, 5.0, 4.0, 7.0, 4.0, 5.0];
    /// let histogram = Histogram::new(values, None, BandwidthRule::Scott).unwrap();
    /// let counts = histogram.bins.iter().map(|bin| bin.bin_count).collect::<Vec<_>>();
    /// assert_eq!(counts, vec![1, 6, 1]);
    /// ```
    pub fn new<I>(
        values: I,
        range: Option<Range<usize>>,
        rule: BandwidthRule,
    ) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_sample(&Sample::new(values), range, rule)
    }

    /// Creates a histogram from an already sorted [`Sample`].
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_sample(
        sample: &Sample,
        range: Option<Range<usize>>,
        rule: BandwidthRule,
    ) -> Result<Self, StatsError> {
        if sample.is_empty() && range.is_none() {
            return Ok(Self {
                rule,
                bandwidth: None,
                bins: vec![],
            });
        }

        let bandwidth = rule.bandwidth(sample, range)?;

        // Bin edges span the whole sample, whatever range the width came from.
        let min = sample.min()?;
        let max = sample.max()?;
        let data_range = max - min;
        let num_bins = (data_range / bandwidth).ceil();
        if !num_bins.is_finite() || num_bins > MAX_BINS as f64 {
            return Err(StatsError::DegenerateBandwidth { bandwidth });
        }
        let num_bins = num_bins as usize;

        let bin_offset = (bandwidth * num_bins as f64 - data_range) / 2.0;
        let sorted_values = sample.as_slice();

        let mut bins = Vec::with_capacity(num_bins);
        let mut bin_start = min - bin_offset;
        for _ in 0..num_bins {
            let bin_stop = bin_start + bandwidth;
            // width lost to rounding at this magnitude
            if bin_stop <= bin_start {
                return Err(StatsError::DegenerateBandwidth { bandwidth });
            }
            let bin = HistogramBin::new(bin_start, bin_stop, sorted_values);
            bin_start = bin.bin_stop;
            bins.push(bin);
        }

        Ok(Self {
            rule,
            bandwidth: Some(bandwidth),
            bins,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.bin_count).sum()
    }

    /// The span covered by all bins, `None` if there are no bins.
    #[must_use]
    pub fn span(&self) -> Option<Range<f64>> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        Some(first.bin_start..last.bin_stop)
    }
}

/// Computes the bins of unsorted values.
///
/// Shorthand for [`Histogram::new`] when only the bins are needed. An empty
/// `values` with `range == None` yields no bins rather than an error.
///
/// # Examples
///
/// ```
/// use quantbin_stats::{bandwidth::BandwidthRule, histogram::histogram_bins};
///
/// let bins = histogram_bins(&[], None, BandwidthRule::FreedmanDiaconis).unwrap();
/// assert!(bins.is_empty());
///
/// let err = histogram_bins(&[3.0; 5], None, BandwidthRule::Scott);
/// assert!(err.is_err());
/// ```
pub fn histogram_bins(
    values: &[f64],
    range: Option<Range<usize>>,
    rule: BandwidthRule,
) -> Result<Vec<HistogramBin>, StatsError> {
    Ok(Histogram::new(values.iter().copied(), range, rule)?.bins)
}

fn count_strictly_between(sorted_values: &[f64], start: f64, stop: f64) -> usize {
    let lower = sorted_values.partition_point(|&v| v <= start);
    let upper = sorted_values.partition_point(|&v| v < stop);
    upper.saturating_sub(lower)
}
