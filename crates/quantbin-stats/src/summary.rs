use serde::{Deserialize, Serialize};

use crate::{
    bandwidth::BandwidthRule, descriptive::DescriptiveStats, error::StatsError,
    histogram::Histogram, quartile::Quartiles, sample::Sample,
};

/// Summary of a dataset combining several measures.
///
/// This structure provides a complete overview of a dataset by combining:
/// - Descriptive statistics (mean, median, variance, modes, etc.)
/// - Quartiles, when the dataset is large enough to have them
/// - A histogram with a data-driven bin width
///
/// All parts are computed from a single sorted copy of the values.
///
/// # Examples
///
/// ```
/// use quantbin_stats::{bandwidth::BandwidthRule, summary::SummaryStats};
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let summary = SummaryStats::new(values, BandwidthRule::FreedmanDiaconis).unwrap();
///
/// assert_eq!(summary.stats.mean, 4.5);
/// assert_eq!(summary.iqr(), Some(4.0));
/// assert_eq!(summary.histogram.unwrap().bins.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Basic descriptive statistics for the dataset.
    pub stats: DescriptiveStats,
    /// Lower and upper quartiles, `None` if the dataset is too small.
    pub quartiles: Option<Quartiles>,
    /// Histogram of the dataset, `None` if no positive bin width exists
    /// (e.g. all values are equal).
    pub histogram: Option<Histogram>,
}

impl SummaryStats {
    /// Computes a summary from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Ok(SummaryStats)` - if the dataset contains at least one value
    /// * `Err(StatsError::EmptySample)` - if the dataset is empty
    pub fn new<I>(values: I, rule: BandwidthRule) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_sample(&Sample::new(values), rule)
    }

    /// Computes a summary from a sorted [`Sample`].
    ///
    /// Parts that are undefined for the given data are left out instead of
    /// failing the whole summary.
    pub fn from_sample(sample: &Sample, rule: BandwidthRule) -> Result<Self, StatsError> {
        let stats = DescriptiveStats::from_sample(sample)?;
        let quartiles = sample.quartiles().ok();
        let histogram = Histogram::from_sample(sample, None, rule).ok();
        Ok(Self {
            stats,
            quartiles,
            histogram,
        })
    }

    /// The interquartile range, if quartiles are available.
    #[must_use]
    pub fn iqr(&self) -> Option<f64> {
        self.quartiles.as_ref().map(Quartiles::iqr)
    }
}
