//! Descriptive statistics and data-driven histogram binning.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, median, modes, variance and standard
//!   deviation over a whole sample or a sorted sub-range of it
//! - **Quartiles**: lower/upper quartiles and the interquartile range
//! - **Bandwidth selection**: histogram bin widths from the Freedman–Diaconis
//!   rule or Scott's normal reference rule
//! - **Histogram binning**: contiguous, centered bins spanning the data
//! - **Outlier trimming**: dropping a fixed number of extreme values
//!
//! Every operation is a pure function of its input. Inputs are never
//! modified; anything that needs ordering works on a sorted copy.
//!
//! # Modules
//!
//! - [`sample`]: [`Sample`], a sorted copy of the values with all range-based statistics
//! - [`descriptive`]: free-function forms of the statistics and [`DescriptiveStats`](descriptive::DescriptiveStats)
//! - [`quartile`]: quartiles and the interquartile range
//! - [`bandwidth`]: bin width rules
//! - [`histogram`]: histogram construction
//! - [`outliers`]: trimming of extreme values
//! - [`summary`]: all of the above in one report
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use quantbin_stats::descriptive::{mean, median, modes};
//!
//! let values = [3.0, 1.0, 2.0, 2.0];
//! assert_eq!(mean(&values, None).unwrap(), 2.0);
//! assert_eq!(median(&values, None).unwrap(), 2.0);
//! assert_eq!(modes(&values, None).unwrap(), vec![2.0]);
//! ```
//!
//! ## Working on a sorted sub-range
//!
//! ```
//! use quantbin_stats::Sample;
//!
//! let sample = Sample::new([6.0, 1.0, 5.0, 2.0, 4.0, 3.0]);
//! // [1, 2, 3]
//! assert_eq!(sample.median(Some(0..3)).unwrap(), 2.0);
//! // [4, 5, 6]
//! assert_eq!(sample.mean(Some(3..6)).unwrap(), 5.0);
//! ```
//!
//! ## Building a histogram
//!
//! ```
//! use quantbin_stats::{BandwidthRule, histogram::Histogram};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let histogram = Histogram::new(values, None, BandwidthRule::select(true)).unwrap();
//! assert_eq!(histogram.bins.len(), 2);
//! assert_eq!(histogram.bins[0].bin_stop, histogram.bins[1].bin_start);
//! ```
//!
//! ## Trimming outliers
//!
//! ```
//! use quantbin_stats::outliers::remove_outliers;
//!
//! let trimmed = remove_outliers(&[5.0, 1.0, 9.0, 3.0, 7.0], 1, 1).unwrap();
//! assert_eq!(trimmed, vec![5.0, 3.0, 7.0]);
//! ```

pub use self::{bandwidth::BandwidthRule, error::StatsError, sample::Sample};

pub mod bandwidth;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod outliers;
pub mod quartile;
pub mod sample;
pub mod summary;
