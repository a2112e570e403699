//! Quartiles and the interquartile range.
//!
//! Quartiles are medians of the lower and upper halves of the sorted sample.
//! For an even size `n` the halves are `[0, n/2)` and `[n/2, n)`. For an odd
//! size, with `mid = ceil(n/2)`, the halves are `[0, mid - 1)` and
//! `[mid + 1, n)`: the middle value is left out of the lower half, and the
//! upper half starts one value past the value that follows it.

use serde::{Deserialize, Serialize};

use crate::{error::StatsError, sample::Sample};

/// Lower and upper quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// Median of the lower half.
    pub lower: f64,
    /// Median of the upper half.
    pub upper: f64,
}

impl Quartiles {
    /// The interquartile range, `upper - lower`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.upper - self.lower
    }
}

impl Sample {
    /// Computes the quartiles of the whole sample.
    ///
    /// Fails with [`StatsError::InvalidRange`] when either half is empty,
    /// which is the case for samples with fewer than two values (and for
    /// three values, where the upper half is empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use quantbin_stats::sample::Sample;
    ///
    /// let sample = Sample::new([8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    /// let quartiles = sample.quartiles().unwrap();
    /// assert_eq!(quartiles.lower, 2.5);
    /// assert_eq!(quartiles.upper, 6.5);
    /// assert_eq!(quartiles.iqr(), 4.0);
    /// ```
    pub fn quartiles(&self) -> Result<Quartiles, StatsError> {
        let n = self.len();
        let (lower, upper) = if n % 2 == 0 {
            let mid = n / 2;
            (0..mid, mid..n)
        } else {
            // Split at ceil(n/2), not floor(n/2): the middle value and the one
            // above it are both left out, so n = 3 has no upper half.
            let mid = n.div_ceil(2);
            (0..mid - 1, mid + 1..n)
        };
        Ok(Quartiles {
            lower: self.median(Some(lower))?,
            upper: self.median(Some(upper))?,
        })
    }

    /// The interquartile range of the whole sample.
    pub fn iqr(&self) -> Result<f64, StatsError> {
        Ok(self.quartiles()?.iqr())
    }
}

/// Computes the interquartile range of unsorted values.
///
/// # Examples
///
/// ```
/// use quantbin_stats::quartile::iqr;
///
/// assert_eq!(iqr(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap(), 4.0);
/// assert!(iqr(&[1.0]).is_err());
/// ```
pub fn iqr(values: &[f64]) -> Result<f64, StatsError> {
    Sample::new(values.iter().copied()).iqr()
}
