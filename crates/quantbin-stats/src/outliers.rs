//! Trimming of extreme values.

use crate::error::StatsError;

/// Removes the `lowest` smallest and `highest` largest values.
///
/// The extremes are picked by position in a sorted copy of `values`. Each one
/// is then removed from a copy of `values` by matching the first remaining
/// occurrence of the same value, so the result keeps the caller's order.
/// When several values tie at a trimming boundary, the occurrence removed may
/// not be the one at the targeted sorted position; only the multiset of what
/// remains is determined.
///
/// Fails with [`StatsError::InvalidRange`] if `lowest + highest` exceeds the
/// number of values.
///
/// # Examples
///
/// ```
/// use quantbin_stats::outliers::remove_outliers;
///
/// let trimmed = remove_outliers(&[5.0, 1.0, 9.0, 3.0, 7.0], 1, 1).unwrap();
/// assert_eq!(trimmed, vec![5.0, 3.0, 7.0]);
/// ```
pub fn remove_outliers(
    values: &[f64],
    lowest: usize,
    highest: usize,
) -> Result<Vec<f64>, StatsError> {
    let len = values.len();
    if lowest.checked_add(highest).is_none_or(|trimmed| trimmed > len) {
        return Err(StatsError::invalid_range(
            lowest,
            len.saturating_sub(highest),
            len,
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let targets = sorted[..lowest].iter().chain(sorted[len - highest..].iter().rev());
    let mut remaining = values.to_vec();
    for &target in targets {
        if let Some(pos) = remaining.iter().position(|v| v.total_cmp(&target).is_eq()) {
            remaining.remove(pos);
        }
    }
    Ok(remaining)
}
