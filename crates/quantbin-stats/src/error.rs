/// Errors raised by the statistics and binning operations.
///
/// Every operation is a pure computation, so none of these are transient:
/// retrying with the same input yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// A `[start, end)` selector does not fit the sample, or selects nothing
    /// where the operation divides by its length.
    #[display("invalid range {start}..{end} for sample of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
    /// The computed bin width is not positive and finite, or cannot lay out
    /// bins over the data range.
    #[display("degenerate histogram bandwidth {bandwidth}")]
    DegenerateBandwidth { bandwidth: f64 },
    /// The operation is undefined on a sample with no values.
    #[display("operation is undefined on an empty sample")]
    EmptySample,
}

impl StatsError {
    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            StatsError::invalid_range(3, 1, 4).to_string(),
            "invalid range 3..1 for sample of length 4"
        );
        assert_eq!(
            StatsError::DegenerateBandwidth { bandwidth: 0.0 }.to_string(),
            "degenerate histogram bandwidth 0"
        );
        assert_eq!(
            StatsError::EmptySample.to_string(),
            "operation is undefined on an empty sample"
        );
    }
}
