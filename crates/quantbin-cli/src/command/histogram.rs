use std::{ops::Range, path::PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::Args;
use quantbin_stats::{Sample, histogram::Histogram};
use serde::Serialize;

use crate::{
    command::{RuleArg, range_selector},
    util::{self, Output},
};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    /// Path to a JSON array of numbers
    pub input: PathBuf,
    /// Bin width rule (`fd` or `scott`)
    #[arg(long, default_value = "fd")]
    pub rule: RuleArg,
    /// First index of the sorted range the bin width is computed from
    #[arg(long)]
    pub start: Option<usize>,
    /// End index (exclusive) of the sorted range the bin width is computed from
    #[arg(long)]
    pub end: Option<usize>,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct HistogramReport {
    generated_at: DateTime<Utc>,
    input: PathBuf,
    sample_size: usize,
    range: Option<Range<usize>>,
    histogram: Histogram,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let HistogramArg {
        input,
        rule,
        start,
        end,
        output,
    } = arg;

    let sample = Sample::new(util::read_values_file(input)?);
    let range = range_selector(*start, *end, sample.len());
    let histogram = Histogram::from_sample(&sample, range.clone(), (*rule).into())
        .with_context(|| format!("Failed to bin values from {}", input.display()))?;

    eprintln!("Histogram ({:?})", histogram.rule);
    match histogram.bandwidth {
        Some(bandwidth) => eprintln!("  Bin width: {bandwidth:.6}"),
        None => eprintln!("  Bin width: -"),
    }
    eprintln!("  Bins:      {}", histogram.len());
    eprintln!();
    for line in render_bins(&histogram) {
        eprintln!("{line}");
    }
    eprintln!();

    let report = HistogramReport {
        generated_at: Utc::now(),
        input: input.clone(),
        sample_size: sample.len(),
        range,
        histogram,
    };
    Output::save_json(&report, output.clone())
}

fn render_bins(histogram: &Histogram) -> Vec<String> {
    let max_count = histogram
        .bins
        .iter()
        .map(|bin| bin.bin_count)
        .max()
        .unwrap_or(0);
    histogram
        .bins
        .iter()
        .map(|bin| {
            format!(
                "{:>12.4} .. {:<12.4} |{:<BAR_WIDTH$}| {}",
                bin.bin_start,
                bin.bin_stop,
                bar(bin.bin_count, max_count, BAR_WIDTH),
                bin.bin_count
            )
        })
        .collect()
}

/// A bar of `#` proportional to `count / max_count`, at least one `#` for any
/// non-zero count.
fn bar(count: usize, max_count: usize, width: usize) -> String {
    if count == 0 || max_count == 0 {
        return String::new();
    }
    let len = (count * width).div_ceil(max_count).min(width);
    "#".repeat(len)
}

#[cfg(test)]
mod tests {
    use quantbin_stats::BandwidthRule;

    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 10, 8), "");
        assert_eq!(bar(10, 10, 8), "########");
        assert_eq!(bar(5, 10, 8), "####");
        assert_eq!(bar(1, 100, 8), "#");
        assert_eq!(bar(3, 0, 8), "");
    }

    #[test]
    fn test_render_bins() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let histogram = Histogram::new(values, None, BandwidthRule::Scott).unwrap();
        let lines = render_bins(&histogram);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(&format!("|{}| 6", "#".repeat(BAR_WIDTH))));
        assert!(lines[0].ends_with("| 1"));
    }
}
