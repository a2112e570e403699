use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::Args;
use quantbin_stats::{Sample, summary::SummaryStats};
use serde::Serialize;

use crate::{
    command::RuleArg,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Path to a JSON array of numbers
    pub input: PathBuf,
    /// Bin width rule for the histogram (`fd` or `scott`)
    #[arg(long, default_value = "fd")]
    pub rule: RuleArg,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct SummaryReport {
    generated_at: DateTime<Utc>,
    input: PathBuf,
    summary: SummaryStats,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let SummaryArg {
        input,
        rule,
        output,
    } = arg;

    let sample = Sample::new(util::read_values_file(input)?);
    let summary = SummaryStats::from_sample(&sample, (*rule).into())
        .with_context(|| format!("Failed to summarize values from {}", input.display()))?;
    print_summary(&summary);

    let report = SummaryReport {
        generated_at: Utc::now(),
        input: input.clone(),
        summary,
    };
    Output::save_json(&report, output.clone())
}

fn print_summary(summary: &SummaryStats) {
    let stats = &summary.stats;
    eprintln!("Summary:");
    eprintln!("  Count:    {}", stats.count);
    eprintln!("  Min:      {:.4}", stats.min);
    eprintln!("  Max:      {:.4}", stats.max);
    eprintln!("  Mean:     {:.4}", stats.mean);
    eprintln!("  Median:   {:.4}", stats.median);
    eprintln!("  Variance: {:.4}", stats.variance);
    eprintln!("  Std dev:  {:.4}", stats.std_dev);
    if stats.modes.is_empty() {
        eprintln!("  Modes:    (none)");
    } else {
        eprintln!("  Modes:    {:?}", stats.modes);
    }
    match &summary.quartiles {
        Some(quartiles) => {
            eprintln!("  Q1:       {:.4}", quartiles.lower);
            eprintln!("  Q3:       {:.4}", quartiles.upper);
            eprintln!("  IQR:      {:.4}", quartiles.iqr());
        }
        None => eprintln!("  Quartiles: not enough values"),
    }
    match &summary.histogram {
        Some(histogram) => eprintln!(
            "  Histogram: {} bins ({:?})",
            histogram.len(),
            histogram.rule
        ),
        None => eprintln!("  Histogram: no positive bin width"),
    }
}
