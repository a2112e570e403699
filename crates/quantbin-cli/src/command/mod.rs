use std::ops::Range;

use clap::{Parser, Subcommand};
use quantbin_stats::BandwidthRule;

use self::{generate::GenerateArg, histogram::HistogramArg, summary::SummaryArg, trim::TrimArg};

mod generate;
mod histogram;
mod summary;
mod trim;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print descriptive statistics, quartiles and a histogram of a sample
    Summary(#[clap(flatten)] SummaryArg),
    /// Bin a sample with a data-driven bin width
    Histogram(#[clap(flatten)] HistogramArg),
    /// Drop the lowest and highest values of a sample
    Trim(#[clap(flatten)] TrimArg),
    /// Generate normally distributed sample data
    Generate(#[clap(flatten)] GenerateArg),
}

/// Bin width rule as given on the command line
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum RuleArg {
    /// Freedman–Diaconis
    #[default]
    Fd,
    /// Scott's normal reference rule
    Scott,
}

impl From<RuleArg> for BandwidthRule {
    fn from(rule: RuleArg) -> Self {
        BandwidthRule::select(rule == RuleArg::Fd)
    }
}

/// Combines optional `--start`/`--end` flags into a range selector.
///
/// A missing bound defaults to the start or end of the sample.
pub(crate) fn range_selector(
    start: Option<usize>,
    end: Option<usize>,
    len: usize,
) -> Option<Range<usize>> {
    match (start, end) {
        (None, None) => None,
        (start, end) => Some(start.unwrap_or(0)..end.unwrap_or(len)),
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Trim(arg) => trim::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
