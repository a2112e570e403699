use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use quantbin_stats::outliers;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct TrimArg {
    /// Path to a JSON array of numbers
    pub input: PathBuf,
    /// Number of lowest values to drop
    #[arg(long, default_value_t = 0)]
    pub lowest: usize,
    /// Number of highest values to drop
    #[arg(long, default_value_t = 0)]
    pub highest: usize,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TrimArg) -> anyhow::Result<()> {
    let TrimArg {
        input,
        lowest,
        highest,
        output,
    } = arg;

    let values = util::read_values_file(input)?;
    let trimmed = outliers::remove_outliers(&values, *lowest, *highest).with_context(|| {
        format!(
            "Cannot drop {lowest} lowest and {highest} highest of {} values",
            values.len()
        )
    })?;
    eprintln!(
        "Dropped {} values, {} remain",
        values.len() - trimmed.len(),
        trimmed.len()
    );

    Output::save_json(&trimmed, output.clone())
}
