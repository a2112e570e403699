use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use rand::{Rng as _, SeedableRng as _};
use rand_distr::{Distribution as _, Normal};
use rand_pcg::Pcg32;

use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArg {
    /// Number of values to generate
    #[arg(long, default_value_t = 1000)]
    pub count: usize,
    /// Mean of the normal distribution
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mean: f64,
    /// Standard deviation of the normal distribution
    #[arg(long, default_value_t = 1.0)]
    pub std_dev: f64,
    /// Seed for reproducible output (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        count,
        mean,
        std_dev,
        seed,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let values = normal_values(*count, *mean, *std_dev, seed)?;
    eprintln!("Generated {count} values from N({mean}, {std_dev}^2) with seed {seed}");

    Output::save_json(&values, output.clone())
}

fn normal_values(count: usize, mean: f64, std_dev: f64, seed: u64) -> anyhow::Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev)
        .with_context(|| format!("Invalid normal distribution N({mean}, {std_dev}^2)"))?;
    let mut rng = Pcg32::seed_from_u64(seed);
    Ok((0..count).map(|_| normal.sample(&mut rng)).collect())
}

#[cfg(test)]
mod tests {
    use quantbin_stats::descriptive::DescriptiveStats;

    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let a = normal_values(50, 1.0, 2.0, 42).unwrap();
        let b = normal_values(50, 1.0, 2.0, 42).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, normal_values(50, 1.0, 2.0, 43).unwrap());
    }

    #[test]
    fn test_moments_are_close() {
        let values = normal_values(20_000, 10.0, 3.0, 7).unwrap();
        let stats = DescriptiveStats::new(values).unwrap();
        assert!((stats.mean - 10.0).abs() < 0.2);
        assert!((stats.std_dev - 3.0).abs() < 0.2);
    }

    #[test]
    fn test_invalid_std_dev() {
        assert!(normal_values(10, 0.0, -1.0, 1).is_err());
        assert!(normal_values(10, 0.0, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_zero_count() {
        assert!(normal_values(0, 0.0, 1.0, 1).unwrap().is_empty());
    }
}
