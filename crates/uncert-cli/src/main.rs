//! uncert - confidence interval estimation for success/total ratios

use anyhow::Context;
use clap::Parser;
use uncert_estimator::{Estimator, ONE_SIGMA};

/// Estimate the uncertainty of the success probability of a Bernoulli
/// experiment
///
/// Prints the point estimate and its asymmetric confidence interval in the
/// form `(<mode> -<low> +<high>)`. Passing more successes than trials yields
/// NaN results rather than an error.
#[derive(Debug, Parser)]
#[command(name = "uncert", version)]
struct Cli {
    /// Number of observed successes
    successes: u64,

    /// Total number of trials
    trials: u64,

    /// Estimation precision (number of bins for the PDF histogram)
    #[arg(long, default_value_t = 10_000)]
    precision: usize,

    /// Estimation confidence (standard deviation equivalent interval)
    #[arg(long, default_value_t = ONE_SIGMA)]
    confidence: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let estimator = Estimator::builder(cli.successes, cli.trials)
        .precision(cli.precision)
        .confidence(cli.confidence)
        .build()
        .context("invalid estimator configuration")?;

    println!("{estimator}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["uncert", "12", "34"]);
        assert_eq!(cli.successes, 12);
        assert_eq!(cli.trials, 34);
        assert_eq!(cli.precision, 10_000);
        assert_eq!(cli.confidence, ONE_SIGMA);

        let cli = Cli::parse_from([
            "uncert",
            "3",
            "10",
            "--precision",
            "1000",
            "--confidence",
            "0.95",
        ]);
        assert_eq!(cli.precision, 1000);
        assert_eq!(cli.confidence, 0.95);
    }

    #[test]
    fn test_cli_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["uncert", "12"]).is_err());
        assert!(Cli::try_parse_from(["uncert"]).is_err());
    }
}
