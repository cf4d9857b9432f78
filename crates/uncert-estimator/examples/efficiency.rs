//! Estimate detector-style efficiencies with proper error bars
//!
//! Prints the point estimate and its asymmetric uncertainty for a handful of
//! success/trial counts, including the boundary cases where a Gaussian error
//! bar would degenerate to zero.

use uncert_estimator::{Estimator, TWO_SIGMA};

fn main() {
    let experiments: &[(u64, u64)] = &[
        (0, 1),
        (12, 34),
        (19, 19),
        (123, 1635),
        (500_000_000, 1_000_000_000),
    ];

    println!("one-sigma intervals:");
    for &(successes, trials) in experiments {
        let estimator = Estimator::new(successes, trials);
        println!("  {successes:>9} / {trials:<13} {estimator}");
    }

    // The same experiment at a wider confidence and a finer grid
    let estimator = Estimator::builder(12, 34)
        .precision(10_000)
        .confidence(TWO_SIGMA)
        .build()
        .expect("valid configuration");
    let (low, high) = estimator.interval_relative();
    println!("12 / 34 at two sigma: -{low:.5} +{high:.5}");
}
