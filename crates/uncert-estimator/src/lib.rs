//! Uncertainty estimation for Bernoulli / binomial experiments
//!
//! Wherever a classical "successes / total" ratio needs a statistically
//! rigorous error bar, the naive symmetric Gaussian approximation breaks down
//! in low-statistics regimes: very few trials, or successes at or near the
//! boundaries 0 and N. This crate estimates a confidence interval directly
//! from the binomial likelihood instead.
//!
//! The estimation builds a discretized, unnormalized density of the
//! likelihood over the unit interval, with the sampling grid concentrated in
//! an adaptive window around the point estimate, and extracts quantiles and a
//! two-sided confidence interval around the mode from it. All likelihood
//! arithmetic happens in the log domain, so trial counts in the billions stay
//! numerically stable.
//!
//! # Examples
//!
//! ## Basic interval estimation
//!
//! ```
//! use uncert_estimator::Estimator;
//!
//! let estimator = Estimator::new(12, 34);
//! let (low, high) = estimator.interval_relative();
//!
//! // 0.3529 -0.0765 +0.0830
//! println!("{:.4} -{:.4} +{:.4}", estimator.mode(), low, high);
//! assert!(low > 0.076 && low < 0.077);
//! ```
//!
//! ## Custom precision and confidence
//!
//! ```
//! use uncert_estimator::{Estimator, THREE_SIGMA};
//!
//! let estimator = Estimator::builder(19, 19)
//!     .precision(10_000)
//!     .confidence(THREE_SIGMA)
//!     .build()
//!     .unwrap();
//!
//! let (low, high) = estimator.interval();
//! assert_eq!(high, 1.0);
//! assert!(low < 1.0);
//! ```
//!
//! ## Quantiles
//!
//! ```
//! use uncert_estimator::Estimator;
//!
//! let estimator = Estimator::new(42, 167);
//! let median = estimator.quantile(0.5);
//! assert!(median > 0.25 && median < 0.26);
//! ```
//!
//! Invalid input (`successes > trials`, or `trials == 0`) is never an error:
//! it propagates as NaN through the mode and every derived quantity, so
//! arithmetic on results keeps producing NaN instead of crashing. Callers
//! must check for NaN explicitly.

pub mod builder;
pub mod error;
pub mod estimator;
pub mod types;

// Re-export main types
pub use builder::{AdaptivePdfBuilder, HistParams};
pub use error::{Error, Result};
pub use estimator::{Estimator, EstimatorBuilder};
pub use types::PdfHistogram;

// Sigma-equivalent confidence levels
pub use estimator::{
    DEFAULT_PRECISION, FIVE_SIGMA, FOUR_SIGMA, ONE_SIGMA, THREE_SIGMA, TWO_SIGMA,
};

/// One-sigma relative uncertainty interval with default settings
///
/// Convenience shorthand for [`Estimator::new`] followed by
/// [`Estimator::interval_relative`].
pub fn interval_relative(successes: u64, trials: u64) -> (f64, f64) {
    Estimator::new(successes, trials).interval_relative()
}
