//! Confidence interval estimation for Bernoulli / binomial experiments
//!
//! Facade crate re-exporting the estimator. See [`uncert_estimator`] for the
//! full documentation.
//!
//! ```
//! let estimator = binomial_uncert::Estimator::new(12, 34);
//! println!("{estimator}");
//! ```

pub use uncert_estimator::*;
