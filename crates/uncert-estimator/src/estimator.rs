//! The estimator value type and its quantile / interval queries

use std::cell::OnceCell;
use std::fmt;

use crate::builder::AdaptivePdfBuilder;
use crate::error::{Error, Result};
use crate::types::PdfHistogram;

/// Default number of bins in the PDF histogram
pub const DEFAULT_PRECISION: usize = 1000;

/// One sigma standard deviation equivalent
pub const ONE_SIGMA: f64 = 0.6826895475;

/// Two sigma standard deviation equivalent
pub const TWO_SIGMA: f64 = 0.9544997215;

/// Three sigma standard deviation equivalent
pub const THREE_SIGMA: f64 = 0.9973001480;

/// Four sigma standard deviation equivalent
pub const FOUR_SIGMA: f64 = 0.99993669986724854;

/// Five sigma standard deviation equivalent
pub const FIVE_SIGMA: f64 = 0.99999940395355225;

/// Guard against numerically unstable quantile requests
const EPSILON: f64 = 1e-9;

/// Uncertainty estimator for a Bernoulli experiment
///
/// Estimates the confidence interval of the success probability given an
/// observed number of successes out of a number of trials, based on a
/// discretized binomial likelihood histogram.
///
/// The histogram is built lazily on the first quantile or interval query and
/// memoized; configuration is fixed at construction time, so the cached state
/// never needs invalidation. The memoization uses [`OnceCell`], which also
/// encodes the single-owner model: an `Estimator` is not `Sync`, and sharing
/// one across threads requires external synchronization or eager
/// construction.
///
/// # Examples
///
/// ```
/// use uncert_estimator::Estimator;
///
/// let estimator = Estimator::new(12, 34);
/// let (low, high) = estimator.interval_relative();
///
/// assert!((estimator.mode() - 12. / 34.).abs() < 1e-12);
/// assert!(low > 0.07 && high > 0.08);
/// println!("{estimator}"); // (0.3529 -0.0765 +0.0830)
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    successes: u64,
    trials: u64,
    mode: f64,
    variance: f64,
    precision: usize,
    confidence: f64,
    pdf: OnceCell<PdfHistogram>,
    relative: OnceCell<(f64, f64)>,
}

impl Estimator {
    /// Create an estimator with default precision and one-sigma confidence
    ///
    /// `successes > trials` or `trials == 0` is not rejected: it yields NaN
    /// for the mode and all derived quantiles, which callers must check for.
    pub fn new(successes: u64, trials: u64) -> Self {
        Self::with_config(successes, trials, DEFAULT_PRECISION, ONE_SIGMA)
    }

    /// Start building an estimator with custom precision or confidence
    pub fn builder(successes: u64, trials: u64) -> EstimatorBuilder {
        EstimatorBuilder {
            successes,
            trials,
            precision: DEFAULT_PRECISION,
            confidence: ONE_SIGMA,
        }
    }

    fn with_config(successes: u64, trials: u64, precision: usize, confidence: f64) -> Self {
        // Mode and classical variance; NaN marks the invalid configuration
        let mode = if successes > trials || trials == 0 {
            f64::NAN
        } else {
            successes as f64 / trials as f64
        };
        let variance = (mode * (1. - mode) / trials as f64).sqrt();

        Self {
            successes,
            trials,
            mode,
            variance,
            precision,
            confidence,
            pdf: OnceCell::new(),
            relative: OnceCell::new(),
        }
    }

    /// Get the number of observed successes
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Get the total number of trials
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Get the mode (classical point estimate), NaN for invalid input
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Get the classical standard-deviation estimate, NaN for invalid input
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Get the number of bins in the PDF histogram
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Get the configured confidence level
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Get the integral of the PDF histogram, triggering estimation
    pub fn integral(&self) -> f64 {
        self.histogram().integral()
    }

    /// Borrow the PDF histogram, triggering estimation on first use
    pub fn histogram(&self) -> &PdfHistogram {
        self.pdf
            .get_or_init(|| AdaptivePdfBuilder::new(self.precision).build(self.successes, self.trials))
    }

    /// Return the quantile for the given cumulative probability
    ///
    /// Performs a left-to-right inverse-CDF lookup against the unnormalized
    /// histogram integral and returns the center of the bin where the running
    /// sum crosses the target. Out-of-domain requests return NaN; requests
    /// within epsilon of the boundaries return the exact boundary.
    pub fn quantile(&self, confidence: f64) -> f64 {
        let hist = self.histogram();

        // Numerically impossible cases
        if !(0. ..=1.).contains(&confidence) {
            return f64::NAN;
        }

        // Numerically unstable cases, treated as exact boundaries
        if self.trials == 0 || hist.integral() < EPSILON || confidence < EPSILON {
            return 0.;
        }
        if 1. - confidence < EPSILON {
            return 1.;
        }

        let target = confidence * hist.integral();
        let mut current = 0.;
        for i in 0..hist.len() {
            current += hist.density(i);
            if current > target {
                return hist.center(i);
            }
        }

        // Exhausted scan: malformed (or unfilled) histogram
        f64::NAN
    }

    /// Return the absolute lower and upper bounds of the confidence interval
    pub fn interval(&self) -> (f64, f64) {
        let hist = self.histogram();

        if self.mode.is_nan() || hist.integral().is_nan() || self.variance.is_nan() {
            return (f64::NAN, f64::NAN);
        }

        if self.successes == 0 {
            return (0., self.quantile(self.confidence));
        }
        if self.successes == self.trials {
            return (self.quantile(1. - self.confidence), 1.);
        }

        self.expand_around_mode(hist)
    }

    /// Greedy symmetric expansion of the confidence window around the mode
    ///
    /// Starting from the bin containing the mode, extends the window one bin
    /// at a time on whichever side has the larger density until the enclosed
    /// mass reaches `confidence * integral`. The greedy local choice is exact
    /// for unimodal densities. The window is clamped at the histogram
    /// boundaries; once one side is exhausted only the other side grows.
    fn expand_around_mode(&self, hist: &PdfHistogram) -> (f64, f64) {
        let Some(mode_bin) = hist.find_bin(self.mode) else {
            // Malformed histogram, should not happen for valid input
            return (f64::NAN, f64::NAN);
        };

        let last = hist.len() - 1;
        let target = self.confidence * hist.integral();

        let (mut low_bin, mut high_bin) = (mode_bin, mode_bin);
        let mut current = hist.density(mode_bin);

        while current < target {
            let can_grow_high = high_bin < last;
            let can_grow_low = low_bin > 0;

            if can_grow_high
                && (!can_grow_low || hist.density(high_bin + 1) >= hist.density(low_bin - 1))
            {
                high_bin += 1;
                current += hist.density(high_bin);
            } else if can_grow_low {
                low_bin -= 1;
                current += hist.density(low_bin);
            } else {
                // Both edges exhausted before the target was met
                break;
            }
        }

        (hist.center(low_bin), hist.center(high_bin))
    }

    /// Return the interval expressed as deltas below / above the mode
    ///
    /// This is the natural human-readable "minus/plus" form. The result is
    /// memoized so repeated calls do not redo the expansion search.
    pub fn interval_relative(&self) -> (f64, f64) {
        *self.relative.get_or_init(|| {
            let (low, high) = self.interval();
            (self.mode - low, high - self.mode)
        })
    }
}

impl fmt::Display for Estimator {
    /// Format as `(<mode> -<low> +<high>)`, printing as many decimal digits
    /// as the configured precision has digits, so finer grids render more
    /// decimals
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.interval_relative();
        let digits = self.precision.to_string().len();

        write!(
            f,
            "({:.digits$} -{:.digits$} +{:.digits$})",
            self.mode, low, high
        )
    }
}

/// Builder for estimators with non-default configuration
///
/// ```
/// use uncert_estimator::{Estimator, TWO_SIGMA};
///
/// let estimator = Estimator::builder(3, 10)
///     .precision(10_000)
///     .confidence(TWO_SIGMA)
///     .build()
///     .unwrap();
///
/// assert_eq!(estimator.precision(), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorBuilder {
    successes: u64,
    trials: u64,
    precision: usize,
    confidence: f64,
}

impl EstimatorBuilder {
    /// Set the number of bins in the PDF histogram
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the confidence level (standard deviation equivalent)
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Build the estimator, validating the configuration
    pub fn build(self) -> Result<Estimator> {
        if self.precision == 0 {
            return Err(Error::invalid_precision(self.precision));
        }
        if !(self.confidence > 0. && self.confidence <= 1.) {
            return Err(Error::invalid_confidence(self.confidence));
        }

        Ok(Estimator::with_config(
            self.successes,
            self.trials,
            self.precision,
            self.confidence,
        ))
    }
}
