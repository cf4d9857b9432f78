//! Adaptive construction of the binomial likelihood histogram
//!
//! The builder concentrates a fixed bin budget into a narrow window around
//! the classical point estimate, sized from the classical variance. This is
//! what lets a modest bin count resolve the likelihood even when the trial
//! count is in the billions: a uniform grid over the full unit interval would
//! be hopelessly coarse at that scale.

use crate::types::PdfHistogram;

/// Parameters describing the adaptive sampling window of a PDF histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistParams {
    /// Lower limit of the sampled range
    pub limit_low: f64,
    /// Upper limit of the sampled range
    pub limit_high: f64,
    /// Bin width (uniform within the window)
    pub step: f64,
    /// Log-likelihood at the mode, subtracted before exponentiating so the
    /// peak density is exp(0) = 1 regardless of the trial count
    pub shift: f64,
}

/// Histogram builder for the binomial likelihood over the unit interval
///
/// Produces an unnormalized [`PdfHistogram`] of the likelihood of the success
/// probability given an observed number of successes out of a number of
/// trials. All likelihood evaluation happens in the log domain to preserve
/// numerical range for large trial counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptivePdfBuilder {
    precision: usize,
}

impl AdaptivePdfBuilder {
    /// Create a new builder with the given number of bins
    pub fn new(precision: usize) -> Self {
        Self {
            precision: precision.max(1),
        }
    }

    /// Get the number of bins this builder produces
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Determine the sampling window for the given experiment
    ///
    /// The default window covers five classical standard deviations around
    /// the mode, clamped to [0, 1]. The factor 5 is empirical: enough tail
    /// coverage without wasting resolution on the full unit interval. For the
    /// boundary cases (zero successes, all successes) the classical variance
    /// collapses to zero, so the window is instead anchored at the respective
    /// boundary with a width of 8/trials.
    pub fn params(&self, successes: u64, trials: u64) -> HistParams {
        let n = trials as f64;
        let k = successes as f64;
        let mode = k / n;
        let variance = (mode * (1. - mode) / n).sqrt();

        let mut limit_low = (mode - 5. * variance).max(0.);
        let mut limit_high = (mode + 5. * variance).min(1.);

        // Zero successes: more range towards the lower part of the interval
        if successes == 0 {
            limit_low = 0.;
            limit_high = (8. / n).min(1.);
        }

        // All successes: more range towards the upper part of the interval
        if successes == trials {
            limit_low = (1. - 8. / n).max(0.);
            limit_high = 1.;
        }

        let step = (limit_high - limit_low).abs() / self.precision as f64;
        let shift = if successes != 0 && successes != trials {
            k * mode.ln() + (n - k) * (1. - mode).ln()
        } else {
            // Single-term likelihood, already bounded by 1
            0.
        };

        HistParams {
            limit_low,
            limit_high,
            step,
            shift,
        }
    }

    /// Build the likelihood histogram for the given experiment
    ///
    /// Invalid input (`successes > trials` or `trials == 0`) yields an
    /// unfilled histogram with a NaN integral; all derived quantities stay
    /// NaN without ever indexing the density arrays.
    pub fn build(&self, successes: u64, trials: u64) -> PdfHistogram {
        if successes > trials || trials == 0 {
            return PdfHistogram::unfilled();
        }

        let params = self.params(successes, trials);
        log::debug!(
            "pdf window for {successes}/{trials}: [{:.6e}, {:.6e}], step {:.6e}, shift {:.4}",
            params.limit_low,
            params.limit_high,
            params.step,
            params.shift
        );

        let n = trials as f64;
        let k = successes as f64;

        let mut densities = vec![0.; self.precision];
        let mut edges = vec![0.; self.precision + 1];
        let mut integral = 0.;
        let mut bin = params.limit_low;

        for i in 0..self.precision {
            // Log-domain binomial likelihood at the current bin; the boundary
            // cases drop their vanishing term to avoid 0 * ln(0)
            let log_likelihood = if successes == 0 {
                n * (1. - bin).ln()
            } else if successes == trials {
                k * bin.ln()
            } else {
                k * bin.ln() + (n - k) * (1. - bin).ln()
            };
            let value = (log_likelihood - params.shift).exp();

            densities[i] = value;
            edges[i] = bin;
            integral += value;
            bin += params.step;
        }

        // Rightmost boundary edge
        edges[self.precision] = bin;

        PdfHistogram::new(densities, edges, integral)
    }
}
