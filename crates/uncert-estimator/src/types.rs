//! Core types for the discretized likelihood representation

use std::fmt;

/// A discretized, unnormalized probability density over a sub-range of [0, 1]
///
/// Stores one density value per bin together with the bin edges
/// (`edges.len() == densities.len() + 1`) and the integral accumulated while
/// the histogram was filled. The density values are not normalized: quantile
/// lookups scale their target by the integral instead, so the normalization
/// constant cancels.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfHistogram {
    /// Unnormalized density per bin, in increasing-bin order
    densities: Vec<f64>,
    /// Bin edges in increasing order; `edges[i]` / `edges[i + 1]` bound bin i
    edges: Vec<f64>,
    /// Running sum of all density values
    integral: f64,
}

impl PdfHistogram {
    pub(crate) fn new(densities: Vec<f64>, edges: Vec<f64>, integral: f64) -> Self {
        debug_assert!(densities.is_empty() || edges.len() == densities.len() + 1);
        Self {
            densities,
            edges,
            integral,
        }
    }

    /// An unfilled histogram, representing invalid estimator input
    ///
    /// Carries a NaN integral so that results derived from it stay NaN.
    pub(crate) fn unfilled() -> Self {
        Self {
            densities: Vec::new(),
            edges: Vec::new(),
            integral: f64::NAN,
        }
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.densities.len()
    }

    /// Check if the histogram is empty (unfilled)
    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }

    /// Get the density value of bin `i`
    pub fn density(&self, i: usize) -> f64 {
        self.densities[i]
    }

    /// Get the densities as a slice
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Get the bin edges as a slice (one more entry than bins)
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Get the left edge of bin `i`
    pub fn left(&self, i: usize) -> f64 {
        self.edges[i]
    }

    /// Get the right edge of bin `i`
    pub fn right(&self, i: usize) -> f64 {
        self.edges[i + 1]
    }

    /// Get the center point of bin `i`
    pub fn center(&self, i: usize) -> f64 {
        (self.edges[i] + self.edges[i + 1]) / 2.
    }

    /// Get the integral over all bins
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Find the bin containing `value` (both edges inclusive)
    ///
    /// Returns the first matching bin when `value` falls exactly on a shared
    /// edge.
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        (0..self.len()).find(|&i| value >= self.edges[i] && value <= self.edges[i + 1])
    }
}

impl fmt::Display for PdfHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "PdfHistogram(unfilled)");
        }
        write!(
            f,
            "PdfHistogram({} bins, range=[{:.6}, {:.6}], integral={:.6})",
            self.len(),
            self.edges[0],
            self.edges[self.len()],
            self.integral
        )
    }
}
