//! Error types for estimator configuration
//!
//! Statistical invalid input (`successes > trials`, `trials == 0`) is not an
//! error: it propagates as NaN through the estimation results. The error type
//! here only covers configuration that can be rejected up front.

use thiserror::Error;

/// Error type for estimator configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a builder
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a confidence level outside (0, 1]
    pub fn invalid_confidence(confidence: f64) -> Self {
        Self::InvalidParameter(format!("Confidence {confidence} must be in (0, 1]"))
    }

    /// Create an error for a zero-bin histogram request
    pub fn invalid_precision(precision: usize) -> Self {
        Self::InvalidParameter(format!("Precision {precision} must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("confidence must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: confidence must be positive");

        let err = Error::invalid_confidence(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Confidence 1.5 must be in (0, 1]");

        let err = Error::invalid_precision(0);
        assert_eq!(err.to_string(), "Invalid parameter: Precision 0 must be at least 1");
    }
}
