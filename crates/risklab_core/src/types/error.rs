//! Error types for structured error handling.
//!
//! This module provides:
//! - `MathError`: Errors from the shared numeric utilities

use thiserror::Error;

/// Errors from the shared numeric utilities.
///
/// The statistics primitives are total functions (empty input yields 0), so
/// the only hard failure in this layer is a probability outside the open
/// unit interval reaching the inverse normal CDF. That failure is kept as
/// its own variant so callers can catch it separately from generic input
/// problems.
///
/// # Variants
/// - `InvalidProbability`: Probability outside (0, 1) passed to a quantile
///   function
///
/// # Examples
/// ```
/// use risklab_core::types::MathError;
///
/// let err = MathError::InvalidProbability { p: 1.5 };
/// assert_eq!(format!("{}", err), "Probability 1.5 must lie in (0, 1)");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// Probability outside the open interval (0, 1).
    #[error("Probability {p} must lie in (0, 1)")]
    InvalidProbability {
        /// The offending probability value
        p: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_display() {
        let err = MathError::InvalidProbability { p: 0.0 };
        assert_eq!(format!("{}", err), "Probability 0 must lie in (0, 1)");

        let err = MathError::InvalidProbability { p: -0.1 };
        assert_eq!(format!("{}", err), "Probability -0.1 must lie in (0, 1)");
    }

    #[test]
    fn test_invalid_probability_equality() {
        let a = MathError::InvalidProbability { p: 1.5 };
        let b = MathError::InvalidProbability { p: 1.5 };
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err = MathError::InvalidProbability { p: 2.0 };
        assert_error(&err);
    }
}
