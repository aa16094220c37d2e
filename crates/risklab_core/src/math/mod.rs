//! Numerical routines for the standard normal distribution.
//!
//! This module provides the distribution functions the risk metrics are
//! built on:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_pdf_scaled`: Density of a general normal N(mean, sd)
//! - `inverse_norm_cdf`: Quantile function (inverse CDF)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: The density and CDF support both `f64`
//!   and `f32` inputs
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy
//! - **Explicit Errors**: The quantile function rejects probabilities
//!   outside (0, 1) with a [`MathError`](crate::MathError) instead of
//!   returning NaN

pub mod distributions;

// Re-export main functions at module level
pub use distributions::{inverse_norm_cdf, norm_cdf, norm_pdf, norm_pdf_scaled};
