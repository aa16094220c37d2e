//! # risklab_core: Numerical Foundation for the Risk Metrics Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! risklab_core is the bottom layer of the workspace, providing:
//! - Normal distribution utilities: PDF, CDF, and the Acklam inverse CDF
//!   (`math::distributions`)
//! - Statistics primitives: mean, population standard deviation, interpolated
//!   quantiles, histogram binning (`stats`)
//! - Input normalization schema: declared per-field defaults and valid ranges
//!   (`config`)
//! - Error types: `MathError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other risklab_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use risklab_core::math::distributions::{inverse_norm_cdf, norm_cdf};
//! use risklab_core::stats::mean;
//!
//! // Quantile of the standard normal at 95%
//! let z = inverse_norm_cdf(0.95).unwrap();
//! assert!((z - 1.6449).abs() < 1e-4);
//!
//! // Round trip through the CDF
//! let p = norm_cdf(z);
//! assert!((p - 0.95).abs() < 1e-7);
//!
//! // Statistics primitives
//! let m = mean(&[1.0, 2.0, 3.0]);
//! assert_eq!(m, 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error and statistics types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod math;
pub mod stats;
pub mod types;

pub use types::error::MathError;
