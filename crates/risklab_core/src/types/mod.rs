//! Core shared types.
//!
//! This module provides:
//! - `error`: Structured error types for the numeric utilities
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MathError`] from `error`

pub mod error;

pub use error::MathError;
