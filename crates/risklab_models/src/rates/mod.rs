//! Interest rate dynamics.
//!
//! This module provides the deterministic expectation view of a
//! mean-reverting short-rate model:
//! - `short_rate`: Parameters, expected short-rate path and expected yields

pub mod short_rate;

// Re-export main types at module level
pub use short_rate::{ShortRateParams, STANDARD_MATURITIES};
