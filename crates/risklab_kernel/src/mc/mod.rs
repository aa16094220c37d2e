//! Monte Carlo path-set simulators.
//!
//! This module provides the two simulation engines:
//! - `gbm`: GBM price paths with terminal distribution and average path
//! - `martingale`: the same dynamics discounted at every step
//!
//! Both engines produce a full path matrix plus derived aggregates, owned
//! entirely by one simulation call; re-running replaces the previous
//! output rather than mutating it.

pub mod gbm;
pub mod martingale;

// Re-export main types at module level
pub use gbm::{GbmSimulation, GbmSummary};
pub use martingale::{MartingaleSimulation, MartingaleSummary};
