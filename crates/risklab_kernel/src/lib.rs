//! # Risklab Kernel (L3: Simulation Engine)
//!
//! Monte Carlo path simulation over the dynamics defined in `risklab_models`.
//!
//! This crate provides:
//! - Seedable random number generation with Box-Muller normal sampling
//! - GBM path-set simulation with terminal distribution and average path
//! - Discounted martingale simulation demonstrating constant expectation
//!
//! ## Determinism
//!
//! All simulators draw from an explicit [`rng::PathRng`], so callers choose
//! between a fixed seed (reproducible runs, tests) and entropy seeding
//! (fresh draws per run). Given the same seed and inputs, every simulator
//! output is bit-identical.

#![warn(missing_docs)]

pub mod mc;
pub mod rng;

pub use mc::gbm::{GbmSimulation, GbmSummary};
pub use mc::martingale::{MartingaleSimulation, MartingaleSummary};
pub use rng::PathRng;
