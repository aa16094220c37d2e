//! # Risklab Models (L2: Dynamics)
//!
//! Closed-form rate and price dynamics underneath the simulation kernel.
//!
//! This crate provides:
//! - A mean-reverting short-rate model with a time-decaying target and its
//!   expected yield curve
//! - Geometric Brownian Motion step mechanics and analytical expectations
//! - Input grids and percent/basis-point form transforms for the rate model
//!
//! ## Design Principles
//!
//! - **Deterministic layer**: everything here is a pure function of its
//!   parameters; sampling lives in `risklab_kernel`
//! - **Validated constructors** returning `Option`, with lenient
//!   `from_raw` counterparts applying the documented input normalization

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod gbm;
pub mod rates;

pub use gbm::GbmParams;
pub use rates::short_rate::ShortRateParams;
