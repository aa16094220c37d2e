//! Stress scenario engine.
//!
//! Scales base VaR/ES figures by multiplicative factors derived from
//! shock magnitudes, without re-simulating. [`presets`] carries a small
//! set of ready-made shock combinations.

pub mod presets;
pub mod stress;

pub use presets::StressPreset;
pub use stress::{MarketStressInputs, MarketStressReport};
