//! Valuation adjustments: bucketed CVA and single-name expected loss.
//!
//! [`CvaInputs`] accumulates a credit valuation adjustment over five
//! fixed exposure buckets, each carrying a discount factor, an expected
//! exposure in millions and a default-probability increment.
//! [`ExpectedLossInputs`] is the one-line EL identity
//! `exposure * PD * LGD` with percentage inputs.

pub mod cva;
pub mod loss;

pub use cva::{CvaBucket, CvaInputs, CvaReport, BUCKET_COUNT};
pub use loss::{ExpectedLossInputs, ExpectedLossReport};
