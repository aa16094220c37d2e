//! # Risklab Credit (L4: Counterparty Credit Risk)
//!
//! Counterparty credit risk metrics built on the shared numerical
//! foundations in [`risklab_core`]:
//!
//! - **Exposure profiles**: EPE, ENE, Effective EPE and potential future
//!   exposure at a configurable confidence level.
//! - **XVA**: bucketed CVA accumulation and single-name expected loss.
//! - **Rating migration**: row-stochastic transition matrices propagated
//!   over a number of periods.
//! - **Stress**: joint market/credit shocks applied to an exposure and
//!   loss baseline.
//!
//! ## Layering
//!
//! ```text
//!   risklab_credit (this crate, L4)
//!        |
//!   risklab_core (L1: stats, config, math)
//! ```
//!
//! ## Example
//!
//! ```
//! use risklab_credit::exposure::ExposureProfile;
//!
//! let profile = ExposureProfile::reference();
//! let report = profile.analyze(0.95).unwrap();
//! assert!(report.peak_pfe >= report.epe);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod exposure;
pub mod migration;
pub mod stress;
pub mod xva;

pub use exposure::{ExposurePoint, ExposureProfile, ExposureReport, TenorExposure};
pub use migration::{CreditError, TransitionMatrix};
pub use stress::{CreditStressInputs, CreditStressReport};
pub use xva::{CvaBucket, CvaInputs, CvaReport, ExpectedLossInputs, ExpectedLossReport};
