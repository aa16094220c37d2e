//! # Risklab Market (L4: Market Risk)
//!
//! Market risk metrics over a single-position portfolio description:
//!
//! - Parametric VaR, Expected Shortfall and mean-adjusted VaR from
//!   annualised moments with horizon scaling
//! - Full-revaluation Monte Carlo VaR with empirical order-statistic
//!   quantiles and tail-average CVaR
//! - Linear and quadratic sensitivity aggregation (PV01, CS01, deltas,
//!   option Greeks) into P&L contributions
//! - Multiplicative stress scenarios over base VaR/ES figures
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          risklab_market (L4)            │
//! ├─────────────────────────────────────────┤
//! │  var/         - parametric + MC VaR     │
//! │  sensitivity/ - P&L contribution table  │
//! │  scenarios/   - stress factor scaling   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │  risklab_kernel (L3) + risklab_core (L1)│
//! │  PathRng, distributions, statistics     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use risklab_market::var::parametric::ParametricVarInputs;
//!
//! let inputs = ParametricVarInputs::new(1_000_000.0, 0.07, 0.18, 10.0, 95.0);
//! let report = inputs.compute().unwrap();
//!
//! assert!(report.var_absolute > 0.0);
//! assert!(report.expected_shortfall >= report.var_absolute);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;
pub mod sensitivity;
pub mod var;

pub use scenarios::stress::{MarketStressInputs, MarketStressReport};
pub use sensitivity::{MarketShocks, SensitivityProfile, SensitivityReport};
pub use var::monte_carlo::{MonteCarloVarInputs, MonteCarloVarReport};
pub use var::parametric::{ParametricVarInputs, ParametricVarReport};
