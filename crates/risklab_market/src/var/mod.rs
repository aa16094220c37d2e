//! Value-at-Risk engines.
//!
//! Two estimators over the same portfolio description:
//!
//! - [`parametric`]: closed-form VaR/ES from annualised moments under a
//!   normal return assumption, with horizon scaling
//! - [`monte_carlo`]: full-revaluation lognormal simulation with
//!   empirical order-statistic VaR and tail-average CVaR

pub mod monte_carlo;
pub mod parametric;

pub use monte_carlo::{MonteCarloVarInputs, MonteCarloVarReport};
pub use parametric::{LossDistribution, ParametricVarInputs, ParametricVarReport};
