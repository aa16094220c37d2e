//! Full-revaluation Monte Carlo VaR.
//!
//! Simulates terminal portfolio values under a one-step lognormal
//! revaluation and reads VaR off the sorted P&L sample as an order
//! statistic:
//!
//! ```text
//! revalued_i = value * exp((mu - sigma^2/2) dt + sigma sqrt(dt) z_i)
//! pnl_i      = revalued_i - value,  dt = horizon / 252
//!
//! index = max(0, floor((1 - confidence) * paths) - 1)
//! VaR   = -pnl[index]        (pnl sorted ascending)
//! CVaR  = -mean(pnl <= pnl[index])
//! ```
//!
//! The quantile cut takes the order statistic directly with no
//! interpolation; only CVaR averages over the tail subset.

use risklab_core::math::norm_pdf;
use risklab_core::stats::mean;
use risklab_kernel::rng::PathRng;

/// Portfolio description for the simulation engine.
///
/// Unlike the parametric module this engine treats its fields as
/// required: [`MonteCarloVarInputs::new`] rejects incomplete input sets
/// instead of substituting defaults.
///
/// # Examples
///
/// ```
/// use risklab_kernel::rng::PathRng;
/// use risklab_market::var::monte_carlo::MonteCarloVarInputs;
///
/// let inputs =
///     MonteCarloVarInputs::new(1_000_000.0, 0.05, 0.18, 10.0, 5_000, 95.0).unwrap();
/// let mut rng = PathRng::from_seed(42);
/// let report = inputs.run(&mut rng);
///
/// assert!(report.var_absolute > 0.0);
/// assert!(report.cvar >= report.var_absolute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloVarInputs {
    /// Current portfolio value in currency units
    pub value: f64,
    /// Annualised mean return (decimal)
    pub mean_return: f64,
    /// Annualised return volatility (decimal)
    pub volatility: f64,
    /// Holding horizon in trading days
    pub horizon_days: f64,
    /// Number of revaluation paths
    pub path_count: usize,
    /// Confidence level as a percentage, strictly inside (0, 100)
    pub confidence_pct: f64,
}

/// Empirical risk figures from one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloVarReport {
    /// Absolute VaR in currency units
    pub var_absolute: f64,
    /// VaR as a percentage of portfolio value
    pub var_percent: f64,
    /// Sample mean P&L
    pub mean_pnl: f64,
    /// Tail-average loss at and beyond the VaR cut
    pub cvar: f64,
}

/// Standard normal density samples with the 95% VaR tail masked for
/// separate display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardNormalCurve {
    /// Sampled z values, rounded to two decimals
    pub xs: Vec<f64>,
    /// Density at each sample
    pub density: Vec<f64>,
    /// Density only where z lies at or beyond the tail threshold
    pub tail_density: Vec<Option<f64>>,
}

// 5% left-tail threshold for the 95% reference curve.
const VAR_CUTOFF_95: f64 = -1.6448536269514722;

impl MonteCarloVarInputs {
    /// Validates a complete input set.
    ///
    /// Returns `None` when any field is non-finite, when value,
    /// volatility or horizon is zero, when the path count is zero, or
    /// when the confidence percentage is not strictly inside (0, 100).
    /// Negative values and volatilities are accepted; the revaluation
    /// formula handles either sign.
    pub fn new(
        value: f64,
        mean_return: f64,
        volatility: f64,
        horizon_days: f64,
        path_count: usize,
        confidence_pct: f64,
    ) -> Option<Self> {
        let finite = value.is_finite()
            && mean_return.is_finite()
            && volatility.is_finite()
            && horizon_days.is_finite()
            && confidence_pct.is_finite();
        if !finite
            || value == 0.0
            || volatility == 0.0
            || horizon_days == 0.0
            || path_count == 0
            || confidence_pct <= 0.0
            || confidence_pct >= 100.0
        {
            return None;
        }
        Some(Self {
            value,
            mean_return,
            volatility,
            horizon_days,
            path_count,
            confidence_pct,
        })
    }

    /// Runs the full-revaluation simulation.
    ///
    /// # Arguments
    /// * `rng` - Random source; fix the seed for reproducible output
    pub fn run(&self, rng: &mut PathRng) -> MonteCarloVarReport {
        let path_count = self.path_count.max(1);
        let dt = self.horizon_days / 252.0;
        let sqrt_dt = dt.sqrt();
        let drift = (self.mean_return - 0.5 * self.volatility * self.volatility) * dt;

        let mut pnl: Vec<f64> = (0..path_count)
            .map(|_| {
                let z = rng.gen_normal();
                let revalued = self.value * (drift + self.volatility * sqrt_dt * z).exp();
                revalued - self.value
            })
            .collect();
        pnl.sort_by(|a, b| a.total_cmp(b));

        let tail_fraction = (1.0 - self.confidence_pct / 100.0).clamp(0.0, 1.0);
        let index = ((tail_fraction * path_count as f64).floor() as i64 - 1).max(0) as usize;
        let loss_at_quantile = pnl[index];

        let tail_losses: Vec<f64> = pnl
            .iter()
            .copied()
            .filter(|value| *value <= loss_at_quantile)
            .collect();

        MonteCarloVarReport {
            var_absolute: -loss_at_quantile,
            var_percent: -loss_at_quantile / self.value * 100.0,
            mean_pnl: mean(&pnl),
            cvar: -mean(&tail_losses),
        }
    }
}

/// Samples the standard normal density over [-4, 4] at 0.05 spacing,
/// masking the 5% left tail used by the 95% VaR illustration.
pub fn standard_normal_curve() -> StandardNormalCurve {
    let mut xs = Vec::with_capacity(161);
    let mut density = Vec::with_capacity(161);
    let mut tail_density = Vec::with_capacity(161);

    for i in 0..=160 {
        let x = -4.0 + i as f64 * 0.05;
        let pdf = norm_pdf(x);
        xs.push((x * 100.0).round() / 100.0);
        density.push(pdf);
        tail_density.push(if x <= VAR_CUTOFF_95 { Some(pdf) } else { None });
    }

    StandardNormalCurve {
        xs,
        density,
        tail_density,
    }
}
