//! Parametric (variance-covariance) VaR and Expected Shortfall.
//!
//! Closed-form loss quantiles under a normal return assumption. The
//! annualised moments are rescaled to the holding horizon with the
//! square-root-of-time rule over a 252-day trading year:
//!
//! ```text
//! sigma_h = sigma * sqrt(horizon / 252)
//! mu_h    = mu * horizon / 252
//!
//! VaR     = |value * z * sigma_h|          z = quantile(confidence)
//! ES      = max(0, value * sigma_h * pdf(z) / (1 - confidence))
//! adjVaR  = max(0, value * (z * sigma_h - mu_h))
//! ```
//!
//! Confidence arrives as a percentage and is clamped into [90, 99.9]
//! before it reaches the quantile function, so the construction paths
//! never trip the domain error. Hand-built inputs bypass the clamp and
//! surface [`MathError::InvalidProbability`] instead.

use risklab_core::config::FieldSpec;
use risklab_core::math::{inverse_norm_cdf, norm_pdf, norm_pdf_scaled};
use risklab_core::MathError;

/// Portfolio description for the parametric VaR engine.
///
/// # Examples
///
/// ```
/// use risklab_market::var::parametric::ParametricVarInputs;
///
/// let inputs = ParametricVarInputs::new(1_000_000.0, 0.07, 0.18, 10.0, 95.0);
/// let report = inputs.compute().unwrap();
///
/// assert!(report.var_absolute > 0.0);
/// assert!((report.z_score - 1.6448536269514722).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricVarInputs {
    /// Current portfolio value in currency units
    pub value: f64,
    /// Annualised mean return (decimal)
    pub mean_return: f64,
    /// Annualised return volatility (decimal)
    pub volatility: f64,
    /// Holding horizon in trading days
    pub horizon_days: f64,
    /// Confidence level as a percentage, e.g. 95.0
    pub confidence_pct: f64,
}

/// Closed-form risk figures for one input set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricVarReport {
    /// Absolute VaR in currency units
    pub var_absolute: f64,
    /// Expected Shortfall in currency units, floored at 0
    pub expected_shortfall: f64,
    /// VaR net of the expected horizon drift, floored at 0
    pub mean_adjusted_var: f64,
    /// VaR as a percentage of portfolio value (0 when value is not positive)
    pub var_percent: f64,
    /// Normal quantile at the confidence level
    pub z_score: f64,
    /// Confidence level as a decimal after clamping
    pub confidence: f64,
    /// Horizon-scaled mean return
    pub horizon_mean: f64,
    /// Horizon-scaled volatility
    pub horizon_volatility: f64,
}

/// Return distribution samples around the horizon mean, with the tail
/// beyond the VaR cut masked out for separate display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LossDistribution {
    /// Sampled returns in percent
    pub returns_pct: Vec<f64>,
    /// Normal density at each sample
    pub density: Vec<f64>,
    /// Density only where the return lies at or beyond the VaR cut
    pub tail_density: Vec<Option<f64>>,
    /// Return level of the VaR cut (decimal)
    pub var_cut: f64,
}

impl ParametricVarInputs {
    /// Portfolio value form field.
    pub const VALUE: FieldSpec = FieldSpec::unbounded("portfolio-value", 0.0);
    /// Annualised mean return form field (decimal).
    pub const MEAN_RETURN: FieldSpec = FieldSpec::unbounded("mean-return", 0.0);
    /// Annualised volatility form field (decimal).
    pub const VOLATILITY: FieldSpec = FieldSpec::unbounded("volatility", 0.0);
    /// Horizon form field in trading days, floored at 1.
    pub const HORIZON_DAYS: FieldSpec = FieldSpec::at_least("horizon-days", 1.0, 1.0);
    /// Confidence form field in percent, clamped into [90, 99.9].
    pub const CONFIDENCE: FieldSpec = FieldSpec::new("confidence", 95.0, 90.0, 99.9);

    /// Builds inputs from already-parsed values, applying the documented
    /// floors and clamps.
    pub fn new(
        value: f64,
        mean_return: f64,
        volatility: f64,
        horizon_days: f64,
        confidence_pct: f64,
    ) -> Self {
        Self::from_raw(
            Some(value),
            Some(mean_return),
            Some(volatility),
            Some(horizon_days),
            Some(confidence_pct),
        )
    }

    /// Builds inputs from optional form fields. Missing or non-finite
    /// entries fall back to the field defaults, then floors and clamps
    /// apply.
    pub fn from_raw(
        value: Option<f64>,
        mean_return: Option<f64>,
        volatility: Option<f64>,
        horizon_days: Option<f64>,
        confidence_pct: Option<f64>,
    ) -> Self {
        Self {
            value: Self::VALUE.resolve(value),
            mean_return: Self::MEAN_RETURN.resolve(mean_return),
            volatility: Self::VOLATILITY.resolve(volatility),
            horizon_days: Self::HORIZON_DAYS.resolve(horizon_days),
            confidence_pct: Self::CONFIDENCE.resolve(confidence_pct),
        }
    }

    /// Computes the closed-form risk figures.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidProbability`] when `confidence_pct / 100`
    /// falls outside (0, 1). The construction paths clamp confidence into
    /// [90, 99.9] so this only occurs for hand-built inputs.
    pub fn compute(&self) -> Result<ParametricVarReport, MathError> {
        let confidence = self.confidence_pct / 100.0;
        let horizon_fraction = self.horizon_days / 252.0;
        let horizon_volatility = self.volatility * horizon_fraction.sqrt();
        let horizon_mean = self.mean_return * horizon_fraction;
        let z = inverse_norm_cdf(confidence)?;

        let var_absolute = (self.value * z * horizon_volatility).abs();
        let expected_shortfall =
            (self.value * horizon_volatility * (norm_pdf(z) / (1.0 - confidence))).max(0.0);
        let mean_adjusted_var = (self.value * (z * horizon_volatility - horizon_mean)).max(0.0);
        let var_percent = if self.value > 0.0 {
            var_absolute / self.value * 100.0
        } else {
            0.0
        };

        Ok(ParametricVarReport {
            var_absolute,
            expected_shortfall,
            mean_adjusted_var,
            var_percent,
            z_score: z,
            confidence,
            horizon_mean,
            horizon_volatility,
        })
    }
}

impl Default for ParametricVarInputs {
    fn default() -> Self {
        Self::from_raw(None, None, None, None, None)
    }
}

impl ParametricVarReport {
    /// Samples the horizon return distribution around the mean.
    ///
    /// The sampling extent is `min(4 * sigma, 0.35)` floored at 0.1 so
    /// near-zero volatilities still produce a readable curve; volatility
    /// itself is floored at 1e-6. 181 evenly spaced samples cover
    /// `[mean - extent, mean + extent]`, each reported as a percentage
    /// return with the density masked onto the tail at or beyond the
    /// VaR cut.
    pub fn loss_distribution(&self) -> LossDistribution {
        let sigma_safe = self.horizon_volatility.max(1e-6);
        let extent = (4.0 * sigma_safe).min(0.35).max(0.1);
        let min_x = self.horizon_mean - extent;
        let max_x = self.horizon_mean + extent;
        let step = (max_x - min_x) / 180.0;
        let var_cut = self.horizon_mean - self.z_score * sigma_safe;

        let mut returns_pct = Vec::with_capacity(181);
        let mut density = Vec::with_capacity(181);
        let mut tail_density = Vec::with_capacity(181);

        for i in 0..=180 {
            let x = min_x + i as f64 * step;
            let pdf = norm_pdf_scaled(x, self.horizon_mean, sigma_safe);
            returns_pct.push(x * 100.0);
            density.push(pdf);
            tail_density.push(if x <= var_cut { Some(pdf) } else { None });
        }

        LossDistribution {
            returns_pct,
            density,
            tail_density,
            var_cut,
        }
    }
}
