//! Geometric Brownian Motion (GBM) dynamics.
//!
//! GBM is the lognormal model for asset price evolution:
//! ```text
//! dS = drift * S * dt + vol * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! For numerical stability the exact solution drives the simulation:
//! ```text
//! S(t+dt) = S(t) * exp((drift - 0.5*vol^2)*dt + vol*sqrt(dt)*dW)
//! ```
//! This crate holds the parameters and per-step terms; the path loops live
//! in `risklab_kernel`.

use risklab_core::config::FieldSpec;

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price
    pub s0: f64,
    /// Drift (annualized)
    pub drift: f64,
    /// Volatility (annualized)
    pub vol: f64,
}

impl GbmParams {
    /// Initial price form field, floored at 1.
    pub const S0: FieldSpec = FieldSpec::at_least("initial-price", 100.0, 1.0);
    /// Drift form field.
    pub const DRIFT: FieldSpec = FieldSpec::unbounded("drift", 0.05);
    /// Volatility form field, floored at 0.
    pub const VOL: FieldSpec = FieldSpec::at_least("vol", 0.2, 0.0);

    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `s0` - Initial spot price (must be positive)
    /// * `drift` - Annualized drift
    /// * `vol` - Annualized volatility (must be non-negative)
    ///
    /// # Returns
    /// `Some(GbmParams)` if valid, `None` otherwise
    pub fn new(s0: f64, drift: f64, vol: f64) -> Option<Self> {
        if s0 <= 0.0 || vol < 0.0 {
            return None;
        }
        Some(Self { s0, drift, vol })
    }

    /// Build parameters from raw form inputs with lenient normalization.
    ///
    /// Missing fields take the form defaults; the floors keep the spot at
    /// least 1 and the volatility non-negative.
    pub fn from_raw(s0: Option<f64>, drift: Option<f64>, vol: Option<f64>) -> Self {
        Self {
            s0: Self::S0.resolve(s0),
            drift: Self::DRIFT.resolve(drift),
            vol: Self::VOL.resolve(vol),
        }
    }

    /// Force the drift to a supplied risk-free rate.
    ///
    /// Under the risk-neutral measure the asset drifts at the risk-free
    /// rate; discounted prices then form a martingale.
    pub fn risk_neutral(mut self, rate: f64) -> Self {
        self.drift = rate;
        self
    }

    /// Per-step log-drift term `(drift - 0.5*vol^2) * dt`.
    #[inline]
    pub fn step_drift(&self, dt: f64) -> f64 {
        (self.drift - 0.5 * self.vol * self.vol) * dt
    }

    /// Per-step diffusion coefficient `vol * sqrt(dt)`.
    #[inline]
    pub fn step_diffusion(&self, dt: f64) -> f64 {
        self.vol * dt.sqrt()
    }

    /// Analytical expectation `E[S(t)] = s0 * exp(drift * t)`.
    ///
    /// # Examples
    /// ```
    /// use risklab_models::gbm::GbmParams;
    ///
    /// let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
    /// assert_eq!(params.expected_value(0.0), 100.0);
    /// assert!((params.expected_value(1.0) - 100.0 * 0.05_f64.exp()).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn expected_value(&self, t: f64) -> f64 {
        self.s0 * (self.drift * t).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            s0: 100.0,
            drift: 0.05,
            vol: 0.2,
        }
    }
}
