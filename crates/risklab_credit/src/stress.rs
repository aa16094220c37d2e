//! Joint market/credit stress applied to an exposure baseline.
//!
//! Three shock legs (interest, equity, credit) combine into a single
//! multiplicative exposure factor,
//!
//! ```text
//!   factor       = 1 + (interest + equity + credit) + rho * credit
//!   stressed EPE = EPE * factor
//!   stressed PFE = PFE * factor
//! ```
//!
//! while the credit leg also inflates the default probability through
//! the wrong-way channel: `PD' = PD * (1 + max(rho, 0) * credit * 5)`.
//! The raw correlation is allowed to dampen exposure, but only a
//! positive correlation feeds the PD multiplier.

use risklab_core::config::FieldSpec;

/// Inputs for the joint stress scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditStressInputs {
    /// Baseline expected positive exposure, in currency units.
    pub epe: f64,
    /// Baseline potential future exposure, in currency units.
    pub pfe: f64,
    /// Counterparty default probability, in percent.
    pub pd_pct: f64,
    /// Loss given default, in percent.
    pub lgd_pct: f64,
    /// Interest-rate shock as a decimal move, e.g. `0.05` for +5%.
    pub interest_shock: f64,
    /// Equity shock as a decimal move.
    pub equity_shock: f64,
    /// Credit-spread shock as a decimal move.
    pub credit_shock: f64,
    /// Exposure/credit correlation in `[-1, 1]`.
    pub correlation: f64,
}

/// Stressed exposure and loss metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditStressReport {
    /// Multiplier applied to both exposure metrics.
    pub exposure_factor: f64,
    /// `EPE * factor`.
    pub stressed_epe: f64,
    /// `PFE * factor`.
    pub stressed_pfe: f64,
    /// Expected loss before the stress, `EPE * PD * LGD`.
    pub base_expected_loss: f64,
    /// Default probability after the wrong-way inflation, as a decimal.
    pub stressed_pd: f64,
    /// Expected loss under stress.
    pub stressed_expected_loss: f64,
    /// CVA impact of the PFE move, `(PFE' - PFE) * LGD`.
    pub stressed_cva: f64,
}

impl CreditStressInputs {
    /// Baseline expected positive exposure.
    pub const EPE: FieldSpec = FieldSpec::unbounded("epe", 0.0);
    /// Baseline potential future exposure.
    pub const PFE: FieldSpec = FieldSpec::unbounded("pfe", 0.0);
    /// Default probability (percent).
    pub const PROBABILITY: FieldSpec = FieldSpec::unbounded("pd", 0.0);
    /// Loss given default (percent).
    pub const LGD: FieldSpec = FieldSpec::unbounded("lgd", 0.0);
    /// Interest-rate shock (decimal).
    pub const INTEREST_SHOCK: FieldSpec = FieldSpec::unbounded("interest-shock", 0.0);
    /// Equity shock (decimal).
    pub const EQUITY_SHOCK: FieldSpec = FieldSpec::unbounded("equity-shock", 0.0);
    /// Credit-spread shock (decimal).
    pub const CREDIT_SHOCK: FieldSpec = FieldSpec::unbounded("credit-shock", 0.0);
    /// Exposure/credit correlation, clamped to `[-1, 1]`.
    pub const CORRELATION: FieldSpec = FieldSpec::new("correlation", 0.0, -1.0, 1.0);

    /// Builds inputs from resolved values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        epe: f64,
        pfe: f64,
        pd_pct: f64,
        lgd_pct: f64,
        interest_shock: f64,
        equity_shock: f64,
        credit_shock: f64,
        correlation: f64,
    ) -> Self {
        Self::from_raw(
            Some(epe),
            Some(pfe),
            Some(pd_pct),
            Some(lgd_pct),
            Some(interest_shock),
            Some(equity_shock),
            Some(credit_shock),
            Some(correlation),
        )
    }

    /// Builds inputs from raw form fields, substituting defaults for
    /// anything missing or non-finite and clamping the correlation.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        epe: Option<f64>,
        pfe: Option<f64>,
        pd_pct: Option<f64>,
        lgd_pct: Option<f64>,
        interest_shock: Option<f64>,
        equity_shock: Option<f64>,
        credit_shock: Option<f64>,
        correlation: Option<f64>,
    ) -> Self {
        Self {
            epe: Self::EPE.resolve(epe),
            pfe: Self::PFE.resolve(pfe),
            pd_pct: Self::PROBABILITY.resolve(pd_pct),
            lgd_pct: Self::LGD.resolve(lgd_pct),
            interest_shock: Self::INTEREST_SHOCK.resolve(interest_shock),
            equity_shock: Self::EQUITY_SHOCK.resolve(equity_shock),
            credit_shock: Self::CREDIT_SHOCK.resolve(credit_shock),
            correlation: Self::CORRELATION.resolve(correlation),
        }
    }

    /// Applies the shocks to the baseline.
    pub fn apply(&self) -> CreditStressReport {
        let pd = self.pd_pct / 100.0;
        let lgd = self.lgd_pct / 100.0;

        let total_shock = self.interest_shock + self.equity_shock + self.credit_shock;
        let exposure_factor = 1.0 + total_shock + self.correlation * self.credit_shock;
        let stressed_epe = self.epe * exposure_factor;
        let stressed_pfe = self.pfe * exposure_factor;

        let base_expected_loss = self.epe * pd * lgd;
        let stressed_pd = pd * (1.0 + self.correlation.max(0.0) * self.credit_shock * 5.0);
        let stressed_expected_loss = stressed_epe * stressed_pd * lgd;
        let stressed_cva = (stressed_pfe - self.pfe) * lgd;

        CreditStressReport {
            exposure_factor,
            stressed_epe,
            stressed_pfe,
            base_expected_loss,
            stressed_pd,
            stressed_expected_loss,
            stressed_cva,
        }
    }
}

impl Default for CreditStressInputs {
    fn default() -> Self {
        Self::from_raw(None, None, None, None, None, None, None, None)
    }
}
