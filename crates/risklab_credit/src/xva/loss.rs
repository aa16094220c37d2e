//! Single-name expected loss.

use risklab_core::config::FieldSpec;

/// Inputs for the expected-loss identity `EAD * PD * LGD`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedLossInputs {
    /// Exposure at default, in currency units.
    pub exposure: f64,
    /// Probability of default, in percent.
    pub pd_pct: f64,
    /// Loss given default, in percent.
    pub lgd_pct: f64,
}

/// Expected loss in currency units and as a rate on the exposure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedLossReport {
    /// `exposure * PD * LGD`.
    pub expected_loss: f64,
    /// `PD * LGD` restated in percent of the exposure.
    pub loss_rate_pct: f64,
}

impl ExpectedLossInputs {
    /// Exposure at default.
    pub const EXPOSURE: FieldSpec = FieldSpec::unbounded("exposure", 0.0);
    /// Probability of default (percent).
    pub const PROBABILITY: FieldSpec = FieldSpec::unbounded("pd", 0.0);
    /// Loss given default (percent).
    pub const LGD: FieldSpec = FieldSpec::unbounded("lgd", 0.0);

    /// Builds inputs from resolved values.
    pub fn new(exposure: f64, pd_pct: f64, lgd_pct: f64) -> Self {
        Self::from_raw(Some(exposure), Some(pd_pct), Some(lgd_pct))
    }

    /// Builds inputs from raw form fields, substituting zero for
    /// anything missing or non-finite.
    pub fn from_raw(exposure: Option<f64>, pd_pct: Option<f64>, lgd_pct: Option<f64>) -> Self {
        Self {
            exposure: Self::EXPOSURE.resolve(exposure),
            pd_pct: Self::PROBABILITY.resolve(pd_pct),
            lgd_pct: Self::LGD.resolve(lgd_pct),
        }
    }

    /// Computes the expected loss and its rate on the exposure.
    pub fn compute(&self) -> ExpectedLossReport {
        let pd = self.pd_pct / 100.0;
        let lgd = self.lgd_pct / 100.0;
        ExpectedLossReport {
            expected_loss: self.exposure * pd * lgd,
            loss_rate_pct: pd * lgd * 100.0,
        }
    }
}
