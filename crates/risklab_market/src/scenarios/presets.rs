//! Preset shock combinations for common stress tests.

use super::stress::MarketStressInputs;

/// Ready-made shock combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StressPreset {
    /// Rates +200bp, other factors unchanged
    RateShock200bp,
    /// Equity -30%, other factors unchanged
    EquityDown30Pct,
    /// Volatility up by half, other factors unchanged
    VolUp50Pct,
    /// Rates +100bp, equity -20%, vol +30%, correlation 0.8
    CorrelatedSellOff,
}

impl StressPreset {
    /// All presets in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::RateShock200bp,
            Self::EquityDown30Pct,
            Self::VolUp50Pct,
            Self::CorrelatedSellOff,
        ]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RateShock200bp => "Rates +200bp",
            Self::EquityDown30Pct => "Equity -30%",
            Self::VolUp50Pct => "Vol +50%",
            Self::CorrelatedSellOff => "Correlated sell-off",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RateShock200bp => "Parallel interest rate shift +200 basis points",
            Self::EquityDown30Pct => "Equity prices decline 30%",
            Self::VolUp50Pct => "Implied volatility rises by half",
            Self::CorrelatedSellOff => {
                "Rates +100bp, equity -20%, vol +30% with correlation at 0.8"
            }
        }
    }

    /// Combines the preset shocks with base risk figures.
    pub fn inputs(&self, base_var: f64, base_es: f64) -> MarketStressInputs {
        match self {
            Self::RateShock200bp => {
                MarketStressInputs::new(base_var, base_es, 200.0, 0.0, 0.0, 0.0)
            }
            Self::EquityDown30Pct => {
                MarketStressInputs::new(base_var, base_es, 0.0, -30.0, 0.0, 0.0)
            }
            Self::VolUp50Pct => MarketStressInputs::new(base_var, base_es, 0.0, 0.0, 0.5, 0.0),
            Self::CorrelatedSellOff => {
                MarketStressInputs::new(base_var, base_es, 100.0, -20.0, 0.3, 0.8)
            }
        }
    }
}
