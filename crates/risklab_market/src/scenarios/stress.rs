//! Multiplicative stress scaling of base risk figures.
//!
//! Each shock magnitude maps to a scaling factor above 1 and the
//! factors compound:
//!
//! ```text
//! rate_factor   = 1 + |rate_bps| / 500
//! equity_factor = 1 + |equity_pct| / 40
//! vol_factor    = 1 + |vol_shock| * 2
//! corr_factor   = 1 + max(correlation, 0) * 0.5
//!
//! stressed_var = base_var * total_factor
//! stressed_es  = base_es * (total_factor + 0.1 * sign(equity_pct))
//! ```
//!
//! ES picks up a directional kicker from the equity shock sign since
//! tail losses widen asymmetrically in a sell-off. This is a closed-form
//! rescaling of externally supplied figures, not a re-simulation.

use risklab_core::config::FieldSpec;

/// Base risk figures plus the shock set to scale them by.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketStressInputs {
    /// Base VaR in currency units
    pub base_var: f64,
    /// Base Expected Shortfall in currency units
    pub base_es: f64,
    /// Rate shock in basis points
    pub rate_shock_bps: f64,
    /// Equity shock in percentage points (signed)
    pub equity_shock_pct: f64,
    /// Relative volatility shock (0.5 = vol up by half)
    pub vol_shock: f64,
    /// Cross-asset correlation in [-1, 1]
    pub correlation: f64,
}

/// Scaled risk figures with the individual factors broken out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketStressReport {
    /// Factor from the rate shock
    pub rate_factor: f64,
    /// Factor from the equity shock
    pub equity_factor: f64,
    /// Factor from the volatility shock
    pub vol_factor: f64,
    /// Factor from positive correlation
    pub correlation_factor: f64,
    /// Product of all factors
    pub total_factor: f64,
    /// Base VaR scaled by the total factor
    pub stressed_var: f64,
    /// Base ES scaled by the total factor plus the equity-sign kicker
    pub stressed_es: f64,
    /// Absolute VaR change
    pub var_change: f64,
    /// VaR change as a percentage of base (base of 0 treated as 1)
    pub var_change_pct: f64,
    /// Absolute ES change
    pub es_change: f64,
    /// ES change as a percentage of base (base of 0 treated as 1)
    pub es_change_pct: f64,
}

impl MarketStressInputs {
    /// Base VaR form field.
    pub const BASE_VAR: FieldSpec = FieldSpec::unbounded("base-var", 0.0);
    /// Base ES form field.
    pub const BASE_ES: FieldSpec = FieldSpec::unbounded("base-es", 0.0);
    /// Rate shock form field in basis points.
    pub const RATE_SHOCK: FieldSpec = FieldSpec::unbounded("rate-shock", 0.0);
    /// Equity shock form field in percentage points.
    pub const EQUITY_SHOCK: FieldSpec = FieldSpec::unbounded("equity-shock", 0.0);
    /// Volatility shock form field (relative).
    pub const VOL_SHOCK: FieldSpec = FieldSpec::unbounded("vol-shock", 0.0);
    /// Correlation form field, clamped into [-1, 1].
    pub const CORRELATION: FieldSpec = FieldSpec::new("correlation", 0.0, -1.0, 1.0);

    /// Builds inputs from already-parsed values, clamping correlation
    /// into [-1, 1].
    pub fn new(
        base_var: f64,
        base_es: f64,
        rate_shock_bps: f64,
        equity_shock_pct: f64,
        vol_shock: f64,
        correlation: f64,
    ) -> Self {
        Self::from_raw(
            Some(base_var),
            Some(base_es),
            Some(rate_shock_bps),
            Some(equity_shock_pct),
            Some(vol_shock),
            Some(correlation),
        )
    }

    /// Builds inputs from optional form fields. Missing or non-finite
    /// entries fall back to zero.
    pub fn from_raw(
        base_var: Option<f64>,
        base_es: Option<f64>,
        rate_shock_bps: Option<f64>,
        equity_shock_pct: Option<f64>,
        vol_shock: Option<f64>,
        correlation: Option<f64>,
    ) -> Self {
        Self {
            base_var: Self::BASE_VAR.resolve(base_var),
            base_es: Self::BASE_ES.resolve(base_es),
            rate_shock_bps: Self::RATE_SHOCK.resolve(rate_shock_bps),
            equity_shock_pct: Self::EQUITY_SHOCK.resolve(equity_shock_pct),
            vol_shock: Self::VOL_SHOCK.resolve(vol_shock),
            correlation: Self::CORRELATION.resolve(correlation),
        }
    }

    /// Applies the stress factors to the base figures.
    ///
    /// # Examples
    ///
    /// ```
    /// use risklab_market::scenarios::stress::MarketStressInputs;
    ///
    /// let report =
    ///     MarketStressInputs::new(100_000.0, 130_000.0, 200.0, 0.0, 0.0, 0.0).apply();
    ///
    /// // 200bp rate shock scales VaR by 1.4
    /// assert!((report.stressed_var - 140_000.0).abs() < 1e-6);
    /// ```
    pub fn apply(&self) -> MarketStressReport {
        let rate_factor = 1.0 + self.rate_shock_bps.abs() / 500.0;
        let equity_factor = 1.0 + self.equity_shock_pct.abs() / 40.0;
        let vol_factor = 1.0 + self.vol_shock.abs() * 2.0;
        let correlation_factor = 1.0 + self.correlation.max(0.0) * 0.5;
        let total_factor = rate_factor * equity_factor * vol_factor * correlation_factor;

        let equity_sign = if self.equity_shock_pct > 0.0 {
            1.0
        } else if self.equity_shock_pct < 0.0 {
            -1.0
        } else {
            0.0
        };

        let stressed_var = self.base_var * total_factor;
        let stressed_es = self.base_es * (total_factor + 0.1 * equity_sign);

        let var_change = stressed_var - self.base_var;
        let es_change = stressed_es - self.base_es;
        let var_base = if self.base_var == 0.0 { 1.0 } else { self.base_var };
        let es_base = if self.base_es == 0.0 { 1.0 } else { self.base_es };

        MarketStressReport {
            rate_factor,
            equity_factor,
            vol_factor,
            correlation_factor,
            total_factor,
            stressed_var,
            stressed_es,
            var_change,
            var_change_pct: var_change / var_base * 100.0,
            es_change,
            es_change_pct: es_change / es_base * 100.0,
        }
    }
}

impl Default for MarketStressInputs {
    fn default() -> Self {
        Self::from_raw(None, None, None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_individual_factors() {
        let report = MarketStressInputs::new(100.0, 100.0, 200.0, -30.0, 0.5, 0.8).apply();

        assert_relative_eq!(report.rate_factor, 1.4, epsilon = 1e-12);
        assert_relative_eq!(report.equity_factor, 1.75, epsilon = 1e-12);
        assert_relative_eq!(report.vol_factor, 2.0, epsilon = 1e-12);
        assert_relative_eq!(report.correlation_factor, 1.4, epsilon = 1e-12);
        assert_relative_eq!(
            report.total_factor,
            1.4 * 1.75 * 2.0 * 1.4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_shock_leaves_figures_unchanged() {
        let report = MarketStressInputs::new(250_000.0, 310_000.0, 0.0, 0.0, 0.0, 0.0).apply();

        assert_relative_eq!(report.total_factor, 1.0, epsilon = 1e-12);
        assert_relative_eq!(report.stressed_var, 250_000.0, epsilon = 1e-9);
        assert_relative_eq!(report.stressed_es, 310_000.0, epsilon = 1e-9);
        assert_eq!(report.var_change, 0.0);
        assert_eq!(report.es_change, 0.0);
    }

    #[test]
    fn test_es_kicker_follows_equity_sign() {
        let down = MarketStressInputs::new(0.0, 100_000.0, 0.0, -20.0, 0.0, 0.0).apply();
        let up = MarketStressInputs::new(0.0, 100_000.0, 0.0, 20.0, 0.0, 0.0).apply();
        let flat = MarketStressInputs::new(0.0, 100_000.0, 0.0, 0.0, 0.0, 0.0).apply();

        // same magnitude factor (1.5), kicker -0.1 / +0.1 / 0
        assert_relative_eq!(down.stressed_es, 100_000.0 * 1.4, epsilon = 1e-6);
        assert_relative_eq!(up.stressed_es, 100_000.0 * 1.6, epsilon = 1e-6);
        assert_relative_eq!(flat.stressed_es, 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_correlation_contributes_nothing() {
        let report = MarketStressInputs::new(100.0, 100.0, 0.0, 0.0, 0.0, -0.9).apply();
        assert_relative_eq!(report.correlation_factor, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_clamped_to_unit_range() {
        let inputs = MarketStressInputs::new(100.0, 100.0, 0.0, 0.0, 0.0, 3.0);
        assert_eq!(inputs.correlation, 1.0);
    }

    #[test]
    fn test_change_percent_guards_zero_base() {
        let report = MarketStressInputs::new(0.0, 0.0, 200.0, 0.0, 0.0, 0.0).apply();

        // base of 0 divides by 1 instead
        assert_eq!(report.stressed_var, 0.0);
        assert_eq!(report.var_change_pct, 0.0);
        assert_eq!(report.es_change_pct, 0.0);
    }

    #[test]
    fn test_change_percent_for_positive_base() {
        let report = MarketStressInputs::new(100_000.0, 0.0, 200.0, 0.0, 0.0, 0.0).apply();
        assert_relative_eq!(report.var_change_pct, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shock_signs_do_not_reduce_var() {
        let pos = MarketStressInputs::new(100.0, 100.0, 150.0, 25.0, 0.3, 0.0).apply();
        let neg = MarketStressInputs::new(100.0, 100.0, -150.0, -25.0, -0.3, 0.0).apply();
        assert_relative_eq!(pos.stressed_var, neg.stressed_var, epsilon = 1e-9);
    }

    #[test]
    fn test_from_raw_defaults() {
        let inputs = MarketStressInputs::from_raw(None, None, None, None, None, None);
        assert_eq!(inputs, MarketStressInputs::default());
        assert_eq!(inputs.apply().total_factor, 1.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn inputs() -> impl Strategy<Value = MarketStressInputs> {
            (
                0.0..1e7f64,
                0.0..1e7f64,
                -500.0..500.0f64,
                -60.0..60.0f64,
                -2.0..2.0f64,
                -1.0..1.0f64,
            )
                .prop_map(|(base_var, base_es, rate, equity, vol, corr)| {
                    MarketStressInputs::new(base_var, base_es, rate, equity, vol, corr)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_factors_at_least_one(stress in inputs()) {
                let report = stress.apply();
                prop_assert!(report.rate_factor >= 1.0);
                prop_assert!(report.equity_factor >= 1.0);
                prop_assert!(report.vol_factor >= 1.0);
                prop_assert!(report.correlation_factor >= 1.0);
                prop_assert!(report.total_factor >= 1.0);
            }

            #[test]
            fn prop_stressed_var_never_below_base(stress in inputs()) {
                let report = stress.apply();
                prop_assert!(report.stressed_var >= stress.base_var - 1e-9);
            }

            #[test]
            fn prop_changes_consistent(stress in inputs()) {
                let report = stress.apply();
                prop_assert!(
                    (report.var_change - (report.stressed_var - stress.base_var)).abs() < 1e-6
                );
                prop_assert!(
                    (report.es_change - (report.stressed_es - stress.base_es)).abs() < 1e-6
                );
            }
        }
    }
}
