//! Sensitivity-based P&L aggregation.
//!
//! Combines first-order sensitivities (PV01, CS01, asset deltas) and
//! option Greeks with a supplied set of market shocks into named P&L
//! contributions:
//!
//! ```text
//! rates    pv01  * rate_shock_bps
//! credit   cs01  * spread_shock_bps
//! equity   delta * equity_shock_pct
//! fx       delta * fx_shock_pct
//! option   delta * dS + 0.5 gamma dS^2 + vega dVol + theta dT + rho dR
//! ```
//!
//! The commodity shock falls back to the FX shock when not supplied, so
//! a plain FX/commodity book revalues both legs off one input. Gamma is
//! the only quadratic term.

use risklab_core::config::FieldSpec;

/// First-order sensitivities and option Greeks of the position.
///
/// All fields are currency P&L per unit shock (per basis point for
/// PV01/CS01, per percentage point for the asset deltas, per unit move
/// for the Greeks). Missing entries default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityProfile {
    /// P&L per basis point of rate move
    pub pv01: f64,
    /// P&L per basis point of credit spread move
    pub cs01: f64,
    /// P&L per percentage point of equity move
    pub equity_delta: f64,
    /// P&L per percentage point of FX move
    pub fx_delta: f64,
    /// P&L per percentage point of commodity move
    pub commodity_delta: f64,
    /// Option delta (P&L per unit of underlying price move)
    pub option_delta: f64,
    /// Option gamma (second-order price sensitivity)
    pub gamma: f64,
    /// Option vega (P&L per unit of volatility move)
    pub vega: f64,
    /// Option theta (P&L per unit of time passage)
    pub theta: f64,
    /// Option rho (P&L per unit of rate move)
    pub rho: f64,
}

/// Market shocks applied to a [`SensitivityProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketShocks {
    /// Rate shock in basis points
    pub rate_bps: f64,
    /// Credit spread shock in basis points
    pub spread_bps: f64,
    /// Equity shock in percentage points
    pub equity_pct: f64,
    /// FX shock in percentage points
    pub fx_pct: f64,
    /// Commodity shock in percentage points
    pub commodity_pct: f64,
    /// Underlying price change for the option Greeks
    pub price_change: f64,
    /// Volatility change for vega
    pub vol_change: f64,
    /// Time passage for theta
    pub time_change: f64,
    /// Rate change for rho
    pub rate_change: f64,
}

impl MarketShocks {
    /// Rate shock (basis points).
    pub const RATE_SHOCK: FieldSpec = FieldSpec::unbounded("rate-shock", 0.0);
    /// Credit spread shock (basis points).
    pub const SPREAD_SHOCK: FieldSpec = FieldSpec::unbounded("spread-shock", 0.0);
    /// Equity shock (percent).
    pub const EQUITY_SHOCK: FieldSpec = FieldSpec::unbounded("equity-shock", 0.0);
    /// FX shock (percent).
    pub const FX_SHOCK: FieldSpec = FieldSpec::unbounded("fx-shock", 0.0);
    /// Underlying price change.
    pub const PRICE_CHANGE: FieldSpec = FieldSpec::unbounded("price-change", 0.0);
    /// Volatility change.
    pub const VOL_CHANGE: FieldSpec = FieldSpec::unbounded("vol-change", 0.0);
    /// Time passage.
    pub const TIME_CHANGE: FieldSpec = FieldSpec::unbounded("time-change", 0.0);
    /// Rate change.
    pub const RATE_CHANGE: FieldSpec = FieldSpec::unbounded("rate-change", 0.0);

    /// Builds a shock set from raw form fields.
    ///
    /// Missing or non-finite fields default to zero, except the
    /// commodity shock which falls back to the resolved FX shock.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        rate_bps: Option<f64>,
        spread_bps: Option<f64>,
        equity_pct: Option<f64>,
        fx_pct: Option<f64>,
        commodity_pct: Option<f64>,
        price_change: Option<f64>,
        vol_change: Option<f64>,
        time_change: Option<f64>,
        rate_change: Option<f64>,
    ) -> Self {
        let fx_pct = Self::FX_SHOCK.resolve(fx_pct);
        Self {
            rate_bps: Self::RATE_SHOCK.resolve(rate_bps),
            spread_bps: Self::SPREAD_SHOCK.resolve(spread_bps),
            equity_pct: Self::EQUITY_SHOCK.resolve(equity_pct),
            fx_pct,
            commodity_pct: match commodity_pct {
                Some(value) if value.is_finite() => value,
                _ => fx_pct,
            },
            price_change: Self::PRICE_CHANGE.resolve(price_change),
            vol_change: Self::VOL_CHANGE.resolve(vol_change),
            time_change: Self::TIME_CHANGE.resolve(time_change),
            rate_change: Self::RATE_CHANGE.resolve(rate_change),
        }
    }
}

/// One labelled P&L contribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityContribution {
    /// Risk factor name
    pub label: String,
    /// P&L contribution in currency units
    pub value: f64,
}

/// Ordered contribution table plus its total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityReport {
    /// Contributions in display order
    pub contributions: Vec<SensitivityContribution>,
    /// Total P&L across all contributions
    pub total: f64,
}

impl SensitivityProfile {
    /// P&L per basis point of rate move.
    pub const PV01: FieldSpec = FieldSpec::unbounded("pv01", 0.0);
    /// P&L per basis point of spread move.
    pub const CS01: FieldSpec = FieldSpec::unbounded("cs01", 0.0);
    /// P&L per percentage point of equity move.
    pub const EQUITY_DELTA: FieldSpec = FieldSpec::unbounded("equity-delta", 0.0);
    /// P&L per percentage point of FX move.
    pub const FX_DELTA: FieldSpec = FieldSpec::unbounded("fx-delta", 0.0);
    /// P&L per percentage point of commodity move.
    pub const COMMODITY_DELTA: FieldSpec = FieldSpec::unbounded("commodity-delta", 0.0);
    /// Option delta.
    pub const OPTION_DELTA: FieldSpec = FieldSpec::unbounded("option-delta", 0.0);
    /// Option gamma.
    pub const GAMMA: FieldSpec = FieldSpec::unbounded("gamma", 0.0);
    /// Option vega.
    pub const VEGA: FieldSpec = FieldSpec::unbounded("vega", 0.0);
    /// Option theta.
    pub const THETA: FieldSpec = FieldSpec::unbounded("theta", 0.0);
    /// Option rho.
    pub const RHO: FieldSpec = FieldSpec::unbounded("rho", 0.0);

    /// Builds a profile from raw form fields, substituting zero for
    /// anything missing or non-finite.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        pv01: Option<f64>,
        cs01: Option<f64>,
        equity_delta: Option<f64>,
        fx_delta: Option<f64>,
        commodity_delta: Option<f64>,
        option_delta: Option<f64>,
        gamma: Option<f64>,
        vega: Option<f64>,
        theta: Option<f64>,
        rho: Option<f64>,
    ) -> Self {
        Self {
            pv01: Self::PV01.resolve(pv01),
            cs01: Self::CS01.resolve(cs01),
            equity_delta: Self::EQUITY_DELTA.resolve(equity_delta),
            fx_delta: Self::FX_DELTA.resolve(fx_delta),
            commodity_delta: Self::COMMODITY_DELTA.resolve(commodity_delta),
            option_delta: Self::OPTION_DELTA.resolve(option_delta),
            gamma: Self::GAMMA.resolve(gamma),
            vega: Self::VEGA.resolve(vega),
            theta: Self::THETA.resolve(theta),
            rho: Self::RHO.resolve(rho),
        }
    }

    /// Revalues the profile under a shock set.
    ///
    /// # Examples
    ///
    /// ```
    /// use risklab_market::sensitivity::{MarketShocks, SensitivityProfile};
    ///
    /// let profile = SensitivityProfile {
    ///     pv01: 2_500.0,
    ///     ..SensitivityProfile::default()
    /// };
    /// let shocks = MarketShocks {
    ///     rate_bps: 25.0,
    ///     ..MarketShocks::default()
    /// };
    ///
    /// let report = profile.aggregate(&shocks);
    /// assert_eq!(report.total, 62_500.0);
    /// ```
    pub fn aggregate(&self, shocks: &MarketShocks) -> SensitivityReport {
        let entries = [
            ("PV01", self.pv01 * shocks.rate_bps),
            ("CS01", self.cs01 * shocks.spread_bps),
            ("Equity delta", self.equity_delta * shocks.equity_pct),
            ("FX delta", self.fx_delta * shocks.fx_pct),
            ("Commodity delta", self.commodity_delta * shocks.commodity_pct),
            ("Option delta", self.option_delta * shocks.price_change),
            (
                "Gamma",
                0.5 * self.gamma * shocks.price_change * shocks.price_change,
            ),
            ("Vega", self.vega * shocks.vol_change),
            ("Theta", self.theta * shocks.time_change),
            ("Rho", self.rho * shocks.rate_change),
        ];

        let contributions: Vec<SensitivityContribution> = entries
            .iter()
            .map(|(label, value)| SensitivityContribution {
                label: (*label).to_string(),
                value: *value,
            })
            .collect();
        let total = contributions.iter().map(|item| item.value).sum();

        SensitivityReport {
            contributions,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_profile() -> SensitivityProfile {
        SensitivityProfile {
            pv01: 100.0,
            cs01: 200.0,
            equity_delta: 300.0,
            fx_delta: 400.0,
            commodity_delta: 500.0,
            option_delta: 600.0,
            gamma: 700.0,
            vega: 800.0,
            theta: 900.0,
            rho: 1_000.0,
        }
    }

    fn full_shocks() -> MarketShocks {
        MarketShocks {
            rate_bps: 2.0,
            spread_bps: 3.0,
            equity_pct: 4.0,
            fx_pct: 5.0,
            commodity_pct: 10.0,
            price_change: 6.0,
            vol_change: 7.0,
            time_change: 8.0,
            rate_change: 9.0,
        }
    }

    #[test]
    fn test_hand_computed_contributions() {
        let report = full_profile().aggregate(&full_shocks());

        let expected = [
            ("PV01", 200.0),
            ("CS01", 600.0),
            ("Equity delta", 1_200.0),
            ("FX delta", 2_000.0),
            ("Commodity delta", 5_000.0),
            ("Option delta", 3_600.0),
            ("Gamma", 12_600.0),
            ("Vega", 5_600.0),
            ("Theta", 7_200.0),
            ("Rho", 9_000.0),
        ];

        assert_eq!(report.contributions.len(), 10);
        for (contribution, (label, value)) in report.contributions.iter().zip(&expected) {
            assert_eq!(contribution.label, *label);
            assert_relative_eq!(contribution.value, *value, epsilon = 1e-9);
        }
        assert_relative_eq!(report.total, 47_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_inputs_give_zero_pnl() {
        let report = SensitivityProfile::default().aggregate(&MarketShocks::default());
        assert_eq!(report.total, 0.0);
        for contribution in &report.contributions {
            assert_eq!(contribution.value, 0.0);
        }
    }

    #[test]
    fn test_commodity_shock_defaults_to_fx() {
        let profile = SensitivityProfile {
            commodity_delta: 1_000.0,
            ..SensitivityProfile::default()
        };
        let shocks = MarketShocks::from_raw(
            None,
            None,
            Some(50.0),
            Some(-3.0),
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(shocks.commodity_pct, -3.0);

        let report = profile.aggregate(&shocks);
        let commodity = &report.contributions[4];
        assert_eq!(commodity.label, "Commodity delta");
        assert_eq!(commodity.value, -3_000.0);
        assert_eq!(report.total, -3_000.0);
    }

    #[test]
    fn test_explicit_commodity_shock_overrides_fx() {
        let shocks = MarketShocks::from_raw(
            None,
            None,
            None,
            Some(-3.0),
            Some(2.0),
            None,
            None,
            None,
            None,
        );
        assert_eq!(shocks.fx_pct, -3.0);
        assert_eq!(shocks.commodity_pct, 2.0);
    }

    #[test]
    fn test_gamma_contribution_even_in_price_move() {
        let profile = SensitivityProfile {
            gamma: 40.0,
            ..SensitivityProfile::default()
        };
        let up = profile.aggregate(&MarketShocks {
            price_change: 2.5,
            ..MarketShocks::default()
        });
        let down = profile.aggregate(&MarketShocks {
            price_change: -2.5,
            ..MarketShocks::default()
        });

        assert_relative_eq!(up.total, 125.0, epsilon = 1e-12);
        assert_relative_eq!(up.total, down.total, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_from_raw_substitutes_zero() {
        let profile = SensitivityProfile::from_raw(
            Some(2_500.0),
            None,
            Some(f64::NAN),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(profile.pv01, 2_500.0);
        assert_eq!(profile.cs01, 0.0);
        assert_eq!(profile.equity_delta, 0.0);
        assert_eq!(profile, SensitivityProfile {
            pv01: 2_500.0,
            ..SensitivityProfile::default()
        });
    }

    #[test]
    fn test_labels_in_display_order() {
        let report = SensitivityProfile::default().aggregate(&MarketShocks::default());
        let labels: Vec<&str> = report
            .contributions
            .iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(
            labels,
            [
                "PV01",
                "CS01",
                "Equity delta",
                "FX delta",
                "Commodity delta",
                "Option delta",
                "Gamma",
                "Vega",
                "Theta",
                "Rho"
            ]
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn profile() -> impl Strategy<Value = SensitivityProfile> {
            (
                -1e4..1e4f64,
                -1e4..1e4f64,
                -1e4..1e4f64,
                -1e4..1e4f64,
                -1e4..1e4f64,
            )
                .prop_flat_map(|(pv01, cs01, equity_delta, fx_delta, commodity_delta)| {
                    (-1e4..1e4f64, -1e4..1e4f64, -1e4..1e4f64, -1e4..1e4f64, -1e4..1e4f64)
                        .prop_map(move |(option_delta, gamma, vega, theta, rho)| {
                            SensitivityProfile {
                                pv01,
                                cs01,
                                equity_delta,
                                fx_delta,
                                commodity_delta,
                                option_delta,
                                gamma,
                                vega,
                                theta,
                                rho,
                            }
                        })
                })
        }

        fn shocks() -> impl Strategy<Value = MarketShocks> {
            (
                -100.0..100.0f64,
                -100.0..100.0f64,
                -50.0..50.0f64,
                -50.0..50.0f64,
                -50.0..50.0f64,
                -20.0..20.0f64,
                -5.0..5.0f64,
                -5.0..5.0f64,
                -5.0..5.0f64,
            )
                .prop_map(
                    |(
                        rate_bps,
                        spread_bps,
                        equity_pct,
                        fx_pct,
                        commodity_pct,
                        price_change,
                        vol_change,
                        time_change,
                        rate_change,
                    )| MarketShocks {
                        rate_bps,
                        spread_bps,
                        equity_pct,
                        fx_pct,
                        commodity_pct,
                        price_change,
                        vol_change,
                        time_change,
                        rate_change,
                    },
                )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_total_is_sum_of_contributions(p in profile(), s in shocks()) {
                let report = p.aggregate(&s);
                let sum: f64 = report.contributions.iter().map(|item| item.value).sum();
                prop_assert!((report.total - sum).abs() < 1e-9);
            }

            #[test]
            fn prop_always_ten_contributions(p in profile(), s in shocks()) {
                prop_assert_eq!(p.aggregate(&s).contributions.len(), 10);
            }

            #[test]
            fn prop_zero_shocks_zero_pnl(p in profile()) {
                let report = p.aggregate(&MarketShocks::default());
                prop_assert_eq!(report.total, 0.0);
            }
        }
    }
}
