//! Sensitivity command implementation
//!
//! First-order Greek aggregation of a position profile under a shock
//! set.

use serde_json::json;
use tracing::info;

use risklab_market::sensitivity::{MarketShocks, SensitivityProfile};

use crate::format::currency;
use crate::Result;

/// Named flag bundle for the position profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileArgs {
    /// P&L per basis point of rate move
    pub pv01: Option<f64>,
    /// P&L per basis point of spread move
    pub cs01: Option<f64>,
    /// P&L per percentage point of equity move
    pub equity_delta: Option<f64>,
    /// P&L per percentage point of FX move
    pub fx_delta: Option<f64>,
    /// P&L per percentage point of commodity move
    pub commodity_delta: Option<f64>,
    /// P&L per unit of underlying price move
    pub option_delta: Option<f64>,
    /// Second-order price sensitivity
    pub gamma: Option<f64>,
    /// P&L per volatility point
    pub vega: Option<f64>,
    /// P&L per day of decay
    pub theta: Option<f64>,
    /// P&L per percentage point of rate move
    pub rho: Option<f64>,
}

/// Named flag bundle for the shock set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShockArgs {
    /// Parallel rate shock in basis points
    pub rate_bps: Option<f64>,
    /// Credit spread shock in basis points
    pub spread_bps: Option<f64>,
    /// Equity shock in percent
    pub equity_pct: Option<f64>,
    /// FX shock in percent
    pub fx_pct: Option<f64>,
    /// Commodity shock in percent, falls back to the FX shock
    pub commodity_pct: Option<f64>,
    /// Underlying price change in currency units
    pub price_change: Option<f64>,
    /// Volatility change in points
    pub vol_change: Option<f64>,
    /// Time decay in days
    pub time_change: Option<f64>,
    /// Rate change in percentage points
    pub rate_change: Option<f64>,
}

/// Run the sensitivity command.
pub fn run(profile_args: &ProfileArgs, shock_args: &ShockArgs, format: &str) -> Result<()> {
    super::check_format(format)?;

    let profile = SensitivityProfile::from_raw(
        profile_args.pv01,
        profile_args.cs01,
        profile_args.equity_delta,
        profile_args.fx_delta,
        profile_args.commodity_delta,
        profile_args.option_delta,
        profile_args.gamma,
        profile_args.vega,
        profile_args.theta,
        profile_args.rho,
    );
    let shocks = MarketShocks::from_raw(
        shock_args.rate_bps,
        shock_args.spread_bps,
        shock_args.equity_pct,
        shock_args.fx_pct,
        shock_args.commodity_pct,
        shock_args.price_change,
        shock_args.vol_change,
        shock_args.time_change,
        shock_args.rate_change,
    );

    info!("Aggregating sensitivities...");
    let report = profile.aggregate(&shocks);

    match format {
        "json" => {
            let payload = json!({
                "profile": profile,
                "shocks": shocks,
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("Sensitivity P&L by risk factor");
            println!("----------------------------------------");
            for contribution in &report.contributions {
                println!(
                    "{:<16} {:>14}",
                    contribution.label,
                    currency(contribution.value)
                );
            }
            println!("----------------------------------------");
            println!("{:<16} {:>14}", "Total", currency(report.total));
        }
    }

    info!("Sensitivity aggregation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_partial_profile() {
        let profile = ProfileArgs {
            pv01: Some(2_500.0),
            equity_delta: Some(15_000.0),
            ..ProfileArgs::default()
        };
        let shocks = ShockArgs {
            rate_bps: Some(25.0),
            equity_pct: Some(-10.0),
            ..ShockArgs::default()
        };
        let result = run(&profile, &shocks, "table");
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_json_with_defaults() {
        let result = run(&ProfileArgs::default(), &ShockArgs::default(), "json");
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let result = run(&ProfileArgs::default(), &ShockArgs::default(), "csv");
        assert!(result.is_err());
    }
}
