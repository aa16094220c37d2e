//! Stress command implementations
//!
//! Market stress scales base VaR/ES by shock-derived factors; credit
//! stress revalues a counterparty exposure profile.

use serde_json::json;
use tracing::info;

use risklab_credit::stress::CreditStressInputs;
use risklab_market::scenarios::{MarketStressInputs, StressPreset};

use crate::format::{currency, number, percent};
use crate::{CliError, Result};

fn preset_by_key(key: &str) -> Result<StressPreset> {
    match key {
        "rates" => Ok(StressPreset::RateShock200bp),
        "equity" => Ok(StressPreset::EquityDown30Pct),
        "vol" => Ok(StressPreset::VolUp50Pct),
        "sell-off" => Ok(StressPreset::CorrelatedSellOff),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown preset: {}. Supported: rates, equity, vol, sell-off",
            other
        ))),
    }
}

/// Run the market stress command.
#[allow(clippy::too_many_arguments)]
pub fn run_market(
    base_var: Option<f64>,
    base_es: Option<f64>,
    rate_shock: Option<f64>,
    equity_shock: Option<f64>,
    vol_shock: Option<f64>,
    correlation: Option<f64>,
    preset: Option<&str>,
    list_presets: bool,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    if list_presets {
        println!();
        println!("Available stress presets");
        println!("----------------------------------------");
        for preset in StressPreset::all() {
            println!("{:<22} {}", preset.name(), preset.description());
        }
        return Ok(());
    }

    let inputs = match preset {
        Some(key) => {
            let preset = preset_by_key(key)?;
            info!("Applying preset: {}", preset.name());
            preset.inputs(
                MarketStressInputs::BASE_VAR.resolve(base_var),
                MarketStressInputs::BASE_ES.resolve(base_es),
            )
        }
        None => MarketStressInputs::from_raw(
            base_var,
            base_es,
            rate_shock,
            equity_shock,
            vol_shock,
            correlation,
        ),
    };

    info!("Applying market stress...");
    let report = inputs.apply();

    match format {
        "json" => {
            let payload = json!({
                "inputs": inputs,
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("Market stress result");
            println!("----------------------------------------");
            println!("{:<22} {:>14}", "Total factor", number(report.total_factor, 4));
            println!("{:<22} {:>14}", "Stressed VaR", currency(report.stressed_var));
            println!(
                "{:<22} {:>14}",
                "VaR change",
                format!(
                    "{} ({})",
                    currency(report.var_change),
                    percent(report.var_change_pct, 1)
                )
            );
            println!("{:<22} {:>14}", "Stressed ES", currency(report.stressed_es));
            println!(
                "{:<22} {:>14}",
                "ES change",
                format!(
                    "{} ({})",
                    currency(report.es_change),
                    percent(report.es_change_pct, 1)
                )
            );
        }
    }

    info!("Market stress complete");
    Ok(())
}

/// Run the credit stress command.
#[allow(clippy::too_many_arguments)]
pub fn run_credit(
    epe: Option<f64>,
    pfe: Option<f64>,
    pd: Option<f64>,
    lgd: Option<f64>,
    interest_shock: Option<f64>,
    equity_shock: Option<f64>,
    credit_shock: Option<f64>,
    correlation: Option<f64>,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let inputs = CreditStressInputs::from_raw(
        epe,
        pfe,
        pd,
        lgd,
        interest_shock,
        equity_shock,
        credit_shock,
        correlation,
    );

    info!("Applying credit stress...");
    let report = inputs.apply();

    match format {
        "json" => {
            let payload = json!({
                "inputs": inputs,
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("Credit stress result");
            println!("----------------------------------------");
            println!(
                "{:<22} {:>14}",
                "Exposure factor",
                number(report.exposure_factor, 4)
            );
            println!("{:<22} {:>14}", "Stressed EPE", currency(report.stressed_epe));
            println!("{:<22} {:>14}", "Stressed PFE", currency(report.stressed_pfe));
            println!(
                "{:<22} {:>14}",
                "Stressed PD",
                percent(report.stressed_pd * 100.0, 2)
            );
            println!(
                "{:<22} {:>14}",
                "Base expected loss",
                currency(report.base_expected_loss)
            );
            println!(
                "{:<22} {:>14}",
                "Stressed expected loss",
                currency(report.stressed_expected_loss)
            );
            println!("{:<22} {:>14}", "Stressed CVA", currency(report.stressed_cva));
        }
    }

    info!("Credit stress complete");
    Ok(())
}
