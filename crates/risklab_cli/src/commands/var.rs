//! Var command implementation
//!
//! Closed-form and simulated Value-at-Risk for a single-position
//! portfolio.

use serde_json::json;
use tracing::info;

use risklab_kernel::rng::PathRng;
use risklab_market::var::monte_carlo::{standard_normal_curve, MonteCarloVarInputs};
use risklab_market::var::parametric::ParametricVarInputs;

use crate::format::{currency, number, percent};
use crate::{CliError, Result};

/// Run the var command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    method: &str,
    value: Option<f64>,
    mean_return: Option<f64>,
    volatility: Option<f64>,
    horizon_days: Option<f64>,
    confidence: Option<f64>,
    paths: u64,
    seed: Option<u64>,
    curve: bool,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let inputs = ParametricVarInputs::from_raw(value, mean_return, volatility, horizon_days, confidence);
    info!("Computing VaR...");
    info!("  Method: {}", method);
    info!(
        "  value: {}  mean: {}  vol: {}  horizon: {}d  confidence: {}%",
        inputs.value, inputs.mean_return, inputs.volatility, inputs.horizon_days, inputs.confidence_pct
    );

    match method {
        "parametric" => run_parametric(&inputs, curve, format),
        "monte-carlo" => run_monte_carlo(&inputs, paths, seed, curve, format),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown method: {}. Supported: parametric, monte-carlo",
            other
        ))),
    }
}

fn run_parametric(inputs: &ParametricVarInputs, curve: bool, format: &str) -> Result<()> {
    let report = inputs.compute()?;

    match format {
        "json" => {
            let mut payload = json!({
                "method": "parametric",
                "inputs": inputs,
                "report": report,
            });
            if curve {
                payload["distribution"] = serde_json::to_value(report.loss_distribution())?;
            }
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!(
                "Parametric VaR ({}% confidence, {} day horizon)",
                number(inputs.confidence_pct, 1),
                inputs.horizon_days
            );
            println!("--------------------------------------------------");
            println!("{:<26} {:>14}", "Value at Risk", currency(report.var_absolute));
            println!(
                "{:<26} {:>14}",
                "Expected Shortfall",
                currency(report.expected_shortfall)
            );
            println!(
                "{:<26} {:>14}",
                "Mean-adjusted VaR",
                currency(report.mean_adjusted_var)
            );
            println!("{:<26} {:>14}", "VaR / value", percent(report.var_percent, 2));
            println!("{:<26} {:>14}", "z score", number(report.z_score, 4));
            if curve {
                let distribution = report.loss_distribution();
                let cut = distribution.var_cut * 100.0;
                println!(
                    "{:<26} {:>14}",
                    "VaR cut (return)",
                    percent(cut, 2)
                );
                println!(
                    "Distribution sampled at {} return levels",
                    distribution.returns_pct.len()
                );
            }
        }
    }

    info!("VaR computation complete");
    Ok(())
}

fn run_monte_carlo(
    inputs: &ParametricVarInputs,
    paths: u64,
    seed: Option<u64>,
    curve: bool,
    format: &str,
) -> Result<()> {
    let mc = MonteCarloVarInputs::new(
        inputs.value,
        inputs.mean_return,
        inputs.volatility,
        inputs.horizon_days,
        paths as usize,
        inputs.confidence_pct,
    )
    .ok_or_else(|| {
        CliError::InvalidArgument(
            "Monte Carlo VaR needs a non-zero value, non-zero volatility and at least one path"
                .to_string(),
        )
    })?;

    let mut rng = PathRng::from_optional_seed(seed);
    info!("  paths: {}  seed: {}", mc.path_count, rng.seed());
    let report = mc.run(&mut rng);

    match format {
        "json" => {
            let mut payload = json!({
                "method": "monte-carlo",
                "inputs": mc,
                "report": report,
            });
            if curve {
                payload["curve"] = serde_json::to_value(standard_normal_curve())?;
            }
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!(
                "Monte Carlo VaR ({} paths, {}% confidence)",
                mc.path_count,
                number(mc.confidence_pct, 1)
            );
            println!("--------------------------------------------------");
            println!("{:<26} {:>14}", "Value at Risk", currency(report.var_absolute));
            println!("{:<26} {:>14}", "CVaR (tail average)", currency(report.cvar));
            println!("{:<26} {:>14}", "Mean P&L", currency(report.mean_pnl));
            println!("{:<26} {:>14}", "VaR / value", percent(report.var_percent, 2));
            if curve {
                let reference = standard_normal_curve();
                println!(
                    "Normal reference curve sampled at {} z levels",
                    reference.xs.len()
                );
            }
        }
    }

    info!("VaR computation complete");
    Ok(())
}
