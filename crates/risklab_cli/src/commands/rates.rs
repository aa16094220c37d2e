//! Rates command implementation
//!
//! Prints the expected short-rate path and the model yield curve for a
//! mean-reverting short-rate parameter set.

use serde_json::json;
use tracing::info;

use risklab_models::rates::short_rate::{timeline, ShortRateParams, STANDARD_MATURITIES};

use crate::format::percent;
use crate::Result;

/// Run the rates command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    initial_rate: Option<f64>,
    long_run_rate: Option<f64>,
    mean_reversion: Option<f64>,
    volatility: Option<f64>,
    tilt: Option<f64>,
    decay: Option<f64>,
    max_years: f64,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let params = ShortRateParams::from_form_inputs(
        initial_rate,
        long_run_rate,
        mean_reversion,
        volatility,
        tilt,
        decay,
    );
    info!("Building short-rate expectations...");
    info!(
        "  r0: {:.4}  theta: {:.4}  kappa: {:.2}  decay: {:.2}",
        params.r0, params.theta, params.kappa, params.decay
    );

    let grid = timeline(max_years, 0.25);
    let expected_path: Vec<f64> = grid.iter().map(|&t| params.expected_short_rate(t)).collect();
    let yields = params.yield_curve(&STANDARD_MATURITIES);

    match format {
        "json" => {
            let payload = json!({
                "params": params,
                "timeline": grid,
                "expected_path": expected_path,
                "maturities": STANDARD_MATURITIES,
                "yields": yields,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("Expected short rate (annual checkpoints)");
            println!("----------------------------------------");
            println!("{:<10} {:>12}", "Year", "E[r(t)]");
            for (t, rate) in grid.iter().zip(&expected_path) {
                if t.fract().abs() < 1e-9 {
                    println!("{:<10} {:>12}", t, percent(rate * 100.0, 2));
                }
            }

            println!();
            println!("Expected yield curve");
            println!("----------------------------------------");
            println!("{:<10} {:>12}", "Maturity", "Yield");
            for (maturity, y) in STANDARD_MATURITIES.iter().zip(&yields) {
                println!("{:<10} {:>12}", format!("{}y", maturity), percent(y * 100.0, 2));
            }
        }
    }

    info!("Rates complete");
    Ok(())
}
