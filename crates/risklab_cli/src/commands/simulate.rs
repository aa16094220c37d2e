//! Simulate command implementation
//!
//! Runs the Monte Carlo path engines: GBM price fans and the discounted
//! martingale check.

use serde_json::json;
use tracing::info;

use risklab_core::stats::Histogram;
use risklab_kernel::mc::gbm::GbmSimulation;
use risklab_kernel::mc::martingale::MartingaleSimulation;
use risklab_kernel::rng::PathRng;
use risklab_models::gbm::GbmParams;

use crate::format::number;
use crate::{CliError, Result};

/// Run the simulate command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    model: &str,
    spot: Option<f64>,
    drift: Option<f64>,
    vol: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    paths: Option<f64>,
    risk_neutral: bool,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let mut rng = PathRng::from_optional_seed(seed);
    info!("Starting simulation...");
    info!("  Model: {}", model);
    info!("  Seed: {}", rng.seed());

    match model {
        "gbm" => run_gbm(spot, drift, vol, rate, years, paths, risk_neutral, &mut rng, format),
        "martingale" => run_martingale(spot, vol, rate, years, paths, &mut rng, format),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown model: {}. Supported: gbm, martingale",
            other
        ))),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_gbm(
    spot: Option<f64>,
    drift: Option<f64>,
    vol: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    paths: Option<f64>,
    risk_neutral: bool,
    rng: &mut PathRng,
    format: &str,
) -> Result<()> {
    let mut params = GbmParams::from_raw(spot, drift, vol);
    if risk_neutral {
        params = params.risk_neutral(MartingaleSimulation::RATE.resolve(rate));
    }
    let years = GbmSimulation::YEARS.resolve(years);
    let path_count = GbmSimulation::PATHS.resolve(paths) as usize;
    info!(
        "  s0: {}  drift: {}  vol: {}  years: {}  paths: {}",
        params.s0, params.drift, params.vol, years, path_count
    );

    let simulation = GbmSimulation::run(&params, years, path_count, rng);
    let summary = simulation.summary();
    let histogram = Histogram::build(&simulation.final_values, Histogram::DEFAULT_BINS);

    match format {
        "json" => {
            let payload = json!({
                "model": "gbm",
                "params": params,
                "years": years,
                "paths": path_count,
                "summary": summary,
                "histogram": histogram,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("GBM terminal distribution ({} paths, {}y)", path_count, years);
            println!("----------------------------------------");
            println!("{:<26} {:>12}", "Mean", number(summary.mean, 2));
            println!("{:<26} {:>12}", "Std deviation", number(summary.std, 2));
            println!("{:<26} {:>12}", "5% downside", number(summary.downside, 2));
            println!(
                "{:<26} {:>12}",
                "Analytical expectation",
                number(summary.analytical_expectation, 2)
            );

            println!();
            println!("Final value histogram");
            println!("----------------------------------------");
            for (label, frequency) in histogram.labels.iter().zip(&histogram.frequencies) {
                let bar = "#".repeat((frequency * 100.0).round() as usize);
                println!("{:>17}  {}", label, bar);
            }
        }
    }

    info!("Simulation complete");
    Ok(())
}

fn run_martingale(
    spot: Option<f64>,
    vol: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    paths: Option<f64>,
    rng: &mut PathRng,
    format: &str,
) -> Result<()> {
    let rate = MartingaleSimulation::RATE.resolve(rate);
    let params = GbmParams::from_raw(spot, None, vol).risk_neutral(rate);
    let years = MartingaleSimulation::YEARS.resolve(years);
    let path_count = MartingaleSimulation::PATHS.resolve(paths) as usize;
    info!(
        "  s0: {}  rate: {}  vol: {}  years: {}  paths: {}",
        params.s0, rate, params.vol, years, path_count
    );

    let simulation = MartingaleSimulation::run(&params, years, path_count, rng);
    let summary = simulation.summary();

    match format {
        "json" => {
            let payload = json!({
                "model": "martingale",
                "params": params,
                "years": years,
                "paths": path_count,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!(
                "Discounted martingale check ({} paths, {}y)",
                path_count, years
            );
            println!("----------------------------------------");
            println!("{:<26} {:>12}", "Initial value", number(params.s0, 2));
            println!("{:<26} {:>12}", "Discounted mean", number(summary.mean, 2));
            println!("{:<26} {:>12}", "Std deviation", number(summary.std, 2));
            println!("{:<26} {:>12}", "90% band width", number(summary.band_width, 2));
        }
    }

    info!("Simulation complete");
    Ok(())
}
