//! Risklab CLI - Command Line Operations for Risk Analytics
//!
//! This is the operational entry point for the risklab risk metrics
//! library.
//!
//! # Commands
//!
//! - `risklab simulate` - Run GBM or martingale Monte Carlo paths
//! - `risklab rates` - Expected short-rate path and yield curve
//! - `risklab var` - Parametric or Monte Carlo Value-at-Risk
//! - `risklab sensitivity` - Greek-based P&L aggregation
//! - `risklab stress` - Market stress scenarios on base VaR/ES
//! - `risklab credit-stress` - Wrong-way stress on a counterparty
//! - `risklab exposure` - Counterparty exposure profile metrics
//! - `risklab cva` - Bucketed credit valuation adjustment
//! - `risklab loss` - Expected credit loss
//! - `risklab migrate` - Rating migration over discrete periods
//!
//! # Architecture
//!
//! The command layer orchestrates the model, kernel, market and credit
//! crates; every engine lives in a library, this binary only parses
//! flags and renders tables or JSON.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod format;

pub use error::{CliError, Result};

use commands::sensitivity::{ProfileArgs, ShockArgs};

/// Risklab Risk Analytics CLI
#[derive(Parser)]
#[command(name = "risklab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run GBM or discounted-martingale Monte Carlo paths
    Simulate {
        /// Path model (gbm, martingale)
        #[arg(short, long, default_value = "gbm")]
        model: String,

        /// Initial price
        #[arg(long)]
        spot: Option<f64>,

        /// Annual drift (decimal)
        #[arg(long)]
        drift: Option<f64>,

        /// Annual volatility (decimal)
        #[arg(long)]
        vol: Option<f64>,

        /// Risk-free rate (decimal), used by the martingale model
        #[arg(long)]
        rate: Option<f64>,

        /// Horizon in years
        #[arg(long)]
        years: Option<f64>,

        /// Number of simulated paths
        #[arg(long)]
        paths: Option<f64>,

        /// Replace the drift with the risk-free rate
        #[arg(long)]
        risk_neutral: bool,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Expected short-rate path and model yield curve
    Rates {
        /// Current short rate in percent
        #[arg(long)]
        initial_rate: Option<f64>,

        /// Long-run level in percent
        #[arg(long)]
        long_run_rate: Option<f64>,

        /// Mean reversion speed
        #[arg(long)]
        mean_reversion: Option<f64>,

        /// Rate volatility in percent
        #[arg(long)]
        volatility: Option<f64>,

        /// Curve tilt in basis points
        #[arg(long)]
        tilt: Option<f64>,

        /// Tilt decay speed
        #[arg(long)]
        decay: Option<f64>,

        /// Last year of the expected-path printout
        #[arg(long, default_value_t = 20.0)]
        max_years: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Parametric or Monte Carlo Value-at-Risk
    Var {
        /// Estimation method (parametric, monte-carlo)
        #[arg(short, long, default_value = "parametric")]
        method: String,

        /// Portfolio value
        #[arg(long)]
        value: Option<f64>,

        /// Annual mean return (decimal)
        #[arg(long)]
        mean_return: Option<f64>,

        /// Annual volatility (decimal)
        #[arg(long)]
        volatility: Option<f64>,

        /// Horizon in trading days
        #[arg(long)]
        horizon_days: Option<f64>,

        /// Confidence level in percent
        #[arg(long)]
        confidence: Option<f64>,

        /// Number of revaluation paths (monte-carlo)
        #[arg(short, long, default_value = "5000")]
        paths: u64,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Include the return distribution in the output
        #[arg(long)]
        curve: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Aggregate first-order Greek P&L under a shock set
    Sensitivity {
        /// P&L per basis point of rate move
        #[arg(long)]
        pv01: Option<f64>,

        /// P&L per basis point of spread move
        #[arg(long)]
        cs01: Option<f64>,

        /// P&L per percentage point of equity move
        #[arg(long)]
        equity_delta: Option<f64>,

        /// P&L per percentage point of FX move
        #[arg(long)]
        fx_delta: Option<f64>,

        /// P&L per percentage point of commodity move
        #[arg(long)]
        commodity_delta: Option<f64>,

        /// P&L per unit of underlying price move
        #[arg(long)]
        option_delta: Option<f64>,

        /// Second-order price sensitivity
        #[arg(long)]
        gamma: Option<f64>,

        /// P&L per volatility point
        #[arg(long)]
        vega: Option<f64>,

        /// P&L per day of decay
        #[arg(long)]
        theta: Option<f64>,

        /// P&L per percentage point of rate move
        #[arg(long)]
        rho: Option<f64>,

        /// Parallel rate shock in basis points
        #[arg(long)]
        rate_bps: Option<f64>,

        /// Credit spread shock in basis points
        #[arg(long)]
        spread_bps: Option<f64>,

        /// Equity shock in percent
        #[arg(long)]
        equity_pct: Option<f64>,

        /// FX shock in percent
        #[arg(long)]
        fx_pct: Option<f64>,

        /// Commodity shock in percent (falls back to the FX shock)
        #[arg(long)]
        commodity_pct: Option<f64>,

        /// Underlying price change in currency units
        #[arg(long)]
        price_change: Option<f64>,

        /// Volatility change in points
        #[arg(long)]
        vol_change: Option<f64>,

        /// Time decay in days
        #[arg(long)]
        time_change: Option<f64>,

        /// Rate change in percentage points
        #[arg(long)]
        rate_change: Option<f64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Scale base VaR/ES figures through a market stress scenario
    Stress {
        /// Base Value-at-Risk
        #[arg(long)]
        base_var: Option<f64>,

        /// Base Expected Shortfall
        #[arg(long)]
        base_es: Option<f64>,

        /// Rate shock in basis points
        #[arg(long)]
        rate_shock: Option<f64>,

        /// Equity shock in percent
        #[arg(long)]
        equity_shock: Option<f64>,

        /// Volatility shock as a fraction
        #[arg(long)]
        vol_shock: Option<f64>,

        /// Correlation breakdown in [-1, 1]
        #[arg(long)]
        correlation: Option<f64>,

        /// Preset scenario (rates, equity, vol, sell-off)
        #[arg(short = 'p', long)]
        preset: Option<String>,

        /// List the preset scenarios and exit
        #[arg(long)]
        list_presets: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Revalue a counterparty exposure under joint market/credit shocks
    CreditStress {
        /// Expected positive exposure
        #[arg(long)]
        epe: Option<f64>,

        /// Potential future exposure
        #[arg(long)]
        pfe: Option<f64>,

        /// Default probability in percent
        #[arg(long)]
        pd: Option<f64>,

        /// Loss given default in percent
        #[arg(long)]
        lgd: Option<f64>,

        /// Interest rate shock as a fraction
        #[arg(long)]
        interest_shock: Option<f64>,

        /// Equity shock as a fraction
        #[arg(long)]
        equity_shock: Option<f64>,

        /// Credit spread shock as a fraction
        #[arg(long)]
        credit_shock: Option<f64>,

        /// Wrong-way correlation in [-1, 1]
        #[arg(long)]
        correlation: Option<f64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Analyze a counterparty exposure profile
    Exposure {
        /// PFE confidence level in percent
        #[arg(short, long, default_value_t = 95.0)]
        confidence: f64,

        /// JSON file with exposure points, defaults to the built-in profile
        #[arg(short, long)]
        profile: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Accumulate CVA over five exposure buckets
    Cva {
        /// Recovery rate in percent
        #[arg(short, long, default_value_t = 40.0)]
        recovery: f64,

        /// Five comma-separated discount factors
        #[arg(long, default_value = "0.98,0.95,0.92,0.89,0.86")]
        discount_factors: String,

        /// Five comma-separated expected exposures in millions
        #[arg(long, default_value = "1.2,1.4,1.6,1.3,0.9")]
        exposures: String,

        /// Five comma-separated default probability increments in percent
        #[arg(long, default_value = "0.8,0.9,1.1,0.7,0.5")]
        delta_pds: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Expected credit loss from exposure, PD and LGD
    Loss {
        /// Exposure at default
        #[arg(short, long, default_value_t = 25_000_000.0)]
        exposure: f64,

        /// Default probability in percent
        #[arg(long, default_value_t = 2.0)]
        pd: f64,

        /// Loss given default in percent
        #[arg(long, default_value_t = 45.0)]
        lgd: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Walk a rating distribution through a transition matrix
    Migrate {
        /// Transition weights as ';'-separated rows of comma-separated cells
        #[arg(short, long)]
        matrix: Option<String>,

        /// Number of periods to propagate
        #[arg(short, long)]
        periods: Option<f64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate {
            model,
            spot,
            drift,
            vol,
            rate,
            years,
            paths,
            risk_neutral,
            seed,
            format,
        } => commands::simulate::run(
            &model,
            spot,
            drift,
            vol,
            rate,
            years,
            paths,
            risk_neutral,
            seed,
            &format,
        )?,
        Commands::Rates {
            initial_rate,
            long_run_rate,
            mean_reversion,
            volatility,
            tilt,
            decay,
            max_years,
            format,
        } => commands::rates::run(
            initial_rate,
            long_run_rate,
            mean_reversion,
            volatility,
            tilt,
            decay,
            max_years,
            &format,
        )?,
        Commands::Var {
            method,
            value,
            mean_return,
            volatility,
            horizon_days,
            confidence,
            paths,
            seed,
            curve,
            format,
        } => commands::var::run(
            &method,
            value,
            mean_return,
            volatility,
            horizon_days,
            confidence,
            paths,
            seed,
            curve,
            &format,
        )?,
        Commands::Sensitivity {
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
            rate_bps,
            spread_bps,
            equity_pct,
            fx_pct,
            commodity_pct,
            price_change,
            vol_change,
            time_change,
            rate_change,
            format,
        } => {
            let profile = ProfileArgs {
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
            };
            let shocks = ShockArgs {
                rate_bps,
                spread_bps,
                equity_pct,
                fx_pct,
                commodity_pct,
                price_change,
                vol_change,
                time_change,
                rate_change,
            };
            commands::sensitivity::run(&profile, &shocks, &format)?
        }
        Commands::Stress {
            base_var,
            base_es,
            rate_shock,
            equity_shock,
            vol_shock,
            correlation,
            preset,
            list_presets,
            format,
        } => commands::stress::run_market(
            base_var,
            base_es,
            rate_shock,
            equity_shock,
            vol_shock,
            correlation,
            preset.as_deref(),
            list_presets,
            &format,
        )?,
        Commands::CreditStress {
            epe,
            pfe,
            pd,
            lgd,
            interest_shock,
            equity_shock,
            credit_shock,
            correlation,
            format,
        } => commands::stress::run_credit(
            epe,
            pfe,
            pd,
            lgd,
            interest_shock,
            equity_shock,
            credit_shock,
            correlation,
            &format,
        )?,
        Commands::Exposure {
            confidence,
            profile,
            format,
        } => commands::exposure::run(confidence, profile.as_deref(), &format)?,
        Commands::Cva {
            recovery,
            discount_factors,
            exposures,
            delta_pds,
            format,
        } => commands::cva::run(
            Some(recovery),
            &discount_factors,
            &exposures,
            &delta_pds,
            &format,
        )?,
        Commands::Loss {
            exposure,
            pd,
            lgd,
            format,
        } => commands::loss::run(Some(exposure), Some(pd), Some(lgd), &format)?,
        Commands::Migrate {
            matrix,
            periods,
            format,
        } => commands::migrate::run(matrix.as_deref(), periods, &format)?,
    }

    Ok(())
}
