//! Migrate command implementation
//!
//! Rating migration: normalizes a transition matrix and walks a
//! distribution through it period by period.

use serde_json::json;
use tracing::info;

use risklab_credit::migration::{resolve_periods, TransitionMatrix, DEFAULT_STATES};

use crate::format::percent;
use crate::{CliError, Result};

fn parse_matrix(raw: &str) -> Result<TransitionMatrix> {
    let rows: Vec<Vec<f64>> = raw
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|cell| cell.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<f64>, _>>()
        })
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| {
            CliError::InvalidArgument(format!(
                "Could not parse --matrix: {}. Expected ';'-separated rows of comma-separated weights",
                raw
            ))
        })?;
    Ok(TransitionMatrix::from_weights(rows)?)
}

fn state_labels(size: usize) -> Vec<String> {
    if size == DEFAULT_STATES.len() {
        DEFAULT_STATES.iter().map(|s| (*s).to_string()).collect()
    } else {
        (1..=size).map(|i| format!("S{}", i)).collect()
    }
}

/// Run the migrate command.
pub fn run(matrix: Option<&str>, periods: Option<f64>, format: &str) -> Result<()> {
    super::check_format(format)?;

    let matrix = match matrix {
        Some(raw) => parse_matrix(raw)?,
        None => TransitionMatrix::reference(),
    };
    let periods = resolve_periods(periods);
    let labels = state_labels(matrix.size());

    info!("Propagating rating distribution...");
    info!("  States: {}  Periods: {}", matrix.size(), periods);
    let history = matrix.history(periods);

    match format {
        "json" => {
            let payload = json!({
                "states": labels,
                "matrix": matrix.rows(),
                "periods": periods,
                "history": history,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!("Normalized transition matrix");
            println!("----------------------------------------");
            print!("{:<10}", "");
            for label in &labels {
                print!("{:>10}", label);
            }
            println!();
            for (label, row) in labels.iter().zip(matrix.rows()) {
                print!("{:<10}", label);
                for weight in row {
                    print!("{:>10}", percent(weight * 100.0, 1));
                }
                println!();
            }

            println!();
            println!("Distribution by period (from 100% {})", labels[0]);
            println!("----------------------------------------");
            print!("{:<10}", "Period");
            for label in &labels {
                print!("{:>10}", label);
            }
            println!();
            for (period, distribution) in history.iter().enumerate() {
                print!("{:<10}", period);
                for share in distribution {
                    print!("{:>10}", percent(share * 100.0, 1));
                }
                println!();
            }
        }
    }

    info!("Migration complete");
    Ok(())
}
