//! Exposure command implementation
//!
//! Counterparty exposure profile metrics: EPE, ENE, PFE, effective EPE
//! and the loan equivalent.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::info;

use risklab_credit::exposure::{ExposurePoint, ExposureProfile, EXPOSURE_SCALE};

use crate::format::{currency, number};
use crate::{CliError, Result};

fn load_profile(path: Option<&str>) -> Result<ExposureProfile> {
    match path {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(CliError::FileNotFound(file.to_string()));
            }
            let content = fs::read_to_string(file)?;
            let points: Vec<ExposurePoint> = serde_json::from_str(&content)?;
            info!("Loaded {} exposure points from {}", points.len(), file);
            Ok(ExposureProfile::new(points))
        }
        None => Ok(ExposureProfile::reference()),
    }
}

/// Run the exposure command.
pub fn run(confidence_pct: f64, profile_path: Option<&str>, format: &str) -> Result<()> {
    super::check_format(format)?;

    let profile = load_profile(profile_path)?;
    info!("Analyzing exposure profile...");
    info!("  Tenors: {}  Confidence: {}%", profile.len(), confidence_pct);

    let report = profile.analyze(confidence_pct / 100.0)?;

    match format {
        "json" => {
            let payload = json!({
                "profile": profile.points(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!();
            println!(
                "Exposure profile ({}% PFE, figures in millions)",
                number(confidence_pct, 1)
            );
            println!("------------------------------------------------------------");
            println!(
                "{:<8} {:>10} {:>10} {:>10} {:>10}",
                "Tenor", "EE", "EE+", "EE-", "PFE"
            );
            println!("------------------------------------------------------------");
            for tenor in &report.tenors {
                println!(
                    "{:<8} {:>10} {:>10} {:>10} {:>10}",
                    tenor.label,
                    number(tenor.expected, 3),
                    number(tenor.positive, 3),
                    number(tenor.negative, 3),
                    number(tenor.pfe, 3)
                );
            }
            println!();
            println!("Aggregates");
            println!("----------------------------------------");
            println!("{:<22} {:>14}", "EPE", currency(report.epe * EXPOSURE_SCALE));
            println!(
                "{:<22} {:>14}",
                "Loan equivalent",
                currency(report.loan_equivalent * EXPOSURE_SCALE)
            );
            println!("{:<22} {:>14}", "ENE", currency(report.ene * EXPOSURE_SCALE));
            println!(
                "{:<22} {:>14}",
                "Effective EPE",
                currency(report.effective_epe * EXPOSURE_SCALE)
            );
            println!(
                "{:<22} {:>14}",
                "Peak PFE",
                currency(report.peak_pfe * EXPOSURE_SCALE)
            );
        }
    }

    info!("Exposure analysis complete");
    Ok(())
}
