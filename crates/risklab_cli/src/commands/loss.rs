//! Loss command implementation
//!
//! One-line expected credit loss: exposure x PD x LGD.

use serde_json::json;
use tracing::info;

use risklab_credit::xva::loss::ExpectedLossInputs;

use crate::format::{currency, percent};
use crate::Result;

/// Run the loss command.
pub fn run(
    exposure: Option<f64>,
    pd: Option<f64>,
    lgd: Option<f64>,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let inputs = ExpectedLossInputs::from_raw(exposure, pd, lgd);
    info!("Computing expected loss...");
    info!(
        "  exposure: {}  pd: {}%  lgd: {}%",
        inputs.exposure, inputs.pd_pct, inputs.lgd_pct
    );
    let report = inputs.compute();

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
            println!("Expected credit loss");
            println!("----------------------------------------");
            println!("{:<22} {:>14}", "Exposure", currency(inputs.exposure));
            println!("{:<22} {:>14}", "Expected loss", currency(report.expected_loss));
            println!(
                "{:<22} {:>14}",
                "Loss rate",
                percent(report.loss_rate_pct, 2)
            );
        }
    }

    info!("Expected loss complete");
    Ok(())
}
