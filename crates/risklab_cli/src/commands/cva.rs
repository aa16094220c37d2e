//! Cva command implementation
//!
//! Discrete five-bucket CVA approximation.

use serde_json::json;
use tracing::info;

use risklab_credit::xva::cva::{CvaBucket, CvaInputs, BUCKET_COUNT};

use crate::format::{currency, number};
use crate::{CliError, Result};

fn parse_list(flag: &str, raw: &str) -> Result<[f64; BUCKET_COUNT]> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| {
            CliError::InvalidArgument(format!(
                "Could not parse --{} as comma-separated numbers: {}",
                flag, raw
            ))
        })?;
    if values.len() != BUCKET_COUNT {
        return Err(CliError::InvalidArgument(format!(
            "--{} needs exactly {} comma-separated values, got {}",
            flag,
            BUCKET_COUNT,
            values.len()
        )));
    }
    let mut out = [0.0; BUCKET_COUNT];
    out.copy_from_slice(&values);
    Ok(out)
}

/// Run the cva command.
pub fn run(
    recovery: Option<f64>,
    discount_factors: &str,
    exposures: &str,
    delta_pds: &str,
    format: &str,
) -> Result<()> {
    super::check_format(format)?;

    let discount_factors = parse_list("discount-factors", discount_factors)?;
    let exposures = parse_list("exposures", exposures)?;
    let delta_pds = parse_list("delta-pds", delta_pds)?;

    let mut buckets = [CvaBucket::default(); BUCKET_COUNT];
    for (index, bucket) in buckets.iter_mut().enumerate() {
        *bucket = CvaBucket::new(
            discount_factors[index],
            exposures[index],
            delta_pds[index],
        );
    }
    let inputs = CvaInputs::from_raw(recovery, buckets);

    info!("Computing CVA...");
    info!("  Recovery: {}%  Buckets: {}", inputs.recovery_pct, BUCKET_COUNT);
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
            println!(
                "CVA by bucket (recovery {}%)",
                number(inputs.recovery_pct, 1)
            );
            println!("--------------------------------------------------");
            println!(
                "{:<8} {:>8} {:>10} {:>8} {:>14}",
                "Bucket", "DF", "EE (MM)", "dPD %", "Contribution"
            );
            println!("--------------------------------------------------");
            for (index, (bucket, contribution)) in inputs
                .buckets
                .iter()
                .zip(&report.contributions)
                .enumerate()
            {
                println!(
                    "{:<8} {:>8} {:>10} {:>8} {:>14}",
                    index + 1,
                    number(bucket.discount_factor, 2),
                    number(bucket.expected_exposure, 2),
                    number(bucket.delta_pd_pct, 2),
                    currency(*contribution)
                );
            }
            println!("--------------------------------------------------");
            println!("{:<38} {:>14}", "Total CVA", currency(report.total));
        }
    }

    info!("CVA computation complete");
    Ok(())
}
