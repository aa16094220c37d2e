//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod cva;
pub mod exposure;
pub mod loss;
pub mod migrate;
pub mod rates;
pub mod sensitivity;
pub mod simulate;
pub mod stress;
pub mod var;

use crate::{CliError, Result};

/// Validates a `--format` flag against the supported output modes.
pub(crate) fn check_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" => Ok(()),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: table, json",
            other
        ))),
    }
}
