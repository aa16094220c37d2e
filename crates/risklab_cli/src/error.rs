//! CLI error types.
//!
//! This module provides structured error types for command execution
//! using `thiserror` for derivation. Library errors convert via `From`
//! so command code can use `?` throughout.

use risklab_core::MathError;
use risklab_credit::CreditError;
use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input or output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numerical domain error from a risk engine.
    #[error("Calculation error: {0}")]
    Math(#[from] MathError),

    /// Structural matrix error from the credit engines.
    #[error("Credit error: {0}")]
    Credit(#[from] CreditError),
}

/// Convenience alias used by every command module.
pub type Result<T> = std::result::Result<T, CliError>;
