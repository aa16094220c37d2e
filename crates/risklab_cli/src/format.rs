//! Output formatting helpers for the report tables.
//!
//! Currency output follows the en-US convention with grouped thousands
//! and no cents; percent and plain numbers keep a caller-chosen number
//! of decimals.

use risklab_core::stats::format_grouped;

/// Formats a currency amount, e.g. `$1,234,568` or `-$400,000`.
pub fn currency(value: f64) -> String {
    let grouped = format_grouped(value, 0);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}

/// Formats a percentage with the given number of decimals, e.g. `5.90%`.
pub fn percent(value: f64, digits: usize) -> String {
    format!("{value:.digits$}%")
}

/// Formats a plain number with the given number of decimals.
pub fn number(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
