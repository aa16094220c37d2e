//! Rating migration over a row-stochastic transition matrix.
//!
//! A [`TransitionMatrix`] is built from raw weights and normalised row
//! by row: negative weights are floored at zero and each row is rescaled
//! to sum to one, with a degenerate (all non-positive) row replaced by
//! the uniform distribution. Propagation is plain vector-matrix
//! multiplication
//!
//! ```text
//!   next[j] = sum_i current[i] * P[i][j]
//! ```
//!
//! starting from a unit vector on the first state, so total probability
//! mass is preserved at every step.

use thiserror::Error;

/// Rating grades of the reference three-state chain.
pub const DEFAULT_STATES: [&str; 3] = ["AAA", "BBB", "Default"];

/// Fallback horizon when the requested period count is unusable.
pub const DEFAULT_PERIODS: usize = 6;

/// Errors raised while building or applying a transition matrix.
#[derive(Debug, Error)]
pub enum CreditError {
    /// Transition matrix has no rows.
    #[error("Transition matrix is empty")]
    EmptyMatrix,

    /// A row length differs from the number of rows.
    #[error("Transition matrix is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows in the matrix.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Number of columns in that row.
        cols: usize,
    },

    /// A distribution length does not match the matrix size.
    #[error("Distribution length {actual} does not match matrix size {expected}")]
    DimensionMismatch {
        /// The matrix size.
        expected: usize,
        /// The distribution length supplied.
        actual: usize,
    },
}

/// Resolves a raw period-count field.
///
/// Only finite, strictly positive integers pass through; anything else
/// falls back to [`DEFAULT_PERIODS`].
pub fn resolve_periods(raw: Option<f64>) -> usize {
    match raw {
        Some(value) if value.is_finite() && value > 0.0 && value.fract() == 0.0 => value as usize,
        _ => DEFAULT_PERIODS,
    }
}

/// A row-stochastic rating transition matrix.
///
/// Rows are normalised on construction, so every stored row sums to one
/// and every entry lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionMatrix {
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Builds a matrix from raw weights, normalising each row.
    ///
    /// # Errors
    ///
    /// Returns [`CreditError::EmptyMatrix`] for an empty weight set and
    /// [`CreditError::NotSquare`] when any row length differs from the
    /// row count.
    pub fn from_weights(rows: Vec<Vec<f64>>) -> Result<Self, CreditError> {
        if rows.is_empty() {
            return Err(CreditError::EmptyMatrix);
        }
        let size = rows.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(CreditError::NotSquare {
                    rows: size,
                    row: index,
                    cols: row.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.into_iter().map(normalize_row).collect(),
        })
    }

    /// Builds a matrix from raw form fields, substituting zero for any
    /// missing or non-finite cell before normalising.
    pub fn from_raw_weights(rows: Vec<Vec<Option<f64>>>) -> Result<Self, CreditError> {
        let resolved = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some(value) if value.is_finite() => value,
                        _ => 0.0,
                    })
                    .collect()
            })
            .collect();
        Self::from_weights(resolved)
    }

    /// The reference three-state chain with an absorbing default state.
    pub fn reference() -> Self {
        Self {
            rows: vec![
                normalize_row(vec![0.9, 0.08, 0.02]),
                normalize_row(vec![0.05, 0.85, 0.1]),
                normalize_row(vec![0.0, 0.0, 1.0]),
            ],
        }
    }

    /// Number of rating states.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The normalised rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Applies one migration step to a distribution over the states.
    ///
    /// # Errors
    ///
    /// Returns [`CreditError::DimensionMismatch`] when the distribution
    /// length differs from the matrix size.
    pub fn propagate(&self, distribution: &[f64]) -> Result<Vec<f64>, CreditError> {
        if distribution.len() != self.size() {
            return Err(CreditError::DimensionMismatch {
                expected: self.size(),
                actual: distribution.len(),
            });
        }
        Ok(self.multiply(distribution))
    }

    /// Propagates a unit mass on the first state over `periods` steps.
    ///
    /// The result holds `periods + 1` distributions, the first being the
    /// starting vector itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use risklab_credit::migration::TransitionMatrix;
    ///
    /// let history = TransitionMatrix::reference().history(6);
    ///
    /// assert_eq!(history.len(), 7);
    /// assert_eq!(history[0], vec![1.0, 0.0, 0.0]);
    /// ```
    pub fn history(&self, periods: usize) -> Vec<Vec<f64>> {
        let mut current = vec![0.0; self.size()];
        current[0] = 1.0;

        let mut history = Vec::with_capacity(periods + 1);
        history.push(current.clone());
        for _ in 0..periods {
            current = self.multiply(&current);
            history.push(current.clone());
        }
        history
    }

    fn multiply(&self, distribution: &[f64]) -> Vec<f64> {
        let mut result = vec![0.0; self.size()];
        for (weight, row) in distribution.iter().zip(&self.rows) {
            for (slot, probability) in result.iter_mut().zip(row) {
                *slot += weight * probability;
            }
        }
        result
    }
}

fn normalize_row(row: Vec<f64>) -> Vec<f64> {
    let sum: f64 = row.iter().map(|value| value.max(0.0)).sum();
    if sum == 0.0 {
        let uniform = 1.0 / row.len() as f64;
        return row.iter().map(|_| uniform).collect();
    }
    row.iter().map(|value| value.max(0.0) / sum).collect()
}
