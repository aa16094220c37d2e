//! Counterparty exposure profiles and their aggregate metrics.
//!
//! An [`ExposureProfile`] is an ordered term structure of expected
//! exposure (EE) and exposure volatility per tenor, quoted in millions.
//! [`ExposureProfile::analyze`] splits each tenor into its positive and
//! negative parts, lifts EE to potential future exposure at a caller
//! supplied confidence level and aggregates the standard counterparty
//! metrics:
//!
//! ```text
//!   PFE(t)   = max(EE(t) + z * sigma(t), 0)      z = Phi^-1(confidence)
//!   EPE      = sum(EE+) / count(EE+ > 0)
//!   ENE      = mean of strictly negative EE      (0 when none)
//!   EEPE     = running max of the cumulative average of EE+
//!   peak PFE = max over tenors of PFE(t)
//! ```
//!
//! The confidence level must lie strictly inside (0, 1); out of range
//! values surface as [`MathError::InvalidProbability`] rather than being
//! clamped.

use risklab_core::math::inverse_norm_cdf;
use risklab_core::MathError;

/// Factor converting profile amounts (millions) into currency units.
pub const EXPOSURE_SCALE: f64 = 1_000_000.0;

/// A single tenor on an exposure profile. Amounts are in millions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposurePoint {
    /// Tenor label, e.g. `"3M"` or `"5Y"`.
    pub label: String,
    /// Expected exposure at this tenor. May be negative.
    pub expected_exposure: f64,
    /// Exposure volatility at this tenor.
    pub sigma: f64,
}

impl ExposurePoint {
    /// Builds a point from a static label and raw amounts.
    pub fn new(label: &str, expected_exposure: f64, sigma: f64) -> Self {
        Self {
            label: label.to_owned(),
            expected_exposure,
            sigma,
        }
    }
}

/// An ordered exposure term structure for a single counterparty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureProfile {
    points: Vec<ExposurePoint>,
}

/// Per-tenor decomposition produced by [`ExposureProfile::analyze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenorExposure {
    /// Tenor label copied from the profile.
    pub label: String,
    /// Raw expected exposure at this tenor.
    pub expected: f64,
    /// Positive part `max(EE, 0)`.
    pub positive: f64,
    /// Negative part `min(EE, 0)`.
    pub negative: f64,
    /// Potential future exposure, floored at zero.
    pub pfe: f64,
}

/// Aggregate counterparty metrics for one profile and confidence level.
///
/// All exposure amounts are in millions, like the input profile. Use
/// [`EXPOSURE_SCALE`] to restate them in currency units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureReport {
    /// Per-tenor positive/negative/PFE decomposition.
    pub tenors: Vec<TenorExposure>,
    /// Expected positive exposure.
    pub epe: f64,
    /// Average positive exposure over every tenor, including zeros.
    pub loan_equivalent: f64,
    /// Expected negative exposure. Zero when no tenor is negative.
    pub ene: f64,
    /// Effective EPE, the running max of the cumulative EE+ average.
    pub effective_epe: f64,
    /// Largest PFE across the profile.
    pub peak_pfe: f64,
    /// The confidence level the PFE band was computed at.
    pub confidence: f64,
    /// The normal quantile backing the PFE band.
    pub z_score: f64,
}

impl ExposureProfile {
    /// Builds a profile from an ordered list of tenor points.
    pub fn new(points: Vec<ExposurePoint>) -> Self {
        Self { points }
    }

    /// The reference interest-rate swap profile used by the demo book.
    ///
    /// Exposure starts negative (the trade is out of the money), peaks
    /// around the two year tenor and amortises back towards zero.
    pub fn reference() -> Self {
        Self::new(vec![
            ExposurePoint::new("Today", -0.4, 0.25),
            ExposurePoint::new("3M", -0.2, 0.25),
            ExposurePoint::new("6M", 0.4, 0.28),
            ExposurePoint::new("1Y", 0.9, 0.32),
            ExposurePoint::new("18M", 1.4, 0.36),
            ExposurePoint::new("2Y", 1.8, 0.4),
            ExposurePoint::new("3Y", 1.5, 0.38),
            ExposurePoint::new("4Y", 1.1, 0.34),
            ExposurePoint::new("5Y", 0.6, 0.3),
            ExposurePoint::new("6Y", 0.3, 0.28),
        ])
    }

    /// The tenor points in order.
    pub fn points(&self) -> &[ExposurePoint] {
        &self.points
    }

    /// Number of tenors on the profile.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the profile has no tenors.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Computes the per-tenor decomposition and aggregate metrics at the
    /// given confidence level (strictly inside `(0, 1)`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidProbability`] when `confidence` is
    /// outside the open unit interval.
    pub fn analyze(&self, confidence: f64) -> Result<ExposureReport, MathError> {
        let z_score = inverse_norm_cdf(confidence)?;

        let tenors: Vec<TenorExposure> = self
            .points
            .iter()
            .map(|point| TenorExposure {
                label: point.label.clone(),
                expected: point.expected_exposure,
                positive: point.expected_exposure.max(0.0),
                negative: point.expected_exposure.min(0.0),
                pfe: (point.expected_exposure + z_score * point.sigma).max(0.0),
            })
            .collect();

        let positive_sum: f64 = tenors.iter().map(|t| t.positive).sum();
        let positive_count = tenors.iter().filter(|t| t.positive > 0.0).count().max(1);
        let epe = positive_sum / positive_count as f64;
        let loan_equivalent = if tenors.is_empty() {
            0.0
        } else {
            positive_sum / tenors.len() as f64
        };

        let negatives: Vec<f64> = tenors
            .iter()
            .filter(|t| t.expected < 0.0)
            .map(|t| t.expected)
            .collect();
        let ene = if negatives.is_empty() {
            0.0
        } else {
            negatives.iter().sum::<f64>() / negatives.len() as f64
        };

        // Effective EPE is a regulatory floor: the cumulative average of
        // positive exposure is not allowed to decay once it has peaked.
        let mut cumulative = 0.0;
        let mut effective_epe = 0.0_f64;
        for (index, tenor) in tenors.iter().enumerate() {
            cumulative += tenor.positive;
            let average = cumulative / (index + 1) as f64;
            effective_epe = effective_epe.max(average);
        }

        let peak_pfe = tenors.iter().fold(0.0_f64, |acc, t| acc.max(t.pfe));

        Ok(ExposureReport {
            tenors,
            epe,
            loan_equivalent,
            ene,
            effective_epe,
            peak_pfe,
            confidence,
            z_score,
        })
    }
}

impl Default for ExposureProfile {
    fn default() -> Self {
        Self::reference()
    }
}
