//! Bucketed credit valuation adjustment.
//!
//! The adjustment is accumulated over [`BUCKET_COUNT`] fixed time
//! buckets:
//!
//! ```text
//!   CVA = sum_b (1 - R) * DF_b * EE_b * max(dPD_b, 0)
//! ```
//!
//! where `R` is the recovery rate, `DF_b` the bucket discount factor,
//! `EE_b` the expected exposure restated in currency units and `dPD_b`
//! the marginal default probability of the bucket. Negative probability
//! increments are floored at zero; the recovery rate is taken as given.

use risklab_core::config::FieldSpec;

use crate::exposure::EXPOSURE_SCALE;

/// Number of exposure buckets the adjustment is accumulated over.
pub const BUCKET_COUNT: usize = 5;

/// One CVA bucket: discount factor, exposure and default increment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvaBucket {
    /// Discount factor applicable to the bucket midpoint.
    pub discount_factor: f64,
    /// Expected exposure over the bucket, in millions.
    pub expected_exposure: f64,
    /// Marginal default probability over the bucket, in percent.
    pub delta_pd_pct: f64,
}

impl CvaBucket {
    /// Discount factor per bucket.
    pub const DISCOUNT_FACTOR: FieldSpec = FieldSpec::unbounded("discount-factor", 0.0);
    /// Expected exposure per bucket (millions).
    pub const EXPECTED_EXPOSURE: FieldSpec = FieldSpec::unbounded("expected-exposure", 0.0);
    /// Marginal default probability per bucket (percent).
    pub const DELTA_PD: FieldSpec = FieldSpec::unbounded("delta-pd", 0.0);

    /// Builds a bucket from resolved values.
    pub fn new(discount_factor: f64, expected_exposure: f64, delta_pd_pct: f64) -> Self {
        Self::from_raw(
            Some(discount_factor),
            Some(expected_exposure),
            Some(delta_pd_pct),
        )
    }

    /// Builds a bucket from raw form fields, substituting zero for
    /// anything missing or non-finite.
    pub fn from_raw(
        discount_factor: Option<f64>,
        expected_exposure: Option<f64>,
        delta_pd_pct: Option<f64>,
    ) -> Self {
        Self {
            discount_factor: Self::DISCOUNT_FACTOR.resolve(discount_factor),
            expected_exposure: Self::EXPECTED_EXPOSURE.resolve(expected_exposure),
            delta_pd_pct: Self::DELTA_PD.resolve(delta_pd_pct),
        }
    }
}

/// Inputs for the bucketed CVA accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvaInputs {
    /// Recovery rate in percent.
    pub recovery_pct: f64,
    /// The five exposure buckets in time order.
    pub buckets: [CvaBucket; BUCKET_COUNT],
}

/// A computed CVA decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvaReport {
    /// Per-bucket contribution in currency units.
    pub contributions: [f64; BUCKET_COUNT],
    /// Total adjustment, the sum of the contributions.
    pub total: f64,
}

impl CvaInputs {
    /// Recovery rate (percent).
    pub const RECOVERY: FieldSpec = FieldSpec::unbounded("recovery", 0.0);

    /// Builds inputs from a resolved recovery rate and bucket set.
    pub fn new(recovery_pct: f64, buckets: [CvaBucket; BUCKET_COUNT]) -> Self {
        Self::from_raw(Some(recovery_pct), buckets)
    }

    /// Builds inputs from a raw recovery field and bucket set.
    pub fn from_raw(recovery_pct: Option<f64>, buckets: [CvaBucket; BUCKET_COUNT]) -> Self {
        Self {
            recovery_pct: Self::RECOVERY.resolve(recovery_pct),
            buckets,
        }
    }

    /// Accumulates the adjustment across the buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use risklab_credit::xva::cva::{CvaBucket, CvaInputs};
    ///
    /// let bucket = CvaBucket::new(1.0, 1.0, 1.0);
    /// let inputs = CvaInputs::new(0.0, [bucket; 5]);
    ///
    /// let report = inputs.compute();
    /// assert_eq!(report.total, 50_000.0);
    /// ```
    pub fn compute(&self) -> CvaReport {
        let recovery = self.recovery_pct / 100.0;
        let mut contributions = [0.0; BUCKET_COUNT];
        let mut total = 0.0;

        for (slot, bucket) in contributions.iter_mut().zip(&self.buckets) {
            let delta_pd = bucket.delta_pd_pct.max(0.0) / 100.0;
            let contribution = (1.0 - recovery)
                * bucket.discount_factor
                * bucket.expected_exposure
                * EXPOSURE_SCALE
                * delta_pd;
            *slot = contribution;
            total += contribution;
        }

        CvaReport {
            contributions,
            total,
        }
    }
}
