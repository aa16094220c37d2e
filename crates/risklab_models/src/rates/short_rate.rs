//! Mean-reverting short-rate model with a time-decaying target.
//!
//! The model is the expectation view of an Ornstein-Uhlenbeck-type short
//! rate reverting towards a target that itself relaxes over time:
//! ```text
//! target(t) = theta + tilt * exp(-decay * t)
//! E[r(t)]   = target(t) + (r0 - target(t)) * exp(-kappa * t)
//! ```
//! where:
//! - r0 = initial short rate
//! - theta = long-run mean rate
//! - kappa = mean reversion speed (must be positive)
//! - tilt = amplitude of the transient hump in the target
//! - decay = relaxation rate of the transient (must be positive)
//!
//! ## Key Properties
//!
//! - **Boundary condition**: `E[r(0)] = r0` exactly
//! - **Long-run behaviour**: `E[r(t)] -> theta` as `t -> inf`
//! - **Deterministic**: only the conditional expectation is modelled here;
//!   the volatility parameter rides along for completeness but does not
//!   shift the mean
//!
//! ## Usage
//!
//! ```
//! use risklab_models::rates::short_rate::ShortRateParams;
//!
//! let params = ShortRateParams::new(0.025, 0.035, 0.6, 0.015, 0.012, 4.0).unwrap();
//!
//! // The path starts at the initial rate
//! assert_eq!(params.expected_short_rate(0.0), 0.025);
//!
//! // The expected yield averages the path over the maturity
//! let y = params.expected_yield(5.0);
//! assert!(y > 0.025 && y < 0.05);
//! ```

use risklab_core::config::FieldSpec;

/// Fixed maturity grid for yield curve output, in years.
pub const STANDARD_MATURITIES: [f64; 10] =
    [0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 15.0, 20.0, 30.0];

/// Short-rate model parameters.
///
/// # Fields
///
/// * `r0` - Initial short rate (decimal)
/// * `theta` - Long-run mean rate (decimal)
/// * `kappa` - Mean reversion speed, must be positive
/// * `sigma` - Short-rate volatility (decimal), must be non-negative
/// * `tilt` - Transient target amplitude (decimal)
/// * `decay` - Transient relaxation rate, must be positive
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortRateParams {
    /// Initial short rate r(0), decimal
    pub r0: f64,
    /// Long-run mean rate, decimal
    pub theta: f64,
    /// Mean reversion speed (kappa > 0)
    pub kappa: f64,
    /// Short-rate volatility, decimal; carried for completeness, the
    /// expectation path does not depend on it
    pub sigma: f64,
    /// Transient target amplitude, decimal
    pub tilt: f64,
    /// Transient relaxation rate (decay > 0)
    pub decay: f64,
}

impl ShortRateParams {
    /// Initial rate form field, in percent.
    pub const R0_PCT: FieldSpec = FieldSpec::unbounded("initial-rate", 2.5);
    /// Long-run rate form field, in percent.
    pub const THETA_PCT: FieldSpec = FieldSpec::unbounded("long-run-rate", 3.5);
    /// Mean reversion form field, floored at 0.01.
    pub const KAPPA: FieldSpec = FieldSpec::at_least("mean-reversion", 0.6, 0.01);
    /// Volatility form field, in percent, floored at 0.
    pub const SIGMA_PCT: FieldSpec = FieldSpec::at_least("volatility", 1.5, 0.0);
    /// Target tilt form field, in basis points.
    pub const TILT_BPS: FieldSpec = FieldSpec::unbounded("tilt", 120.0);
    /// Target decay form field, floored at 0.1.
    pub const DECAY: FieldSpec = FieldSpec::at_least("decay", 4.0, 0.1);

    /// Create new short-rate parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `r0` - Initial short rate, decimal
    /// * `theta` - Long-run mean rate, decimal
    /// * `kappa` - Mean reversion speed (must be positive)
    /// * `sigma` - Short-rate volatility (must be non-negative)
    /// * `tilt` - Transient target amplitude, decimal
    /// * `decay` - Transient relaxation rate (must be positive)
    ///
    /// # Returns
    ///
    /// `Some(ShortRateParams)` if parameters are valid, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use risklab_models::rates::short_rate::ShortRateParams;
    ///
    /// let params = ShortRateParams::new(0.025, 0.035, 0.6, 0.015, 0.012, 4.0);
    /// assert!(params.is_some());
    ///
    /// // Invalid: non-positive mean reversion
    /// let invalid = ShortRateParams::new(0.025, 0.035, 0.0, 0.015, 0.012, 4.0);
    /// assert!(invalid.is_none());
    /// ```
    pub fn new(r0: f64, theta: f64, kappa: f64, sigma: f64, tilt: f64, decay: f64) -> Option<Self> {
        if kappa <= 0.0 || sigma < 0.0 || decay <= 0.0 {
            return None;
        }
        Some(Self {
            r0,
            theta,
            kappa,
            sigma,
            tilt,
            decay,
        })
    }

    /// Build parameters from raw form inputs with lenient normalization.
    ///
    /// Rates and volatility arrive in percent, the tilt in basis points.
    /// Missing fields take the documented form defaults; the mean reversion
    /// and decay floors keep the model well defined for any input.
    ///
    /// # Arguments
    ///
    /// * `r0_pct` - Initial rate in percent
    /// * `theta_pct` - Long-run rate in percent
    /// * `kappa` - Mean reversion speed
    /// * `sigma_pct` - Volatility in percent
    /// * `tilt_bps` - Target tilt in basis points
    /// * `decay` - Target decay rate
    pub fn from_form_inputs(
        r0_pct: Option<f64>,
        theta_pct: Option<f64>,
        kappa: Option<f64>,
        sigma_pct: Option<f64>,
        tilt_bps: Option<f64>,
        decay: Option<f64>,
    ) -> Self {
        Self {
            r0: Self::R0_PCT.resolve(r0_pct) / 100.0,
            theta: Self::THETA_PCT.resolve(theta_pct) / 100.0,
            kappa: Self::KAPPA.resolve(kappa),
            sigma: Self::SIGMA_PCT.resolve(sigma_pct) / 100.0,
            tilt: Self::TILT_BPS.resolve(tilt_bps) / 10_000.0,
            decay: Self::DECAY.resolve(decay),
        }
    }

    /// Instantaneous reversion target at time `t`.
    ///
    /// `target(t) = theta + tilt * exp(-decay * t)`; the transient tilt
    /// lets the curve carry a hump that relaxes towards the long-run mean.
    pub fn target_rate(&self, t: f64) -> f64 {
        self.theta + self.tilt * (-self.decay * t).exp()
    }

    /// Conditional expectation of the short rate at time `t`.
    ///
    /// `E[r(t)] = target(t) + (r0 - target(t)) * exp(-kappa * t)`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time in years
    pub fn expected_short_rate(&self, t: f64) -> f64 {
        let target = self.target_rate(t);
        target + (self.r0 - target) * (-self.kappa * t).exp()
    }

    /// Expected spot yield for a zero-coupon maturity.
    ///
    /// Time-averages the expected short rate over `[0, maturity]` with a
    /// midpoint rule at 24 subintervals per year (at least 10). A
    /// non-positive maturity degenerates to the instantaneous rate.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Maturity in years
    pub fn expected_yield(&self, maturity: f64) -> f64 {
        if maturity <= 0.0 {
            return self.expected_short_rate(0.0);
        }
        let steps = ((maturity * 24.0).round() as usize).max(10);
        let dt = maturity / steps as f64;
        let mut integral = 0.0;
        for i in 0..steps {
            let time = (i as f64 + 0.5) * dt;
            integral += self.expected_short_rate(time);
        }
        integral * dt / maturity
    }

    /// Expected yields over a maturity grid.
    ///
    /// # Arguments
    ///
    /// * `maturities` - Maturities in years, typically [`STANDARD_MATURITIES`]
    pub fn yield_curve(&self, maturities: &[f64]) -> Vec<f64> {
        maturities
            .iter()
            .map(|&maturity| self.expected_yield(maturity))
            .collect()
    }
}

impl Default for ShortRateParams {
    fn default() -> Self {
        Self::from_form_inputs(None, None, None, None, None, None)
    }
}

/// Evenly spaced time grid from 0 to `max_years`, rounded to 2 decimals.
///
/// # Arguments
///
/// * `max_years` - Last grid point, inclusive
/// * `step` - Grid spacing in years; non-positive steps yield an empty grid
///
/// # Examples
///
/// ```
/// use risklab_models::rates::short_rate::timeline;
///
/// let grid = timeline(20.0, 0.25);
/// assert_eq!(grid.len(), 81);
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(grid[80], 20.0);
/// ```
pub fn timeline(max_years: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return Vec::new();
    }
    let mut grid = Vec::new();
    let mut i = 0u32;
    loop {
        let t = i as f64 * step;
        if t > max_years + 1e-8 {
            break;
        }
        grid.push((t * 100.0).round() / 100.0);
        i += 1;
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_params() -> ShortRateParams {
        ShortRateParams::default()
    }

    // ==========================================================
    // Constructor tests
    // ==========================================================

    #[test]
    fn test_new_valid() {
        let params = ShortRateParams::new(0.025, 0.035, 0.6, 0.015, 0.012, 4.0);
        assert!(params.is_some());
        let p = params.unwrap();
        assert_eq!(p.r0, 0.025);
        assert_eq!(p.theta, 0.035);
        assert_eq!(p.kappa, 0.6);
    }

    #[test]
    fn test_new_invalid_kappa() {
        assert!(ShortRateParams::new(0.025, 0.035, 0.0, 0.015, 0.012, 4.0).is_none());
        assert!(ShortRateParams::new(0.025, 0.035, -0.5, 0.015, 0.012, 4.0).is_none());
    }

    #[test]
    fn test_new_invalid_sigma() {
        assert!(ShortRateParams::new(0.025, 0.035, 0.6, -0.01, 0.012, 4.0).is_none());
    }

    #[test]
    fn test_new_invalid_decay() {
        assert!(ShortRateParams::new(0.025, 0.035, 0.6, 0.015, 0.012, 0.0).is_none());
    }

    #[test]
    fn test_from_form_inputs_defaults() {
        let params = ShortRateParams::from_form_inputs(None, None, None, None, None, None);
        assert_relative_eq!(params.r0, 0.025, epsilon = 1e-12);
        assert_relative_eq!(params.theta, 0.035, epsilon = 1e-12);
        assert_eq!(params.kappa, 0.6);
        assert_relative_eq!(params.sigma, 0.015, epsilon = 1e-12);
        assert_relative_eq!(params.tilt, 0.012, epsilon = 1e-12);
        assert_eq!(params.decay, 4.0);
    }

    #[test]
    fn test_from_form_inputs_transforms() {
        let params = ShortRateParams::from_form_inputs(
            Some(5.0),
            Some(4.0),
            Some(1.2),
            Some(2.0),
            Some(-50.0),
            Some(2.5),
        );
        assert_relative_eq!(params.r0, 0.05, epsilon = 1e-12);
        assert_relative_eq!(params.theta, 0.04, epsilon = 1e-12);
        assert_eq!(params.kappa, 1.2);
        assert_relative_eq!(params.sigma, 0.02, epsilon = 1e-12);
        assert_relative_eq!(params.tilt, -0.005, epsilon = 1e-12);
        assert_eq!(params.decay, 2.5);
    }

    #[test]
    fn test_from_form_inputs_floors() {
        // Explicit zeros hit the mean-reversion and decay floors
        let params = ShortRateParams::from_form_inputs(
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(-2.0),
            Some(0.0),
            Some(0.0),
        );
        assert_eq!(params.r0, 0.0);
        assert_eq!(params.kappa, 0.01);
        assert_eq!(params.sigma, 0.0);
        assert_eq!(params.decay, 0.1);
    }

    #[test]
    fn test_default_matches_form_defaults() {
        assert_eq!(
            default_params(),
            ShortRateParams::from_form_inputs(None, None, None, None, None, None)
        );
    }

    // ==========================================================
    // Expected short rate tests
    // ==========================================================

    #[test]
    fn test_expected_short_rate_starts_at_r0() {
        let params = default_params();
        assert_eq!(params.expected_short_rate(0.0), params.r0);

        let other = ShortRateParams::new(0.05, 0.03, 1.5, 0.01, 0.012, 2.0).unwrap();
        assert_eq!(other.expected_short_rate(0.0), other.r0);
    }

    #[test]
    fn test_expected_short_rate_converges_to_theta() {
        let params = default_params();
        assert_relative_eq!(params.expected_short_rate(1000.0), params.theta, epsilon = 1e-12);
    }

    #[test]
    fn test_target_rate_decays_towards_theta() {
        let params = default_params();
        assert_relative_eq!(params.target_rate(0.0), params.theta + params.tilt, epsilon = 1e-15);
        assert!(params.target_rate(1.0) < params.target_rate(0.0));
        assert_relative_eq!(params.target_rate(100.0), params.theta, epsilon = 1e-12);
    }

    #[test]
    fn test_expected_short_rate_reference_value() {
        // Hand-computed for the form defaults at t = 1:
        // target = 0.035 + 0.012 * exp(-4) = 0.03521979...
        // rate = target + (0.025 - target) * exp(-0.6)
        let params = default_params();
        let target = 0.035 + 0.012 * (-4.0f64).exp();
        let expected = target + (0.025 - target) * (-0.6f64).exp();
        assert_relative_eq!(params.expected_short_rate(1.0), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_faster_reversion_closes_gap_sooner() {
        let slow = ShortRateParams::new(0.025, 0.035, 0.3, 0.015, 0.0, 4.0).unwrap();
        let fast = ShortRateParams::new(0.025, 0.035, 2.0, 0.015, 0.0, 4.0).unwrap();
        // With r0 below theta, the faster-reverting path sits higher
        assert!(fast.expected_short_rate(1.0) > slow.expected_short_rate(1.0));
    }

    // ==========================================================
    // Expected yield tests
    // ==========================================================

    #[test]
    fn test_expected_yield_flat_model() {
        // With r0 == theta and no tilt the short rate is constant, so every
        // yield equals that constant
        let params = ShortRateParams::new(0.03, 0.03, 0.8, 0.01, 0.0, 4.0).unwrap();
        for maturity in [0.5, 1.0, 5.0, 30.0] {
            assert_relative_eq!(params.expected_yield(maturity), 0.03, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_expected_yield_short_maturity_near_r0() {
        let params = default_params();
        let y = params.expected_yield(0.01);
        assert_relative_eq!(y, params.r0, epsilon = 1e-3);
    }

    #[test]
    fn test_expected_yield_non_positive_maturity() {
        let params = default_params();
        assert_eq!(params.expected_yield(0.0), params.r0);
        assert_eq!(params.expected_yield(-1.0), params.r0);
    }

    #[test]
    fn test_expected_yield_between_path_extremes() {
        // A time average cannot escape the range of the averaged path
        let params = default_params();
        for maturity in STANDARD_MATURITIES {
            let samples: Vec<f64> = (0..=1000)
                .map(|i| params.expected_short_rate(i as f64 * maturity / 1000.0))
                .collect();
            let lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let y = params.expected_yield(maturity);
            assert!(y >= lo - 1e-9 && y <= hi + 1e-9, "yield {} outside [{}, {}]", y, lo, hi);
        }
    }

    #[test]
    fn test_yield_curve_matches_pointwise_yields() {
        let params = default_params();
        let curve = params.yield_curve(&STANDARD_MATURITIES);
        assert_eq!(curve.len(), STANDARD_MATURITIES.len());
        for (y, maturity) in curve.iter().zip(STANDARD_MATURITIES) {
            assert_eq!(*y, params.expected_yield(maturity));
        }
    }

    // ==========================================================
    // Timeline tests
    // ==========================================================

    #[test]
    fn test_timeline_quarterly_grid() {
        let grid = timeline(20.0, 0.25);
        assert_eq!(grid.len(), 81);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[1], 0.25);
        assert_eq!(grid[80], 20.0);
    }

    #[test]
    fn test_timeline_rounds_to_two_decimals() {
        let grid = timeline(1.0, 0.1);
        assert_eq!(grid[3], 0.3);
        assert_eq!(grid[7], 0.7);
        assert_eq!(grid.len(), 11);
    }

    #[test]
    fn test_timeline_non_positive_step() {
        assert!(timeline(10.0, 0.0).is_empty());
        assert!(timeline(10.0, -0.25).is_empty());
    }

    #[test]
    fn test_timeline_negative_horizon() {
        assert!(timeline(-1.0, 0.25).is_empty());
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy for plausible short-rate parameter sets
        fn params() -> impl Strategy<Value = ShortRateParams> {
            (
                -0.02..0.15f64,
                -0.02..0.15f64,
                0.01..3.0f64,
                0.0..0.05f64,
                -0.05..0.05f64,
                0.1..10.0f64,
            )
                .prop_map(|(r0, theta, kappa, sigma, tilt, decay)| ShortRateParams {
                    r0,
                    theta,
                    kappa,
                    sigma,
                    tilt,
                    decay,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_short_rate_starts_at_r0(p in params()) {
                let rate = p.expected_short_rate(0.0);
                prop_assert!((rate - p.r0).abs() < 1e-12);
            }

            #[test]
            fn prop_short_rate_bounded_by_inputs(p in params(), t in 0.0..50.0f64) {
                // The path is a convex-ish blend of r0, theta and the tilt;
                // it can never leave the hull of those magnitudes
                let bound = p.r0.abs() + p.theta.abs() + p.tilt.abs();
                prop_assert!(p.expected_short_rate(t).abs() <= bound + 1e-9);
            }

            #[test]
            fn prop_yield_finite_over_standard_grid(p in params()) {
                for maturity in STANDARD_MATURITIES {
                    prop_assert!(p.expected_yield(maturity).is_finite());
                }
            }

            #[test]
            fn prop_timeline_is_sorted_and_bounded(max in 0.0..40.0f64) {
                let grid = timeline(max, 0.25);
                prop_assert!(!grid.is_empty());
                prop_assert_eq!(grid[0], 0.0);
                for pair in grid.windows(2) {
                    prop_assert!(pair[1] > pair[0]);
                }
                prop_assert!(*grid.last().unwrap() <= max + 0.25);
            }
        }
    }
}
