//! Discounted-martingale demonstration.
//!
//! Grows GBM paths at a reference rate and discounts each point back at
//! the same rate. Under the risk-neutral measure the discounted series
//! is a martingale, so the cross-path average should hover around the
//! initial price regardless of the rate level.

use risklab_core::config::FieldSpec;
use risklab_core::stats::{mean, population_std, quantile};
use risklab_models::gbm::GbmParams;

use crate::rng::PathRng;

/// Output of one martingale demonstration run.
///
/// # Examples
///
/// ```
/// use risklab_kernel::mc::martingale::MartingaleSimulation;
/// use risklab_kernel::rng::PathRng;
/// use risklab_models::gbm::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.03, 0.2).unwrap();
/// let mut rng = PathRng::from_seed(42);
/// let sim = MartingaleSimulation::run(&params, 1.0, 200, &mut rng);
///
/// // one year maps to 80 steps
/// assert_eq!(sim.time_grid.len(), 81);
/// assert_eq!(sim.discounted_paths.len(), 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MartingaleSimulation {
    /// Simulation times in years, `steps + 1` points starting at 0
    pub time_grid: Vec<f64>,
    /// One discounted price series per path, aligned with `time_grid`
    pub discounted_paths: Vec<Vec<f64>>,
    /// Cross-path average of the discounted price at each step
    pub average_series: Vec<f64>,
    /// Discounted terminal value of each path
    pub discounted_finals: Vec<f64>,
}

/// Summary statistics over the discounted terminal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MartingaleSummary {
    /// Sample mean of discounted terminal values
    pub mean: f64,
    /// Population standard deviation of discounted terminal values
    pub std: f64,
    /// Width of the central 90% band (95% minus 5% quantile)
    pub band_width: f64,
}

impl MartingaleSimulation {
    /// Horizon form field in years, floored at 0.1.
    pub const YEARS: FieldSpec = FieldSpec::at_least("years", 1.0, 0.1);
    /// Path count form field, clamped into [10, 800].
    pub const PATHS: FieldSpec = FieldSpec::new("paths", 100.0, 10.0, 800.0);
    /// Reference rate form field (decimal per year).
    pub const RATE: FieldSpec = FieldSpec::unbounded("rate", 0.03);

    /// Runs the martingale demonstration.
    ///
    /// `params.drift` serves as both the growth rate and the discount
    /// rate. The grid uses `round(years * 80)` steps clamped into
    /// [40, 240], a coarser resolution than the daily GBM grid since the
    /// discounted average is the quantity of interest rather than the
    /// paths themselves.
    ///
    /// # Arguments
    /// * `params` - GBM dynamics; `drift` doubles as the discount rate
    /// * `years` - Simulation horizon in years
    /// * `path_count` - Number of independent paths
    /// * `rng` - Random source; fix the seed for reproducible output
    pub fn run(params: &GbmParams, years: f64, path_count: usize, rng: &mut PathRng) -> Self {
        let path_count = path_count.max(1);
        let rate = params.drift;
        let steps = ((years * 80.0).round() as i64).clamp(40, 240) as usize;
        let dt = years / steps as f64;
        let drift_term = params.step_drift(dt);
        let diffusion = params.step_diffusion(dt);

        let time_grid: Vec<f64> = (0..=steps).map(|i| i as f64 * dt).collect();

        let mut discounted_paths = Vec::with_capacity(path_count);
        let mut discounted_finals = Vec::with_capacity(path_count);
        let mut average_accumulator = vec![0.0; steps + 1];

        for _ in 0..path_count {
            let mut series = Vec::with_capacity(steps + 1);
            let mut price = params.s0;
            series.push(price);

            for step in 1..=steps {
                price *= (drift_term + diffusion * rng.gen_normal()).exp();
                series.push(price * (-rate * step as f64 * dt).exp());
            }

            for (slot, value) in average_accumulator.iter_mut().zip(&series) {
                *slot += value;
            }

            discounted_finals.push(series[steps]);
            discounted_paths.push(series);
        }

        let average_series = average_accumulator
            .iter()
            .map(|total| total / path_count as f64)
            .collect();

        Self {
            time_grid,
            discounted_paths,
            average_series,
            discounted_finals,
        }
    }

    /// Summary statistics over the discounted terminal distribution.
    pub fn summary(&self) -> MartingaleSummary {
        let discounted_mean = mean(&self.discounted_finals);
        MartingaleSummary {
            mean: discounted_mean,
            std: population_std(&self.discounted_finals, discounted_mean),
            band_width: quantile(&self.discounted_finals, 0.95)
                - quantile(&self.discounted_finals, 0.05),
        }
    }
}
