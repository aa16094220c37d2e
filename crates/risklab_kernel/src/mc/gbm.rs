//! GBM path-set simulation.
//!
//! Simulates a set of independent GBM paths on a daily grid and derives
//! the aggregates the report layer consumes: terminal values, the
//! cross-path average at each step and the deterministic analytical
//! expectation for comparison.

use risklab_core::config::FieldSpec;
use risklab_core::stats::{mean, population_std, quantile};
use risklab_models::gbm::GbmParams;

use crate::rng::PathRng;

/// Output of one GBM simulation run.
///
/// # Examples
///
/// ```
/// use risklab_kernel::mc::gbm::GbmSimulation;
/// use risklab_kernel::rng::PathRng;
/// use risklab_models::gbm::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// let mut rng = PathRng::from_seed(42);
/// let sim = GbmSimulation::run(&params, 1.0, 100, &mut rng);
///
/// assert_eq!(sim.paths.len(), 100);
/// assert_eq!(sim.time_grid.len(), 253);
/// assert_eq!(sim.final_values.len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmSimulation {
    /// Simulation times in years, `steps + 1` points starting at 0
    pub time_grid: Vec<f64>,
    /// One price series per path, aligned with `time_grid`
    pub paths: Vec<Vec<f64>>,
    /// Terminal value of each path
    pub final_values: Vec<f64>,
    /// Cross-path average price at each step
    pub average_series: Vec<f64>,
    /// Analytical expectation `s0 * exp(drift * t)` at each step
    pub expected_series: Vec<f64>,
    /// Step length in years
    pub dt: f64,
}

/// Summary statistics over the terminal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmSummary {
    /// Sample mean of terminal values
    pub mean: f64,
    /// Population standard deviation of terminal values
    pub std: f64,
    /// 5% quantile of terminal values (downside marker)
    pub downside: f64,
    /// Analytical terminal expectation `s0 * exp(drift * years)`
    pub analytical_expectation: f64,
}

impl GbmSimulation {
    /// Horizon form field in years, floored at 0.1.
    pub const YEARS: FieldSpec = FieldSpec::at_least("years", 1.0, 0.1);
    /// Path count form field, clamped into [10, 10000].
    pub const PATHS: FieldSpec = FieldSpec::new("paths", 100.0, 10.0, 10_000.0);

    /// Runs a GBM simulation on a daily grid.
    ///
    /// The grid uses `max(1, round(years * 252))` steps. The path count is
    /// floored at 1; interactive layers resolve it through
    /// [`GbmSimulation::PATHS`] first to stay inside the documented range.
    ///
    /// # Arguments
    /// * `params` - GBM dynamics
    /// * `years` - Simulation horizon in years
    /// * `path_count` - Number of independent paths
    /// * `rng` - Random source; fix the seed for reproducible output
    pub fn run(params: &GbmParams, years: f64, path_count: usize, rng: &mut PathRng) -> Self {
        let path_count = path_count.max(1);
        let steps = ((years * 252.0).round() as i64).max(1) as usize;
        let dt = years / steps as f64;
        let drift_term = params.step_drift(dt);
        let diffusion = params.step_diffusion(dt);

        let time_grid: Vec<f64> = (0..=steps).map(|i| i as f64 * dt).collect();

        let mut paths = Vec::with_capacity(path_count);
        let mut final_values = Vec::with_capacity(path_count);
        let mut average_accumulator = vec![0.0; steps + 1];

        for _ in 0..path_count {
            let mut series = Vec::with_capacity(steps + 1);
            let mut price = params.s0;
            series.push(price);

            for _ in 1..=steps {
                price *= (drift_term + diffusion * rng.gen_normal()).exp();
                series.push(price);
            }

            for (slot, value) in average_accumulator.iter_mut().zip(&series) {
                *slot += value;
            }

            final_values.push(price);
            paths.push(series);
        }

        let average_series = average_accumulator
            .iter()
            .map(|total| total / path_count as f64)
            .collect();
        let expected_series = time_grid.iter().map(|&t| params.expected_value(t)).collect();

        Self {
            time_grid,
            paths,
            final_values,
            average_series,
            expected_series,
            dt,
        }
    }

    /// Summary statistics over the terminal distribution.
    pub fn summary(&self) -> GbmSummary {
        let terminal_mean = mean(&self.final_values);
        GbmSummary {
            mean: terminal_mean,
            std: population_std(&self.final_values, terminal_mean),
            downside: quantile(&self.final_values, 0.05),
            analytical_expectation: self.expected_series.last().copied().unwrap_or(0.0),
        }
    }
}
