//! Summary statistics and histogram utilities.
//!
//! This module provides the descriptive statistics shared by the simulation
//! engines and report layers:
//! - `mean`: Arithmetic mean
//! - `population_std`: Population standard deviation
//! - `quantile`: Linear-interpolation quantile of an unsorted sample
//! - `Histogram`: Relative-frequency histogram with formatted bin labels
//! - `format_grouped`: Grouped-thousands number formatting
//!
//! All routines treat an empty sample as zero rather than failing, so the
//! report layers never have to special-case empty simulation output.

/// Arithmetic mean of a sample.
///
/// # Arguments
/// * `values` - Sample to average
///
/// # Returns
/// The mean, or 0.0 for an empty sample.
///
/// # Examples
/// ```
/// use risklab_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of a sample around a known mean.
///
/// Divides by `n` rather than `n - 1`, matching the population convention
/// used for simulated path sets.
///
/// # Arguments
/// * `values` - Sample
/// * `mean` - Mean of the sample, typically from [`mean`]
///
/// # Returns
/// The population standard deviation, or 0.0 for an empty sample.
///
/// # Examples
/// ```
/// use risklab_core::stats::{mean, population_std};
///
/// let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let mu = mean(&sample);
/// assert_eq!(population_std(&sample, mu), 2.0);
/// ```
#[inline]
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Quantile of an unsorted sample with linear interpolation.
///
/// Sorts a copy of the sample, clamps `q` into [0, 1] and interpolates
/// between the two order statistics bracketing `q * (n - 1)`.
///
/// # Arguments
/// * `values` - Sample, in any order
/// * `q` - Quantile level; values outside [0, 1] are clamped
///
/// # Returns
/// The interpolated quantile, or 0.0 for an empty sample.
///
/// # Examples
/// ```
/// use risklab_core::stats::quantile;
///
/// let sample = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(quantile(&sample, 0.0), 1.0);
/// assert_eq!(quantile(&sample, 0.5), 2.5);
/// assert_eq!(quantile(&sample, 1.0), 4.0);
/// ```
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Relative-frequency histogram with formatted bin labels.
///
/// Bins span the sample range evenly. Each label is the bin interval in
/// grouped-thousands notation with no decimals, and each frequency is the
/// share of the sample falling into the bin.
///
/// # Examples
/// ```
/// use risklab_core::stats::Histogram;
///
/// let histogram = Histogram::build(&[1.0, 2.0, 2.5, 9.0], 5);
/// assert_eq!(histogram.labels.len(), 5);
/// let total: f64 = histogram.frequencies.iter().sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Bin interval labels, formatted as "lo–hi"
    pub labels: Vec<String>,
    /// Share of the sample in each bin, summing to 1 for non-empty samples
    pub frequencies: Vec<f64>,
}

impl Histogram {
    /// Default bin suggestion for terminal-value distributions.
    pub const DEFAULT_BINS: usize = 15;

    /// Builds a histogram over `values` with roughly `suggested_bins` bins.
    ///
    /// The bin count is clamped into [5, 30]. A degenerate sample (all
    /// values equal) still produces a usable single-peak histogram by
    /// substituting a unit-scale range.
    ///
    /// # Arguments
    /// * `values` - Sample to bin
    /// * `suggested_bins` - Requested number of bins before clamping
    ///
    /// # Returns
    /// The histogram, with empty labels and frequencies for an empty sample.
    pub fn build(values: &[f64], suggested_bins: usize) -> Self {
        if values.is_empty() {
            return Self {
                labels: Vec::new(),
                frequencies: Vec::new(),
            };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut range = max - min;
        if range == 0.0 {
            range = min.max(1.0);
        }
        let bin_count = suggested_bins.clamp(5, 30);
        let mut bin_width = range / bin_count as f64;
        if bin_width == 0.0 {
            bin_width = 1.0;
        }

        let mut labels = Vec::with_capacity(bin_count);
        for i in 0..bin_count {
            let start = min + i as f64 * bin_width;
            let end = start + bin_width;
            labels.push(format!(
                "{}–{}",
                format_grouped(start, 0),
                format_grouped(end, 0)
            ));
        }

        let mut bins = vec![0usize; bin_count];
        for value in values {
            let mut index = ((value - min) / bin_width).floor() as isize;
            if index >= bin_count as isize {
                index = bin_count as isize - 1;
            }
            if index < 0 {
                index = 0;
            }
            bins[index as usize] += 1;
        }

        let frequencies = bins
            .iter()
            .map(|count| *count as f64 / values.len() as f64)
            .collect();

        Self {
            labels,
            frequencies,
        }
    }
}

/// Formats a number with grouped thousands and a fixed number of decimals.
///
/// Produces en-US style output such as `1,234,567.89`, the convention used
/// for histogram labels and report tables.
///
/// # Arguments
/// * `value` - Number to format
/// * `digits` - Number of fraction digits to keep
///
/// # Examples
/// ```
/// use risklab_core::stats::format_grouped;
///
/// assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_grouped(-2500.0, 0), "-2,500");
/// assert_eq!(format_grouped(999.5, 1), "999.5");
/// ```
pub fn format_grouped(value: f64, digits: usize) -> String {
    let rendered = format!("{:.*}", digits, value);
    let (sign, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match magnitude.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (magnitude, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // mean tests
    // ==========================================================

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[7.5]), 7.5);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_negative_values() {
        assert_eq!(mean(&[-2.0, -4.0, 6.0]), 0.0);
    }

    // ==========================================================
    // population_std tests
    // ==========================================================

    #[test]
    fn test_population_std_known_sample() {
        // Classic example: std of [2,4,4,4,5,5,7,9] is exactly 2
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mu = mean(&sample);
        assert_eq!(population_std(&sample, mu), 2.0);
    }

    #[test]
    fn test_population_std_constant_sample() {
        let sample = [3.0, 3.0, 3.0];
        assert_eq!(population_std(&sample, 3.0), 0.0);
    }

    #[test]
    fn test_population_std_empty_is_zero() {
        assert_eq!(population_std(&[], 0.0), 0.0);
    }

    #[test]
    fn test_population_std_uses_n_divisor() {
        // Two points a distance 2 apart: population std is 1, sample std
        // with the n-1 divisor would be sqrt(2)
        let sample = [0.0, 2.0];
        assert_eq!(population_std(&sample, 1.0), 1.0);
    }

    // ==========================================================
    // quantile tests
    // ==========================================================

    #[test]
    fn test_quantile_endpoints() {
        let sample = [5.0, 1.0, 3.0];
        assert_eq!(quantile(&sample, 0.0), 1.0);
        assert_eq!(quantile(&sample, 1.0), 5.0);
    }

    #[test]
    fn test_quantile_median_interpolation() {
        // Median of an even-sized sample interpolates the middle pair
        let sample = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(quantile(&sample, 0.5), 2.5);
    }

    #[test]
    fn test_quantile_exact_order_statistic() {
        // q = 0.5 on an odd-sized sample lands exactly on an element
        let sample = [10.0, 30.0, 20.0];
        assert_eq!(quantile(&sample, 0.5), 20.0);
    }

    #[test]
    fn test_quantile_interpolates_between_elements() {
        // position = 0.25 * 3 = 0.75 between 1 and 2
        let sample = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&sample, 0.25), 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_clamps_out_of_range() {
        let sample = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sample, -0.5), 1.0);
        assert_eq!(quantile(&sample, 1.5), 3.0);
    }

    #[test]
    fn test_quantile_empty_is_zero() {
        assert_eq!(quantile(&[], 0.5), 0.0);
    }

    #[test]
    fn test_quantile_does_not_mutate_input() {
        let sample = [3.0, 1.0, 2.0];
        let _ = quantile(&sample, 0.5);
        assert_eq!(sample, [3.0, 1.0, 2.0]);
    }

    // ==========================================================
    // Histogram tests
    // ==========================================================

    #[test]
    fn test_histogram_empty_sample() {
        let histogram = Histogram::build(&[], 15);
        assert!(histogram.labels.is_empty());
        assert!(histogram.frequencies.is_empty());
    }

    #[test]
    fn test_histogram_frequencies_sum_to_one() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let histogram = Histogram::build(&values, 10);
        let total: f64 = histogram.frequencies.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_histogram_bin_count_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(Histogram::build(&values, 2).labels.len(), 5);
        assert_eq!(Histogram::build(&values, 100).labels.len(), 30);
        assert_eq!(Histogram::build(&values, 15).labels.len(), 15);
    }

    #[test]
    fn test_histogram_uniform_fill() {
        // 10 values spread evenly over 5 bins: 2 per bin
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let histogram = Histogram::build(&values, 5);
        for frequency in &histogram.frequencies {
            assert_relative_eq!(*frequency, 0.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_histogram_maximum_lands_in_last_bin() {
        let values = [0.0, 10.0];
        let histogram = Histogram::build(&values, 5);
        assert_eq!(histogram.frequencies[0], 0.5);
        assert_eq!(histogram.frequencies[4], 0.5);
    }

    #[test]
    fn test_histogram_degenerate_sample() {
        // All values identical: range falls back to a unit scale and the
        // whole sample lands in the first bin
        let values = [42.0, 42.0, 42.0];
        let histogram = Histogram::build(&values, 15);
        assert_eq!(histogram.labels.len(), 15);
        assert_eq!(histogram.frequencies[0], 1.0);
        let total: f64 = histogram.frequencies.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_histogram_labels_are_grouped_intervals() {
        let values = [0.0, 10_000.0];
        let histogram = Histogram::build(&values, 5);
        assert_eq!(histogram.labels[0], "0–2,000");
        assert_eq!(histogram.labels[4], "8,000–10,000");
    }

    // ==========================================================
    // format_grouped tests
    // ==========================================================

    #[test]
    fn test_format_grouped_thousands() {
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(999.0, 0), "999");
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(format_grouped(-42.0, 0), "-42");
    }

    #[test]
    fn test_format_grouped_small_values() {
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(0.5, 2), "0.50");
        assert_eq!(format_grouped(12.0, 0), "12");
    }

    #[test]
    fn test_format_grouped_rounds_to_digits() {
        assert_eq!(format_grouped(1.005, 1), "1.0");
        assert_eq!(format_grouped(2.56, 1), "2.6");
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy for non-empty samples of reasonable magnitude
        fn sample() -> impl Strategy<Value = Vec<f64>> {
            proptest::collection::vec(-1e6..1e6f64, 1..200)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_mean_within_sample_bounds(values in sample()) {
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mu = mean(&values);
                prop_assert!(mu >= min - 1e-9);
                prop_assert!(mu <= max + 1e-9);
            }

            #[test]
            fn prop_population_std_non_negative(values in sample()) {
                let mu = mean(&values);
                prop_assert!(population_std(&values, mu) >= 0.0);
            }

            #[test]
            fn prop_quantile_within_sample_bounds(values in sample(), q in 0.0..=1.0f64) {
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let result = quantile(&values, q);
                prop_assert!(result >= min);
                prop_assert!(result <= max);
            }

            #[test]
            fn prop_quantile_monotonic_in_q(values in sample(), q in 0.0..0.9f64) {
                let lower = quantile(&values, q);
                let upper = quantile(&values, q + 0.1);
                prop_assert!(upper >= lower);
            }

            #[test]
            fn prop_histogram_mass_conserved(values in sample(), bins in 0usize..50) {
                let histogram = Histogram::build(&values, bins);
                let total: f64 = histogram.frequencies.iter().sum();
                prop_assert!((total - 1.0).abs() < 1e-9);
                prop_assert_eq!(histogram.labels.len(), histogram.frequencies.len());
                prop_assert!(histogram.labels.len() >= 5);
                prop_assert!(histogram.labels.len() <= 30);
            }
        }
    }
}
