//! Criterion benchmarks for risklab_core numerical routines.
//!
//! Measures the cost of the standard normal quantile, the descriptive
//! statistics and the histogram builder across sample sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use risklab_core::math::{inverse_norm_cdf, norm_cdf};
use risklab_core::stats::{mean, population_std, quantile, Histogram};

/// Generate a deterministic pseudo-random sample without seeding an RNG.
fn generate_sample(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_749_894_9;
            (t.fract() - 0.5) * 2_000.0
        })
        .collect()
}

/// Benchmark the distribution functions over the probability range.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");

    group.bench_function("norm_cdf", |b| {
        b.iter(|| norm_cdf(black_box(1.644_853_626_951_472_2)));
    });

    group.bench_function("inverse_norm_cdf_central", |b| {
        b.iter(|| inverse_norm_cdf(black_box(0.95)));
    });

    group.bench_function("inverse_norm_cdf_tail", |b| {
        b.iter(|| inverse_norm_cdf(black_box(1e-6)));
    });

    // Sweep the whole open interval to exercise all three regimes
    group.bench_function("inverse_norm_cdf_sweep_999", |b| {
        let probabilities: Vec<f64> = (1..1000).map(|i| i as f64 / 1000.0).collect();
        b.iter(|| {
            for &p in &probabilities {
                let _ = inverse_norm_cdf(black_box(p));
            }
        });
    });

    group.finish();
}

/// Benchmark summary statistics across sample sizes.
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [100, 1000, 10000] {
        let sample = generate_sample(size);

        group.bench_with_input(BenchmarkId::new("mean", size), &sample, |b, sample| {
            b.iter(|| mean(black_box(sample)));
        });

        group.bench_with_input(
            BenchmarkId::new("population_std", size),
            &sample,
            |b, sample| {
                let mu = mean(sample);
                b.iter(|| population_std(black_box(sample), black_box(mu)));
            },
        );

        // Quantile sorts a copy each call, so this dominates at scale
        group.bench_with_input(BenchmarkId::new("quantile", size), &sample, |b, sample| {
            b.iter(|| quantile(black_box(sample), black_box(0.05)));
        });
    }

    group.finish();
}

/// Benchmark histogram construction across sample sizes and bin counts.
fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [100, 1000, 10000] {
        let sample = generate_sample(size);

        group.bench_with_input(
            BenchmarkId::new("build_default_bins", size),
            &sample,
            |b, sample| {
                b.iter(|| Histogram::build(black_box(sample), Histogram::DEFAULT_BINS));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("build_30_bins", size),
            &sample,
            |b, sample| {
                b.iter(|| Histogram::build(black_box(sample), 30));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distributions, bench_statistics, bench_histogram);
criterion_main!(benches);
