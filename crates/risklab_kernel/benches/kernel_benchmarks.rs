//! Criterion benchmarks for risklab_kernel path simulation.
//!
//! Benchmarks cover:
//! - RNG generation (per-draw and batch)
//! - GBM path-set simulation with varying path counts and horizons
//! - Martingale demonstration runs
//! - Summary statistics over simulated terminals

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use risklab_kernel::mc::gbm::GbmSimulation;
use risklab_kernel::mc::martingale::MartingaleSimulation;
use risklab_kernel::rng::PathRng;
use risklab_models::gbm::GbmParams;

/// Benchmark RNG generation (foundation for the simulators).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PathRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );
    }

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PathRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark GBM simulation with varying path counts.
fn bench_gbm_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_paths");
    group.sample_size(30); // Full path storage keeps iterations slow

    let params = GbmParams::default();

    for n_paths in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("one_year", n_paths), &n_paths, |b, &n| {
            b.iter(|| {
                let mut rng = PathRng::from_seed(42);
                black_box(GbmSimulation::run(
                    black_box(&params),
                    black_box(1.0),
                    n,
                    &mut rng,
                ))
            });
        });
    }

    group.finish();
}

/// Benchmark GBM simulation with varying horizons at a fixed path count.
fn bench_gbm_horizon_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_horizon_scaling");
    group.sample_size(30);

    let params = GbmParams::default();
    let n_paths = 1_000;

    for years in [1, 2, 5, 10] {
        group.bench_with_input(
            BenchmarkId::new("daily_grid", years),
            &years,
            |b, &years| {
                b.iter(|| {
                    let mut rng = PathRng::from_seed(42);
                    black_box(GbmSimulation::run(
                        black_box(&params),
                        black_box(years as f64),
                        n_paths,
                        &mut rng,
                    ))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the martingale demonstration with varying path counts.
fn bench_martingale(c: &mut Criterion) {
    let mut group = c.benchmark_group("martingale");
    group.sample_size(50);

    let params = GbmParams::new(100.0, 0.03, 0.2).unwrap();

    for n_paths in [100, 400, 800] {
        group.bench_with_input(BenchmarkId::new("one_year", n_paths), &n_paths, |b, &n| {
            b.iter(|| {
                let mut rng = PathRng::from_seed(42);
                black_box(MartingaleSimulation::run(
                    black_box(&params),
                    black_box(1.0),
                    n,
                    &mut rng,
                ))
            });
        });
    }

    group.finish();
}

/// Benchmark summary extraction over an existing simulation.
fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");

    let params = GbmParams::default();
    let mut rng = PathRng::from_seed(42);
    let gbm = GbmSimulation::run(&params, 1.0, 10_000, &mut rng);
    let martingale = MartingaleSimulation::run(&params, 1.0, 800, &mut rng);

    group.bench_function("gbm_summary_10k", |b| b.iter(|| black_box(gbm.summary())));
    group.bench_function("martingale_summary_800", |b| {
        b.iter(|| black_box(martingale.summary()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_gbm_paths,
    bench_gbm_horizon_scaling,
    bench_martingale,
    bench_summaries
);
criterion_main!(benches);
