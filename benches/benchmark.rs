//! Theil-Sen benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability in the number of observations (the O(n^2) pair step)
//! - Number of predictor columns
//! - Optional outputs (R², diagnostics, residuals)
//! - Pathological inputs (outliers, missing values, tied predictors)
//! - Sequential vs parallel column execution
//!
//! Run with: `cargo bench` (add `--features parallel` for the parallel group)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;
use theilsen_rs::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy line with `predictors` columns sharing one response.
fn generate_linear_data(size: usize, predictors: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();
    let x_dist = Uniform::new(0.0, 100.0).unwrap();

    let x: Vec<f64> = (0..size * predictors)
        .map(|_| x_dist.sample(&mut rng))
        .collect();
    let y: Vec<f64> = (0..size)
        .map(|i| 3.0 + 0.5 * x[i * predictors] + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a noisy line with 20% gross outliers.
fn generate_outlier_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let outlier_dist = Uniform::new(-500.0, 500.0).unwrap();
    let (x, mut y) = generate_linear_data(size, 1, seed);

    for _ in 0..size / 5 {
        let idx = rng.random_range(0..size);
        y[idx] += outlier_dist.sample(&mut rng);
    }
    (x, y)
}

/// Generate data where 10% of the values are missing.
fn generate_missing_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut x, mut y) = generate_linear_data(size, 1, seed);

    for _ in 0..size / 10 {
        let idx = rng.random_range(0..size);
        if rng.random_bool(0.5) {
            x[idx] = f64::NAN;
        } else {
            y[idx] = f64::NAN;
        }
    }
    (x, y)
}

/// Generate a predictor with only a handful of distinct values.
fn generate_tied_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| (i % 5) as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.0 * xi + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [100, 500, 1_000, 2_000] {
        group.throughput(Throughput::Elements((size * (size - 1) / 2) as u64));

        let (x, y) = generate_linear_data(size, 1, 42);

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| {
                TheilSen::new()
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_predictors(c: &mut Criterion) {
    let mut group = c.benchmark_group("predictors");
    group.sample_size(20);

    let size = 500;
    for predictors in [1, 4, 16] {
        let (x, y) = generate_linear_data(size, predictors, 42);

        group.bench_with_input(
            BenchmarkId::new("fit", predictors),
            &predictors,
            |b, &predictors| {
                b.iter(|| {
                    TheilSen::new()
                        .predictors(predictors)
                        .build()
                        .unwrap()
                        .fit(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_outputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("outputs");
    group.sample_size(30);

    let (x, y) = generate_linear_data(1_000, 1, 42);

    group.bench_function("coefficients_only", |b| {
        b.iter(|| {
            TheilSen::new()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    group.bench_function("all_outputs", |b| {
        b.iter(|| {
            TheilSen::new()
                .return_r_squared()
                .return_diagnostics()
                .return_residuals()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(30);

    let size = 1_000;

    let (x, y) = generate_outlier_data(size, 42);
    group.bench_function("outliers", |b| {
        b.iter(|| {
            TheilSen::new()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    let (x, y) = generate_missing_data(size, 42);
    group.bench_function("missing_values", |b| {
        b.iter(|| {
            TheilSen::new()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    let (x, y) = generate_tied_data(size, 42);
    group.bench_function("tied_predictor", |b| {
        b.iter(|| {
            TheilSen::new()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    let x = vec![1.0; size];
    let (_, y) = generate_linear_data(size, 1, 42);
    group.bench_function("constant_predictor", |b| {
        b.iter(|| {
            TheilSen::new()
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution");
    group.sample_size(20);

    let predictors = 8;
    let (x, y) = generate_linear_data(500, predictors, 42);

    for parallel in [false, true] {
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_with_input(BenchmarkId::new("fit", name), &parallel, |b, &parallel| {
            b.iter(|| {
                TheilSen::new()
                    .predictors(predictors)
                    .parallel(parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_predictors,
    bench_outputs,
    bench_pathological,
    bench_execution,
);

criterion_main!(benches);
