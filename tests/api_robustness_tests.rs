//! Statistical robustness tests on seeded synthetic data.
//!
//! ## Test Organization
//!
//! 1. **Outliers** - Theil-Sen against ordinary least squares on corrupted data
//! 2. **R² Bounds** - Perfect and unrelated data

use approx::assert_relative_eq;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};

use theilsen_rs::prelude::*;

const TRUE_INTERCEPT: f64 = 1.5;
const TRUE_SLOPE: f64 = 2.0;

/// Points on the true line with Gaussian noise; the last `n_outliers` points
/// are shifted upward by `offset`.
fn corrupted_line(n: usize, n_outliers: usize, offset: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            let clean = TRUE_INTERCEPT + TRUE_SLOPE * xi + rng.sample(noise);
            if i >= n - n_outliers {
                clean + offset
            } else {
                clean
            }
        })
        .collect();
    (x, y)
}

/// Closed-form simple least squares, returns `(intercept, slope)`.
fn ordinary_least_squares(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let sxy: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let sxx: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();
    let slope = sxy / sxx;
    (mean_y - slope * mean_x, slope)
}

// ============================================================================
// Outlier Tests
// ============================================================================

/// Test Theil-Sen beats least squares with 20% gross outliers.
#[test]
fn test_outliers_closer_than_least_squares() {
    let model = TheilSen::new().build().unwrap();

    for seed in [7, 42, 2024] {
        let (x, y) = corrupted_line(20, 4, 50.0, seed);

        let result = model.fit(&x, &y).unwrap();
        let (ts_intercept, ts_slope) = result.coefficient(0).unwrap();
        let (ols_intercept, ols_slope) = ordinary_least_squares(&x, &y);

        let ts_slope_err = (ts_slope - TRUE_SLOPE).abs();
        let ts_intercept_err = (ts_intercept - TRUE_INTERCEPT).abs();

        assert!(ts_slope_err < (ols_slope - TRUE_SLOPE).abs());
        assert!(ts_intercept_err < (ols_intercept - TRUE_INTERCEPT).abs());
        assert!(ts_slope_err < 1.0, "slope error {}", ts_slope_err);
    }
}

/// Test outliers scattered through the sample barely move the slope.
#[test]
fn test_scattered_outliers() {
    let mut rng = StdRng::seed_from_u64(11);
    let noise = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..60).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            let clean = TRUE_INTERCEPT + TRUE_SLOPE * xi + rng.sample(noise);
            if i % 6 == 0 { clean - 80.0 } else { clean }
        })
        .collect();

    let result = TheilSen::new().build().unwrap().fit(&x, &y).unwrap();

    assert_relative_eq!(result.slopes[0], TRUE_SLOPE, epsilon = 0.25);
}

// ============================================================================
// R² Bound Tests
// ============================================================================

/// Test R² is one for a noiseless line.
#[test]
fn test_r_squared_noiseless_line() {
    let x: Vec<f64> = (0..30).map(|i| i as f64 / 3.0).collect();
    let y: Vec<f64> = x.iter().map(|&xi| TRUE_INTERCEPT + TRUE_SLOPE * xi).collect();

    let result = TheilSen::new()
        .return_r_squared()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_relative_eq!(result.r_squared.unwrap()[0], 1.0, epsilon = 1e-10);
}

/// Test R² is low for a response unrelated to the predictor.
#[test]
fn test_r_squared_unrelated_response() {
    let mut rng = StdRng::seed_from_u64(3);
    let uniform = Uniform::new(0.0, 1.0).unwrap();

    let x: Vec<f64> = (0..200).map(|_| rng.sample(uniform)).collect();
    let y: Vec<f64> = (0..200).map(|_| rng.sample(uniform)).collect();

    let result = TheilSen::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let diagnostics = result.diagnostics.unwrap();
    assert!(diagnostics[0].r_squared < 0.3);
}
