//! Sum reductions for goodness-of-fit statistics.
//!
//! ## Purpose
//!
//! R², RMSE and MAE are built from sums of squared and absolute deviations.
//! This module provides those sums behind the `FloatReduce` trait so that
//! `f64` can use a two-lane SIMD path while `f32` (and any other precision)
//! uses the scalar loop.
//!
//! ## Design notes
//!
//! * **SIMD**: `f64` accumulates in `wide::f64x2` lanes, then folds the odd tail.
//! * **Summation order**: The SIMD path pairs elements differently from the scalar
//!   path, so results may differ in the last few ulps.

use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatReduce Trait
// ============================================================================

/// Float types with specialised deviation-sum kernels.
pub trait FloatReduce: Float + 'static {
    /// `Σ (v_i - center)²`.
    fn sum_squared_deviations(values: &[Self], center: Self) -> Self;

    /// `Σ |v_i - center|`.
    fn sum_abs_deviations(values: &[Self], center: Self) -> Self;

    /// Arithmetic mean, NaN for an empty slice.
    #[inline]
    fn mean(values: &[Self]) -> Self {
        if values.is_empty() {
            return Self::nan();
        }
        let sum = values.iter().fold(Self::zero(), |acc, &v| acc + v);
        sum / Self::from(values.len()).unwrap_or_else(Self::nan)
    }
}

impl FloatReduce for f64 {
    #[inline]
    fn sum_squared_deviations(values: &[f64], center: f64) -> f64 {
        sum_squared_deviations_simd(values, center)
    }

    #[inline]
    fn sum_abs_deviations(values: &[f64], center: f64) -> f64 {
        sum_abs_deviations_simd(values, center)
    }
}

impl FloatReduce for f32 {
    #[inline]
    fn sum_squared_deviations(values: &[f32], center: f32) -> f32 {
        sum_squared_deviations_scalar(values, center)
    }

    #[inline]
    fn sum_abs_deviations(values: &[f32], center: f32) -> f32 {
        sum_abs_deviations_scalar(values, center)
    }
}

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Scalar `Σ (v_i - center)²`.
pub fn sum_squared_deviations_scalar<T: Float>(values: &[T], center: T) -> T {
    values.iter().fold(T::zero(), |acc, &v| {
        let d = v - center;
        acc + d * d
    })
}

/// Scalar `Σ |v_i - center|`.
pub fn sum_abs_deviations_scalar<T: Float>(values: &[T], center: T) -> T {
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - center).abs())
}

// ============================================================================
// SIMD Kernels
// ============================================================================

/// `Σ (v_i - center)²` using two `f64` lanes.
pub fn sum_squared_deviations_simd(values: &[f64], center: f64) -> f64 {
    let c = f64x2::splat(center);
    let mut acc = f64x2::splat(0.0);

    let chunks = values.chunks_exact(2);
    let tail = chunks.remainder();
    for pair in chunks {
        let d = f64x2::new([pair[0], pair[1]]) - c;
        acc += d * d;
    }

    let mut total = acc.reduce_add();
    for &v in tail {
        let d = v - center;
        total += d * d;
    }
    total
}

/// `Σ |v_i - center|` using two `f64` lanes.
pub fn sum_abs_deviations_simd(values: &[f64], center: f64) -> f64 {
    let c = f64x2::splat(center);
    let mut acc = f64x2::splat(0.0);

    let chunks = values.chunks_exact(2);
    let tail = chunks.remainder();
    for pair in chunks {
        acc += (f64x2::new([pair[0], pair[1]]) - c).abs();
    }

    let mut total = acc.reduce_add();
    for &v in tail {
        total += (v - center).abs();
    }
    total
}
