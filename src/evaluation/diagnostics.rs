//! Goodness-of-fit statistics for the robust line.
//!
//! ## Purpose
//!
//! This module evaluates how well each fitted Theil-Sen line describes the
//! data: the ordinary coefficient of determination (R²) together with RMSE,
//! MAE and the MAD of the residuals.
//!
//! ## Design notes
//!
//! * **Robust line, ordinary R²**: R² compares the residuals of the Theil-Sen line with the
//!   total variance of the response. It is not adjusted and may be negative.
//! * **Shared denominator**: `SS_total` uses every observation with a response value and is
//!   computed once per fit ([`ResponseSummary`]).
//! * **Per-column numerator**: `SS_resid` only uses observations usable in that column.
//!
//! ## Invariants
//!
//! * Every statistic of a degenerate column is NaN.
//! * R² is NaN when the response has zero variance.

use num_traits::Float;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::algorithms::estimator::ColumnFit;
use crate::math::median::compute_mad;
use crate::math::reduce::FloatReduce;
use crate::primitives::buffer::ColumnBuffer;

// ============================================================================
// Response Summary
// ============================================================================

/// Column-independent statistics of the response vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSummary<T> {
    /// `Σ (y_i - mean)²` over the non-missing responses.
    pub ss_total: T,
}

impl<T: FloatReduce> ResponseSummary<T> {
    /// Summarise `y`, skipping missing values.
    pub fn compute(y: &[T]) -> Self {
        let observed: Vec<T> = y.iter().copied().filter(|v| v.is_finite()).collect();
        if observed.is_empty() {
            return Self {
                ss_total: T::nan(),
            };
        }

        let mean = T::mean(&observed);
        Self {
            ss_total: T::sum_squared_deviations(&observed, mean),
        }
    }
}

// ============================================================================
// Residuals
// ============================================================================

/// Write the residuals `y_i - (b0 + b1 * x_i)` of the usable observations into
/// `buffer.scratch`, aligned with `buffer.rows`.
pub fn compute_residuals<T: Float>(fit: &ColumnFit<T>, buffer: &mut ColumnBuffer<T>) {
    buffer.scratch.clear();
    buffer.scratch.extend(
        buffer
            .xs
            .iter()
            .zip(buffer.ys.iter())
            .map(|(&x, &y)| y - fit.predict(x)),
    );
}

/// Ordinary coefficient of determination, `1 - SS_resid / SS_total`.
#[inline]
pub fn r_squared<T: Float>(ss_resid: T, ss_total: T) -> T {
    if !ss_total.is_finite() || ss_total <= T::zero() || !ss_resid.is_finite() {
        return T::nan();
    }
    T::one() - ss_resid / ss_total
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit quality of one predictor column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Ordinary (unadjusted) R² of the robust line.
    pub r_squared: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Mean absolute residual.
    pub mae: T,

    /// Median absolute deviation of the residuals.
    pub residual_mad: T,
}

impl<T: FloatReduce> Diagnostics<T> {
    /// Diagnostics of a column without a fitted line.
    pub fn nan() -> Self {
        Self {
            r_squared: T::nan(),
            rmse: T::nan(),
            mae: T::nan(),
            residual_mad: T::nan(),
        }
    }

    /// Compute diagnostics from the residuals of the usable observations.
    ///
    /// `residuals` is reordered in place by the MAD computation.
    pub fn from_residuals(residuals: &mut [T], response: &ResponseSummary<T>) -> Self {
        if residuals.is_empty() {
            return Self::nan();
        }

        let n = T::from(residuals.len()).unwrap_or_else(T::nan);
        let ss_resid = T::sum_squared_deviations(residuals, T::zero());
        let sum_abs = T::sum_abs_deviations(residuals, T::zero());

        Self {
            r_squared: r_squared(ss_resid, response.ss_total),
            rmse: (ss_resid / n).sqrt(),
            mae: sum_abs / n,
            residual_mad: compute_mad(residuals),
        }
    }
}
