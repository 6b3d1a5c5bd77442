//! Pairwise slope generation.
//!
//! ## Purpose
//!
//! This module builds the set of slopes of the lines through every pair of
//! usable observations of one predictor column. It is the O(n^2) step of the
//! Theil-Sen estimator.
//!
//! ## Design notes
//!
//! * **Compaction first**: Rows with a missing predictor or response are dropped once,
//!   so the pair loop never tests for NaN.
//! * **Unordered pairs**: Only `i < j` is generated. The full ordered generation contains
//!   every value exactly twice, which leaves the median unchanged.
//! * **No infinities**: Pairs with equal predictor values are skipped before dividing, and a
//!   slope that overflows to infinity is dropped like any other non-finite slope.
//!
//! ## Key concepts
//!
//! * **Usable observation**: A row whose predictor and response values are both finite.
//!   NaN and infinite values are both treated as missing.
//! * **Degenerate pair**: Two observations sharing the same predictor value, or whose slope
//!   is not finite.
//!
//! ## Invariants
//!
//! * Every collected slope is finite.
//! * The number of collected slopes is at most `n * (n - 1) / 2`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::primitives::buffer::{ColumnBuffer, pair_count};
use crate::primitives::matrix::Column;

// ============================================================================
// Compaction
// ============================================================================

/// Copy the usable observations of `column` and `y` into `buffer`.
///
/// Fills `buffer.xs`, `buffer.ys` and `buffer.rows` (original row indices) and
/// returns the number of usable observations.
pub fn compact_observations<T: Float>(
    column: Column<'_, T>,
    y: &[T],
    buffer: &mut ColumnBuffer<T>,
) -> usize {
    let n = column.n_rows().min(y.len());
    buffer.xs.ensure_capacity(n);
    buffer.ys.ensure_capacity(n);
    buffer.rows.ensure_capacity(n);

    for (row, &y_val) in y.iter().enumerate().take(n) {
        let x_val = column.get(row);
        if x_val.is_finite() && y_val.is_finite() {
            buffer.xs.push(x_val);
            buffer.ys.push(y_val);
            buffer.rows.push(row);
        }
    }

    buffer.xs.len()
}

// ============================================================================
// Slope Collection
// ============================================================================

/// Append the slope of every non-degenerate pair of `(xs, ys)` to `slopes`.
///
/// ```text
/// slope(i, j) = (y_i - y_j) / (x_i - x_j),   i < j,  x_i != x_j
/// ```
///
/// Slopes that are not finite (for example `dy / dx` overflowing for a tiny `dx`)
/// are skipped.
///
/// Returns the number of slopes appended.
pub fn collect_pairwise_slopes<T: Float>(xs: &[T], ys: &[T], slopes: &mut Vec<T>) -> usize {
    let n = xs.len().min(ys.len());
    let before = slopes.len();
    slopes.reserve(pair_count(n));

    for i in 0..n {
        let (xi, yi) = (xs[i], ys[i]);
        for j in (i + 1)..n {
            let dx = xi - xs[j];
            if dx == T::zero() {
                continue;
            }
            let slope = (yi - ys[j]) / dx;
            if slope.is_finite() {
                slopes.push(slope);
            }
        }
    }

    slopes.len() - before
}
