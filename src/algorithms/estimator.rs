//! Per-column Theil-Sen fit.
//!
//! ## Purpose
//!
//! This module reduces the pairwise slopes of one predictor column to the
//! Theil-Sen coefficients:
//!
//! ```text
//! b1 = median{ (y_i - y_j) / (x_i - x_j) : i < j, x_i != x_j }
//! b0 = median{ y_i - b1 * x_i }
//! ```
//!
//! ## Design notes
//!
//! * **Independent columns**: A fit only reads its own column and the shared response.
//! * **Buffer reuse**: All scratch space comes from a caller-owned `ColumnBuffer`.
//! * **Degenerate columns**: With no valid pair both coefficients are NaN; the caller
//!   decides how to report it.
//!
//! ## Invariants
//!
//! * After `fit_column` returns, `buffer.xs`, `buffer.ys` and `buffer.rows` still hold the
//!   usable observations of the column, so diagnostics can be computed without a second pass.
//!
//! ## Non-goals
//!
//! * No joint fit across columns.
//! * No confidence intervals for the slope.

use num_traits::Float;

use crate::algorithms::pairwise::{collect_pairwise_slopes, compact_observations};
use crate::math::median::median_inplace;
use crate::primitives::buffer::ColumnBuffer;
use crate::primitives::matrix::Column;

/// Coefficients of a single predictor column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFit<T> {
    /// Median intercept `b0`.
    pub intercept: T,

    /// Median pairwise slope `b1`.
    pub slope: T,

    /// Observations with both a predictor and a response value.
    pub usable_observations: usize,

    /// Pairs that contributed a slope.
    pub valid_pairs: usize,
}

impl<T: Float> ColumnFit<T> {
    /// Whether no pairwise slope could be formed for this column.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.valid_pairs == 0
    }

    /// Evaluate `b0 + b1 * x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

/// Fit one predictor column against the response.
pub fn fit_column<T: Float>(
    column: Column<'_, T>,
    y: &[T],
    buffer: &mut ColumnBuffer<T>,
) -> ColumnFit<T> {
    buffer.reset();

    let usable_observations = compact_observations(column, y, buffer);
    let valid_pairs = collect_pairwise_slopes(&buffer.xs, &buffer.ys, &mut buffer.slopes);

    if valid_pairs == 0 {
        return ColumnFit {
            intercept: T::nan(),
            slope: T::nan(),
            usable_observations,
            valid_pairs,
        };
    }

    let slope = median_inplace(&mut buffer.slopes);

    buffer.scratch.ensure_capacity(usable_observations);
    buffer.scratch.extend(
        buffer
            .xs
            .iter()
            .zip(buffer.ys.iter())
            .map(|(&x, &y)| y - slope * x),
    );
    let intercept = median_inplace(&mut buffer.scratch);

    ColumnFit {
        intercept,
        slope,
        usable_observations,
        valid_pairs,
    }
}
