//! Result of a Theil-Sen fit.
//!
//! ## Purpose
//!
//! `TheilSenResult` carries the per-column coefficients, the optional R²,
//! diagnostics and residuals, and the structured warnings raised for
//! degenerate columns. It can evaluate the fitted lines on new data and
//! renders a readable summary through `Display`.
//!
//! ## Invariants
//!
//! * `intercepts`, `slopes`, `usable_observations` and `valid_pairs` have one entry per
//!   predictor column, in input column order.
//! * A column appears in `warnings` exactly when its coefficients are NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{self, Display, Formatter};

use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::TheilSenError;

// ============================================================================
// Warnings
// ============================================================================

/// Reason a column produced no coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// No pair of usable observations has distinct predictor values
    /// (for example, a constant column or fewer than two usable rows).
    Degenerate {
        /// Observations with both a predictor and a response value.
        usable_observations: usize,
    },
}

/// A non-fatal, per-column diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWarning {
    /// Index of the predictor column.
    pub column: usize,

    /// What went wrong.
    pub kind: WarningKind,
}

impl Display for ColumnWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Degenerate {
                usable_observations,
            } => write!(
                f,
                "predictor {}: degenerate input, no valid pairwise slope among {} usable observations",
                self.column, usable_observations
            ),
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Output of [`TheilSenEstimator::fit`](crate::api::TheilSenEstimator::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct TheilSenResult<T> {
    /// Number of observations (rows) in the input.
    pub n_observations: usize,

    /// Number of predictor columns.
    pub n_predictors: usize,

    /// Intercept `b0` per predictor column.
    pub intercepts: Vec<T>,

    /// Slope `b1` per predictor column.
    pub slopes: Vec<T>,

    /// Ordinary R² of each robust line, when requested.
    pub r_squared: Option<Vec<T>>,

    /// Fit diagnostics per column, when requested.
    pub diagnostics: Option<Vec<Diagnostics<T>>>,

    /// Residuals as an `n x p` row-major matrix, when requested.
    /// Excluded observations and degenerate columns hold NaN.
    pub residuals: Option<Vec<T>>,

    /// Observations usable in each column.
    pub usable_observations: Vec<usize>,

    /// Pairwise slopes that entered each slope median.
    pub valid_pairs: Vec<usize>,

    /// Non-fatal per-column diagnostics.
    pub warnings: Vec<ColumnWarning>,
}

impl<T: Float> TheilSenResult<T> {
    /// Coefficients as a `2 x p` row-major matrix: intercepts, then slopes.
    pub fn coefficients(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(2 * self.n_predictors);
        out.extend_from_slice(&self.intercepts);
        out.extend_from_slice(&self.slopes);
        out
    }

    /// `(intercept, slope)` of predictor column `col`.
    pub fn coefficient(&self, col: usize) -> Option<(T, T)> {
        Some((*self.intercepts.get(col)?, *self.slopes.get(col)?))
    }

    /// Whether any column raised a warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether predictor column `col` had no valid pairwise slope.
    pub fn is_degenerate(&self, col: usize) -> bool {
        self.warnings.iter().any(|w| w.column == col)
    }

    /// Evaluate every fitted line on a row-major `m x p` matrix.
    ///
    /// Returns an `m x p` row-major matrix whose entry `(i, c)` is
    /// `b0[c] + b1[c] * x[i, c]`. Missing inputs yield NaN.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, TheilSenError> {
        let p = self.n_predictors;
        if p == 0 {
            return Err(TheilSenError::InvalidPredictors(p));
        }
        if x.len() % p != 0 {
            return Err(TheilSenError::RaggedMatrix {
                len: x.len(),
                predictors: p,
            });
        }

        Ok(x.chunks_exact(p)
            .flat_map(|row| {
                row.iter()
                    .zip(self.intercepts.iter().zip(self.slopes.iter()))
                    .map(|(&xv, (&b0, &b1))| b0 + b1 * xv)
            })
            .collect())
    }
}

impl<T: Float + Scalar> TheilSenResult<T> {
    /// Coefficients as a `2 x p` nalgebra matrix (row 0 intercepts, row 1 slopes).
    pub fn coefficient_matrix(&self) -> DMatrix<T> {
        DMatrix::from_fn(2, self.n_predictors, |row, col| {
            if row == 0 {
                self.intercepts[col]
            } else {
                self.slopes[col]
            }
        })
    }
}

impl<T: Float + Display> Display for TheilSenResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.n_observations)?;
        writeln!(f, "  Predictors:   {}", self.n_predictors)?;
        writeln!(f)?;

        let r2 = self
            .r_squared
            .as_deref()
            .map(|r| r.to_vec())
            .or_else(|| {
                self.diagnostics
                    .as_ref()
                    .map(|d| d.iter().map(|d| d.r_squared).collect())
            });

        writeln!(f, "Coefficients:")?;
        if r2.is_some() {
            writeln!(
                f,
                "  {:>9} {:>12} {:>12} {:>12} {:>8}",
                "Predictor", "Intercept", "Slope", "R^2", "Pairs"
            )?;
            writeln!(f, "  {}", "-".repeat(57))?;
        } else {
            writeln!(
                f,
                "  {:>9} {:>12} {:>12} {:>8}",
                "Predictor", "Intercept", "Slope", "Pairs"
            )?;
            writeln!(f, "  {}", "-".repeat(44))?;
        }

        for col in 0..self.n_predictors {
            write!(
                f,
                "  {:>9} {:>12.6} {:>12.6}",
                col, self.intercepts[col], self.slopes[col]
            )?;
            if let Some(r2) = &r2 {
                write!(f, " {:>12.6}", r2[col])?;
            }
            writeln!(f, " {:>8}", self.valid_pairs[col])?;
        }

        if let Some(diagnostics) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            writeln!(
                f,
                "  {:>9} {:>12} {:>12} {:>12}",
                "Predictor", "RMSE", "MAE", "Resid MAD"
            )?;
            writeln!(f, "  {}", "-".repeat(48))?;
            for (col, d) in diagnostics.iter().enumerate() {
                writeln!(
                    f,
                    "  {:>9} {:>12.6} {:>12.6} {:>12.6}",
                    col, d.rmse, d.mae, d.residual_mad
                )?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  {}", warning)?;
            }
        }

        Ok(())
    }
}
