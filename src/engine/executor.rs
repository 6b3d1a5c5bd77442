//! Execution engine for Theil-Sen fits.
//!
//! ## Purpose
//!
//! This module drives a validated fit: it walks the predictor columns, runs
//! the per-column estimator with a recycled buffer, evaluates the optional
//! statistics and assembles the [`TheilSenResult`].
//!
//! ## Design notes
//!
//! * **Column independence**: Columns share only the response vector, so they can be
//!   solved in any order. With the `parallel` feature, rayon distributes them with one
//!   buffer per worker; results are collected in column order.
//! * **Structured warnings**: Degenerate columns are reported on the result. A `log`
//!   record is also emitted for hosts that install a logger.
//!
//! ## Invariants
//!
//! * Sequential and parallel execution return identical results.
//! * A degenerate column never affects its siblings.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algorithms::estimator::{ColumnFit, fit_column};
use crate::engine::output::{ColumnWarning, TheilSenResult, WarningKind};
use crate::evaluation::diagnostics::{Diagnostics, ResponseSummary, compute_residuals};
use crate::math::reduce::FloatReduce;
use crate::primitives::buffer::ColumnBuffer;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// Configuration
// ============================================================================

/// Options for a single execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TheilSenConfig {
    /// Fill `TheilSenResult::r_squared`.
    pub compute_r_squared: bool,

    /// Fill `TheilSenResult::diagnostics`.
    pub return_diagnostics: bool,

    /// Fill `TheilSenResult::residuals`.
    pub compute_residuals: bool,

    /// Solve columns on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl TheilSenConfig {
    /// Whether any statistic needs the response summary.
    #[inline]
    fn needs_response_summary(&self) -> bool {
        self.compute_r_squared || self.return_diagnostics
    }
}

/// Everything computed for one predictor column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOutput<T> {
    /// Coefficients and counts.
    pub fit: ColumnFit<T>,

    /// Diagnostics, when R² or diagnostics were requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Residuals in row order (NaN for excluded rows), when requested.
    pub residuals: Option<Vec<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the estimator over every predictor column.
pub struct TheilSenExecutor;

impl TheilSenExecutor {
    /// Fit every column of `design` against `y`.
    ///
    /// Inputs must already be validated.
    pub fn run<T>(design: DesignMatrix<'_, T>, y: &[T], config: &TheilSenConfig) -> TheilSenResult<T>
    where
        T: FloatReduce + Debug + Send + Sync,
    {
        let response = if config.needs_response_summary() {
            Some(ResponseSummary::compute(y))
        } else {
            None
        };

        let outputs = Self::fit_columns(design, y, config, response.as_ref());
        let result = Self::assemble(design.n_rows(), outputs, config);

        log::debug!(
            "theil-sen: fitted {} predictor column(s) over {} observations, {} warning(s)",
            result.n_predictors,
            result.n_observations,
            result.warnings.len()
        );

        result
    }

    /// Fit a single column using a caller-owned buffer.
    pub fn fit_one<T>(
        design: &DesignMatrix<'_, T>,
        col: usize,
        y: &[T],
        config: &TheilSenConfig,
        response: Option<&ResponseSummary<T>>,
        buffer: &mut ColumnBuffer<T>,
    ) -> ColumnOutput<T>
    where
        T: FloatReduce,
    {
        let fit = fit_column(design.column(col), y, buffer);

        if fit.is_degenerate() {
            log::warn!(
                "theil-sen: predictor column {} is degenerate ({} usable observations, no pair with distinct x); coefficients are NaN",
                col,
                fit.usable_observations
            );
            return ColumnOutput {
                fit,
                diagnostics: response.map(|_| Diagnostics::nan()),
                residuals: config
                    .compute_residuals
                    .then(|| vec![T::nan(); design.n_rows()]),
            };
        }

        if response.is_none() && !config.compute_residuals {
            return ColumnOutput {
                fit,
                diagnostics: None,
                residuals: None,
            };
        }

        compute_residuals(&fit, buffer);

        let residuals = config.compute_residuals.then(|| {
            let mut column = vec![T::nan(); design.n_rows()];
            for (&row, &r) in buffer.rows.iter().zip(buffer.scratch.iter()) {
                column[row] = r;
            }
            column
        });

        let diagnostics =
            response.map(|summary| Diagnostics::from_residuals(&mut buffer.scratch, summary));

        ColumnOutput {
            fit,
            diagnostics,
            residuals,
        }
    }

    /// Fit all columns, sequentially or on the rayon pool.
    fn fit_columns<T>(
        design: DesignMatrix<'_, T>,
        y: &[T],
        config: &TheilSenConfig,
        response: Option<&ResponseSummary<T>>,
    ) -> Vec<ColumnOutput<T>>
    where
        T: FloatReduce + Debug + Send + Sync,
    {
        let n = design.n_rows();

        #[cfg(feature = "parallel")]
        if config.parallel {
            return (0..design.n_cols())
                .into_par_iter()
                .map_init(
                    || ColumnBuffer::new(n),
                    |buffer, col| Self::fit_one(&design, col, y, config, response, buffer),
                )
                .collect();
        }

        let mut buffer = ColumnBuffer::new(n);
        (0..design.n_cols())
            .map(|col| Self::fit_one(&design, col, y, config, response, &mut buffer))
            .collect()
    }

    /// Gather per-column outputs into the public result.
    fn assemble<T: FloatReduce>(
        n_rows: usize,
        outputs: Vec<ColumnOutput<T>>,
        config: &TheilSenConfig,
    ) -> TheilSenResult<T> {
        let p = outputs.len();

        let mut intercepts = Vec::with_capacity(p);
        let mut slopes = Vec::with_capacity(p);
        let mut usable_observations = Vec::with_capacity(p);
        let mut valid_pairs = Vec::with_capacity(p);
        let mut warnings = Vec::new();
        let mut diagnostics = Vec::with_capacity(p);
        let mut residuals = if config.compute_residuals {
            vec![T::nan(); n_rows * p]
        } else {
            Vec::new()
        };

        for (col, output) in outputs.into_iter().enumerate() {
            let fit = output.fit;
            intercepts.push(fit.intercept);
            slopes.push(fit.slope);
            usable_observations.push(fit.usable_observations);
            valid_pairs.push(fit.valid_pairs);

            if fit.is_degenerate() {
                warnings.push(ColumnWarning {
                    column: col,
                    kind: WarningKind::Degenerate {
                        usable_observations: fit.usable_observations,
                    },
                });
            }

            if let Some(d) = output.diagnostics {
                diagnostics.push(d);
            }

            if let Some(column) = output.residuals {
                for (row, r) in column.into_iter().enumerate() {
                    residuals[row * p + col] = r;
                }
            }
        }

        let r_squared = config
            .compute_r_squared
            .then(|| diagnostics.iter().map(|d| d.r_squared).collect());

        TheilSenResult {
            n_observations: n_rows,
            n_predictors: p,
            intercepts,
            slopes,
            r_squared,
            diagnostics: config.return_diagnostics.then_some(diagnostics),
            residuals: config.compute_residuals.then_some(residuals),
            usable_observations,
            valid_pairs,
            warnings,
        }
    }
}
