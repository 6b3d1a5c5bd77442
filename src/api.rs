//! High-level API for Theil-Sen estimation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! configures what a fit returns, and the estimator it builds.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every setter is optional; defaults fit one predictor and return
//!   coefficients only.
//! * **Validated**: Configuration is validated in `build()`, data in `fit()`.
//! * **Type-Safe**: Generic over `Float` types (`f32`, `f64`).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TheilSenBuilder`] via `TheilSen::new()`.
//! 2. Chain configuration methods (`.predictors()`, `.return_r_squared()`, etc.).
//! 3. Call `.build()` to get a [`TheilSenEstimator`], then `.fit(&x, &y)`.

use core::fmt::Debug;
use core::marker::PhantomData;

use nalgebra::{DMatrix, DVector, Scalar};

use crate::engine::executor::TheilSenExecutor;
use crate::engine::validator::Validator;
use crate::math::reduce::FloatReduce;
use crate::primitives::matrix::{DesignMatrix, Layout};

// Publicly re-exported types
pub use crate::engine::executor::TheilSenConfig;
pub use crate::engine::output::{ColumnWarning, TheilSenResult, WarningKind};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::TheilSenError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Theil-Sen fit.
#[derive(Debug, Clone)]
pub struct TheilSenBuilder<T> {
    /// Number of predictor columns in the row-major `x` buffer (default: 1).
    pub predictors: Option<usize>,

    /// Return the ordinary R² of each robust line.
    pub compute_r_squared: Option<bool>,

    /// Return RMSE, MAE, residual MAD and R² per column.
    pub return_diagnostics: Option<bool>,

    /// Return the `n x p` residual matrix.
    pub compute_residuals: Option<bool>,

    /// Solve columns in parallel (requires the `parallel` feature).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T> Default for TheilSenBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TheilSenBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            predictors: None,
            compute_r_squared: None,
            return_diagnostics: None,
            compute_residuals: None,
            parallel: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the number of predictor columns in `x`.
    pub fn predictors(mut self, predictors: usize) -> Self {
        if self.predictors.is_some() {
            self.duplicate_param = Some("predictors");
        }
        self.predictors = Some(predictors);
        self
    }

    /// Include the ordinary R² of each robust line in the output.
    pub fn return_r_squared(mut self) -> Self {
        self.compute_r_squared = Some(true);
        self
    }

    /// Include per-column diagnostics (R², RMSE, MAE, residual MAD) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Include residuals in the output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Solve predictor columns on the rayon thread pool.
    ///
    /// Without the `parallel` feature this is accepted and ignored.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<TheilSenEstimator<T>, TheilSenError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let predictors = self.predictors.unwrap_or(1);
        Validator::validate_predictors(predictors)?;

        Ok(TheilSenEstimator {
            predictors,
            config: TheilSenConfig {
                compute_r_squared: self.compute_r_squared.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
                compute_residuals: self.compute_residuals.unwrap_or(false),
                parallel: self.parallel.unwrap_or(false),
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// A configured Theil-Sen estimator.
///
/// The estimator holds no data and can be reused for any number of fits.
#[derive(Debug, Clone)]
pub struct TheilSenEstimator<T> {
    predictors: usize,
    config: TheilSenConfig,
    _marker: PhantomData<T>,
}

impl<T> TheilSenEstimator<T> {
    /// Number of predictor columns expected by [`fit`](Self::fit).
    pub fn predictors(&self) -> usize {
        self.predictors
    }

    /// Execution options.
    pub fn config(&self) -> &TheilSenConfig {
        &self.config
    }
}

impl<T: FloatReduce + Debug + Send + Sync> TheilSenEstimator<T> {
    /// Fit every predictor column against `y`.
    ///
    /// `x` is a row-major `n x p` matrix (`p` set by `.predictors()`), `y` has
    /// `n` entries. NaN or an infinite value in either input marks a missing value.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<TheilSenResult<T>, TheilSenError> {
        let n = Validator::validate_shape(x.len(), y.len(), self.predictors)?;
        let design = DesignMatrix::new(x, n, self.predictors, Layout::RowMajor);

        Ok(TheilSenExecutor::run(design, y, &self.config))
    }
}

impl<T: FloatReduce + Scalar + Send + Sync> TheilSenEstimator<T> {
    /// Fit every column of an nalgebra matrix against `y`.
    ///
    /// The number of predictors is taken from `x.ncols()`; the builder's
    /// `.predictors()` setting does not apply.
    pub fn fit_matrix(
        &self,
        x: &DMatrix<T>,
        y: &DVector<T>,
    ) -> Result<TheilSenResult<T>, TheilSenError> {
        let n = Validator::validate_shape(x.len(), y.len(), x.ncols())?;
        let design = DesignMatrix::new(x.as_slice(), n, x.ncols(), Layout::ColumnMajor);

        Ok(TheilSenExecutor::run(design, y.as_slice(), &self.config))
    }
}
