//! # Theil-Sen: Robust Linear Regression for Rust
//!
//! A Theil-Sen estimator with NaN-aware missing-value handling, structured
//! diagnostics for degenerate data, and `no_std` support.
//!
//! ## What is Theil-Sen?
//!
//! The Theil-Sen estimator fits a straight line `y = b0 + b1 * x` without least
//! squares. The slope is the median of the slopes of the lines through every
//! pair of observations, and the intercept is the median of `y_i - b1 * x_i`:
//!
//! ```text
//! b1 = median{ (y_i - y_j) / (x_i - x_j) : i < j, x_i != x_j }
//! b0 = median{ y_i - b1 * x_i }
//! ```
//!
//! Because both steps are medians, up to ~29% of the observations can be
//! arbitrarily corrupted before the slope breaks down.
//!
//! **Key properties:**
//! - Robust to outliers in the response
//! - Exact for noiseless linear data
//! - Equivariant under scaling and shifting of the response
//! - Independent of row order
//!
//! **Multiple predictors** are handled as independent simple regressions: each
//! predictor column gets its own slope and intercept against the shared
//! response. This is not a joint multiple regression.
//!
//! ## Quick Start
//!
//! ```rust
//! use theilsen_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![1.0, 3.0, 5.0, 7.0, 40.0, 11.0]; // y[4] is an outlier
//!
//! let model = TheilSen::new()
//!     .return_r_squared() // ordinary R² of the robust line
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! assert_eq!(result.slopes[0], 2.0);
//! assert_eq!(result.intercepts[0], 1.0);
//! println!("{}", result);
//! # Result::<(), TheilSenError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Observations: 6
//!   Predictors:   1
//!
//! Coefficients:
//!   Predictor    Intercept        Slope          R^2    Pairs
//!   ---------------------------------------------------------
//!           0     1.000000     2.000000     0.090678       15
//! ```
//!
//! ## Several Predictors and Missing Values
//!
//! `x` is a row-major `n x p` matrix. NaN (or an infinite value) marks a missing
//! value: every pair that touches it is dropped for that column only.
//!
//! ```rust
//! use theilsen_rs::prelude::*;
//!
//! // Two predictors, four observations
//! let x = vec![
//!     0.0, 10.0,
//!     1.0, f64::NAN, // missing in column 1 only
//!     2.0, 30.0,
//!     3.0, 40.0,
//! ];
//! let y = vec![0.0, 2.0, 4.0, 6.0];
//!
//! let result = TheilSen::new().predictors(2).build()?.fit(&x, &y)?;
//!
//! assert_eq!(result.coefficient(0), Some((0.0, 2.0)));
//! assert_eq!(result.usable_observations, vec![4, 3]);
//! # Result::<(), TheilSenError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<TheilSenResult<T>, TheilSenError>`.
//!
//! - **`Err(TheilSenError)`**: Shape problems (mismatched rows, fewer than two
//!   observations, no predictors). Raised before any work.
//! - **`Ok(TheilSenResult<T>)`**: Coefficients for every column. Columns with no
//!   valid pair (for example a constant predictor) get NaN coefficients and a
//!   [`ColumnWarning`](prelude::ColumnWarning) in `result.warnings`; the other
//!   columns are unaffected.
//!
//! ```rust
//! use theilsen_rs::prelude::*;
//!
//! let x = vec![1.0f64; 5];
//! let y = vec![3.0, 1.0, 4.0, 1.0, 5.0];
//!
//! let result = TheilSen::new().build()?.fit(&x, &y)?;
//!
//! assert!(result.slopes[0].is_nan());
//! assert!(result.intercepts[0].is_nan());
//! assert!(result.has_warnings());
//! # Result::<(), TheilSenError>::Ok(())
//! ```
//!
//! ## Builder Options
//!
//! ```rust
//! use theilsen_rs::prelude::*;
//!
//! let model = TheilSen::new()
//!     .predictors(3)          // columns in the row-major x buffer
//!     .return_r_squared()     // R² per column
//!     .return_diagnostics()   // R², RMSE, MAE, residual MAD per column
//!     .return_residuals()     // n x p residual matrix
//!     .parallel(true)         // rayon over columns (`parallel` feature)
//!     .build()?;
//! # let _ = model.fit(&[0.0f64, 1.0, 2.0, 1.0, 2.0, 3.0], &[1.0, 2.0]);
//! # Result::<(), TheilSenError>::Ok(())
//! ```
//!
//! Setting the same option twice is rejected by `build()` with
//! `TheilSenError::DuplicateParameter`.
//!
//! ## nalgebra Interop
//!
//! ```rust
//! use nalgebra::{DMatrix, DVector};
//! use theilsen_rs::prelude::*;
//!
//! let x = DMatrix::from_row_slice(4, 1, &[0.0, 1.0, 2.0, 3.0]);
//! let y = DVector::from_vec(vec![1.0, 4.0, 7.0, 10.0]);
//!
//! let result = TheilSen::new().build()?.fit_matrix(&x, &y)?;
//! let coefs = result.coefficient_matrix(); // 2 x p
//!
//! assert_eq!(coefs[(0, 0)], 1.0);
//! assert_eq!(coefs[(1, 0)], 3.0);
//! # Result::<(), TheilSenError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! theilsen-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Cargo Features
//!
//! - **`std`** (default): standard library support and `std::error::Error`.
//! - **`parallel`**: solve predictor columns on the rayon thread pool.
//! - **`dev`**: expose internal modules for white-box testing.
//!
//! ## Complexity
//!
//! Each column costs `O(n^2)` time for the pairwise slopes plus `O(n^2)`
//! expected time for the quickselect median. Scratch memory is `O(n^2)` per
//! worker and is reused across columns.
//!
//! ## References
//!
//! - Theil, H. (1950). "A rank-invariant method of linear and polynomial regression analysis"
//! - Sen, P. K. (1968). "Estimates of the regression coefficient based on Kendall's tau"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, zero-copy predictor matrix views and the
// reusable per-column scratch buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the quickselect median, MAD, and deviation sums with a SIMD path.
mod math;

// Layer 3: Algorithms - the Theil-Sen estimator.
//
// Contains pairwise slope generation and the per-column median reduction.
mod algorithms;

// Layer 4: Evaluation - post-fit statistics.
//
// Contains R², RMSE, MAE and residual MAD of the robust line.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the column loop and result assembly.
mod engine;

// High-level fluent API.
//
// Provides the `TheilSen` builder and the estimator it builds.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard Theil-Sen prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use theilsen_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ColumnWarning, Diagnostics, TheilSenBuilder as TheilSen, TheilSenError,
        TheilSenEstimator, TheilSenResult, WarningKind,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
