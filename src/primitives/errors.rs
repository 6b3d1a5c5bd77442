//! Error types for Theil-Sen estimation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Errors are raised before any computation starts,
//! so a failed call never yields partial coefficients.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand on top of `core::fmt`.
//! * **Comparable**: Errors derive `Clone` and `PartialEq` so tests can match them directly.
//! * **std interop**: `std::error::Error` is implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * Degenerate columns are not errors; they are reported as warnings on the result.

use core::fmt;

/// Errors raised while validating or configuring a Theil-Sen fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheilSenError {
    /// The predictor matrix or the response vector is empty.
    EmptyInput,

    /// The predictor matrix and the response vector disagree on the number of rows.
    MismatchedInputs {
        /// Number of rows implied by the predictor matrix.
        x_rows: usize,
        /// Length of the response vector.
        y_len: usize,
    },

    /// Not enough observations to form a single pair.
    TooFewPoints {
        /// Observations supplied.
        got: usize,
        /// Observations required.
        min: usize,
    },

    /// The number of predictor columns is zero.
    InvalidPredictors(usize),

    /// A flat predictor matrix whose length is not a multiple of the column count.
    RaggedMatrix {
        /// Length of the flat buffer.
        len: usize,
        /// Declared number of predictor columns.
        predictors: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for TheilSenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_rows, y_len } => write!(
                f,
                "Shape mismatch: x has {} rows, y has {} observations",
                x_rows, y_len
            ),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::InvalidPredictors(p) => {
                write!(f, "Invalid predictor count: {} (must be at least 1)", p)
            }
            Self::RaggedMatrix { len, predictors } => write!(
                f,
                "Ragged matrix: {} values cannot be split into rows of {} predictors",
                len, predictors
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TheilSenError {}
