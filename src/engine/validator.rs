//! Input validation for Theil-Sen configuration and data.
//!
//! ## Purpose
//!
//! This module checks the shape of the predictor matrix and response vector
//! and the builder configuration. Every check runs before any computation so
//! a failed call never produces partial results.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Shape only**: Values are never inspected. NaN and infinite entries are treated as
//!   missing by the estimator, per column.
//!
//! ## Invariants
//!
//! * A validated input has `p >= 1` columns and `n >= 2` rows.
//!
//! ## Non-goals
//!
//! * This module does not drop, reorder or repair input values.

use crate::primitives::errors::TheilSenError;

/// Minimum number of observations needed to form one pair.
pub const MIN_OBSERVATIONS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Theil-Sen configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate the shape of a flat predictor buffer against the response length.
    ///
    /// Returns the number of observations on success.
    pub fn validate_shape(
        x_len: usize,
        y_len: usize,
        predictors: usize,
    ) -> Result<usize, TheilSenError> {
        Self::validate_predictors(predictors)?;

        // Check 1: Non-empty arrays
        if x_len == 0 || y_len == 0 {
            return Err(TheilSenError::EmptyInput);
        }

        // Check 2: Whole rows
        if x_len % predictors != 0 {
            return Err(TheilSenError::RaggedMatrix {
                len: x_len,
                predictors,
            });
        }

        // Check 3: Matching row counts
        let x_rows = x_len / predictors;
        if x_rows != y_len {
            return Err(TheilSenError::MismatchedInputs { x_rows, y_len });
        }

        // Check 4: At least one pair
        if y_len < MIN_OBSERVATIONS {
            return Err(TheilSenError::TooFewPoints {
                got: y_len,
                min: MIN_OBSERVATIONS,
            });
        }

        Ok(y_len)
    }

    /// Validate the number of predictor columns.
    pub fn validate_predictors(predictors: usize) -> Result<(), TheilSenError> {
        if predictors == 0 {
            return Err(TheilSenError::InvalidPredictors(predictors));
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Report a parameter that was set more than once on the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TheilSenError> {
        if let Some(parameter) = duplicate_param {
            return Err(TheilSenError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
