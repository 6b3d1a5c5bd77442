//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Post-fit statistics that are not part of the robust estimate itself:
//! R², RMSE, MAE and residual MAD for each fitted column.

/// Goodness-of-fit diagnostics.
pub mod diagnostics;
