//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The Theil-Sen estimator itself:
//! - Pairwise slope generation with missing-value and degenerate-pair exclusion
//! - Median reduction to per-column intercept and slope

/// Pairwise slope generation.
pub mod pairwise;

/// Per-column coefficient estimation.
pub mod estimator;
