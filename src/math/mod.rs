//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numeric building blocks with no estimator-specific logic:
//! - Order statistics (median, MAD)
//! - Deviation sums with a SIMD path for `f64`
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median and Median Absolute Deviation.
pub mod median;

/// Deviation sums for goodness-of-fit statistics.
pub mod reduce;
