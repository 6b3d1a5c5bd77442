//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental data structures shared by every other layer:
//! - The crate error type
//! - Zero-copy predictor matrix views
//! - Reusable per-column scratch buffers

/// Error types.
pub mod errors;

/// Predictor matrix and column views.
pub mod matrix;

/// Reusable scratch buffers.
pub mod buffer;
