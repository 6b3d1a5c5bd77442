//! Layer 5: Engine
//!
//! # Purpose
//!
//! Orchestration of a fit:
//! - Fail-fast input and configuration validation
//! - The column loop (sequential or rayon) and result assembly
//! - The public result type and its warnings

/// Input and configuration validation.
pub mod validator;

/// Column loop and result assembly.
pub mod executor;

/// Result and warning types.
pub mod output;
