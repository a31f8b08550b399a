//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for the distribution functions and solvers
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ErrorCategory`], [`DistributionError`], [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{DistributionError, ErrorCategory, SolverError};
