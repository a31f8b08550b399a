//! Error types for pricing and numerical operations.
//!
//! This module provides:
//! - `ErrorCategory`: The four failure classes every numerical error maps onto
//! - `DistributionError`: Errors from the normal distribution functions
//! - `SolverError`: Errors from root-finding solvers
//!
//! Pure numerical components fail fast with one of these types instead of
//! returning `NaN` or `Inf`. Callers decide whether to widen a bracket,
//! switch solver, or surface the failure.

use std::fmt;
use thiserror::Error;

/// Failure class shared by all numerical errors.
///
/// # Variants
/// - `InvalidDomain`: argument outside the function's domain, malformed option
/// - `InvalidBracket`: root-finder bracket does not straddle the target
/// - `NonConvergence`: iteration cap reached or iterate left the search interval
/// - `NumericDegeneracy`: near-zero derivative or other degenerate arithmetic
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorCategory, SolverError};
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, last: 0.3 };
/// assert_eq!(err.category(), ErrorCategory::NonConvergence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Argument outside the valid domain.
    InvalidDomain,
    /// Bracket does not contain the root.
    InvalidBracket,
    /// Solver failed to converge.
    NonConvergence,
    /// Degenerate numerics (e.g. vanishing derivative).
    NumericDegeneracy,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::InvalidDomain => "invalid domain",
            ErrorCategory::InvalidBracket => "invalid bracket",
            ErrorCategory::NonConvergence => "non-convergence",
            ErrorCategory::NumericDegeneracy => "numeric degeneracy",
        };
        f.write_str(name)
    }
}

/// Errors from the standard normal distribution functions.
///
/// # Examples
/// ```
/// use pricer_core::types::DistributionError;
///
/// let err = DistributionError::ProbabilityOutOfRange { p: 1.0 };
/// assert!(format!("{}", err).contains("(0, 1)"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Inverse CDF argument outside the open interval (0, 1).
    #[error("Probability {p} outside the open interval (0, 1)")]
    ProbabilityOutOfRange {
        /// The rejected probability
        p: f64,
    },
}

impl DistributionError {
    /// Returns the failure class of this error.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::InvalidDomain
    }
}

/// Root-finding solver errors.
///
/// # Variants
/// - `InvalidBracket`: the target is not strictly inside `[f(lower), f(upper)]`
/// - `MaxIterationsExceeded`: iteration cap reached without meeting tolerance
/// - `LeftBracket`: Newton iterate left the admissible interval
/// - `DerivativeNearZero`: Newton step would divide by a vanishing derivative
/// - `NumericalInstability`: non-finite function value or iterate
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, last: 0.25 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Bracket does not straddle the target value.
    #[error(
        "Invalid bracket [{lower}, {upper}]: f(lower) = {f_lower}, f(upper) = {f_upper}, target = {target}"
    )]
    InvalidBracket {
        /// Lower bracket endpoint
        lower: f64,
        /// Upper bracket endpoint
        upper: f64,
        /// Function value at the lower endpoint
        f_lower: f64,
        /// Function value at the upper endpoint
        f_upper: f64,
        /// Target value
        target: f64,
    },

    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations (last estimate {last})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Last iterate before giving up
        last: f64,
    },

    /// Iterate left the admissible interval.
    #[error("Iterate x = {x} left the interval [{lower}, {upper}]")]
    LeftBracket {
        /// The offending iterate
        x: f64,
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl SolverError {
    /// Returns the failure class of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolverError::InvalidBracket { .. } => ErrorCategory::InvalidBracket,
            SolverError::MaxIterationsExceeded { .. } | SolverError::LeftBracket { .. } => {
                ErrorCategory::NonConvergence
            }
            SolverError::DerivativeNearZero { .. } | SolverError::NumericalInstability(_) => {
                ErrorCategory::NumericDegeneracy
            }
        }
    }

    /// Whether a bracketing method could still succeed after this failure.
    ///
    /// True for Newton divergence and degeneracy, false for bracket errors.
    pub fn is_recoverable_by_bisection(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::NonConvergence | ErrorCategory::NumericDegeneracy
        )
    }
}
