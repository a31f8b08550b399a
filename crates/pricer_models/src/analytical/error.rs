//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from closed-form pricing and implied volatility

use pricer_core::types::{ErrorCategory, SolverError};
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// # Variants
/// - `Instrument`: Option terms failed validation
/// - `InvalidPrice`: Observed option price is negative or non-finite
/// - `InvalidVolatilityBracket`: Implied-volatility search interval is malformed
/// - `Solver`: Root finder failure while inverting price to volatility
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidPrice { price: -1.0 };
/// assert!(format!("{}", err).contains("price"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option terms failed validation.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Observed option price is negative or non-finite.
    #[error("Invalid option price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// Volatility search interval is not `0 < lower < upper`.
    #[error("Invalid volatility bracket [{lower}, {upper}]")]
    InvalidVolatilityBracket {
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Root finder failure.
    #[error("Implied volatility solver failed: {0}")]
    Solver(#[from] SolverError),
}

impl AnalyticalError {
    /// Returns the failure class of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyticalError::Instrument(_)
            | AnalyticalError::InvalidPrice { .. }
            | AnalyticalError::InvalidVolatilityBracket { .. } => ErrorCategory::InvalidDomain,
            AnalyticalError::Solver(err) => err.category(),
        }
    }
}
