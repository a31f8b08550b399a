//! Instrument error types.
//!
//! This module provides structured error handling for option
//! construction and payoff definition.

use pricer_core::types::ErrorCategory;
use thiserror::Error;

/// Instrument-related errors.
///
/// Every variant is an [`ErrorCategory::InvalidDomain`] failure: the
/// supplied contract terms or market inputs are outside their valid range.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidMaturity`: Time to maturity is negative
/// - `InvalidVolatility`: Volatility is negative
/// - `NonFinite`: A field is NaN or infinite
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid maturity (negative).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A field is NaN or infinite.
    #[error("Non-finite {field}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl InstrumentError {
    /// Returns the failure class of this error.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::InvalidDomain
    }
}
