//! Error types for the Monte Carlo engine.
//!
//! [`ConfigError`] covers construction-time validation, [`McError`] covers
//! failures while pricing.

use pricer_core::types::ErrorCategory;
use thiserror::Error;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Configuration error for Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Chunk size of zero.
    #[error("Invalid chunk size {0}: must be positive")]
    InvalidChunkSize(usize),

    /// Neither an explicit seed nor clock seeding was requested.
    #[error("Missing seed: set an explicit seed or opt in to clock seeding")]
    MissingSeed,

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Runtime error from a Monte Carlo pricing call.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum McError {
    /// Pricer configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Run stopped by a cancellation token or deadline.
    #[error("Simulation cancelled after {completed_paths} paths")]
    Cancelled {
        /// Paths fully simulated before the stop was observed.
        completed_paths: usize,
    },

    /// Estimate is not a finite number.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl McError {
    /// Returns the failure class of this error.
    ///
    /// A cancelled run is reported as [`ErrorCategory::NonConvergence`]: no
    /// estimate was produced.
    pub fn category(&self) -> ErrorCategory {
        match self {
            McError::Config(_) => ErrorCategory::InvalidDomain,
            McError::Cancelled { .. } => ErrorCategory::NonConvergence,
            McError::NumericalInstability(_) => ErrorCategory::NumericDegeneracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));

        let err = ConfigError::InvalidParameter {
            name: "volatility",
            value: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            McError::from(ConfigError::MissingSeed).category(),
            ErrorCategory::InvalidDomain
        );
        assert_eq!(
            McError::Cancelled { completed_paths: 8 }.category(),
            ErrorCategory::NonConvergence
        );
        assert_eq!(
            McError::NumericalInstability("NaN".into()).category(),
            ErrorCategory::NumericDegeneracy
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = McError::from(ConfigError::InvalidChunkSize(0));
        assert_eq!(err.to_string(), ConfigError::InvalidChunkSize(0).to_string());
        assert!(err.to_string().contains("chunk size"));
    }
}
