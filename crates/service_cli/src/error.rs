//! CLI error type.

use pricer_core::types::ErrorCategory;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::mc::{ConfigError as McConfigError, McError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `optpricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Option parameters rejected.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Closed-form pricing or implied volatility failed.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Monte Carlo settings rejected.
    #[error(transparent)]
    McConfig(#[from] McConfigError),

    /// Monte Carlo run failed.
    #[error(transparent)]
    MonteCarlo(#[from] McError),
}

impl CliError {
    /// Failure class for pricing errors, `None` for CLI-level problems.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            CliError::Instrument(err) => Some(err.category()),
            CliError::Analytical(err) => Some(err.category()),
            CliError::McConfig(_) => Some(ErrorCategory::InvalidDomain),
            CliError::MonteCarlo(err) => Some(err.category()),
            CliError::FileNotFound(_) | CliError::Config(_) => None,
        }
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
