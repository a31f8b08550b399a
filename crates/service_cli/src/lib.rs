//! # optpricer service layer
//!
//! Command-line front end over the pricer layers:
//!
//! - `vanilla`: Black-Scholes prices and Greeks
//! - `asian`: Monte Carlo Asian options, checked against the geometric closed form
//! - `implied-vol`: implied volatility by Newton-Raphson, bisection, or both
//!
//! Configuration is read from TOML, `OPTPRICER_*` environment variables and
//! command-line flags, in increasing order of precedence.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};
