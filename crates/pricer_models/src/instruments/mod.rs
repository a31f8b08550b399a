//! Option definitions.
//!
//! # Types
//!
//! - [`OptionSpec`]: Validated strike, rate, maturity, spot and volatility
//! - [`OptionType`]: Call or put selector for closed-form pricers
//! - [`Payoff`]: Closed set of terminal payoffs (call, put, double digital)
//! - [`InstrumentError`]: Validation failures
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionSpec, OptionType, Payoff};
//!
//! let spec = OptionSpec::new(100.0_f64, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let payoff: Payoff<f64> = OptionType::Call.payoff(spec.strike());
//! assert_eq!(payoff.evaluate(120.0), 20.0);
//! ```

mod error;
mod params;
mod payoff;

pub use error::InstrumentError;
pub use params::OptionSpec;
pub use payoff::{OptionType, Payoff};
