//! # Pricer Models (L2: Business Logic)
//!
//! Option definitions, payoff functions, and closed-form models.
//!
//! This crate provides:
//! - Option terms with validation (`instruments::OptionSpec`)
//! - Payoff functions: call, put and double digital (`instruments::Payoff`)
//! - Black-Scholes prices and Greeks (`analytical::BlackScholes`)
//! - Implied volatility extraction (`analytical::ImpliedVolatility`)
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs** for static dispatch
//! - **Validated construction**: invalid terms never reach a pricer
//! - **Builder pattern** for solver settings with sensible defaults
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{BlackScholes, ImpliedVolatility};
//! use pricer_models::instruments::{OptionSpec, OptionType};
//!
//! let spec = OptionSpec::new(100.0_f64, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let model = BlackScholes::new(spec);
//! let call = model.price(OptionType::Call);
//!
//! let implied = ImpliedVolatility::default()
//!     .bisection(&spec, OptionType::Call, call)
//!     .unwrap();
//! assert!((implied.root - 0.2).abs() < 1e-8);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
