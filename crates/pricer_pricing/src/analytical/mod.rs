//! Analytical (closed-form) solutions for option pricing.
//!
//! This module provides analytical formulas for path-dependent options
//! to verify Monte Carlo pricing accuracy.
//!
//! # Available Solutions
//!
//! - **Geometric Average Asian Options**: discrete-fixing closed form
//!
//! # Usage
//!
//! ```rust
//! use pricer_models::instruments::{OptionSpec, OptionType};
//! use pricer_pricing::analytical::GeometricAsian;
//!
//! let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let asian = GeometricAsian::new(spec, 12).unwrap();
//!
//! let call = asian.price(OptionType::Call);
//! let put = asian.price(OptionType::Put);
//! assert!(call > 0.0 && put > 0.0);
//! ```

pub mod asian;

pub use asian::GeometricAsian;
