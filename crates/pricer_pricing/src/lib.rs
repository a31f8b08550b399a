//! # Pricer Engine (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation engine of the layered architecture:
//! - Seeded, splittable uniform streams and the uniform-to-normal transform
//! - GBM path simulation and path-dependent (Asian) payoffs
//! - Sequential and rayon-parallel Monte Carlo pricing with cancellation
//! - Closed-form geometric Asian prices for validating the simulation
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): normal distribution, error taxonomy
//! - Layer 2 (pricer_models): `OptionSpec`, `OptionType`, `Payoff`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionSpec, OptionType};
//! use pricer_pricing::analytical::GeometricAsian;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::path_dependent::AsianPayoff;
//!
//! let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(50_000)
//!     .n_steps(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config).unwrap();
//! let mc = pricer
//!     .price_asian(&spec, &AsianPayoff::geometric(OptionType::Call, 100.0))
//!     .unwrap();
//! let exact = GeometricAsian::new(spec, 12).unwrap().price_call();
//!
//! assert!((mc.price - exact).abs() < 4.0 * mc.std_error);
//! ```
//!
//! ## Reproducibility
//!
//! Every run is a function of `(seed, n_paths, n_steps)` only. Parallel
//! runs split one stream by jumping ahead, so they reproduce the
//! sequential estimate regardless of the number of threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

pub mod analytical;
pub mod mc;
pub mod path_dependent;
pub mod rng;
