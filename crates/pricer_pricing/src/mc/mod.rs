//! Monte Carlo pricing kernels.
//!
//! This module provides the Monte Carlo simulation infrastructure for
//! pricing path-dependent derivatives under Geometric Brownian Motion.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (paths, steps, seed, antithetic, chunk size)
//! ├── PathSimulator      (exact log-space GBM steps)
//! ├── PricerRng          (one seeded stream per chunk)
//! └── CancellationToken  (checked between chunks)
//! ```
//!
//! # Examples
//!
//! ## Asian Option, Sequential and Parallel
//!
//! ```rust
//! use pricer_models::instruments::{OptionSpec, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::path_dependent::AsianPayoff;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config).unwrap();
//! let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let payoff = AsianPayoff::arithmetic(OptionType::Call, 100.0);
//!
//! let sequential = pricer.price_asian(&spec, &payoff).unwrap();
//! let parallel = pricer.price_asian_parallel(&spec, &payoff).unwrap();
//! assert!((sequential.price - parallel.price).abs() < 1e-9);
//! ```
//!
//! ## Cancellation
//!
//! ```rust
//! use pricer_models::instruments::{OptionSpec, OptionType};
//! use pricer_pricing::mc::{CancellationToken, McError, MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::path_dependent::AsianPayoff;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(1_000)
//!     .n_steps(12)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! let token = CancellationToken::new();
//! let pricer = MonteCarloPricer::new(config).unwrap().with_cancellation(token.clone());
//! token.cancel();
//!
//! let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
//! let payoff = AsianPayoff::arithmetic(OptionType::Call, 100.0);
//! assert!(matches!(
//!     pricer.price_asian(&spec, &payoff),
//!     Err(McError::Cancelled { .. })
//! ));
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use cancel::CancellationToken;
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_PATHS, MAX_STEPS};
pub use error::{ConfigError, McError};
pub use paths::{PathSimulator, PricePath};
pub use pricer::{MonteCarloPricer, PricingResult};
