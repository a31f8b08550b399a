//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! simulations in the pricing engine.
//!
//! ## Design
//!
//! - **Reproducibility**: every stream is created from an explicit seed
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//! - **Splittable**: any stream can jump ahead in O(log n), so parallel work
//!   units draw disjoint slices of one sequence
//!
//! ## Module Structure
//!
//! - [`LinearCongruential`]: 64-bit LCG implementing `rand::RngCore`
//! - [`PricerRng`]: seeded stream with batch and normal draws
//! - [`NormalVariateTransform`]: clamped inverse-CDF uniform-to-normal map
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate uniform random values in [0, 1)
//! let uniform_value = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&uniform_value));
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod lcg;
mod normal;
mod prng;

pub use lcg::LinearCongruential;
pub use normal::{NormalVariateTransform, CLAMP_EPSILON};
pub use prng::PricerRng;
