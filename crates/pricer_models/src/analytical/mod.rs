//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes closed-form prices for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility by bisection, Newton-Raphson, or both
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**
//! - **Explicit degenerate handling**: σ = 0 or T = 0 never divides by σ√T
//! - **Accurate tails**: Hart normal CDF from `pricer_core`

pub mod black_scholes;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use error::AnalyticalError;
pub use implied_vol::ImpliedVolatility;
