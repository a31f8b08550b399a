//! Root-finding solvers for numerical computation.
//!
//! Used to invert monotone pricing functions, most importantly to recover
//! implied volatility from an observed option price.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bracketing method, needs only continuity
//! - [`NewtonRaphsonSolver`]: Quadratic convergence using derivatives, with a
//!   bounded variant that estimates the slope by central difference and can
//!   fall back to bisection
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `bump`: Central-difference step (default: 1e-4)
//! - `derivative_floor`: Slope magnitude treated as zero (default: 1e-12)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let config = SolverConfig::default();
//! let f = |x: f64| x * x;
//!
//! let by_bisection = BisectionSolver::new(config).find_root(f, 2.0, 0.0, 2.0).unwrap();
//! let by_newton = NewtonRaphsonSolver::new(config)
//!     .find_root_bounded(f, 2.0, 1.0, 0.0, 2.0)
//!     .unwrap();
//!
//! assert!((by_bisection.root - by_newton.root).abs() < 1e-9);
//! ```

mod bisection;
mod config;
mod newton_raphson;
mod result;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
pub use result::{SolverMethod, SolverResult};
