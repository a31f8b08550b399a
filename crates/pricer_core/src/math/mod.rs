//! Numerical building blocks.
//!
//! - [`distributions`]: Standard normal PDF, CDF and inverse CDF
//! - [`solvers`]: Bisection and Newton-Raphson root finders

pub mod distributions;
pub mod solvers;
