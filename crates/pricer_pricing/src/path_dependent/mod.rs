//! Path-dependent option payoffs.
//!
//! Payoffs here take a whole simulated [`PricePath`](crate::mc::PricePath)
//! rather than a single terminal price. The Monte Carlo pricer averages
//! them over paths and discounts.
//!
//! # Key Components
//!
//! - [`AsianPayoff`]: terminal payoff applied to a path average
//! - [`AveragingMethod`]: arithmetic or geometric averaging
//! - [`arithmetic_average`], [`geometric_average`]: the averages themselves

mod asian;

pub use asian::{arithmetic_average, geometric_average, AsianPayoff, AveragingMethod};
