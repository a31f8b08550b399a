//! Asian option payoff implementations.
//!
//! This module provides payoffs for Asian options that use path averages:
//!
//! - **Arithmetic Asian**: payoff of the arithmetic mean of prices
//! - **Geometric Asian**: payoff of the geometric mean of prices
//!
//! Any [`Payoff`] can be applied to the average, including digitals.

use std::fmt;

use num_traits::Float;
use pricer_models::instruments::{OptionType, Payoff};

/// How monitored prices are averaged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AveragingMethod {
    /// `(1/n) Σ Sᵢ`
    #[default]
    Arithmetic,
    /// `exp((1/n) Σ ln Sᵢ)`
    Geometric,
}

impl AveragingMethod {
    /// Averages `prices` with this method.
    #[inline]
    pub fn average<T: Float>(&self, prices: &[T]) -> T {
        match self {
            AveragingMethod::Arithmetic => arithmetic_average(prices),
            AveragingMethod::Geometric => geometric_average(prices),
        }
    }
}

impl fmt::Display for AveragingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AveragingMethod::Arithmetic => f.write_str("arithmetic"),
            AveragingMethod::Geometric => f.write_str("geometric"),
        }
    }
}

impl std::str::FromStr for AveragingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arithmetic" | "a" => Ok(AveragingMethod::Arithmetic),
            "geometric" | "g" => Ok(AveragingMethod::Geometric),
            other => Err(format!("unknown averaging method '{}'", other)),
        }
    }
}

/// Arithmetic mean of `prices`. NaN for an empty slice.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::path_dependent::arithmetic_average;
///
/// assert_eq!(arithmetic_average(&[90.0, 100.0, 110.0]), 100.0);
/// ```
#[inline]
pub fn arithmetic_average<T: Float>(prices: &[T]) -> T {
    if prices.is_empty() {
        return T::nan();
    }
    let sum = prices.iter().fold(T::zero(), |acc, &p| acc + p);
    sum / T::from(prices.len()).unwrap()
}

/// Geometric mean of `prices`, computed in log space. NaN for an empty
/// slice.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::path_dependent::geometric_average;
///
/// let g: f64 = geometric_average(&[50.0, 200.0]);
/// assert!((g - 100.0).abs() < 1e-12);
/// ```
#[inline]
pub fn geometric_average<T: Float>(prices: &[T]) -> T {
    if prices.is_empty() {
        return T::nan();
    }
    let log_sum = prices.iter().fold(T::zero(), |acc, &p| acc + p.ln());
    (log_sum / T::from(prices.len()).unwrap()).exp()
}

/// Asian payoff: a terminal payoff applied to the path average.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::Payoff;
/// use pricer_pricing::path_dependent::{AsianPayoff, AveragingMethod};
///
/// let call = AsianPayoff::new(AveragingMethod::Arithmetic, Payoff::Call { strike: 100.0 });
/// assert_eq!(call.evaluate(&[95.0, 105.0, 115.0]), 5.0);
///
/// let corridor = Payoff::double_digital(15.0, 10.0).unwrap();
/// let digital = AsianPayoff::new(AveragingMethod::Geometric, corridor);
/// assert_eq!(digital.evaluate(&[10.0, 14.4]), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianPayoff<T: Float> {
    averaging: AveragingMethod,
    payoff: Payoff<T>,
}

impl<T: Float> AsianPayoff<T> {
    /// Creates an Asian payoff.
    #[inline]
    pub fn new(averaging: AveragingMethod, payoff: Payoff<T>) -> Self {
        Self { averaging, payoff }
    }

    /// Arithmetic-average vanilla Asian option.
    #[inline]
    pub fn arithmetic(option_type: OptionType, strike: T) -> Self {
        Self::new(AveragingMethod::Arithmetic, option_type.payoff(strike))
    }

    /// Geometric-average vanilla Asian option.
    #[inline]
    pub fn geometric(option_type: OptionType, strike: T) -> Self {
        Self::new(AveragingMethod::Geometric, option_type.payoff(strike))
    }

    /// Returns the averaging method.
    #[inline]
    pub fn averaging(&self) -> AveragingMethod {
        self.averaging
    }

    /// Returns the payoff applied to the average.
    #[inline]
    pub fn payoff(&self) -> &Payoff<T> {
        &self.payoff
    }

    /// Undiscounted payoff of one path.
    #[inline]
    pub fn evaluate(&self, path: &[T]) -> T {
        self.payoff.evaluate(self.averaging.average(path))
    }
}
