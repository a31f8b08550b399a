//! Payoff definitions.
//!
//! This module provides the closed set of terminal payoffs the pricers
//! understand, plus the call/put selector used by the closed-form models.

use std::fmt;

use num_traits::Float;

use super::error::InstrumentError;

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert!(OptionType::Call.is_call());
/// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Vanilla payoff of this type for the given strike.
    #[inline]
    pub fn payoff<T: Float>(&self, strike: T) -> Payoff<T> {
        match self {
            OptionType::Call => Payoff::Call { strike },
            OptionType::Put => Payoff::Put { strike },
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl std::str::FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown option type '{}'", other),
            }),
        }
    }
}

/// Terminal payoff as a function of a single price.
///
/// A closed sum type: pricers dispatch with `match`, no trait objects.
/// Path-dependent products feed an average of the path into the same
/// payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
/// - `DoubleDigital`: 1 if lower <= S <= upper, else 0
///
/// # Examples
/// ```
/// use pricer_models::instruments::Payoff;
///
/// let call = Payoff::Call { strike: 100.0_f64 };
/// assert_eq!(call.evaluate(110.0), 10.0);
///
/// let corridor = Payoff::double_digital(15.0_f64, 10.0).unwrap();
/// assert_eq!(corridor.evaluate(5.0), 0.0);
/// assert_eq!(corridor.evaluate(10.0), 1.0);
/// assert_eq!(corridor.evaluate(20.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payoff<T: Float> {
    /// Call option: max(S - K, 0)
    Call {
        /// Strike price K
        strike: T,
    },
    /// Put option: max(K - S, 0)
    Put {
        /// Strike price K
        strike: T,
    },
    /// Pays 1 when the price lies inside the closed corridor.
    DoubleDigital {
        /// Upper barrier U
        upper: T,
        /// Lower barrier D
        lower: T,
    },
}

impl<T: Float> Payoff<T> {
    /// Creates a double digital payoff on `[lower, upper]`.
    ///
    /// # Errors
    /// `InstrumentError::InvalidParameter` if `lower > upper` or either
    /// barrier is not finite.
    pub fn double_digital(upper: T, lower: T) -> Result<Self, InstrumentError> {
        if !upper.is_finite() || !lower.is_finite() || lower > upper {
            return Err(InstrumentError::InvalidParameter {
                message: format!(
                    "double digital needs finite lower <= upper, got [{}, {}]",
                    lower.to_f64().unwrap_or(f64::NAN),
                    upper.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        Ok(Payoff::DoubleDigital { upper, lower })
    }

    /// Evaluate the payoff at `price`.
    ///
    /// Always non-negative.
    #[inline]
    pub fn evaluate(&self, price: T) -> T {
        let zero = T::zero();
        match *self {
            Payoff::Call { strike } => (price - strike).max(zero),
            Payoff::Put { strike } => (strike - price).max(zero),
            Payoff::DoubleDigital { upper, lower } => {
                if price >= lower && price <= upper {
                    T::one()
                } else {
                    zero
                }
            }
        }
    }

    /// Strike of a vanilla payoff, `None` for digitals.
    #[inline]
    pub fn strike(&self) -> Option<T> {
        match *self {
            Payoff::Call { strike } | Payoff::Put { strike } => Some(strike),
            Payoff::DoubleDigital { .. } => None,
        }
    }

    /// Returns whether this payoff is digital.
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, Payoff::DoubleDigital { .. })
    }
}
