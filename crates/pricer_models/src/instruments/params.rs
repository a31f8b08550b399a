//! Option contract and market parameters.
//!
//! This module provides [`OptionSpec`], the validated bundle of strike,
//! rate, maturity, spot and volatility shared by every pricer.

use num_traits::Float;

use super::error::InstrumentError;

/// European option terms together with the market state used to price them.
///
/// Immutable once built; use the `with_*` methods to derive a modified copy.
///
/// # Invariants
/// - `strike > 0`
/// - `spot > 0`
/// - `maturity >= 0`
/// - `volatility >= 0`
/// - all fields finite
///
/// `volatility == 0` or `maturity == 0` are valid degenerate inputs; the
/// pricers handle them explicitly.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionSpec;
///
/// let spec = OptionSpec::new(100.0_f64, 0.05, 1.0, 100.0, 0.2).unwrap();
/// assert_eq!(spec.strike(), 100.0);
/// assert_eq!(spec.volatility(), 0.2);
///
/// // Invalid strike
/// assert!(OptionSpec::new(-100.0_f64, 0.05, 1.0, 100.0, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec<T: Float> {
    strike: T,
    rate: T,
    maturity: T,
    spot: T,
    volatility: T,
}

fn finite<T: Float>(value: T, field: &'static str) -> Result<(), InstrumentError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InstrumentError::NonFinite { field })
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> OptionSpec<T> {
    /// Creates a new option specification with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price K (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `maturity` - Time to maturity T in years (must be non-negative)
    /// * `spot` - Current underlying price S (must be positive)
    /// * `volatility` - Annualised volatility σ (must be non-negative)
    ///
    /// # Errors
    /// `InstrumentError` naming the first invalid field.
    pub fn new(
        strike: T,
        rate: T,
        maturity: T,
        spot: T,
        volatility: T,
    ) -> Result<Self, InstrumentError> {
        finite(strike, "strike")?;
        finite(rate, "rate")?;
        finite(maturity, "maturity")?;
        finite(spot, "spot")?;
        finite(volatility, "volatility")?;

        let zero = T::zero();

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: to_f64(strike),
            });
        }

        if spot <= zero {
            return Err(InstrumentError::InvalidSpot { spot: to_f64(spot) });
        }

        if maturity < zero {
            return Err(InstrumentError::InvalidMaturity {
                maturity: to_f64(maturity),
            });
        }

        if volatility < zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }

        Ok(Self {
            strike,
            rate,
            maturity,
            spot,
            volatility,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.maturity).exp()
    }

    /// Copy with a different volatility.
    ///
    /// # Errors
    /// `InstrumentError::InvalidVolatility` or `NonFinite` for a bad value.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, InstrumentError> {
        Self::new(self.strike, self.rate, self.maturity, self.spot, volatility)
    }

    /// Copy with a different spot price.
    ///
    /// # Errors
    /// `InstrumentError::InvalidSpot` or `NonFinite` for a bad value.
    pub fn with_spot(&self, spot: T) -> Result<Self, InstrumentError> {
        Self::new(self.strike, self.rate, self.maturity, spot, self.volatility)
    }

    /// Whether the option is priced at discounted intrinsic value
    /// (zero volatility or zero maturity).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.volatility * self.maturity.sqrt() <= T::zero()
    }
}
