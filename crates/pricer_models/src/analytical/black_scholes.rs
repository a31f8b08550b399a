//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! When σ√T = 0 (zero volatility or zero maturity) the formula is never
//! evaluated. Prices fall back to the discounted intrinsic value
//! e^(-rT)·max(S - K, 0) and e^(-rT)·max(K - S, 0).

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use crate::instruments::{OptionSpec, OptionType};

/// First-order and second-order sensitivities of an option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (calendar time, usually negative)
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionSpec;
///
/// let spec = OptionSpec::new(100.0_f64, 0.05, 1.0, 100.0, 0.2).unwrap();
/// let bs = BlackScholes::new(spec);
///
/// assert!((bs.price_call() - 10.4506).abs() < 1e-4);
/// assert!((bs.price_put() - 5.5735).abs() < 1e-4);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.price_call() - bs.price_put() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spec: OptionSpec<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a Black-Scholes pricer for a validated option.
    pub fn new(spec: OptionSpec<T>) -> Self {
        Self { spec }
    }

    /// Creates a pricer from raw inputs, validating them first.
    ///
    /// # Errors
    /// `AnalyticalError::Instrument` if any input is invalid.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::from_params(100.0_f64, 0.05, 1.0, 100.0, 0.2).is_ok());
    /// assert!(BlackScholes::from_params(100.0_f64, 0.05, 1.0, -100.0, 0.2).is_err());
    /// ```
    pub fn from_params(
        strike: T,
        rate: T,
        maturity: T,
        spot: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        Ok(Self::new(OptionSpec::new(
            strike, rate, maturity, spot, volatility,
        )?))
    }

    /// Returns the option being priced.
    #[inline]
    pub fn spec(&self) -> &OptionSpec<T> {
        &self.spec
    }

    #[inline]
    fn vol_sqrt_t(&self, sigma: T) -> T {
        sigma * self.spec.maturity().sqrt()
    }

    fn d1_at(&self, sigma: T) -> T {
        let half = T::from(0.5).unwrap();
        let s = &self.spec;
        let vol_sqrt_t = self.vol_sqrt_t(sigma);

        if vol_sqrt_t <= T::zero() {
            // Degenerate prices and delta step at S = K, so d1 does too
            let large = T::from(100.0).unwrap();
            let gap = s.spot() - s.strike();
            return if gap > T::zero() {
                large
            } else if gap < T::zero() {
                -large
            } else {
                T::zero()
            };
        }

        let log_moneyness = (s.spot() / s.strike()).ln();
        let drift = (s.rate() + half * sigma * sigma) * s.maturity();
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// Returns ±100 by the sign of S - K (0 at S = K) when σ√T = 0.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1_at(self.spec.volatility())
    }

    /// Computes the d2 term: d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.vol_sqrt_t(self.spec.volatility())
    }

    /// Price of the option at an arbitrary volatility.
    ///
    /// Negative `sigma` is treated as zero, so the function is total on
    /// the real line. Used by root finders probing around a volatility.
    ///
    /// At σ√T = 0 the price is the discounted intrinsic `e^(-rT)·max(S-K, 0)`.
    /// For T > 0 this differs from the σ → 0⁺ limit of the formula,
    /// `max(S - K·e^(-rT), 0)`, so the price is discontinuous at σ = 0.
    pub fn price_at_volatility(&self, sigma: T, option_type: OptionType) -> T {
        let zero = T::zero();
        let sigma = sigma.max(zero);
        let s = &self.spec;
        let discount = s.discount_factor();

        if self.vol_sqrt_t(sigma) <= zero {
            let intrinsic = match option_type {
                OptionType::Call => s.spot() - s.strike(),
                OptionType::Put => s.strike() - s.spot(),
            };
            return discount * intrinsic.max(zero);
        }

        let d1 = self.d1_at(sigma);
        let d2 = d1 - self.vol_sqrt_t(sigma);

        let price = match option_type {
            OptionType::Call => s.spot() * norm_cdf(d1) - s.strike() * discount * norm_cdf(d2),
            OptionType::Put => s.strike() * discount * norm_cdf(-d2) - s.spot() * norm_cdf(-d1),
        };

        // Rounding can push deep out-of-the-money prices a hair below zero
        price.max(zero)
    }

    /// Computes the European option price for the given type.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        self.price_at_volatility(self.spec.volatility(), option_type)
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> T {
        self.price(OptionType::Call)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> T {
        self.price(OptionType::Put)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// For degenerate inputs delta is the step function of the payoff.
    pub fn delta(&self, option_type: OptionType) -> T {
        let one = T::one();
        let zero = T::zero();
        let s = &self.spec;

        if s.is_degenerate() {
            return match option_type {
                OptionType::Call if s.spot() > s.strike() => one,
                OptionType::Put if s.spot() < s.strike() => -one,
                _ => zero,
            };
        }

        let n_d1 = norm_cdf(self.d1());
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - one,
        }
    }

    /// Computes Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T).
    ///
    /// Same for calls and puts; zero for degenerate inputs.
    pub fn gamma(&self) -> T {
        let s = &self.spec;
        if s.is_degenerate() {
            return T::zero();
        }
        norm_pdf(self.d1()) / (s.spot() * self.vol_sqrt_t(s.volatility()))
    }

    /// Computes Vega (∂V/∂σ) = S·√T·φ(d₁).
    ///
    /// Same for calls and puts; zero for degenerate inputs.
    pub fn vega(&self) -> T {
        let s = &self.spec;
        if s.is_degenerate() {
            return T::zero();
        }
        s.spot() * s.maturity().sqrt() * norm_pdf(self.d1())
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self, option_type: OptionType) -> T {
        let s = &self.spec;
        if s.is_degenerate() {
            return T::zero();
        }

        let two = T::from(2.0).unwrap();
        let d1 = self.d1();
        let d2 = self.d2();
        let carry = s.rate() * s.strike() * s.discount_factor();
        let decay = -(s.spot() * s.volatility() * norm_pdf(d1)) / (two * s.maturity().sqrt());

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, option_type: OptionType) -> T {
        let s = &self.spec;
        if s.is_degenerate() {
            return T::zero();
        }

        let d2 = self.d2();
        let scale = s.strike() * s.maturity() * s.discount_factor();
        match option_type {
            OptionType::Call => scale * norm_cdf(d2),
            OptionType::Put => -scale * norm_cdf(-d2),
        }
    }

    /// All Greeks at once.
    pub fn greeks(&self, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }
}
