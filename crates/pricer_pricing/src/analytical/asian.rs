//! Geometric average Asian option analytical pricing.
//!
//! Closed form for a discretely monitored geometric average Asian option
//! under Black-Scholes dynamics. The geometric average of log-normal prices
//! is itself log-normal, so the price is a Black-Scholes-type formula in
//! the moments of `ln G`.
//!
//! # Mathematical Background
//!
//! With `n` equally spaced fixings at `tᵢ = iT/n` (the initial spot is not
//! a fixing):
//!
//! ```text
//! G    = (∏_{i=1}^{n} S_{t_i})^{1/n}
//! μ_G  = ln S₀ + (r - σ²/2) · T(n+1)/(2n)
//! σ_G² = σ² · T(n+1)(2n+1)/(6n²)
//!
//! d1   = (μ_G - ln K + σ_G²) / σ_G
//! d2   = d1 - σ_G
//! Call = e^{-rT} [e^{μ_G + σ_G²/2} N(d1) - K N(d2)]
//! Put  = e^{-rT} [K N(-d2) - e^{μ_G + σ_G²/2} N(-d1)]
//! ```
//!
//! For `n = 1` this is the Black-Scholes price; as `n → ∞` it tends to
//! the continuously sampled Kemna-Vorst (1990) price.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_models::instruments::{InstrumentError, OptionSpec, OptionType};

/// Closed-form discrete geometric-average Asian pricer.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{OptionSpec, OptionType};
/// use pricer_pricing::analytical::GeometricAsian;
///
/// let spec: OptionSpec<f64> = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
///
/// // A single fixing at maturity is a European option
/// let single = GeometricAsian::new(spec, 1).unwrap();
/// let european = BlackScholes::new(spec).price_call();
/// assert!((single.price(OptionType::Call) - european).abs() < 1e-10);
///
/// // Averaging lowers the effective volatility
/// let monthly = GeometricAsian::new(spec, 12).unwrap();
/// assert!(monthly.price_call() < european);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAsian<T: Float> {
    spec: OptionSpec<T>,
    n_fixings: usize,
}

impl<T: Float> GeometricAsian<T> {
    /// Creates a pricer for `n_fixings` equally spaced fixings.
    ///
    /// # Errors
    ///
    /// `InstrumentError::InvalidParameter` if `n_fixings` is 0.
    pub fn new(spec: OptionSpec<T>, n_fixings: usize) -> Result<Self, InstrumentError> {
        if n_fixings == 0 {
            return Err(InstrumentError::InvalidParameter {
                message: "geometric Asian needs at least one fixing".to_string(),
            });
        }
        Ok(Self { spec, n_fixings })
    }

    /// Returns the option specification.
    #[inline]
    pub fn spec(&self) -> &OptionSpec<T> {
        &self.spec
    }

    /// Returns the number of fixings.
    #[inline]
    pub fn n_fixings(&self) -> usize {
        self.n_fixings
    }

    /// Mean of `ln G`.
    pub fn log_mean(&self) -> T {
        let s = &self.spec;
        let n = T::from(self.n_fixings).unwrap();
        let two = T::from(2.0).unwrap();
        let sigma = s.volatility();
        let time_factor = s.maturity() * (n + T::one()) / (two * n);
        s.spot().ln() + (s.rate() - sigma * sigma / two) * time_factor
    }

    /// Variance of `ln G`.
    pub fn log_variance(&self) -> T {
        let s = &self.spec;
        let n = T::from(self.n_fixings).unwrap();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();
        let sigma = s.volatility();
        sigma * sigma * s.maturity() * (n + T::one()) * (two * n + T::one()) / (six * n * n)
    }

    /// Computes the option price.
    pub fn price(&self, option_type: OptionType) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let strike = self.spec.strike();
        let df = self.spec.discount_factor();
        let mu = self.log_mean();
        let var = self.log_variance();
        let std = var.sqrt();

        if std <= zero {
            // G is deterministic
            let g = mu.exp();
            let intrinsic = match option_type {
                OptionType::Call => (g - strike).max(zero),
                OptionType::Put => (strike - g).max(zero),
            };
            return df * intrinsic;
        }

        let forward = (mu + half * var).exp();
        let d1 = (mu - strike.ln() + var) / std;
        let d2 = d1 - std;

        let price = match option_type {
            OptionType::Call => df * (forward * norm_cdf(d1) - strike * norm_cdf(d2)),
            OptionType::Put => df * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
        };
        price.max(zero)
    }

    /// Computes the call price.
    #[inline]
    pub fn price_call(&self) -> T {
        self.price(OptionType::Call)
    }

    /// Computes the put price.
    #[inline]
    pub fn price_put(&self) -> T {
        self.price(OptionType::Put)
    }
}
