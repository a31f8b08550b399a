//! Implied volatility extraction.
//!
//! Inverts the Black-Scholes price in σ: given an observed option price,
//! find the volatility that reproduces it. The price is strictly
//! increasing in σ for any non-degenerate option, so a bracketing solver
//! always succeeds once the bracket straddles the target.

use num_traits::Float;
use pricer_core::math::solvers::{
    BisectionSolver, NewtonRaphsonSolver, SolverConfig, SolverResult,
};
use tracing::debug;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::{OptionSpec, OptionType};

/// Implied volatility solver.
///
/// Holds the solver tolerance, iteration cap and the admissible
/// volatility interval. Three entry points share them:
/// - [`bisection`](Self::bisection): always converges on a valid bracket
/// - [`newton`](Self::newton): fast, slope from a central difference, may diverge
/// - [`solve`](Self::solve): Newton first, bisection if Newton diverges
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, ImpliedVolatility};
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(100.0_f64, 0.05, 1.0, 100.0, 0.2).unwrap();
/// let market = BlackScholes::new(spec).price_call();
///
/// let iv = ImpliedVolatility::default();
/// let result = iv.solve(&spec, OptionType::Call, market).unwrap();
/// assert!((result.root - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolatility<T: Float> {
    config: SolverConfig<T>,
    lower: T,
    upper: T,
    initial_guess: T,
}

impl<T: Float> Default for ImpliedVolatility<T> {
    /// Default solver settings, bracket `[0.001, 5.0]`, initial guess 0.2.
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            lower: T::from(0.001).unwrap(),
            upper: T::from(5.0).unwrap(),
            initial_guess: T::from(0.2).unwrap(),
        }
    }
}

impl<T: Float> ImpliedVolatility<T> {
    /// Creates a solver with the given configuration and the default bracket.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the admissible volatility interval.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidVolatilityBracket` unless `0 < lower < upper`
    /// and both are finite.
    pub fn with_bracket(mut self, lower: T, upper: T) -> Result<Self, AnalyticalError> {
        let valid = lower.is_finite() && upper.is_finite() && lower > T::zero() && lower < upper;
        if !valid {
            return Err(AnalyticalError::InvalidVolatilityBracket {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.lower = lower;
        self.upper = upper;
        Ok(self)
    }

    /// Sets the Newton starting point. Values outside the bracket are
    /// replaced by the bracket midpoint when solving.
    pub fn with_initial_guess(mut self, initial_guess: T) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Returns the volatility interval `(lower, upper)`.
    pub fn bracket(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    fn check_price(&self, market_price: T) -> Result<(), AnalyticalError> {
        if !market_price.is_finite() || market_price < T::zero() {
            return Err(AnalyticalError::InvalidPrice {
                price: market_price.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    fn start(&self) -> T {
        if self.initial_guess >= self.lower && self.initial_guess <= self.upper {
            self.initial_guess
        } else {
            (self.lower + self.upper) / T::from(2.0).unwrap()
        }
    }

    /// Implied volatility by interval bisection.
    ///
    /// The volatility of `spec` is ignored; every other field is used.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidPrice` for a negative or non-finite price
    /// - `AnalyticalError::Solver` wrapping `InvalidBracket` when the price
    ///   is not attainable inside the bracket, or `MaxIterationsExceeded`
    pub fn bisection(
        &self,
        spec: &OptionSpec<T>,
        option_type: OptionType,
        market_price: T,
    ) -> Result<SolverResult<T>, AnalyticalError> {
        self.check_price(market_price)?;
        let model = BlackScholes::new(*spec);
        let result = BisectionSolver::new(self.config).find_root(
            |sigma| model.price_at_volatility(sigma, option_type),
            market_price,
            self.lower,
            self.upper,
        )?;
        self.trace(option_type, &result);
        Ok(result)
    }

    /// Implied volatility by bounded Newton-Raphson.
    ///
    /// Vega is estimated by central difference. Divergence is reported,
    /// not recovered from.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidPrice` for a negative or non-finite price
    /// - `AnalyticalError::Solver` wrapping `LeftBracket`,
    ///   `DerivativeNearZero` or `MaxIterationsExceeded`
    pub fn newton(
        &self,
        spec: &OptionSpec<T>,
        option_type: OptionType,
        market_price: T,
    ) -> Result<SolverResult<T>, AnalyticalError> {
        self.check_price(market_price)?;
        let model = BlackScholes::new(*spec);
        let result = NewtonRaphsonSolver::new(self.config).find_root_bounded(
            |sigma| model.price_at_volatility(sigma, option_type),
            market_price,
            self.start(),
            self.lower,
            self.upper,
        )?;
        self.trace(option_type, &result);
        Ok(result)
    }

    /// Implied volatility by Newton-Raphson with bisection fallback.
    ///
    /// # Errors
    /// As [`bisection`](Self::bisection); Newton failures are absorbed by
    /// the fallback.
    pub fn solve(
        &self,
        spec: &OptionSpec<T>,
        option_type: OptionType,
        market_price: T,
    ) -> Result<SolverResult<T>, AnalyticalError> {
        self.check_price(market_price)?;
        let model = BlackScholes::new(*spec);
        let result = NewtonRaphsonSolver::new(self.config).find_root_bounded_or_bisect(
            |sigma| model.price_at_volatility(sigma, option_type),
            market_price,
            self.start(),
            self.lower,
            self.upper,
        )?;
        self.trace(option_type, &result);
        Ok(result)
    }

    fn trace(&self, option_type: OptionType, result: &SolverResult<T>) {
        debug!(
            %option_type,
            method = %result.method,
            iterations = result.iterations,
            volatility = result.root.to_f64().unwrap_or(f64::NAN),
            "implied volatility solved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::math::solvers::SolverMethod;
    use pricer_core::types::{ErrorCategory, SolverError};
    use proptest::prelude::*;

    fn spec() -> OptionSpec<f64> {
        OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap()
    }

    fn coarse() -> ImpliedVolatility<f64> {
        ImpliedVolatility::new(SolverConfig::default().with_tolerance(1e-4))
            .with_bracket(0.01, 1.0)
            .unwrap()
    }

    #[test]
    fn test_bisection_round_trip_coarse() {
        let market = BlackScholes::new(spec()).price_call();
        let result = coarse().bisection(&spec(), OptionType::Call, market).unwrap();
        assert!((result.root - 0.2).abs() < 1e-4);
        assert_eq!(result.method, SolverMethod::Bisection);
    }

    #[test]
    fn test_newton_round_trip() {
        let iv = ImpliedVolatility::new(SolverConfig::default().with_tolerance(1e-10));
        for option_type in [OptionType::Call, OptionType::Put] {
            let market = BlackScholes::new(spec()).price(option_type);
            let result = iv.newton(&spec(), option_type, market).unwrap();
            assert_relative_eq!(result.root, 0.2, epsilon = 1e-8);
            assert_eq!(result.method, SolverMethod::NewtonRaphson);
        }
    }

    #[test]
    fn test_price_above_bracket_is_invalid_bracket() {
        // Call is worth at most S; 60 needs σ far above 1.0
        let err = coarse()
            .bisection(&spec(), OptionType::Call, 60.0)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidBracket);
        assert!(matches!(
            err,
            AnalyticalError::Solver(SolverError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = ImpliedVolatility::default()
            .solve(&spec(), OptionType::Put, -1.0)
            .unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidPrice { price: -1.0 });
        assert_eq!(err.category(), ErrorCategory::InvalidDomain);
    }

    #[test]
    fn test_invalid_bracket_configuration() {
        let err = ImpliedVolatility::<f64>::default()
            .with_bracket(0.5, 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticalError::InvalidVolatilityBracket { .. }
        ));
        assert!(ImpliedVolatility::<f64>::default()
            .with_bracket(0.0, 1.0)
            .is_err());
    }

    #[test]
    fn test_newton_diverges_deep_otm_then_solve_recovers() {
        // Deep OTM short-dated call: vega at the initial guess is tiny
        let otm = OptionSpec::new(200.0, 0.01, 0.1, 100.0, 0.9).unwrap();
        let market = BlackScholes::new(otm).price_call();
        let iv = ImpliedVolatility::new(SolverConfig::default().with_tolerance(1e-12))
            .with_initial_guess(0.05);

        assert!(iv.newton(&otm, OptionType::Call, market).is_err());

        let result = iv.solve(&otm, OptionType::Call, market).unwrap();
        assert_eq!(result.method, SolverMethod::Bisection);
        assert_relative_eq!(result.root, 0.9, epsilon = 1e-6);
    }

    #[test]
    fn test_initial_guess_outside_bracket_uses_midpoint() {
        let iv = coarse().with_initial_guess(3.0);
        let market = BlackScholes::new(spec()).price_call();
        let result = iv.newton(&spec(), OptionType::Call, market).unwrap();
        assert!((result.root - 0.2).abs() < 1e-4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_solve_round_trip(
            k in 85.0_f64..115.0,
            t in 0.25_f64..2.0,
            v in 0.1_f64..0.9,
        ) {
            let spec = OptionSpec::new(k, 0.03, t, 100.0, v).unwrap();
            let market = BlackScholes::new(spec).price_call();
            let result = ImpliedVolatility::default()
                .solve(&spec, OptionType::Call, market)
                .unwrap();
            prop_assert!((result.root - v).abs() < 1e-6);
        }
    }
}
