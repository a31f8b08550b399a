//! Newton-Raphson root-finding solver.

use super::bisection::to_f64;
use super::{BisectionSolver, SolverConfig, SolverMethod, SolverResult};
use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, warn};

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, meaning the number
/// of correct digits approximately doubles each iteration. However, it may
/// fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// [`find_root_bounded_or_bisect`](Self::find_root_bounded_or_bisect)
/// recovers from the last two by switching to bisection.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// Unbounded iteration from `x0`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative below the floor
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);
            if f_prime_val.abs() < self.config.derivative_floor {
                return Err(SolverError::DerivativeNearZero { x: to_f64(x) });
            }

            x = x - f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            last: to_f64(x),
        })
    }

    /// Solve `f(x) = target` inside `[lower, upper]` starting from `x0`.
    ///
    /// The derivative is estimated by the central difference
    /// `(f(x+h) - f(x-h)) / 2h` with `h = config.bump`. The iteration is
    /// declared diverged as soon as an iterate leaves `[lower, upper]`.
    ///
    /// # Returns
    ///
    /// * `Ok(SolverResult)` - `|f(x) - target| < tolerance`
    /// * `Err(SolverError::LeftBracket)` - Iterate (or `x0`) outside the interval
    /// * `Err(SolverError::DerivativeNearZero)` - Estimated slope below the floor
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration cap reached
    /// * `Err(SolverError::NumericalInstability)` - Non-finite function value
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let result = solver
    ///     .find_root_bounded(|x: f64| x.exp(), 3.0, 1.0, 0.0, 2.0)
    ///     .unwrap();
    /// assert!((result.root - 3.0_f64.ln()).abs() < 1e-9);
    /// ```
    pub fn find_root_bounded<F>(
        &self,
        f: F,
        target: T,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<SolverResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let left = |x: T| SolverError::LeftBracket {
            x: to_f64(x),
            lower: to_f64(lower),
            upper: to_f64(upper),
        };

        if !(x0 >= lower && x0 <= upper) {
            return Err(left(x0));
        }

        let h = self.config.bump;
        let two_h = h + h;
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let g = f(x) - target;
            if !g.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite function value at x = {}",
                    to_f64(x)
                )));
            }

            if g.abs() < self.config.tolerance {
                debug!(iterations = iteration, root = to_f64(x), "newton converged");
                return Ok(SolverResult::converged(
                    x,
                    iteration,
                    SolverMethod::NewtonRaphson,
                ));
            }

            let slope = (f(x + h) - f(x - h)) / two_h;
            if !(slope.abs() >= self.config.derivative_floor) {
                return Err(SolverError::DerivativeNearZero { x: to_f64(x) });
            }

            x = x - g / slope;
            if !(x >= lower && x <= upper) {
                return Err(left(x));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            last: to_f64(x),
        })
    }

    /// Bounded Newton with bisection fallback.
    ///
    /// Runs [`find_root_bounded`](Self::find_root_bounded); if Newton
    /// diverges or meets a flat slope, the same problem is re-solved by
    /// [`BisectionSolver`] on `[lower, upper]` with this solver's
    /// configuration. The fallback is logged at `warn` level. Bracket
    /// errors from the bisection pass are returned as-is.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, SolverMethod};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // atan is flat far from the origin; Newton from 4.0 overshoots out of [-5, 5]
    /// let result = solver
    ///     .find_root_bounded_or_bisect(|x: f64| x.atan(), 0.0, 4.0, -5.0, 5.0)
    ///     .unwrap();
    /// assert_eq!(result.method, SolverMethod::Bisection);
    /// assert!(result.root.abs() < 1e-9);
    /// ```
    pub fn find_root_bounded_or_bisect<F>(
        &self,
        f: F,
        target: T,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<SolverResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        match self.find_root_bounded(&f, target, x0, lower, upper) {
            Ok(result) => Ok(result),
            Err(err) if err.is_recoverable_by_bisection() => {
                warn!(error = %err, "newton diverged, falling back to bisection");
                BisectionSolver::new(self.config).find_root(f, target, lower, upper)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_root_quadratic() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let root = solver
            .find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
            .unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_find_root_zero_derivative() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let err = solver
            .find_root(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.0)
            .unwrap_err();
        assert!(matches!(err, SolverError::DerivativeNearZero { .. }));
    }

    #[test]
    fn test_find_root_max_iterations() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-10, 3));
        // x² + 1 has no real root; iterates wander forever
        let err = solver
            .find_root(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.5)
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::MaxIterationsExceeded { iterations: 3, .. }
        ));
    }

    #[test]
    fn test_bounded_converges() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver
            .find_root_bounded(|x: f64| x * x * x, 8.0, 1.5, 0.0, 5.0)
            .unwrap();
        assert_relative_eq!(result.root, 2.0, epsilon = 1e-9);
        assert_eq!(result.method, SolverMethod::NewtonRaphson);
        assert!(result.iterations < 20);
    }

    #[test]
    fn test_bounded_initial_guess_outside() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let err = solver
            .find_root_bounded(|x: f64| x, 0.5, 2.0, 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, SolverError::LeftBracket { x, .. } if x == 2.0));
    }

    #[test]
    fn test_bounded_leaves_interval() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let err = solver
            .find_root_bounded(|x: f64| x.atan(), 0.0, 4.0, -5.0, 5.0)
            .unwrap_err();
        assert!(matches!(err, SolverError::LeftBracket { .. }));
    }

    #[test]
    fn test_bounded_flat_slope() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let err = solver
            .find_root_bounded(|_x: f64| 1.0, 2.0, 0.5, 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, SolverError::DerivativeNearZero { .. }));
    }

    #[test]
    fn test_fallback_to_bisection() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver
            .find_root_bounded_or_bisect(|x: f64| x.atan(), 0.5, 4.0, -5.0, 5.0)
            .unwrap();
        assert_eq!(result.method, SolverMethod::Bisection);
        assert_relative_eq!(result.root, 0.5_f64.tan(), epsilon = 1e-9);
    }

    #[test]
    fn test_fallback_keeps_bracket_error() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        // Flat function: Newton degenerates, bisection then rejects the bracket
        let err = solver
            .find_root_bounded_or_bisect(|_x: f64| 1.0, 2.0, 0.5, 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidBracket { .. }));
    }

    #[test]
    fn test_no_fallback_when_newton_succeeds() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver
            .find_root_bounded_or_bisect(|x: f64| x * x, 4.0, 1.5, 0.0, 3.0)
            .unwrap();
        assert_eq!(result.method, SolverMethod::NewtonRaphson);
    }
}
