//! Interval bisection root-finding solver.

use super::{SolverConfig, SolverMethod, SolverResult};
use crate::types::SolverError;
use num_traits::Float;
use tracing::debug;

/// Interval bisection root finder.
///
/// Solves `f(x) = target` on a bracket `[lower, upper]` whose endpoint
/// values straddle the target. Each iteration halves the bracket and keeps
/// the half that still contains the crossing. Only continuity of `f` is
/// required; monotone functions such as an option price in volatility
/// always converge.
///
/// # Termination
///
/// The search stops as soon as either
/// - `|f(mid) - target| < tolerance`, or
/// - the bracket width `upper - lower` drops below `tolerance`.
///
/// If neither happens within `max_iterations` halvings the solver returns
/// `SolverError::MaxIterationsExceeded`.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x³ - x = 6 in bracket [1, 3]
/// let result = solver.find_root(|x: f64| x * x * x - x, 6.0, 1.0, 3.0).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find `x` in `[lower, upper]` with `f(x) = target`.
    ///
    /// # Arguments
    ///
    /// * `f` - Continuous function, e.g. a price as a function of volatility
    /// * `target` - Value to match
    /// * `lower` - Left bracket endpoint
    /// * `upper` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(SolverResult)` - Root estimate and iteration count
    /// * `Err(SolverError::InvalidBracket)` - `target` not within `[f(lower), f(upper)]`,
    ///   `lower >= upper`, or non-finite endpoint values
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration cap reached
    ///
    /// An endpoint that already hits the target exactly is returned with
    /// zero iterations.
    pub fn find_root<F>(
        &self,
        f: F,
        target: T,
        lower: T,
        upper: T,
    ) -> Result<SolverResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let g_lower = f(lower) - target;
        let g_upper = f(upper) - target;

        let straddles = g_lower.signum() != g_upper.signum()
            || g_lower == T::zero()
            || g_upper == T::zero();
        if !(lower < upper) || !g_lower.is_finite() || !g_upper.is_finite() || !straddles {
            return Err(SolverError::InvalidBracket {
                lower: to_f64(lower),
                upper: to_f64(upper),
                f_lower: to_f64(g_lower + target),
                f_upper: to_f64(g_upper + target),
                target: to_f64(target),
            });
        }

        if g_lower == T::zero() {
            return Ok(SolverResult::converged(lower, 0, SolverMethod::Bisection));
        }
        if g_upper == T::zero() {
            return Ok(SolverResult::converged(upper, 0, SolverMethod::Bisection));
        }

        let two = T::from(2.0).unwrap();
        let tol = self.config.tolerance;
        let lower_sign = g_lower.signum();
        let (mut lo, mut hi) = (lower, upper);
        let mut mid = (lo + hi) / two;

        for iteration in 1..=self.config.max_iterations {
            mid = (lo + hi) / two;
            let g_mid = f(mid) - target;

            if !g_mid.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite function value at x = {}",
                    to_f64(mid)
                )));
            }

            if g_mid.abs() < tol || (hi - lo) < tol {
                debug!(
                    iterations = iteration,
                    root = to_f64(mid),
                    "bisection converged"
                );
                return Ok(SolverResult::converged(mid, iteration, SolverMethod::Bisection));
            }

            if g_mid.signum() == lower_sign {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            last: to_f64(mid),
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[inline]
pub(super) fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
