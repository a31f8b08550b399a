//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Shared by [`BisectionSolver`](super::BisectionSolver) and
/// [`NewtonRaphsonSolver`](super::NewtonRaphsonSolver). The tolerance
/// applies to the residual `|f(x) - target|` and, for bracketing methods,
/// to the bracket width.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig::<f64>::default()
///     .with_tolerance(1e-4)
///     .with_max_iterations(60);
/// assert_eq!(custom.max_iterations, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance ε.
    pub tolerance: T,

    /// Maximum number of iterations before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// Step `h` of the central difference `(f(x+h) - f(x-h)) / 2h` used
    /// when no analytical derivative is supplied.
    pub bump: T,

    /// Derivatives with magnitude below this are treated as zero.
    pub derivative_floor: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `bump`: 1e-4
    /// - `derivative_floor`: 1e-12
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            bump: T::from(1e-4).unwrap(),
            derivative_floor: T::from(1e-12).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified tolerance and iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Relaxed tolerance (1e-6) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
            ..Self::default()
        }
    }

    /// Returns a copy with the given tolerance.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns a copy with the given iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns a copy with the given finite-difference step.
    pub fn with_bump(mut self, bump: T) -> Self {
        self.bump = bump;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
        assert!((config.bump - 1e-4).abs() < 1e-15);
        assert!(config.derivative_floor > 0.0);
    }

    #[test]
    fn test_new_config_keeps_difference_defaults() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.bump, SolverConfig::<f64>::default().bump);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_presets() {
        let precise: SolverConfig<f64> = SolverConfig::high_precision();
        assert!(precise.tolerance < 1e-12);
        assert!(precise.max_iterations >= 500);

        let fast: SolverConfig<f64> = SolverConfig::fast();
        assert!(fast.tolerance > 1e-8);
        assert!(fast.max_iterations <= 50);
    }

    #[test]
    fn test_builders() {
        let config = SolverConfig::<f64>::default()
            .with_tolerance(1e-4)
            .with_max_iterations(30)
            .with_bump(1e-3);
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.max_iterations, 30);
        assert_eq!(config.bump, 1e-3);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 100);
    }
}
