//! Solver outcome type.

use num_traits::Float;
use std::fmt;

/// Which algorithm produced a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverMethod {
    /// Interval bisection.
    Bisection,
    /// Newton-Raphson iteration.
    NewtonRaphson,
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverMethod::Bisection => f.write_str("bisection"),
            SolverMethod::NewtonRaphson => f.write_str("newton-raphson"),
        }
    }
}

/// Outcome of a successful root search.
///
/// Failed searches are reported as `SolverError`, so `converged` is
/// always `true` for values returned by the solvers in this module. The
/// flag is kept so results can be stored alongside hand-built entries.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
/// let result = solver.find_root(|x: f64| x * x, 2.0, 0.0, 2.0).unwrap();
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult<T: Float> {
    /// The root estimate.
    pub root: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the tolerance was met.
    pub converged: bool,
    /// Algorithm that produced the estimate.
    pub method: SolverMethod,
}

impl<T: Float> SolverResult<T> {
    pub(crate) fn converged(root: T, iterations: usize, method: SolverMethod) -> Self {
        Self {
            root,
            iterations,
            converged: true,
            method,
        }
    }
}
