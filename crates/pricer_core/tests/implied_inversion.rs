//! Solvers inverting a smooth, monotone pricing-like function.
//!
//! `price(v) = norm_cdf(v) * 10` stands in for an option price that rises
//! with volatility; both solvers must recover the input that produced a
//! given target.

use approx::assert_relative_eq;
use pricer_core::math::distributions::norm_cdf;
use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::{ErrorCategory, SolverError};
use proptest::prelude::*;

fn price(v: f64) -> f64 {
    10.0 * norm_cdf(v)
}

#[test]
fn test_bisection_and_newton_agree() {
    let config = SolverConfig::default().with_tolerance(1e-10);
    let target = price(0.37);

    let a = BisectionSolver::new(config)
        .find_root(price, target, -3.0, 3.0)
        .unwrap();
    let b = NewtonRaphsonSolver::new(config)
        .find_root_bounded(price, target, 0.0, -3.0, 3.0)
        .unwrap();

    assert_relative_eq!(a.root, 0.37, epsilon = 1e-8);
    assert_relative_eq!(b.root, 0.37, epsilon = 1e-8);
    assert!(b.iterations < a.iterations);
}

#[test]
fn test_target_outside_range_is_invalid_bracket() {
    let solver = BisectionSolver::new(SolverConfig::default());
    let err = solver.find_root(price, 11.0, -3.0, 3.0).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidBracket);
}

#[test]
fn test_iteration_cap_is_non_convergence() {
    let solver = BisectionSolver::new(SolverConfig::new(1e-14, 4));
    let err = solver.find_root(price, price(0.1), -3.0, 3.0).unwrap_err();
    assert!(matches!(err, SolverError::MaxIterationsExceeded { .. }));
    assert_eq!(err.category(), ErrorCategory::NonConvergence);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bisection_round_trip(v in -2.5_f64..2.5) {
        let solver = BisectionSolver::new(SolverConfig::default());
        let result = solver.find_root(price, price(v), -3.0, 3.0).unwrap();
        prop_assert!((result.root - v).abs() < 1e-8);
    }
}
