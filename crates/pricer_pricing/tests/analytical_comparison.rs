//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to analytical solutions
//! where closed-form solutions exist.
//!
//! # Test Categories
//!
//! 1. **Geometric Asian Options**: MC vs discrete closed form
//! 2. **European Options**: MC terminal payoff vs Black-Scholes
//! 3. **Convergence Tests**: standard error shrinks like 1/√N

use approx::assert_relative_eq;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{OptionSpec, OptionType};
use pricer_pricing::analytical::GeometricAsian;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::path_dependent::AsianPayoff;

/// Standard test parameters: K=100, r=5%, T=1, S=100, σ=20%.
fn standard_spec() -> OptionSpec<f64> {
    OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap()
}

fn pricer(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

// ============================================================================
// Geometric Asian Option Tests
// ============================================================================

#[test]
fn test_geometric_asian_call_mc_vs_analytical() {
    let spec = standard_spec();
    let analytical = GeometricAsian::new(spec, 12).unwrap().price_call();

    let mc = pricer(100_000, 12, 42)
        .price_asian_parallel(&spec, &AsianPayoff::geometric(OptionType::Call, 100.0))
        .unwrap();

    assert!(
        (mc.price - analytical).abs() < 4.0 * mc.std_error,
        "MC {} vs analytical {} (se {})",
        mc.price,
        analytical,
        mc.std_error
    );
}

#[test]
fn test_geometric_asian_put_mc_vs_analytical() {
    let spec = OptionSpec::new(105.0, 0.05, 1.0, 100.0, 0.3).unwrap();
    let analytical = GeometricAsian::new(spec, 24).unwrap().price_put();

    let mc = pricer(100_000, 24, 7)
        .price_asian_parallel(&spec, &AsianPayoff::geometric(OptionType::Put, 105.0))
        .unwrap();

    assert!((mc.price - analytical).abs() < 4.0 * mc.std_error);
}

#[test]
fn test_arithmetic_asian_above_geometric() {
    // AM-GM holds path by path, so the estimates are ordered on common paths
    let spec = standard_spec();
    let p = pricer(20_000, 12, 3);
    let arithmetic = p
        .price_asian(&spec, &AsianPayoff::arithmetic(OptionType::Call, 100.0))
        .unwrap();
    let geometric = p
        .price_asian(&spec, &AsianPayoff::geometric(OptionType::Call, 100.0))
        .unwrap();
    assert!(arithmetic.price >= geometric.price);
}

// ============================================================================
// European Option Tests
// ============================================================================

#[test]
fn test_european_call_and_put_vs_black_scholes() {
    let spec = standard_spec();
    let p = pricer(200_000, 1, 2024);
    let bs = BlackScholes::new(spec);

    let call = p
        .price_european(&spec, &OptionType::Call.payoff(100.0))
        .unwrap();
    let put = p.price_european(&spec, &OptionType::Put.payoff(100.0)).unwrap();

    assert!((call.price - 10.450583572185565).abs() < 4.0 * call.std_error);
    assert!((put.price - 5.573526022256971).abs() < 4.0 * put.std_error);
    assert_relative_eq!(bs.price_call(), 10.450583572185565, max_relative = 1e-9);
}

#[test]
fn test_mc_put_call_parity_on_common_paths() {
    // C - P = S - K·e^{-rT} holds per path, so only rounding separates them
    let spec = standard_spec();
    let p = pricer(10_000, 4, 99);
    let call = p
        .price_european(&spec, &OptionType::Call.payoff(100.0))
        .unwrap();
    let put = p.price_european(&spec, &OptionType::Put.payoff(100.0)).unwrap();
    let forward_value = p
        .price_path_dependent(&spec, |path| path[path.len() - 1] - 100.0)
        .unwrap();

    assert_relative_eq!(call.price - put.price, forward_value.price, epsilon = 1e-9);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_standard_error_scales_as_inverse_sqrt_n() {
    let spec = standard_spec();
    let payoff = AsianPayoff::arithmetic(OptionType::Call, 100.0);

    let small = pricer(5_000, 12, 11).price_asian(&spec, &payoff).unwrap();
    let large = pricer(80_000, 12, 11).price_asian(&spec, &payoff).unwrap();

    // 16x the paths: standard error should shrink by about 4
    let ratio = small.std_error / large.std_error;
    assert!(ratio > 3.5 && ratio < 4.5, "ratio = {}", ratio);
}

#[test]
fn test_error_against_closed_form_shrinks() {
    let spec = standard_spec();
    let exact = GeometricAsian::new(spec, 12).unwrap().price_call();
    let payoff = AsianPayoff::geometric(OptionType::Call, 100.0);

    for n_paths in [1_000_usize, 10_000, 100_000] {
        let mc = pricer(n_paths, 12, 5).price_asian(&spec, &payoff).unwrap();
        assert!(
            (mc.price - exact).abs() < 4.0 * mc.std_error,
            "n = {}: MC {} vs {} (se {})",
            n_paths,
            mc.price,
            exact,
            mc.std_error
        );
        assert!(mc.confidence_99() > mc.confidence_95());
    }
}
