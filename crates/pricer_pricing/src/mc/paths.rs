//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! with the exact log-space step:
//!
//! ```text
//! S(tᵢ) = S(tᵢ₋₁) × exp((r - σ²/2)dt + σ√dt × Zᵢ),   dt = T / n
//! ```
//!
//! # Monitoring Points
//!
//! A path holds the `n` simulated prices at `t₁..tₙ`; the initial spot
//! `S₀` is not a monitoring point. Every path consumes exactly `n` normal
//! draws, including when `T = 0` (the path is then constant at `S₀`).

use pricer_models::instruments::OptionSpec;

use super::error::ConfigError;
use crate::rng::PricerRng;

/// A single simulated price path.
///
/// Owned buffer of the prices at each monitoring date, in time order.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricePath;
///
/// let path = PricePath::from(vec![101.0, 99.5, 102.0]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.terminal(), Some(102.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    /// Returns the simulated prices.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Number of monitoring points.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the path has no monitoring points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price at the last monitoring date.
    #[inline]
    pub fn terminal(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Consumes the path and returns its buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.prices
    }
}

impl From<Vec<f64>> for PricePath {
    fn from(prices: Vec<f64>) -> Self {
        Self { prices }
    }
}

impl AsRef<[f64]> for PricePath {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

/// GBM path simulator for one option specification.
///
/// Precomputes the per-step drift and diffusion so that the inner loop is
/// a multiply and an `exp` per step.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::OptionSpec;
/// use pricer_pricing::mc::PathSimulator;
/// use pricer_pricing::rng::PricerRng;
///
/// let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
/// let simulator = PathSimulator::new(&spec, 12).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let path = simulator.simulate(&mut rng);
/// assert_eq!(path.len(), 12);
/// assert_eq!(rng.draws(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSimulator {
    spot: f64,
    n_steps: usize,
    dt: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl PathSimulator {
    /// Creates a simulator with `n_steps` equally spaced monitoring dates.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if `n_steps` is 0.
    pub fn new(spec: &OptionSpec<f64>, n_steps: usize) -> Result<Self, ConfigError> {
        if n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }

        let dt = spec.maturity() / n_steps as f64;
        let sigma = spec.volatility();

        Ok(Self {
            spot: spec.spot(),
            n_steps,
            dt,
            drift_dt: (spec.rate() - 0.5 * sigma * sigma) * dt,
            vol_sqrt_dt: sigma * dt.sqrt(),
        })
    }

    /// Number of monitoring points per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Time between monitoring points.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Writes the path driven by `normals` into `path`.
    ///
    /// Both slices must hold exactly [`n_steps`](Self::n_steps) values.
    #[inline]
    pub fn fill_path(&self, normals: &[f64], path: &mut [f64]) {
        self.evolve(normals, path, 1.0);
    }

    /// Writes the antithetic path, driven by `-normals`, into `path`.
    #[inline]
    pub fn fill_antithetic_path(&self, normals: &[f64], path: &mut [f64]) {
        self.evolve(normals, path, -1.0);
    }

    #[inline]
    fn evolve(&self, normals: &[f64], path: &mut [f64], sign: f64) {
        debug_assert_eq!(normals.len(), self.n_steps);
        debug_assert_eq!(path.len(), self.n_steps);

        let mut price = self.spot;
        for (slot, &z) in path.iter_mut().zip(normals) {
            price *= (self.drift_dt + self.vol_sqrt_dt * sign * z).exp();
            *slot = price;
        }
    }

    /// Draws `n_steps` normals from `rng` and returns the resulting path.
    pub fn simulate(&self, rng: &mut PricerRng) -> PricePath {
        let mut normals = vec![0.0; self.n_steps];
        rng.fill_normal(&mut normals);
        let mut prices = vec![0.0; self.n_steps];
        self.fill_path(&normals, &mut prices);
        PricePath::from(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(maturity: f64, volatility: f64) -> OptionSpec<f64> {
        OptionSpec::new(100.0, 0.05, maturity, 100.0, volatility).unwrap()
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert_eq!(
            PathSimulator::new(&spec(1.0, 0.2), 0),
            Err(ConfigError::InvalidStepCount(0))
        );
    }

    #[test]
    fn test_zero_maturity_is_constant_and_consumes_draws() {
        let sim = PathSimulator::new(&spec(0.0, 0.2), 5).unwrap();
        let mut rng = PricerRng::from_seed(1);
        let path = sim.simulate(&mut rng);
        assert!(path.prices().iter().all(|&p| p == 100.0));
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_zero_volatility_is_forward_curve() {
        let sim = PathSimulator::new(&spec(1.0, 0.0), 4).unwrap();
        let mut rng = PricerRng::from_seed(1);
        let path = sim.simulate(&mut rng);
        for (i, &p) in path.prices().iter().enumerate() {
            let t = (i + 1) as f64 * 0.25;
            assert_relative_eq!(p, 100.0 * (0.05 * t).exp(), max_relative = 1e-12);
        }
        assert_relative_eq!(
            path.terminal().unwrap(),
            100.0 * 0.05_f64.exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_single_step_matches_closed_form() {
        let sim = PathSimulator::new(&spec(1.0, 0.2), 1).unwrap();
        let mut path = [0.0];
        sim.fill_path(&[0.5], &mut path);
        let expected = 100.0 * ((0.05 - 0.02) + 0.2 * 0.5_f64).exp();
        assert_relative_eq!(path[0], expected, max_relative = 1e-14);
    }

    #[test]
    fn test_antithetic_mirrors_log_increments() {
        let sim = PathSimulator::new(&spec(1.0, 0.3), 3).unwrap();
        let normals = [0.4, -1.2, 0.7];
        let mut up = [0.0; 3];
        let mut down = [0.0; 3];
        sim.fill_path(&normals, &mut up);
        sim.fill_antithetic_path(&normals, &mut down);

        // ln(up·down / S0²) only carries twice the drift
        let drift = (0.05 - 0.5 * 0.09) * 3.0 / 3.0;
        let log_sum = (up[2] / 100.0).ln() + (down[2] / 100.0).ln();
        assert_relative_eq!(log_sum, 2.0 * drift, epsilon = 1e-12);
    }

    #[test]
    fn test_terminal_lognormal_mean() {
        let sim = PathSimulator::new(&spec(1.0, 0.2), 4).unwrap();
        let mut rng = PricerRng::from_seed(2024);
        let n = 50_000;
        let mean = (0..n)
            .map(|_| sim.simulate(&mut rng).terminal().unwrap())
            .sum::<f64>()
            / n as f64;
        // E[S_T] = S0·e^{rT} ≈ 105.127; standard error ≈ 0.1
        assert!((mean - 100.0 * 0.05_f64.exp()).abs() < 0.5);
    }

    #[test]
    fn test_price_path_accessors() {
        let path = PricePath::from(vec![1.0, 2.0]);
        assert!(!path.is_empty());
        assert_eq!(path.as_ref(), &[1.0, 2.0]);
        assert_eq!(path.into_inner(), vec![1.0, 2.0]);
        assert_eq!(PricePath::default().terminal(), None);
    }
}
