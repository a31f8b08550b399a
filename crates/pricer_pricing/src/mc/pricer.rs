//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo pricing.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`](crate::rng::PricerRng))
//! 2. Path generation (via [`PathSimulator`](super::paths::PathSimulator))
//! 3. Payoff evaluation per path
//! 4. Discounting and aggregation
//!
//! # Chunking
//!
//! Paths are processed in chunks of `chunk_size`. Chunk `k` starts at path
//! `k · chunk_size` and draws from the seed's stream advanced by
//! `k · chunk_size · n_steps`. The sequential and parallel runs therefore
//! simulate identical paths and merge the same per-chunk partial sums in
//! the same order.

use std::sync::atomic::{AtomicUsize, Ordering};

use pricer_models::instruments::{OptionSpec, Payoff};
use rayon::prelude::*;
use tracing::{debug, debug_span};

use super::cancel::CancellationToken;
use super::config::MonteCarloConfig;
use super::error::{ConfigError, McError};
use super::paths::PathSimulator;
use crate::path_dependent::AsianPayoff;
use crate::rng::PricerRng;

/// Monte Carlo estimate with its sampling error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     n_paths: 10_000,
/// };
///
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of independent samples behind the estimate.
    pub n_paths: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running sum and sum of squares of payoff samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Accumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl Accumulator {
    #[inline]
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.sum_sq += value * value;
        self.count += 1;
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }

    fn finish(&self, discount_factor: f64) -> Result<PricingResult, McError> {
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = if self.count > 1 {
            ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };

        let price = mean * discount_factor;
        let std_error = (variance / n).sqrt() * discount_factor;
        if !price.is_finite() || !std_error.is_finite() {
            return Err(McError::NumericalInstability(format!(
                "non-finite estimate {} (std error {})",
                price, std_error
            )));
        }

        Ok(PricingResult {
            price,
            std_error,
            n_paths: self.count,
        })
    }
}

/// Simulates `n_paths` paths from `rng` and accumulates their payoffs.
///
/// With antithetic variates each sample is the mean payoff of the path
/// and its mirror, both driven by the same draws.
fn simulate_chunk<F>(
    simulator: &PathSimulator,
    payoff: &F,
    antithetic: bool,
    rng: &mut PricerRng,
    n_paths: usize,
) -> Accumulator
where
    F: Fn(&[f64]) -> f64,
{
    let n_steps = simulator.n_steps();
    let mut normals = vec![0.0; n_steps];
    let mut path = vec![0.0; n_steps];
    let mut acc = Accumulator::default();

    for _ in 0..n_paths {
        rng.fill_normal(&mut normals);
        simulator.fill_path(&normals, &mut path);
        let mut value = payoff(&path);
        if antithetic {
            simulator.fill_antithetic_path(&normals, &mut path);
            value = 0.5 * (value + payoff(&path));
        }
        acc.push(value);
    }

    acc
}

/// Monte Carlo pricing engine.
///
/// Stateless between calls: every pricing call starts from the configured
/// seed, so repeated calls with the same inputs return the same result.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionSpec, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::path_dependent::AsianPayoff;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(12)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let pricer = MonteCarloPricer::new(config).unwrap();
/// let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
/// let payoff = AsianPayoff::arithmetic(OptionType::Call, 100.0);
///
/// let result = pricer.price_asian(&spec, &payoff).unwrap();
/// println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    cancellation: Option<CancellationToken>,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancellation: None,
        })
    }

    /// Attaches a cancellation token checked between chunks.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Prices an Asian option on a single thread.
    ///
    /// # Errors
    ///
    /// - `McError::Cancelled` if the token trips before the run completes
    /// - `McError::NumericalInstability` if the estimate is not finite
    pub fn price_asian(
        &self,
        spec: &OptionSpec<f64>,
        payoff: &AsianPayoff<f64>,
    ) -> Result<PricingResult, McError> {
        self.price_path_dependent(spec, |path| payoff.evaluate(path))
    }

    /// Prices an Asian option across the rayon thread pool.
    ///
    /// Matches [`price_asian`](Self::price_asian) for the same
    /// configuration.
    ///
    /// # Errors
    ///
    /// As [`price_asian`](Self::price_asian).
    pub fn price_asian_parallel(
        &self,
        spec: &OptionSpec<f64>,
        payoff: &AsianPayoff<f64>,
    ) -> Result<PricingResult, McError> {
        self.price_path_dependent_parallel(spec, |path| payoff.evaluate(path))
    }

    /// Prices a European option by simulating to maturity.
    ///
    /// Uses the configured step count; only the terminal price enters the
    /// payoff.
    ///
    /// # Errors
    ///
    /// As [`price_asian`](Self::price_asian).
    pub fn price_european(
        &self,
        spec: &OptionSpec<f64>,
        payoff: &Payoff<f64>,
    ) -> Result<PricingResult, McError> {
        self.price_path_dependent(spec, |path| {
            payoff.evaluate(path.last().copied().unwrap_or(f64::NAN))
        })
    }

    /// Prices an arbitrary path payoff on a single thread.
    ///
    /// `payoff` receives the `n_steps` monitored prices of one path and
    /// returns the undiscounted payoff.
    ///
    /// # Errors
    ///
    /// As [`price_asian`](Self::price_asian).
    pub fn price_path_dependent<F>(
        &self,
        spec: &OptionSpec<f64>,
        payoff: F,
    ) -> Result<PricingResult, McError>
    where
        F: Fn(&[f64]) -> f64,
    {
        let simulator = PathSimulator::new(spec, self.config.n_steps())?;
        let n_paths = self.config.n_paths();
        let chunk_size = self.config.chunk_size();
        let _span = debug_span!(
            "mc_run",
            mode = "sequential",
            n_paths,
            n_steps = self.config.n_steps(),
            seed = self.config.seed(),
        )
        .entered();

        let mut rng = PricerRng::from_seed(self.config.seed());
        let mut acc = Accumulator::default();
        let mut start = 0;

        while start < n_paths {
            if self.is_cancelled() {
                debug!(completed_paths = start, "Monte Carlo run cancelled");
                return Err(McError::Cancelled {
                    completed_paths: start,
                });
            }
            let len = chunk_size.min(n_paths - start);
            let partial =
                simulate_chunk(&simulator, &payoff, self.config.antithetic(), &mut rng, len);
            acc = acc.merge(partial);
            start += len;
        }

        let result = acc.finish(spec.discount_factor())?;
        debug!(
            price = result.price,
            std_error = result.std_error,
            "Monte Carlo run complete"
        );
        Ok(result)
    }

    /// Prices an arbitrary path payoff across the rayon thread pool.
    ///
    /// Each chunk builds its own stream with
    /// [`PricerRng::for_stream`], so no generator is shared between
    /// threads.
    ///
    /// # Errors
    ///
    /// As [`price_asian`](Self::price_asian).
    pub fn price_path_dependent_parallel<F>(
        &self,
        spec: &OptionSpec<f64>,
        payoff: F,
    ) -> Result<PricingResult, McError>
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        let simulator = PathSimulator::new(spec, self.config.n_steps())?;
        let n_paths = self.config.n_paths();
        let chunk_size = self.config.chunk_size();
        let n_chunks = n_paths.div_ceil(chunk_size);
        let seed = self.config.seed();
        let draws_per_path = self.config.draws_per_path();
        let antithetic = self.config.antithetic();
        let completed = AtomicUsize::new(0);

        let _span = debug_span!(
            "mc_run",
            mode = "parallel",
            n_paths,
            n_steps = self.config.n_steps(),
            seed,
            n_chunks,
        )
        .entered();

        let partials = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                if self.is_cancelled() {
                    return Err(McError::Cancelled {
                        completed_paths: completed.load(Ordering::Relaxed),
                    });
                }
                let start = chunk * chunk_size;
                let len = chunk_size.min(n_paths - start);
                let mut rng = PricerRng::for_stream(seed, start as u64 * draws_per_path);
                let partial = simulate_chunk(&simulator, &payoff, antithetic, &mut rng, len);
                completed.fetch_add(len, Ordering::Relaxed);
                Ok(partial)
            })
            .collect::<Result<Vec<_>, McError>>()?;

        let acc = partials
            .into_iter()
            .fold(Accumulator::default(), Accumulator::merge);
        let result = acc.finish(spec.discount_factor())?;
        debug!(
            price = result.price,
            std_error = result.std_error,
            "Monte Carlo run complete"
        );
        Ok(result)
    }
}
