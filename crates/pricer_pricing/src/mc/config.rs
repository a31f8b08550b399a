//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! pricing simulations.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default number of paths per parallel work unit.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps (monitoring points) per path.
    n_steps: usize,
    /// Seed of the random stream.
    seed: u64,
    seeded_from_clock: bool,
    /// Whether each draw vector is reused with flipped sign.
    antithetic: bool,
    /// Paths per parallel work unit.
    chunk_size: usize,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::MonteCarloConfig;
    ///
    /// let config = MonteCarloConfig::builder()
    ///     .n_paths(1000)
    ///     .n_steps(100)
    ///     .seed(7)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the seed of the random stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the seed was taken from the system clock.
    #[inline]
    pub fn seeded_from_clock(&self) -> bool {
        self.seeded_from_clock
    }

    /// Whether antithetic variates are enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the number of paths per parallel work unit.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Normal draws consumed per path.
    #[inline]
    pub fn draws_per_path(&self) -> u64 {
        self.n_steps as u64
    }

    /// Returns a copy with a different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed,
            seeded_from_clock: false,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time. A seed is mandatory; call
/// [`seed_from_clock`](Self::seed_from_clock) to opt in to a
/// non-reproducible run instead.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ConfigError, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)  // Daily steps for 1 year
///     .seed(12345)
///     .antithetic(true)
///     .build()
///     .expect("valid config");
/// assert!(config.antithetic());
///
/// let missing = MonteCarloConfig::builder().n_paths(10).n_steps(10).build();
/// assert_eq!(missing, Err(ConfigError::MissingSeed));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    clock_seed: bool,
    antithetic: bool,
    chunk_size: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps in [1, 10_000]
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seeds from the system clock at build time.
    ///
    /// Runs built this way are not reproducible. Ignored if an explicit
    /// seed is also set.
    #[inline]
    pub fn seed_from_clock(mut self) -> Self {
        self.clock_seed = true;
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the number of paths per parallel work unit.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` not set or invalid
    /// - `n_steps` not set or invalid
    /// - no seed was given and clock seeding was not requested
    /// - `chunk_size` is 0
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let (seed, seeded_from_clock) = match (self.seed, self.clock_seed) {
            (Some(seed), _) => (seed, false),
            (None, true) => {
                let seed = clock_seed();
                warn!(seed, "Monte Carlo seed taken from system clock; run is not reproducible");
                (seed, true)
            }
            (None, false) => return Err(ConfigError::MissingSeed),
        };

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed,
            seeded_from_clock,
            antithetic: self.antithetic,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MonteCarloConfigBuilder {
        MonteCarloConfig::builder().n_paths(1000).n_steps(100).seed(42)
    }

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), 1);
        assert!(!config.antithetic());
        assert!(!config.seeded_from_clock());
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.draws_per_path(), 252);
    }

    #[test]
    fn test_config_missing_seed() {
        let result = MonteCarloConfig::builder().n_paths(10).n_steps(10).build();
        assert_eq!(result, Err(ConfigError::MissingSeed));
    }

    #[test]
    fn test_config_clock_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(10)
            .seed_from_clock()
            .build()
            .unwrap();
        assert!(config.seeded_from_clock());
    }

    #[test]
    fn test_explicit_seed_wins_over_clock() {
        let config = base().seed_from_clock().build().unwrap();
        assert_eq!(config.seed(), 42);
        assert!(!config.seeded_from_clock());
    }

    #[test]
    fn test_with_seed() {
        let config = base().build().unwrap().with_seed(9);
        assert_eq!(config.seed(), 9);
        assert_eq!(config.n_paths(), 1000);
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = base().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = base().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let result = base().n_steps(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_steps() {
        let result = base().n_steps(MAX_STEPS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_config_invalid_chunk_size() {
        let result = base().chunk_size(0).build();
        assert_eq!(result, Err(ConfigError::InvalidChunkSize(0)));
    }

    #[test]
    fn test_config_missing_paths() {
        let result = MonteCarloConfig::builder().n_steps(100).seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));
    }

    #[test]
    fn test_config_missing_steps() {
        let result = MonteCarloConfig::builder().n_paths(1000).seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_steps",
                ..
            })
        ));
    }
}
