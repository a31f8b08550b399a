//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`OPTPRICER_LOG_LEVEL`, `OPTPRICER_SEED`)
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use pricer_pricing::mc::DEFAULT_CHUNK_SIZE;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "OPTPRICER_LOG_LEVEL";

/// Environment variable overriding the Monte Carlo seed.
pub const ENV_SEED: &str = "OPTPRICER_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Seed is not an unsigned 64-bit integer.
    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    /// A numeric setting is outside its domain.
    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// File could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Solver iterations and Monte Carlo runs.
    Debug,
    /// Command progress.
    Info,
    /// Fallbacks and non-reproducible runs.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Monte Carlo section of the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Seed; required for a run unless `clock_seed` is set.
    pub seed: Option<u64>,
    /// Seed from the system clock when no seed is given.
    pub clock_seed: bool,
    /// Number of paths.
    pub n_paths: usize,
    /// Number of monitoring points per path.
    pub n_steps: usize,
    /// Antithetic variates.
    pub antithetic: bool,
    /// Use the rayon thread pool.
    pub parallel: bool,
    /// Paths per parallel work unit.
    pub chunk_size: usize,
    /// Abort the run after this many seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            seed: None,
            clock_seed: false,
            n_paths: 100_000,
            n_steps: 12,
            antithetic: false,
            parallel: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout_secs: None,
        }
    }
}

/// Root-finder section of the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Convergence tolerance on the price residual.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Lower end of the volatility bracket.
    pub vol_lower: f64,
    /// Upper end of the volatility bracket.
    pub vol_upper: f64,
    /// Newton starting point; outside the bracket the midpoint is used.
    pub initial_guess: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            vol_lower: 0.001,
            vol_upper: 5.0,
            initial_guess: 0.2,
        }
    }
}

/// Full `optpricer` configuration.
///
/// # Examples
///
/// ```
/// use service_cli::config::{CliConfig, LogLevel};
///
/// let config: CliConfig = toml::from_str(r#"
///     log_level = "debug"
///
///     [monte_carlo]
///     seed = 42
///     n_paths = 50000
/// "#).unwrap();
///
/// assert_eq!(config.log_level, LogLevel::Debug);
/// assert_eq!(config.monte_carlo.seed, Some(42));
/// assert_eq!(config.monte_carlo.n_steps, 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Monte Carlo settings.
    pub monte_carlo: MonteCarloSettings,
    /// Root-finder settings.
    pub solver: SolverSettings,
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Path count override
    pub n_paths: Option<usize>,
    /// Step count override
    pub n_steps: Option<usize>,
    /// Force antithetic variates on
    pub antithetic: bool,
    /// Force a single-threaded run
    pub sequential: bool,
    /// Timeout override in seconds
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `OPTPRICER_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(
            std::env::var(ENV_LOG_LEVEL).ok().as_deref(),
            std::env::var(ENV_SEED).ok().as_deref(),
        )
    }

    fn apply_vars(&mut self, log_level: Option<&str>, seed: Option<&str>) -> Result<(), ConfigError> {
        if let Some(level) = log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(seed) = seed {
            let parsed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.to_string()))?;
            self.monte_carlo.seed = Some(parsed);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        let mc = &mut self.monte_carlo;
        if let Some(seed) = cli.seed {
            mc.seed = Some(seed);
        }
        if let Some(n_paths) = cli.n_paths {
            mc.n_paths = n_paths;
        }
        if let Some(n_steps) = cli.n_steps {
            mc.n_steps = n_steps;
        }
        if cli.antithetic {
            mc.antithetic = true;
        }
        if cli.sequential {
            mc.parallel = false;
        }
        if let Some(timeout) = cli.timeout_secs {
            mc.timeout_secs = Some(timeout);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let solver = &self.solver;
        if !(solver.tolerance.is_finite() && solver.tolerance > 0.0) {
            return Err(ConfigError::InvalidSetting {
                name: "solver.tolerance",
                reason: format!("must be positive, got {}", solver.tolerance),
            });
        }
        if solver.max_iterations == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "solver.max_iterations",
                reason: "must be positive".to_string(),
            });
        }
        if !(solver.vol_lower > 0.0 && solver.vol_lower < solver.vol_upper) {
            return Err(ConfigError::InvalidSetting {
                name: "solver.vol_lower",
                reason: format!(
                    "bracket must satisfy 0 < lower < upper, got [{}, {}]",
                    solver.vol_lower, solver.vol_upper
                ),
            });
        }
        if !solver.initial_guess.is_finite() {
            return Err(ConfigError::InvalidSetting {
                name: "solver.initial_guess",
                reason: format!("must be finite, got {}", solver.initial_guess),
            });
        }
        if self.monte_carlo.chunk_size == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "monte_carlo.chunk_size",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Build configuration from all sources
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.monte_carlo.seed, None);
        assert_eq!(config.monte_carlo.n_paths, 100_000);
        assert!(config.monte_carlo.parallel);
        assert_eq!(config.solver.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("invalid").is_err());
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_env_vars_applied() {
        let mut config = CliConfig::default();
        config.apply_vars(Some("debug"), Some(" 77 ")).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.monte_carlo.seed, Some(77));
    }

    #[test]
    fn test_bad_env_seed_rejected() {
        let mut config = CliConfig::default();
        let err = config.apply_vars(None, Some("-3")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        config.monte_carlo.seed = Some(1);
        let cli = CliOverrides {
            log_level: Some("info".to_string()),
            seed: Some(9),
            n_paths: Some(500),
            sequential: true,
            antithetic: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.monte_carlo.seed, Some(9));
        assert_eq!(config.monte_carlo.n_paths, 500);
        assert!(!config.monte_carlo.parallel);
        assert!(config.monte_carlo.antithetic);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str(
            r#"
            [solver]
            tolerance = 1e-6
        "#,
        )
        .unwrap();
        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.vol_upper, 5.0);
        assert_eq!(config.monte_carlo, MonteCarloSettings::default());
    }

    #[test]
    fn test_bad_log_level_in_toml() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_initial_guess() {
        let mut config = CliConfig::default();
        config.solver.initial_guess = -0.5;
        assert!(config.validate().is_ok());

        config.solver.initial_guess = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting { name: "solver.initial_guess", .. })
        ));
    }

    #[test]
    fn test_validate_bracket() {
        let mut config = CliConfig::default();
        config.solver.vol_lower = 2.0;
        config.solver.vol_upper = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting { name: "solver.vol_lower", .. })
        ));
    }
}
