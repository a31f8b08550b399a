//! Asian command implementation
//!
//! Monte Carlo prices for arithmetic or geometric average-price options,
//! reported next to the discrete geometric closed form.

use std::fmt;
use std::time::Duration;

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::OptionType;
use pricer_pricing::analytical::GeometricAsian;
use pricer_pricing::mc::{CancellationToken, MonteCarloConfig, MonteCarloPricer, PricingResult};
use pricer_pricing::path_dependent::{AsianPayoff, AveragingMethod};
use tracing::info;

use super::MarketInputs;
use crate::config::MonteCarloSettings;
use crate::Result;

/// Output of `optpricer asian`.
#[derive(Debug, Clone, PartialEq)]
pub struct AsianReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Averaging rule of the payoff.
    pub averaging: AveragingMethod,
    /// Monte Carlo estimate.
    pub result: PricingResult,
    /// Seed the run used.
    pub seed: u64,
    /// Whether the run was spread over the rayon pool.
    pub parallel: bool,
    /// Discrete geometric-average closed form on the same fixings.
    pub geometric_closed_form: f64,
    /// Black-Scholes price of the European option with the same terms.
    pub european: f64,
}

/// Builds the engine configuration from the `[monte_carlo]` settings.
pub fn engine_config(settings: &MonteCarloSettings) -> Result<MonteCarloConfig> {
    let mut builder = MonteCarloConfig::builder()
        .n_paths(settings.n_paths)
        .n_steps(settings.n_steps)
        .antithetic(settings.antithetic)
        .chunk_size(settings.chunk_size);
    if let Some(seed) = settings.seed {
        builder = builder.seed(seed);
    } else if settings.clock_seed {
        builder = builder.seed_from_clock();
    }
    Ok(builder.build()?)
}

/// Run the asian command
pub fn run(
    inputs: &MarketInputs,
    option_type: OptionType,
    averaging: AveragingMethod,
    settings: &MonteCarloSettings,
) -> Result<AsianReport> {
    let spec = inputs.to_spec()?;
    let config = engine_config(settings)?;
    let seed = config.seed();
    let n_steps = config.n_steps();

    let mut pricer = MonteCarloPricer::new(config)?;
    if let Some(secs) = settings.timeout_secs {
        pricer = pricer.with_cancellation(CancellationToken::with_timeout(Duration::from_secs(secs)));
    }

    let payoff = AsianPayoff::new(averaging, option_type.payoff(inputs.strike));
    info!(
        %option_type,
        %averaging,
        seed,
        parallel = settings.parallel,
        "starting Asian Monte Carlo run"
    );
    let result = if settings.parallel {
        pricer.price_asian_parallel(&spec, &payoff)?
    } else {
        pricer.price_asian(&spec, &payoff)?
    };

    let geometric_closed_form = GeometricAsian::new(spec, n_steps)?.price(option_type);
    let european = BlackScholes::new(spec).price(option_type);

    info!(price = result.price, std_error = result.std_error, "Asian pricing complete");
    Ok(AsianReport {
        option_type,
        averaging,
        result,
        seed,
        parallel: settings.parallel,
        geometric_closed_form,
        european,
    })
}

impl fmt::Display for AsianReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Asian {} {} ({} paths, seed {}, {})",
            self.averaging,
            self.option_type,
            self.result.n_paths,
            self.seed,
            if self.parallel { "parallel" } else { "sequential" }
        )?;
        writeln!(
            f,
            "  Monte Carlo      {:>12.6} +/- {:.6} (95%)",
            self.result.price,
            self.result.confidence_95()
        )?;
        writeln!(f, "  geometric exact  {:>12.6}", self.geometric_closed_form)?;
        writeln!(f, "  European (BS)    {:>12.6}", self.european)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_pricing::mc::{ConfigError, McError};

    fn inputs() -> MarketInputs {
        MarketInputs {
            strike: 100.0,
            rate: 0.05,
            maturity: 1.0,
            spot: 100.0,
            volatility: 0.2,
        }
    }

    fn settings() -> MonteCarloSettings {
        MonteCarloSettings {
            seed: Some(42),
            n_paths: 20_000,
            n_steps: 12,
            ..Default::default()
        }
    }

    #[test]
    fn test_geometric_run_brackets_closed_form() {
        let report = run(&inputs(), OptionType::Call, AveragingMethod::Geometric, &settings()).unwrap();
        let diff = (report.result.price - report.geometric_closed_form).abs();
        assert!(diff < 4.0 * report.result.std_error, "diff {}", diff);
        assert!(report.result.price < report.european);
    }

    #[test]
    fn test_parallel_flag_does_not_change_estimate() {
        let parallel = run(&inputs(), OptionType::Put, AveragingMethod::Arithmetic, &settings()).unwrap();
        let sequential = run(
            &inputs(),
            OptionType::Put,
            AveragingMethod::Arithmetic,
            &MonteCarloSettings {
                parallel: false,
                ..settings()
            },
        )
        .unwrap();
        assert!((parallel.result.price - sequential.result.price).abs() < 1e-10);
    }

    #[test]
    fn test_missing_seed_is_an_error() {
        let settings = MonteCarloSettings {
            seed: None,
            ..settings()
        };
        let err = run(&inputs(), OptionType::Call, AveragingMethod::Arithmetic, &settings).unwrap_err();
        assert!(matches!(err, CliError::McConfig(ConfigError::MissingSeed)));
    }

    #[test]
    fn test_zero_timeout_cancels() {
        let settings = MonteCarloSettings {
            timeout_secs: Some(0),
            ..settings()
        };
        let err = run(&inputs(), OptionType::Call, AveragingMethod::Arithmetic, &settings).unwrap_err();
        assert!(matches!(err, CliError::MonteCarlo(McError::Cancelled { .. })));
    }

    #[test]
    fn test_report_display() {
        let report = run(&inputs(), OptionType::Call, AveragingMethod::Arithmetic, &settings()).unwrap();
        let text = report.to_string();
        assert!(text.contains("arithmetic call"));
        assert!(text.contains("seed 42"));
    }
}
