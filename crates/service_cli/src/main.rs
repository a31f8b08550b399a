//! optpricer - option pricing from the command line
//!
//! # Commands
//!
//! - `optpricer vanilla` - Black-Scholes prices and Greeks
//! - `optpricer asian` - Monte Carlo Asian option with closed-form check
//! - `optpricer implied-vol --price <P>` - implied volatility of a quoted option
//!
//! # Architecture
//!
//! As the service layer, this binary only parses arguments, loads the
//! configuration and installs the tracing subscriber; pricing lives in the
//! `pricer_*` crates.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricer_models::instruments::OptionType;
use pricer_pricing::path_dependent::AveragingMethod;
use service_cli::commands::implied_vol::SolveMethod;
use service_cli::commands::{asian, implied_vol, vanilla, MarketInputs};
use service_cli::config::{build_config, CliOverrides};
use service_cli::{CliError, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Option pricing and implied volatility
#[derive(Parser, Debug)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    market: MarketArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Contract and market inputs
#[derive(Args, Debug)]
struct MarketArgs {
    /// Strike price
    #[arg(short = 'k', long, global = true, default_value_t = 100.0)]
    strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, global = true, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,

    /// Time to maturity in years
    #[arg(short = 't', long, global = true, default_value_t = 1.0)]
    maturity: f64,

    /// Spot price
    #[arg(short, long, global = true, default_value_t = 100.0)]
    spot: f64,

    /// Volatility
    #[arg(short = 'v', long, global = true, default_value_t = 0.2)]
    volatility: f64,
}

impl From<&MarketArgs> for MarketInputs {
    fn from(args: &MarketArgs) -> Self {
        MarketInputs {
            strike: args.strike,
            rate: args.rate,
            maturity: args.maturity,
            spot: args.spot,
            volatility: args.volatility,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price European options with Black-Scholes
    Vanilla {
        /// Price a single leg (call or put) instead of both
        #[arg(long, value_parser = parse_option_type)]
        option_type: Option<OptionType>,

        /// Also print delta, gamma, vega, theta and rho
        #[arg(long)]
        greeks: bool,
    },

    /// Price an Asian option by Monte Carlo
    Asian {
        /// Call or put
        #[arg(long, value_parser = parse_option_type, default_value = "call")]
        option_type: OptionType,

        /// Averaging rule (arithmetic or geometric)
        #[arg(long, value_parser = parse_averaging, default_value = "arithmetic")]
        averaging: AveragingMethod,

        /// Seed for the random stream
        #[arg(long)]
        seed: Option<u64>,

        /// Number of simulated paths
        #[arg(short = 'n', long)]
        paths: Option<usize>,

        /// Number of averaging dates
        #[arg(long)]
        steps: Option<usize>,

        /// Use antithetic variates
        #[arg(long)]
        antithetic: bool,

        /// Run on a single thread
        #[arg(long)]
        sequential: bool,

        /// Abort after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Back out the implied volatility from a quoted price
    ImpliedVol {
        /// Quoted option price
        #[arg(short, long)]
        price: f64,

        /// Call or put
        #[arg(long, value_parser = parse_option_type, default_value = "call")]
        option_type: OptionType,

        /// Root-finding method
        #[arg(long, value_enum, default_value_t = SolveMethod::Auto)]
        method: SolveMethod,
    },
}

fn parse_option_type(s: &str) -> std::result::Result<OptionType, String> {
    s.parse::<OptionType>().map_err(|e| e.to_string())
}

fn parse_averaging(s: &str) -> std::result::Result<AveragingMethod, String> {
    s.parse::<AveragingMethod>()
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self.log_level.clone(),
            ..Default::default()
        };
        if let Commands::Asian {
            seed,
            paths,
            steps,
            antithetic,
            sequential,
            timeout,
            ..
        } = &self.command
        {
            overrides.seed = *seed;
            overrides.n_paths = *paths;
            overrides.n_steps = *steps;
            overrides.antithetic = *antithetic;
            overrides.sequential = *sequential;
            overrides.timeout_secs = *timeout;
        }
        overrides
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
    }
    let config = build_config(cli.config.as_deref(), &cli.overrides())?;

    init_tracing(config.log_level.as_filter_str());
    info!(log_level = %config.log_level, "optpricer configuration loaded");

    let inputs = MarketInputs::from(&cli.market);
    match cli.command {
        Commands::Vanilla {
            option_type,
            greeks,
        } => print!("{}", vanilla::run(&inputs, option_type, greeks)?),
        Commands::Asian {
            option_type,
            averaging,
            ..
        } => print!(
            "{}",
            asian::run(&inputs, option_type, averaging, &config.monte_carlo)?
        ),
        Commands::ImpliedVol {
            price,
            option_type,
            method,
        } => print!(
            "{}",
            implied_vol::run(&inputs, option_type, price, method, &config.solver)?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_asian_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "optpricer",
            "--log-level",
            "debug",
            "asian",
            "--seed",
            "7",
            "-n",
            "1000",
            "--sequential",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert_eq!(overrides.seed, Some(7));
        assert_eq!(overrides.n_paths, Some(1000));
        assert!(overrides.sequential);
        assert!(!overrides.antithetic);
    }

    #[test]
    fn test_market_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "optpricer",
            "implied-vol",
            "--price",
            "10.45",
            "--strike",
            "95",
            "--option-type",
            "put",
            "--method",
            "bisection",
        ])
        .unwrap();
        assert_eq!(MarketInputs::from(&cli.market).strike, 95.0);
        match cli.command {
            Commands::ImpliedVol {
                option_type,
                method,
                ..
            } => {
                assert_eq!(option_type, OptionType::Put);
                assert_eq!(method, SolveMethod::Bisection);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
