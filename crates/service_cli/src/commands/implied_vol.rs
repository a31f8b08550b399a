//! Implied volatility command implementation
//!
//! Inverts the Black-Scholes price of a quoted option to a volatility.

use std::fmt;

use clap::ValueEnum;
use pricer_core::math::solvers::{SolverConfig, SolverResult};
use pricer_models::analytical::{BlackScholes, ImpliedVolatility};
use pricer_models::instruments::OptionType;
use tracing::info;

use super::MarketInputs;
use crate::config::SolverSettings;
use crate::Result;

/// Root-finding strategy for the inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SolveMethod {
    /// Interval bisection only.
    Bisection,
    /// Bounded Newton-Raphson only.
    Newton,
    /// Newton-Raphson, falling back to bisection.
    #[default]
    Auto,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Bisection => f.write_str("bisection"),
            SolveMethod::Newton => f.write_str("newton"),
            SolveMethod::Auto => f.write_str("auto"),
        }
    }
}

/// Output of `optpricer implied-vol`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Quoted price that was inverted.
    pub market_price: f64,
    /// Strategy requested on the command line.
    pub requested: SolveMethod,
    /// Solver output; `root` is the implied volatility.
    pub solution: SolverResult<f64>,
    /// Black-Scholes price at the implied volatility.
    pub repriced: f64,
}

/// Builds the solver from the `[solver]` settings.
pub fn solver(settings: &SolverSettings) -> Result<ImpliedVolatility<f64>> {
    let config = SolverConfig {
        tolerance: settings.tolerance,
        max_iterations: settings.max_iterations,
        ..SolverConfig::default()
    };
    Ok(ImpliedVolatility::new(config)
        .with_bracket(settings.vol_lower, settings.vol_upper)?
        .with_initial_guess(settings.initial_guess))
}

/// Run the implied-vol command
///
/// `inputs.volatility` is ignored.
pub fn run(
    inputs: &MarketInputs,
    option_type: OptionType,
    market_price: f64,
    method: SolveMethod,
    settings: &SolverSettings,
) -> Result<ImpliedVolReport> {
    // Any admissible σ will do; the solver overrides it
    let placeholder = 0.5 * (settings.vol_lower + settings.vol_upper);
    let spec = MarketInputs {
        volatility: placeholder,
        ..*inputs
    }
    .to_spec()?;
    let iv = solver(settings)?;

    let solution = match method {
        SolveMethod::Bisection => iv.bisection(&spec, option_type, market_price)?,
        SolveMethod::Newton => iv.newton(&spec, option_type, market_price)?,
        SolveMethod::Auto => iv.solve(&spec, option_type, market_price)?,
    };
    let repriced = BlackScholes::new(spec.with_volatility(solution.root)?).price(option_type);

    info!(
        %option_type,
        %method,
        volatility = solution.root,
        iterations = solution.iterations,
        "implied volatility complete"
    );
    Ok(ImpliedVolReport {
        option_type,
        market_price,
        requested: method,
        solution,
        repriced,
    })
}

impl fmt::Display for ImpliedVolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Implied volatility ({} {}, method {})",
            self.option_type, self.market_price, self.requested
        )?;
        writeln!(
            f,
            "  sigma {:.8}  via {} in {} iterations",
            self.solution.root, self.solution.method, self.solution.iterations
        )?;
        writeln!(f, "  repriced {:.8}", self.repriced)
    }
}
