//! CLI command implementations
//!
//! Each submodule implements one `optpricer` subcommand and returns a report
//! that `main` prints.

pub mod asian;
pub mod implied_vol;
pub mod vanilla;

use pricer_models::instruments::OptionSpec;

use crate::Result;

/// Market and contract inputs shared by every command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketInputs {
    /// Strike K.
    pub strike: f64,
    /// Continuously compounded risk-free rate r.
    pub rate: f64,
    /// Time to maturity T in years.
    pub maturity: f64,
    /// Spot S.
    pub spot: f64,
    /// Volatility σ.
    pub volatility: f64,
}

impl MarketInputs {
    /// Validated option parameters.
    pub fn to_spec(&self) -> Result<OptionSpec<f64>> {
        Ok(OptionSpec::new(
            self.strike,
            self.rate,
            self.maturity,
            self.spot,
            self.volatility,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_to_spec_rejects_negative_spot() {
        let inputs = MarketInputs {
            strike: 100.0,
            rate: 0.05,
            maturity: 1.0,
            spot: -1.0,
            volatility: 0.2,
        };
        assert!(matches!(inputs.to_spec(), Err(CliError::Instrument(_))));
    }
}
