//! Vanilla command implementation
//!
//! Black-Scholes prices for European calls and puts, with optional Greeks.

use std::fmt;

use pricer_models::analytical::{BlackScholes, Greeks};
use pricer_models::instruments::OptionType;
use tracing::info;

use super::MarketInputs;
use crate::Result;

/// One priced leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaQuote {
    /// Call or put.
    pub option_type: OptionType,
    /// Present value.
    pub price: f64,
    /// Sensitivities, when requested.
    pub greeks: Option<Greeks<f64>>,
}

/// Output of `optpricer vanilla`.
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaReport {
    /// Inputs the quotes were computed from.
    pub inputs: MarketInputs,
    /// One quote per requested option type.
    pub quotes: Vec<VanillaQuote>,
}

/// Run the vanilla command
///
/// Prices both legs when `option_type` is `None`.
pub fn run(
    inputs: &MarketInputs,
    option_type: Option<OptionType>,
    with_greeks: bool,
) -> Result<VanillaReport> {
    let spec = inputs.to_spec()?;
    let model = BlackScholes::new(spec);

    let types = match option_type {
        Some(option_type) => vec![option_type],
        None => vec![OptionType::Call, OptionType::Put],
    };

    let quotes = types
        .into_iter()
        .map(|option_type| VanillaQuote {
            option_type,
            price: model.price(option_type),
            greeks: with_greeks.then(|| model.greeks(option_type)),
        })
        .collect::<Vec<_>>();

    info!(n_quotes = quotes.len(), "vanilla pricing complete");
    Ok(VanillaReport {
        inputs: *inputs,
        quotes,
    })
}

impl fmt::Display for VanillaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = &self.inputs;
        writeln!(
            f,
            "Black-Scholes  K={} r={} T={} S={} sigma={}",
            i.strike, i.rate, i.maturity, i.spot, i.volatility
        )?;
        for quote in &self.quotes {
            write!(f, "  {:<4} price {:>12.6}", quote.option_type, quote.price)?;
            if let Some(g) = &quote.greeks {
                write!(
                    f,
                    "  delta {:.6} gamma {:.6} vega {:.6} theta {:.6} rho {:.6}",
                    g.delta, g.gamma, g.vega, g.theta, g.rho
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> MarketInputs {
        MarketInputs {
            strike: 100.0,
            rate: 0.05,
            maturity: 1.0,
            spot: 100.0,
            volatility: 0.2,
        }
    }

    #[test]
    fn test_both_legs_by_default() {
        let report = run(&reference(), None, false).unwrap();
        assert_eq!(report.quotes.len(), 2);
        assert_relative_eq!(report.quotes[0].price, 10.4506, epsilon = 1e-4);
        assert_relative_eq!(report.quotes[1].price, 5.5735, epsilon = 1e-4);
        assert!(report.quotes[0].greeks.is_none());
    }

    #[test]
    fn test_single_leg_with_greeks() {
        let report = run(&reference(), Some(OptionType::Put), true).unwrap();
        assert_eq!(report.quotes.len(), 1);
        let greeks = report.quotes[0].greeks.unwrap();
        assert!(greeks.delta < 0.0 && greeks.delta > -1.0);
        assert!(greeks.gamma > 0.0);
        assert!(report.to_string().contains("delta"));
    }

    #[test]
    fn test_invalid_volatility_rejected() {
        let mut inputs = reference();
        inputs.volatility = -0.1;
        assert!(run(&inputs, None, false).is_err());
    }
}
