//! Valuation orchestration
//!
//! Turns a request expressed in market conventions (percentages, a maturity
//! date, optional overrides) into a [`ContractSpec`] and runs every pricer
//! on it. The report is always produced once the contract is well formed;
//! an implied volatility that cannot be solved is recorded as a reason
//! rather than failing the request.

use pricer_core::types::{year_fraction, ContractSpec, Date, OptionType};
use pricer_models::analytical::{black_scholes, PricingResult};
use pricer_pricing::mc::{MonteCarloResult, MonteCarloSimulator};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::PricerConfig;
use crate::Result;

/// When the option expires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Maturity {
    /// Calendar expiry date, converted with ACT/365F against the valuation date.
    Date(Date),
    /// Time to expiry in years.
    YearFraction(f64),
}

/// A single valuation request.
///
/// Rates, dividend yields and volatilities are given in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    /// Underlying identifier, for display only
    pub ticker: Option<String>,
    /// Strike price
    pub strike: f64,
    /// Expiry
    pub maturity: Maturity,
    /// Valuation date (defaults to today)
    pub valuation_date: Option<Date>,
    /// Risk-free rate in percent
    pub rate_pct: f64,
    /// Dividend yield in percent, overriding the market value
    pub dividend_yield_pct: Option<f64>,
    /// Volatility in percent, overriding the historical value
    pub volatility_pct: Option<f64>,
    /// Call or put
    pub option_type: OptionType,
    /// Monte Carlo path count (config default when absent)
    pub n_paths: Option<usize>,
    /// Monte Carlo step count (config default when absent)
    pub n_steps: Option<usize>,
    /// Monte Carlo seed (config default when absent)
    pub seed: Option<u64>,
    /// Observed option price for implied volatility
    pub market_price: Option<f64>,
}

impl ValuationRequest {
    /// Request with only the required fields set.
    pub fn new(strike: f64, maturity: Maturity, rate_pct: f64, option_type: OptionType) -> Self {
        Self {
            ticker: None,
            strike,
            maturity,
            valuation_date: None,
            rate_pct,
            dividend_yield_pct: None,
            volatility_pct: None,
            option_type,
            n_paths: None,
            n_steps: None,
            seed: None,
            market_price: None,
        }
    }
}

/// Market data resolved before valuation.
///
/// Values are decimals (0.25 for 25%).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketInputs {
    /// Current spot price
    pub spot: f64,
    /// Annualised historical volatility
    pub hist_vol: Option<f64>,
    /// Continuous dividend yield
    pub dividend_yield: Option<f64>,
}

impl MarketInputs {
    /// Inputs with a spot price only.
    pub fn spot(spot: f64) -> Self {
        Self {
            spot,
            ..Self::default()
        }
    }
}

/// Where the volatility used for pricing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilitySource {
    /// Supplied with the request
    Input,
    /// Historical volatility of the underlying
    Historical,
    /// Configured fallback
    Default,
}

/// Resolved inputs echoed in the report (all decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInputs {
    /// Underlying identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Call or put
    pub option_type: OptionType,
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Valuation date
    pub valuation_date: Date,
    /// Expiry date, when given as a date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Date>,
    /// Time to expiry in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Dividend yield
    pub dividend_yield: f64,
    /// Volatility
    pub volatility: f64,
    /// Origin of `volatility`
    pub volatility_source: VolatilitySource,
    /// Monte Carlo seed
    pub seed: u64,
    /// Observed option price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_price: Option<f64>,
}

impl ReportInputs {
    /// Contract described by these inputs.
    pub fn contract(&self) -> ContractSpec {
        ContractSpec::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
        .with_dividend_yield(self.dividend_yield)
    }
}

/// Implied volatility outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImpliedVolReport {
    /// Solved volatility
    Solved {
        /// Implied volatility (decimal)
        volatility: f64,
    },
    /// No volatility could be found
    Failed {
        /// Machine-readable reason tag
        reason: String,
        /// Human-readable explanation
        message: String,
    },
}

/// Results of all pricers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResults {
    /// Closed-form price and Greeks
    pub analytic: PricingResult,
    /// Monte Carlo estimate
    pub monte_carlo: MonteCarloResult,
    /// Present only when a market price was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<ImpliedVolReport>,
}

/// Full valuation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationReport {
    /// Resolved inputs
    pub inputs: ReportInputs,
    /// Pricer outputs
    pub results: ValuationResults,
}

/// Resolves the request against market data and prices it.
///
/// # Errors
///
/// Fails only on malformed construction: non-positive spot or strike,
/// non-finite values, or Monte Carlo counts outside their limits. Negative
/// volatility yields NaN sentinels and a lapsed expiry prices at intrinsic.
pub fn value(
    request: &ValuationRequest,
    market: &MarketInputs,
    config: &PricerConfig,
) -> Result<ValuationReport> {
    let inputs = resolve_inputs(request, market, config);
    let contract = inputs.contract();
    contract.validate_inputs()?;

    let mc_config = config
        .monte_carlo
        .to_config(request.n_paths, request.n_steps, request.seed)?;
    debug!(?contract, "valuing contract");

    let analytic = black_scholes::pricing(&contract, inputs.option_type);
    let monte_carlo = MonteCarloSimulator::new(mc_config)?.simulate(&contract, inputs.option_type);

    let implied_volatility = request.market_price.map(|market_price| {
        match config
            .implied_vol
            .solver()
            .solve(market_price, &contract, inputs.option_type)
        {
            Ok(volatility) => ImpliedVolReport::Solved { volatility },
            Err(err) => {
                warn!(market_price, error = %err, "implied volatility not available");
                ImpliedVolReport::Failed {
                    reason: err.reason().to_string(),
                    message: err.to_string(),
                }
            }
        }
    });

    Ok(ValuationReport {
        inputs,
        results: ValuationResults {
            analytic,
            monte_carlo,
            implied_volatility,
        },
    })
}

/// Applies the unit conversions and fallbacks.
///
/// - `r = rate_pct / 100`
/// - `q = dividend_yield_pct / 100`, else the market yield, else 0
/// - `σ = volatility_pct / 100`, else a positive historical vol, else the configured default
/// - `T` from the maturity date by ACT/365F or the given year fraction, floored at zero
pub fn resolve_inputs(
    request: &ValuationRequest,
    market: &MarketInputs,
    config: &PricerConfig,
) -> ReportInputs {
    let valuation_date = request.valuation_date.unwrap_or_else(Date::today);
    let (maturity, expiry) = match request.maturity {
        Maturity::Date(date) => (Some(date), year_fraction(valuation_date, date)),
        Maturity::YearFraction(years) => (None, years.max(0.0)),
    };

    let dividend_yield = request
        .dividend_yield_pct
        .map(|pct| pct / 100.0)
        .or(market.dividend_yield)
        .unwrap_or(0.0);

    let (volatility, volatility_source) = match (request.volatility_pct, market.hist_vol) {
        (Some(pct), _) => (pct / 100.0, VolatilitySource::Input),
        (None, Some(hist)) if hist.is_finite() && hist > 0.0 => {
            (hist, VolatilitySource::Historical)
        }
        (None, _) => (config.default_volatility, VolatilitySource::Default),
    };

    ReportInputs {
        ticker: request.ticker.clone(),
        option_type: request.option_type,
        spot: market.spot,
        strike: request.strike,
        valuation_date,
        maturity,
        expiry,
        rate: request.rate_pct / 100.0,
        dividend_yield,
        volatility,
        volatility_source,
        seed: request.seed.unwrap_or(config.monte_carlo.seed),
        market_price: request.market_price,
    }
}
