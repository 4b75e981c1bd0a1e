//! Price command implementation
//!
//! Values one option with every pricer and prints the report.

use clap::{Args, ValueEnum};
use pricer_core::types::{Date, OptionType};
use service_cli::config::PricerConfig;
use service_cli::output::{render_table, to_json};
use service_cli::valuation::{value, MarketInputs, Maturity, ValuationRequest};
use service_cli::{CliError, Result};
use tracing::info;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, NaN as null
    Json,
    /// Text table, NaN as N/A
    Table,
}

/// Arguments of `option-pricer price`
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Underlying identifier (display only)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "expiry", required_unless_present = "expiry")]
    pub maturity: Option<Date>,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: Option<f64>,

    /// Valuation date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub valuation_date: Option<Date>,

    /// Risk-free rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Dividend yield in percent
    #[arg(long)]
    pub div_yield: Option<f64>,

    /// Volatility in percent
    #[arg(long)]
    pub vol: Option<f64>,

    /// Historical volatility as a decimal, used when --vol is absent
    #[arg(long)]
    pub hist_vol: Option<f64>,

    /// Market dividend yield as a decimal, used when --div-yield is absent
    #[arg(long)]
    pub market_div_yield: Option<f64>,

    /// Option type (call or put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Number of Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,

    /// Number of Monte Carlo time steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Observed option price, enables implied volatility
    #[arg(long)]
    pub market_price: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl PriceArgs {
    fn request(&self) -> Result<ValuationRequest> {
        let maturity = match (self.maturity, self.expiry) {
            (Some(date), _) => Maturity::Date(date),
            (None, Some(years)) => Maturity::YearFraction(years),
            (None, None) => {
                return Err(CliError::InvalidArgument(
                    "one of --maturity or --expiry is required".to_string(),
                ))
            }
        };

        Ok(ValuationRequest {
            ticker: self.ticker.clone(),
            strike: self.strike,
            maturity,
            valuation_date: self.valuation_date,
            rate_pct: self.rate,
            dividend_yield_pct: self.div_yield,
            volatility_pct: self.vol,
            option_type: self.option_type,
            n_paths: self.paths,
            n_steps: self.steps,
            seed: self.seed,
            market_price: self.market_price,
        })
    }

    fn market(&self) -> MarketInputs {
        MarketInputs {
            spot: self.spot,
            hist_vol: self.hist_vol,
            dividend_yield: self.market_div_yield,
        }
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &PricerConfig) -> Result<()> {
    let request = args.request()?;
    info!(
        ticker = args.ticker.as_deref().unwrap_or("-"),
        spot = args.spot,
        strike = args.strike,
        option_type = %args.option_type,
        "Starting valuation"
    );

    let report = value(&request, &args.market(), config)?;

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Table => print!("{}", render_table(&report)),
    }

    info!("Valuation complete");
    Ok(())
}
