//! Implied volatility command implementation

use clap::Args;
use pricer_core::types::{ContractSpec, OptionType};
use service_cli::config::PricerConfig;
use service_cli::output::format_value;
use service_cli::Result;
use tracing::info;

/// Arguments of `option-pricer implied-vol`
#[derive(Debug, Args)]
pub struct ImpliedVolArgs {
    /// Observed option price
    #[arg(long)]
    pub market_price: f64,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Risk-free rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Dividend yield in percent
    #[arg(long, default_value_t = 0.0)]
    pub div_yield: f64,

    /// Option type (call or put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

/// Run the implied-vol command
///
/// Prints the volatility as a decimal; a failure is returned as an error
/// carrying its reason.
pub fn run(args: &ImpliedVolArgs, config: &PricerConfig) -> Result<()> {
    let contract = ContractSpec::new(
        args.spot,
        args.strike,
        args.expiry,
        args.rate / 100.0,
        config.default_volatility,
        args.option_type,
    )
    .with_dividend_yield(args.div_yield / 100.0);

    let solver = config.implied_vol.solver();
    let sigma = solver.solve(args.market_price, &contract, args.option_type)?;

    info!(sigma, market_price = args.market_price, "Implied volatility solved");
    println!("{}", format_value(sigma, 8));
    Ok(())
}
