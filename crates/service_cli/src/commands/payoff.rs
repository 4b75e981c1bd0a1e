//! Payoff command implementation
//!
//! Writes the payoff-at-expiry grid used to draw payoff diagrams.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::instruments::{payoff_curve, DEFAULT_POINTS};
use service_cli::output::write_payoff_csv;
use service_cli::Result;
use tracing::info;

/// Arguments of `option-pricer payoff`
#[derive(Debug, Args)]
pub struct PayoffArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Option type (call or put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Number of grid points
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Output CSV file (stdout when absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the payoff command
pub fn run(args: &PayoffArgs) -> Result<()> {
    let points = payoff_curve(args.option_type, args.strike, args.spot, args.points)?;

    match &args.output {
        Some(path) => {
            write_payoff_csv(&points, File::create(path)?)?;
            info!(path = %path.display(), points = points.len(), "Payoff grid written");
        }
        None => write_payoff_csv(&points, io::stdout().lock())?,
    }
    Ok(())
}
