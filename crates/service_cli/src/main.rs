//! Option Pricer CLI - Command Line Valuation of European Options
//!
//! # Commands
//!
//! - `option-pricer price` - Analytic price and Greeks, Monte Carlo estimate
//!   and, given a market price, implied volatility
//! - `option-pricer implied-vol` - Implied volatility of a quoted option
//! - `option-pricer payoff` - Payoff-at-expiry grid as CSV
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this binary loads configuration,
//! initialises logging and dispatches to the command implementations.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::config::build_config;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// European option valuation CLI
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value an option with every pricer
    Price(commands::price::PriceArgs),

    /// Solve for the volatility implied by a market price
    ImpliedVol(commands::implied_vol::ImpliedVolArgs),

    /// Write the payoff-at-expiry grid as CSV
    Payoff(commands::payoff::PayoffArgs),
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_tracing(config.log_level.as_filter_str(), cli.verbose);
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config)?,
        Commands::ImpliedVol(args) => commands::implied_vol::run(args, &config)?,
        Commands::Payoff(args) => commands::payoff::run(args)?,
    }
    Ok(())
}
