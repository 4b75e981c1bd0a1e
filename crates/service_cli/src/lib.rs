//! # service_cli
//!
//! Command-line valuation of European options.
//!
//! As part of the **S**ervice layer, this crate resolves user inputs and
//! market data into a contract and orchestrates the pricer layers:
//! closed-form price and Greeks (`pricer_models`), Monte Carlo
//! (`pricer_pricing`) and implied volatility (`pricer_optimiser`).
//!
//! ## Modules
//!
//! - [`config`]: `pricer.toml` and `PRICER_*` environment settings
//! - [`valuation`]: request resolution and the valuation report
//! - [`output`]: JSON, text table and CSV rendering
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use service_cli::config::PricerConfig;
//! use service_cli::valuation::{value, MarketInputs, Maturity, ValuationRequest};
//!
//! let mut request = ValuationRequest::new(100.0, Maturity::YearFraction(1.0), 5.0, OptionType::Call);
//! request.volatility_pct = Some(20.0);
//! request.market_price = Some(10.4506);
//!
//! let report = value(&request, &MarketInputs::spot(100.0), &PricerConfig::default()).unwrap();
//! assert!((report.results.analytic.price - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod output;
pub mod valuation;

pub use error::{CliError, Result};
