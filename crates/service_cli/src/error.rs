//! CLI error types

use pricer_core::types::{DateError, PricingError};
use pricer_optimiser::implied_vol::ImpliedVolError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract failed validation
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Monte Carlo settings out of range
    #[error("Monte Carlo error: {0}")]
    MonteCarlo(#[from] pricer_pricing::mc::ConfigError),

    /// Implied volatility could not be solved
    #[error("Implied volatility error: {0}")]
    ImpliedVol(#[from] ImpliedVolError),

    /// Date parsing error
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pricing_error() {
        let err: CliError = PricingError::InvalidContract("spot must be positive".into()).into();
        assert_eq!(
            err.to_string(),
            "Pricing error: Invalid contract: spot must be positive"
        );
    }

    #[test]
    fn test_from_monte_carlo_error() {
        let err: CliError = pricer_pricing::mc::ConfigError::InvalidPathCount(0).into();
        assert!(err.to_string().starts_with("Monte Carlo error: Invalid path count 0"));
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigError::Invalid(vec!["a".into(), "b".into()]).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration: a; b"
        );
    }
}
