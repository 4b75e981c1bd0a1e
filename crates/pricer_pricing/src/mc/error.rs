//! Error types for the Monte Carlo simulator.
//!
//! Simulation itself cannot fail: degenerate market inputs propagate as NaN
//! and an expired contract short-circuits to intrinsic value. The only
//! errors are configuration errors raised when a [`super::MonteCarloConfig`]
//! is built.

use std::fmt;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Step count outside valid range [1, 10_000].
    InvalidStepCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, {}]",
                    count, MAX_PATHS
                )
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "Invalid step count {}: must be in range [1, {}]",
                    count, MAX_STEPS
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));
        assert!(err.to_string().contains("10000000"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));

        let err = ConfigError::InvalidParameter {
            name: "batch_size",
            value: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'batch_size': must be positive"
        );
    }
}
