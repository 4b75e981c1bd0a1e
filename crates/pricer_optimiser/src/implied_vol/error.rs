//! Implied volatility error types.
//!
//! Each failure mode of the inversion is a distinct variant so callers can
//! tell an unreachable quote from a solver that ran out of iterations.

use pricer_core::types::SolverError;
use thiserror::Error;

/// Errors that can occur while solving for implied volatility.
///
/// # Variants
///
/// - `InvalidContract`: expired or malformed contract, no volatility to find
/// - `InvalidMarketPrice`: the quote is not a finite, non-negative number
/// - `InvalidBracket`: the search interval is empty or not positive
/// - `RootNotBracketed`: no sign change over the search interval
/// - `RootNotConverged`: iteration budget exhausted
/// - `InvalidRoot`: the solver returned a non-positive or non-finite value
///
/// # Examples
///
/// ```
/// use pricer_optimiser::implied_vol::ImpliedVolError;
///
/// let err = ImpliedVolError::RootNotBracketed { low: 1e-6, high: 5.0 };
/// assert!(err.to_string().contains("[0.000001, 5]"));
/// assert_eq!(err.reason(), "root_not_bracketed");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpliedVolError {
    /// Contract cannot carry an implied volatility.
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    /// Market price is unusable.
    #[error("Invalid market price: {price}")]
    InvalidMarketPrice {
        /// The rejected quote
        price: f64,
    },

    /// Search interval is not a positive, non-empty range.
    #[error("Invalid volatility bracket [{low}, {high}]")]
    InvalidBracket {
        /// Lower volatility bound
        low: f64,
        /// Upper volatility bound
        high: f64,
    },

    /// Model prices at both ends of the bracket lie on the same side of the quote.
    #[error("Implied volatility not bracketed in [{low}, {high}]")]
    RootNotBracketed {
        /// Lower volatility bound
        low: f64,
        /// Upper volatility bound
        high: f64,
    },

    /// Brent iteration budget exhausted.
    #[error("Implied volatility did not converge after {iterations} iterations")]
    RootNotConverged {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Solver produced a volatility that is not usable.
    #[error("Invalid implied volatility root: {root}")]
    InvalidRoot {
        /// The rejected root
        root: f64,
    },
}

impl ImpliedVolError {
    /// Stable snake-case tag for reports.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidContract(_) => "invalid_contract",
            Self::InvalidMarketPrice { .. } => "invalid_market_price",
            Self::InvalidBracket { .. } => "invalid_bracket",
            Self::RootNotBracketed { .. } => "root_not_bracketed",
            Self::RootNotConverged { .. } => "root_not_converged",
            Self::InvalidRoot { .. } => "invalid_root",
        }
    }

    /// Maps a root-finding failure over `[low, high]` onto the inversion taxonomy.
    pub(crate) fn from_solver(err: SolverError, low: f64, high: f64) -> Self {
        match err {
            SolverError::NoBracket { .. } => Self::RootNotBracketed { low, high },
            SolverError::MaxIterationsExceeded { iterations } => {
                Self::RootNotConverged { iterations }
            }
            SolverError::NumericalInstability(msg) => Self::InvalidContract(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImpliedVolError::RootNotConverged { iterations: 200 };
        assert_eq!(
            err.to_string(),
            "Implied volatility did not converge after 200 iterations"
        );

        let err = ImpliedVolError::InvalidMarketPrice { price: f64::NAN };
        assert_eq!(err.to_string(), "Invalid market price: NaN");

        let err = ImpliedVolError::InvalidContract("expiry must be positive".to_string());
        assert!(err.to_string().starts_with("Invalid contract"));
    }

    #[test]
    fn test_from_solver_no_bracket() {
        let err = ImpliedVolError::from_solver(SolverError::NoBracket { a: 1e-6, b: 5.0 }, 1e-6, 5.0);
        assert_eq!(
            err,
            ImpliedVolError::RootNotBracketed {
                low: 1e-6,
                high: 5.0
            }
        );
    }

    #[test]
    fn test_from_solver_max_iterations() {
        let err = ImpliedVolError::from_solver(
            SolverError::MaxIterationsExceeded { iterations: 200 },
            1e-6,
            5.0,
        );
        assert_eq!(err, ImpliedVolError::RootNotConverged { iterations: 200 });
    }

    #[test]
    fn test_reason_tags_are_distinct() {
        let errors = [
            ImpliedVolError::InvalidContract(String::new()),
            ImpliedVolError::InvalidMarketPrice { price: -1.0 },
            ImpliedVolError::InvalidBracket { low: 1.0, high: 0.5 },
            ImpliedVolError::RootNotBracketed { low: 0.0, high: 1.0 },
            ImpliedVolError::RootNotConverged { iterations: 1 },
            ImpliedVolError::InvalidRoot { root: -0.1 },
        ];
        let mut tags: Vec<_> = errors.iter().map(|e| e.reason()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), errors.len());
    }
}
