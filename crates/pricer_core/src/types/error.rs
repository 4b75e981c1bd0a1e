//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from contract validation and pricing inputs
//! - `DateError`: Errors from date construction and parsing
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// The analytic pricer itself never returns these: degenerate inputs yield
/// NaN sentinels instead. They are raised by eager validation for callers
/// that prefer to fail fast.
///
/// # Variants
/// - `InvalidContract`: A contract field is out of its admissible range
/// - `InvalidInput`: Any other malformed argument (grid sizes, bounds)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidContract("spot must be positive, got -1".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid contract: spot must be positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Contract field out of range (non-positive spot or strike, negative
    /// expiry or volatility, non-finite values).
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: The objective produced NaN
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 200 };
/// assert!(format!("{}", err).contains("200 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidContract("strike must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid contract: strike must be positive, got 0"
        );

        let err = PricingError::InvalidInput("need at least 2 points".to_string());
        assert_eq!(err.to_string(), "Invalid input: need at least 2 points");
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NoBracket { a: 1e-6, b: 5.0 };
        let msg = err.to_string();
        assert!(msg.contains("No bracket"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&PricingError::InvalidInput(String::new()));
        assert_error(&DateError::ParseError(String::new()));
        assert_error(&SolverError::NumericalInstability(String::new()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_solver_error_serde_round_trip() {
        let err = SolverError::MaxIterationsExceeded { iterations: 7 };
        let json = serde_json::to_string(&err).unwrap();
        let back: SolverError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
