//! Core contract, time, and error types.
//!
//! This module provides:
//! - `contract`: `OptionType` and the immutable `ContractSpec`
//! - `time`: `Date` and the ACT/365F `year_fraction`
//! - `error`: Structured error types for pricing, date, and solver operations
//! - `nan_as_null`: Serde adapter for NaN sentinels (feature `serde`)
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ContractSpec`], [`OptionType`] from `contract`
//! - [`Date`], [`year_fraction`] from `time`
//! - [`PricingError`], [`DateError`], [`SolverError`] from `error`

pub mod contract;
pub mod error;
#[cfg(feature = "serde")]
pub mod nan_as_null;
pub mod time;

// Re-export commonly used types at module level
pub use contract::{ContractSpec, OptionType};
pub use error::{DateError, PricingError, SolverError};
pub use time::{days_to_years, year_fraction, Date};
