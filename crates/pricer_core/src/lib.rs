//! # pricer_core: Foundation Types for European Option Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Contract description: `OptionType`, `ContractSpec` (`types::contract`)
//! - Day counting: ACT/365F year fractions, `Date` (`types::time`)
//! - Error types: `PricingError`, `SolverError`, `DateError` (`types::error`)
//! - Bracketed root-finding: `BrentSolver`, `SolverConfig` (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point bounds for the solvers
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//! use pricer_core::types::{year_fraction, ContractSpec, Date, OptionType};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2024, 7, 1).unwrap();
//! let expiry = year_fraction(valuation, maturity);
//! # assert!((expiry - 182.0 / 365.0).abs() < 1e-12);
//!
//! let contract = ContractSpec::new(100.0, 105.0, expiry, 0.03, 0.25, OptionType::Call);
//! assert!(contract.validate().is_ok());
//!
//! let solver = BrentSolver::new(SolverConfig::new(1e-12, 200));
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for contracts, dates and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
