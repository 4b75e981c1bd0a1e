//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form valuation of European options.
//!
//! This crate provides:
//! - Black-Scholes-Merton prices with continuous dividend yield
//! - The eight analytical Greeks for calls and puts
//! - Standard normal CDF/PDF backed by `statrs`
//! - Payoff-at-expiry grids for payoff diagrams
//!
//! ## Design Principles
//!
//! - **Total functions**: degenerate inputs map to intrinsic value or NaN,
//!   never to a panic or an error
//! - **Value types**: contracts are `Copy`; bumping a parameter builds a new one
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ContractSpec, OptionType};
//! use pricer_models::analytical::black_scholes;
//!
//! let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let result = black_scholes::pricing(&contract, OptionType::Call);
//!
//! assert!((result.price - 10.4506).abs() < 1e-4);
//! assert!((result.greeks.delta_call - 0.6368).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
