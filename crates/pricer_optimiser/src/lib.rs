//! # pricer_optimiser
//!
//! Inverse problems on top of the closed-form pricer.
//!
//! This crate sits between Models (L2) and the service layer, recovering the
//! model parameter that reproduces an observed market quote.
//!
//! ## Architecture Position
//!
//! Layer 2.5 in the **P**ricer layer.
//! Depends on `pricer_core` (L1) for Brent's method and `pricer_models` (L2)
//! for the Black-Scholes-Merton price.
//!
//! ## Modules
//!
//! - [`implied_vol`]: implied volatility by bracketed root-finding
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::types::{ContractSpec, OptionType};
//! use pricer_optimiser::implied_vol::implied_vol;
//!
//! let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let sigma = implied_vol(10.4506, &contract, OptionType::Call).unwrap();
//! assert!((sigma - 0.20).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod implied_vol;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::implied_vol::*;
}
