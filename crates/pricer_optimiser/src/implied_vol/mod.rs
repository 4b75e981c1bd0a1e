//! Implied volatility.
//!
//! Inverts the Black-Scholes-Merton price against an observed market quote
//! with Brent's method, returning either the volatility or a tagged
//! [`ImpliedVolError`] explaining why none exists.
//!
//! ```
//! use pricer_core::types::{ContractSpec, OptionType};
//! use pricer_optimiser::implied_vol::{implied_vol, ImpliedVolError};
//!
//! let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//!
//! match implied_vol(1000.0, &contract, OptionType::Call) {
//!     Ok(sigma) => println!("implied vol {sigma}"),
//!     Err(err) => assert_eq!(err.reason(), "root_not_bracketed"),
//! }
//! ```

mod error;
mod solver;

pub use error::ImpliedVolError;
pub use solver::{implied_vol, ImpliedVolSolver, VolBracket, DEFAULT_VOL_LOWER, DEFAULT_VOL_UPPER};
