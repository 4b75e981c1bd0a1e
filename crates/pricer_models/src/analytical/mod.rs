//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) for calls and puts
//!
//! ## Design Principles
//!
//! - **Sentinels, not errors**: degenerate inputs yield intrinsic value or NaN
//! - **Pure functions**: every call depends only on its arguments
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, PricingResult};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::{GreekName, Greeks};
