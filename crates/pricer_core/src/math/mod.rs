//! Numerical methods shared by the pricing layers.
//!
//! - [`solvers`]: Bracketed root-finding (Brent) used by implied volatility

pub mod solvers;
