//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; there is no global RNG
//! - **Independence**: Each batch of paths owns a generator keyed by
//!   `(seed, batch index)`, so scheduling never changes the draws
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut normals = vec![0.0; 8];
//! rng.fill_normal(&mut normals);
//! ```

pub mod prng;

pub use prng::PricerRng;
