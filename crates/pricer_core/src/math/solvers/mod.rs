//! Root-finding solvers for numerical computation.
//!
//! The option engine needs one kind of solver: a derivative-free bracketed
//! method for inverting a monotone pricing function (implied volatility).
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! [`SolverConfig`] holds:
//! - `tolerance`: Absolute convergence tolerance (default: 1e-12)
//! - `max_iterations`: Maximum iteration count (default: 200)
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//! use pricer_core::types::SolverError;
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//!
//! // x² + 1 never crosses zero: the bracket is rejected up front
//! let err = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0).unwrap_err();
//! assert!(matches!(err, SolverError::NoBracket { .. }));
//! ```

mod brent;
mod config;

pub use brent::{BrentSolver, RootResult};
pub use config::SolverConfig;
