//! Instrument-level helpers independent of any pricing model.
//!
//! - [`payoff`]: Payoff-at-expiry grids used for payoff diagrams

pub mod payoff;

pub use payoff::{payoff_curve, payoff_range, PayoffPoint, DEFAULT_POINTS};
