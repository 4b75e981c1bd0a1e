//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod implied_vol;
pub mod payoff;
pub mod price;
