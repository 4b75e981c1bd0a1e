//! Monte Carlo pricing of European options.
//!
//! This module simulates terminal spots under risk-neutral Geometric
//! Brownian Motion and averages discounted payoffs.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── MonteCarloConfig  (paths, steps, seed, batching)
//! ├── TerminalSampler   (GBM constants hoisted per call)
//! ├── PricerRng         (one stream per batch)
//! └── RunningStats      (per-batch moments, merged in batch order)
//! ```
//!
//! # Reproducibility
//!
//! Batch `b` always draws from the stream keyed by `(seed, b)` and the
//! partial statistics are merged in batch order, so a result depends only
//! on the configuration. Running batches on the rayon pool or sequentially
//! gives bit-identical prices.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{ContractSpec, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloSimulator};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let simulator = MonteCarloSimulator::new(config).unwrap();
//!
//! let contract = ContractSpec::new(100.0, 95.0, 0.5, 0.03, 0.25, OptionType::Put);
//! let result = simulator.simulate_contract(&contract);
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;
pub mod stats;

// Re-exports for convenient access
pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_BATCH_SIZE, DEFAULT_SEED, MAX_PATHS,
    MAX_STEPS,
};
pub use error::ConfigError;
pub use paths::{GbmParams, TerminalSampler};
pub use pricer::{simulate, MonteCarloResult, MonteCarloSimulator};
pub use stats::RunningStats;
