//! Monte Carlo simulator for European options.
//!
//! [`MonteCarloSimulator`] owns an immutable configuration and prices any
//! number of contracts with it. Every call builds its own generators, so a
//! simulator can be shared freely between threads.

use pricer_core::types::{ContractSpec, OptionType};
use rayon::prelude::*;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::paths::{GbmParams, TerminalSampler};
use super::stats::RunningStats;
use crate::rng::PricerRng;

/// Result of a Monte Carlo valuation.
///
/// `std_error` is the standard error of the discounted price estimate,
/// `sd(payoff) / √n_paths · e^(-rT)`. It is zero for an expired contract and
/// NaN when fewer than two paths were drawn.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_pricing::mc::simulate;
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let result = simulate(&contract, OptionType::Call, 20_000, 1, 42).unwrap();
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloResult {
    /// Discounted mean payoff.
    #[cfg_attr(feature = "serde", serde(with = "pricer_core::types::nan_as_null"))]
    pub price: f64,
    /// Standard error of the price estimate.
    #[cfg_attr(feature = "serde", serde(with = "pricer_core::types::nan_as_null"))]
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Number of time steps per path.
    pub n_steps: usize,
}

impl MonteCarloResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Monte Carlo simulator for European options under GBM.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloSimulator};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(1)
///     .seed(7)
///     .build()
///     .unwrap();
/// let simulator = MonteCarloSimulator::new(config).unwrap();
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let call = simulator.simulate(&contract, OptionType::Call);
/// let again = simulator.simulate(&contract, OptionType::Call);
///
/// // Same configuration, same draws
/// assert_eq!(call, again);
/// assert!((call.price - 10.4506).abs() < 4.0 * call.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSimulator {
    config: MonteCarloConfig,
}

impl MonteCarloSimulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the simulator configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices the contract's own option type.
    #[inline]
    pub fn simulate_contract(&self, contract: &ContractSpec) -> MonteCarloResult {
        self.simulate(contract, contract.option_type)
    }

    /// Prices a European option of `option_type` on `contract`.
    ///
    /// An expired contract (`expiry <= 0`) returns its intrinsic value with a
    /// zero standard error and draws nothing, so the seed is irrelevant.
    /// Degenerate market inputs (non-positive spot, negative volatility or
    /// any non-finite field) are not rejected; they yield a NaN price and
    /// standard error.
    pub fn simulate(&self, contract: &ContractSpec, option_type: OptionType) -> MonteCarloResult {
        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        if contract.is_expired() {
            return MonteCarloResult {
                price: contract.intrinsic(option_type),
                std_error: 0.0,
                n_paths,
                n_steps,
            };
        }

        let params = GbmParams::from_contract(contract);
        if !params.is_valid() || !contract.strike.is_finite() {
            debug!(?contract, "degenerate monte carlo inputs");
            return MonteCarloResult {
                price: f64::NAN,
                std_error: f64::NAN,
                n_paths,
                n_steps,
            };
        }

        let sampler = params.stepper(n_steps);
        let n_batches = self.config.n_batches();
        let parallel = self.config.parallel() && n_batches > 1;

        debug!(
            n_paths,
            n_steps,
            n_batches,
            batch_size = self.config.batch_size(),
            parallel,
            seed = self.config.seed(),
            "monte carlo batch plan"
        );

        let run = |batch: usize| self.run_batch(&sampler, contract.strike, option_type, batch);
        let partials: Vec<RunningStats> = if parallel {
            (0..n_batches).into_par_iter().map(run).collect()
        } else {
            (0..n_batches).map(run).collect()
        };

        // Fixed merge order keeps the result independent of scheduling
        let mut stats = RunningStats::new();
        for partial in &partials {
            stats.merge(partial);
        }

        let df = contract.discount_factor();
        MonteCarloResult {
            price: df * stats.mean(),
            std_error: df * stats.std_error(),
            n_paths,
            n_steps,
        }
    }

    /// Payoff statistics of batch `batch`, drawn from its own stream.
    fn run_batch(
        &self,
        sampler: &TerminalSampler,
        strike: f64,
        option_type: OptionType,
        batch: usize,
    ) -> RunningStats {
        let batch_size = self.config.batch_size();
        let start = batch * batch_size;
        let len = batch_size.min(self.config.n_paths() - start);

        let mut rng = PricerRng::for_stream(self.config.seed(), batch as u64);
        let mut stats = RunningStats::new();
        for _ in 0..len {
            let terminal = sampler.sample(&mut rng);
            stats.push(option_type.intrinsic(terminal, strike));
        }
        stats
    }
}

/// Prices a European option by Monte Carlo with default batching.
///
/// # Arguments
///
/// * `contract` - Contract terms and market inputs
/// * `option_type` - Call or put
/// * `n_paths` - Number of paths, in [1, 10_000_000]
/// * `n_steps` - Steps per path, in [1, 10_000]
/// * `seed` - Seed of the generators
///
/// # Errors
///
/// Returns `ConfigError` if the path or step count is out of range.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_pricing::mc::simulate;
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let a = simulate(&contract, OptionType::Call, 10_000, 1, 1).unwrap();
/// let b = simulate(&contract, OptionType::Call, 10_000, 1, 1).unwrap();
/// assert_eq!(a.price, b.price);
///
/// assert!(simulate(&contract, OptionType::Call, 0, 1, 1).is_err());
/// ```
pub fn simulate(
    contract: &ContractSpec,
    option_type: OptionType,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
) -> Result<MonteCarloResult, ConfigError> {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()?;
    Ok(MonteCarloSimulator::new(config)?.simulate(contract, option_type))
}
