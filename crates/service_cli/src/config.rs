//! Pricer configuration management
//!
//! Handles loading configuration from a TOML file and environment variables.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied per request by the commands)
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use pricer_core::math::solvers::SolverConfig;
use pricer_optimiser::implied_vol::{ImpliedVolSolver, VolBracket};
use pricer_pricing::mc::{MonteCarloConfig, MAX_PATHS, MAX_STEPS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Config file is not valid TOML for [`PricerConfig`].
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Environment variable holds an unparsable value.
    #[error("Environment variable {var} has invalid value '{value}'")]
    EnvError {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// One or more settings are out of range.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Batch plans and solver outcomes
    Debug,
    /// Default
    #[default]
    Info,
    /// Recoverable failures only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[monte_carlo]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Number of simulation paths
    pub n_paths: usize,
    /// Time steps per path
    pub n_steps: usize,
    /// Generator seed
    pub seed: u64,
    /// Paths per parallel batch
    pub batch_size: usize,
    /// Run batches on the thread pool
    pub parallel: bool,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            n_paths: 10_000,
            n_steps: 1,
            seed: pricer_pricing::mc::DEFAULT_SEED,
            batch_size: pricer_pricing::mc::DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }
}

impl MonteCarloSettings {
    /// Builds a simulator configuration, overriding counts and seed where given.
    pub fn to_config(
        &self,
        n_paths: Option<usize>,
        n_steps: Option<usize>,
        seed: Option<u64>,
    ) -> Result<MonteCarloConfig, pricer_pricing::mc::ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(n_paths.unwrap_or(self.n_paths))
            .n_steps(n_steps.unwrap_or(self.n_steps))
            .seed(seed.unwrap_or(self.seed))
            .batch_size(self.batch_size)
            .parallel(self.parallel)
            .build()
    }
}

/// `[implied_vol]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolSettings {
    /// Lower end of the volatility search interval
    pub vol_lower: f64,
    /// Upper end of the volatility search interval
    pub vol_upper: f64,
    /// Absolute price tolerance
    pub tolerance: f64,
    /// Brent iteration budget
    pub max_iterations: usize,
}

impl Default for ImpliedVolSettings {
    fn default() -> Self {
        let bracket = VolBracket::default();
        let solver = SolverConfig::<f64>::default();
        Self {
            vol_lower: bracket.low,
            vol_upper: bracket.high,
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
        }
    }
}

impl ImpliedVolSettings {
    /// Builds the solver described by this section.
    pub fn solver(&self) -> ImpliedVolSolver {
        ImpliedVolSolver::new(
            VolBracket::new(self.vol_lower, self.vol_upper),
            SolverConfig {
                tolerance: self.tolerance,
                max_iterations: self.max_iterations,
            },
        )
    }
}

/// Pricer configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Monte Carlo defaults
    pub monte_carlo: MonteCarloSettings,
    /// Implied volatility solver settings
    pub implied_vol: ImpliedVolSettings,
    /// Volatility used when neither an input nor a historical value is given
    pub default_volatility: f64,
    /// Log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            monte_carlo: MonteCarloSettings::default(),
            implied_vol: ImpliedVolSettings::default(),
            default_volatility: 0.2,
            log_level: LogLevel::Info,
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load the file if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PRICER_*` environment variables
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PRICER_MC_PATHS") {
            self.monte_carlo.n_paths = parse_env("PRICER_MC_PATHS", &value)?;
        }
        if let Some(value) = lookup("PRICER_MC_STEPS") {
            self.monte_carlo.n_steps = parse_env("PRICER_MC_STEPS", &value)?;
        }
        if let Some(value) = lookup("PRICER_MC_SEED") {
            self.monte_carlo.seed = parse_env("PRICER_MC_SEED", &value)?;
        }
        if let Some(value) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&value)?;
        }
        Ok(self)
    }

    /// Validate the configuration, reporting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        let mc = &self.monte_carlo;
        if mc.n_paths == 0 || mc.n_paths > MAX_PATHS {
            problems.push(format!(
                "monte_carlo.n_paths must be in [1, {}], got {}",
                MAX_PATHS, mc.n_paths
            ));
        }
        if mc.n_steps == 0 || mc.n_steps > MAX_STEPS {
            problems.push(format!(
                "monte_carlo.n_steps must be in [1, {}], got {}",
                MAX_STEPS, mc.n_steps
            ));
        }
        if mc.batch_size == 0 {
            problems.push("monte_carlo.batch_size must be positive".to_string());
        }

        let iv = &self.implied_vol;
        if !VolBracket::new(iv.vol_lower, iv.vol_upper).is_valid() {
            problems.push(format!(
                "implied_vol bracket must satisfy 0 < vol_lower < vol_upper, got [{}, {}]",
                iv.vol_lower, iv.vol_upper
            ));
        }
        if !(iv.tolerance > 0.0 && iv.tolerance.is_finite()) {
            problems.push(format!(
                "implied_vol.tolerance must be positive, got {}",
                iv.tolerance
            ));
        }
        if iv.max_iterations == 0 {
            problems.push("implied_vol.max_iterations must be positive".to_string());
        }

        if !(self.default_volatility > 0.0 && self.default_volatility.is_finite()) {
            problems.push(format!(
                "default_volatility must be positive, got {}",
                self.default_volatility
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

fn parse_env<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        var,
        value: value.to_string(),
    })
}

/// Build configuration from all sources
///
/// Reads `path` when it exists, applies environment overrides and validates.
pub fn build_config(path: &Path) -> Result<PricerConfig, ConfigError> {
    let config = PricerConfig::load_or_default(path)?.with_env_override()?;
    config.validate()?;
    Ok(config)
}
