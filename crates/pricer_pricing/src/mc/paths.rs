//! Terminal price sampling under Geometric Brownian Motion.
//!
//! Only the terminal spot of each path is needed for a European payoff, so
//! paths are never materialised. With one step the terminal law is sampled
//! exactly; with more steps the log-increments are accumulated in log space:
//!
//! ```text
//! ln S(t+dt) = ln S(t) + (r - q - ½σ²)dt + σ√dt × Z
//! ```

use pricer_core::types::ContractSpec;

use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// Under the risk-neutral measure the asset follows:
/// ```text
/// dS = (r - q) S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     dividend_yield: 0.0,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised, continuously compounded.
    pub rate: f64,
    /// Continuous dividend yield (q).
    pub dividend_yield: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, dividend_yield: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
            maturity,
        }
    }

    /// Extracts the dynamics of a contract's underlying.
    #[inline]
    pub fn from_contract(contract: &ContractSpec) -> Self {
        Self::new(
            contract.spot,
            contract.rate,
            contract.dividend_yield,
            contract.volatility,
            contract.expiry,
        )
    }

    /// Validates the parameters.
    ///
    /// # Returns
    ///
    /// `true` if all parameters are finite, spot and maturity are positive
    /// and volatility is non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.rate.is_finite()
            && self.dividend_yield.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }

    /// Precomputes the per-step constants for `n_steps` steps.
    #[inline]
    pub fn stepper(&self, n_steps: usize) -> TerminalSampler {
        let n_steps = n_steps.max(1);
        let dt = self.maturity / n_steps as f64;
        let drift = self.rate - self.dividend_yield - 0.5 * self.volatility * self.volatility;

        TerminalSampler {
            log_spot: self.spot.ln(),
            drift_dt: drift * dt,
            vol_sqrt_dt: self.volatility * dt.sqrt(),
            n_steps,
        }
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Draws terminal spots for a fixed step count.
///
/// Built by [`GbmParams::stepper`]; all constants are hoisted out of the
/// per-path loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalSampler {
    log_spot: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
    n_steps: usize,
}

impl TerminalSampler {
    /// Number of normals consumed per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Draws one terminal spot, consuming `n_steps` normals from `rng`.
    #[inline]
    pub fn sample(&self, rng: &mut PricerRng) -> f64 {
        if self.n_steps == 1 {
            return self.from_normal(rng.gen_normal());
        }

        let mut log_s = self.log_spot;
        for _ in 0..self.n_steps {
            log_s += self.drift_dt + self.vol_sqrt_dt * rng.gen_normal();
        }
        log_s.exp()
    }

    /// Terminal spot of a single-step path for the normal `z`.
    #[inline]
    pub fn from_normal(&self, z: f64) -> f64 {
        (self.log_spot + self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}
