//! Black-Scholes-Merton pricing for European options.
//!
//! This module provides closed-form prices and Greeks for European calls and
//! puts on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! Nothing here returns an error or panics:
//! - `T <= 0`: the price is the intrinsic value and all Greeks are NaN
//! - `σ <= 0`, `S <= 0` or `K <= 0` (with `T > 0`): price and Greeks are NaN

use pricer_core::types::{ContractSpec, OptionType};

use super::distributions::{norm_cdf, norm_pdf};
use super::greeks::Greeks;

/// Price and sensitivities of one valuation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value for the requested option type (NaN when degenerate).
    #[cfg_attr(feature = "serde", serde(with = "pricer_core::types::nan_as_null"))]
    pub price: f64,
    /// Greeks for both option rights.
    pub greeks: Greeks,
}

/// Black-Scholes-Merton model bound to one contract.
///
/// The contract's own `option_type` is only used by [`BlackScholes::price_default`];
/// every other method takes the right explicitly or covers both.
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let bs = BlackScholes::new(contract);
///
/// let call = bs.price_call();
/// let put = bs.price_put();
/// assert!((call - 10.4506).abs() < 1e-4);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholes {
    contract: ContractSpec,
}

/// Intermediate quantities shared by the price and Greek formulas.
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    /// e^(-qT)
    dividend_discount: f64,
}

impl BlackScholes {
    /// Binds the model to a contract.
    pub fn new(contract: ContractSpec) -> Self {
        Self { contract }
    }

    /// Returns the contract being priced.
    #[inline]
    pub fn contract(&self) -> &ContractSpec {
        &self.contract
    }

    fn terms(&self) -> Option<Terms> {
        let c = &self.contract;
        // Negated comparisons also reject NaN inputs
        if !(c.expiry > 0.0) || !(c.volatility > 0.0) || !(c.spot > 0.0) || !(c.strike > 0.0) {
            return None;
        }

        let sqrt_t = c.expiry.sqrt();
        let vol_sqrt_t = c.volatility * sqrt_t;
        let drift = (c.rate - c.dividend_yield + 0.5 * c.volatility * c.volatility) * c.expiry;
        let d1 = ((c.spot / c.strike).ln() + drift) / vol_sqrt_t;

        Some(Terms {
            d1,
            d2: d1 - vol_sqrt_t,
            sqrt_t,
            discount: c.discount_factor(),
            dividend_discount: c.dividend_factor(),
        })
    }

    /// Returns `(d₁, d₂)`, or `None` when the inputs are degenerate
    /// (`T <= 0`, `σ <= 0`, `S <= 0` or `K <= 0`).
    pub fn d1_d2(&self) -> Option<(f64, f64)> {
        self.terms().map(|t| (t.d1, t.d2))
    }

    /// Price of a European option of the given right.
    ///
    /// Intrinsic value at or past expiry; NaN for other degenerate inputs.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let c = &self.contract;
        if c.expiry <= 0.0 {
            return c.intrinsic(option_type);
        }

        let Some(t) = self.terms() else {
            return f64::NAN;
        };

        let forward_leg = c.spot * t.dividend_discount;
        let strike_leg = c.strike * t.discount;
        match option_type {
            OptionType::Call => forward_leg * norm_cdf(t.d1) - strike_leg * norm_cdf(t.d2),
            OptionType::Put => strike_leg * norm_cdf(-t.d2) - forward_leg * norm_cdf(-t.d1),
        }
    }

    /// Price for the contract's own option type.
    #[inline]
    pub fn price_default(&self) -> f64 {
        self.price(self.contract.option_type)
    }

    /// European call price.
    #[inline]
    pub fn price_call(&self) -> f64 {
        self.price(OptionType::Call)
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self) -> f64 {
        self.price(OptionType::Put)
    }

    /// All eight Greeks, or [`Greeks::nan`] for degenerate inputs.
    ///
    /// Vega is per 1.0 of volatility and theta per year.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{ContractSpec, OptionType};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
    /// let greeks = BlackScholes::new(contract).greeks();
    ///
    /// assert!((greeks.delta_call - greeks.delta_put - 1.0).abs() < 1e-12);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(&self) -> Greeks {
        let Some(t) = self.terms() else {
            return Greeks::nan();
        };
        let c = &self.contract;

        let pdf_d1 = norm_pdf(t.d1);
        let cdf_d1 = norm_cdf(t.d1);
        let cdf_d2 = norm_cdf(t.d2);
        let cdf_neg_d1 = norm_cdf(-t.d1);
        let cdf_neg_d2 = norm_cdf(-t.d2);

        let spot_div = c.spot * t.dividend_discount;
        let strike_disc = c.strike * t.discount;

        // -(S·e^(-qT)·φ(d₁)·σ) / (2√T), shared by both thetas
        let decay = -(spot_div * pdf_d1 * c.volatility) / (2.0 * t.sqrt_t);

        Greeks {
            delta_call: t.dividend_discount * cdf_d1,
            delta_put: t.dividend_discount * (cdf_d1 - 1.0),
            gamma: t.dividend_discount * pdf_d1 / (c.spot * c.volatility * t.sqrt_t),
            vega: spot_div * pdf_d1 * t.sqrt_t,
            theta_call: decay - c.rate * strike_disc * cdf_d2
                + c.dividend_yield * spot_div * cdf_d1,
            theta_put: decay + c.rate * strike_disc * cdf_neg_d2
                - c.dividend_yield * spot_div * cdf_neg_d1,
            rho_call: strike_disc * c.expiry * cdf_d2,
            rho_put: -strike_disc * c.expiry * cdf_neg_d2,
        }
    }

    /// Price for `option_type` together with all Greeks.
    pub fn pricing(&self, option_type: OptionType) -> PricingResult {
        PricingResult {
            price: self.price(option_type),
            greeks: self.greeks(),
        }
    }
}

/// Closed-form price of `contract` for `option_type`.
///
/// The contract's own `option_type` field is ignored.
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_models::analytical::black_scholes::price;
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
/// assert!((price(&contract, OptionType::Put) - 5.5735).abs() < 1e-4);
///
/// // Expired: intrinsic value, whatever the volatility
/// let expired = ContractSpec::new(100.0, 105.0, 0.0, 0.05, 0.0, OptionType::Call);
/// assert_eq!(price(&expired, OptionType::Call), 0.0);
/// ```
#[inline]
pub fn price(contract: &ContractSpec, option_type: OptionType) -> f64 {
    BlackScholes::new(*contract).price(option_type)
}

/// Closed-form Greeks of `contract`.
#[inline]
pub fn greeks(contract: &ContractSpec) -> Greeks {
    BlackScholes::new(*contract).greeks()
}

/// Price and Greeks of `contract` for `option_type`.
#[inline]
pub fn pricing(contract: &ContractSpec, option_type: OptionType) -> PricingResult {
    BlackScholes::new(*contract).pricing(option_type)
}

/// `(d₁, d₂)` of `contract`, `None` when degenerate.
#[inline]
pub fn d1_d2(contract: &ContractSpec) -> Option<(f64, f64)> {
    BlackScholes::new(*contract).d1_d2()
}
