//! European option contract description.
//!
//! This module provides:
//! - `OptionType`: Call or put
//! - `ContractSpec`: Immutable bundle of contract and market parameters
//!
//! A `ContractSpec` is a plain value: every "modifier" returns a new copy, so
//! one contract can be re-priced at several volatilities (as the implied
//! volatility search does) without any shared state.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option right.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
///
/// let parsed: OptionType = "PUT".parse().unwrap();
/// assert_eq!(parsed, OptionType::Put);
/// assert_eq!(parsed.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: pays `max(S - K, 0)`.
    #[default]
    Call,
    /// Right to sell at the strike: pays `max(K - S, 0)`.
    Put,
}

impl OptionType {
    /// Payoff at exercise for spot `spot` and strike `strike`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Lowercase name, as used in reports and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Case-insensitive; accepts `call`/`c` and `put`/`p`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidInput(format!(
                "unknown option type '{}', expected 'call' or 'put'",
                other
            ))),
        }
    }
}

/// Contract and market parameters of a European option.
///
/// | Field | Symbol | Meaning |
/// |-------|--------|---------|
/// | `spot` | S | Current underlying price |
/// | `strike` | K | Strike price |
/// | `expiry` | T | Time to expiry in years (ACT/365F) |
/// | `rate` | r | Continuously compounded risk-free rate |
/// | `dividend_yield` | q | Continuous dividend yield |
/// | `volatility` | σ | Annualised volatility |
///
/// Construction never fails. Pricing functions map degenerate inputs to
/// intrinsic values or NaN sentinels; callers that want to reject bad
/// contracts up front use [`ContractSpec::validate`].
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionType};
///
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .with_dividend_yield(0.01);
///
/// assert_eq!(contract.dividend_yield, 0.01);
/// assert!(!contract.is_expired());
///
/// let bumped = contract.with_volatility(0.25);
/// assert_eq!(contract.volatility, 0.2);
/// assert_eq!(bumped.volatility, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractSpec {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Risk-free rate, continuously compounded (r).
    pub rate: f64,
    /// Continuous dividend yield (q).
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl ContractSpec {
    /// Creates a contract with zero dividend yield.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield: 0.0,
            volatility,
            option_type,
        }
    }

    /// Returns a copy with dividend yield `q`.
    #[inline]
    pub fn with_dividend_yield(self, q: f64) -> Self {
        Self {
            dividend_yield: q,
            ..self
        }
    }

    /// Returns a copy with volatility `sigma`.
    #[inline]
    pub fn with_volatility(self, sigma: f64) -> Self {
        Self {
            volatility: sigma,
            ..self
        }
    }

    /// Returns a copy with the given option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Returns `true` when no time remains (`T <= 0`).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry <= 0.0
    }

    /// Intrinsic value of the contract for `option_type`.
    #[inline]
    pub fn intrinsic(&self, option_type: OptionType) -> f64 {
        option_type.intrinsic(self.spot, self.strike)
    }

    /// Discount factor `e^(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor `e^(-qT)`.
    #[inline]
    pub fn dividend_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }

    /// Checks the fields no pricer can give a meaning to: every value must
    /// be finite and `spot`, `strike` strictly positive.
    ///
    /// Negative expiry and volatility pass; pricers map them to intrinsic
    /// value and NaN sentinels respectively.
    ///
    /// # Errors
    /// `PricingError::InvalidContract` naming the first offending field.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{ContractSpec, OptionType};
    ///
    /// let lapsed = ContractSpec::new(100.0, 90.0, -0.1, 0.05, -0.2, OptionType::Call);
    /// assert!(lapsed.validate_inputs().is_ok());
    /// assert!(lapsed.validate().is_err());
    /// ```
    pub fn validate_inputs(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("rate", self.rate),
            ("dividend_yield", self.dividend_yield),
            ("volatility", self.volatility),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PricingError::InvalidContract(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.spot <= 0.0 {
            return Err(PricingError::InvalidContract(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::InvalidContract(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        Ok(())
    }

    /// Checks that every field is in its admissible range.
    ///
    /// # Errors
    /// `PricingError::InvalidContract` naming the first offending field when
    /// any value is non-finite, `spot <= 0`, `strike <= 0`, `expiry < 0` or
    /// `volatility < 0`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{ContractSpec, OptionType, PricingError};
    ///
    /// let bad = ContractSpec::new(100.0, 0.0, 1.0, 0.05, 0.2, OptionType::Put);
    /// assert!(matches!(bad.validate(), Err(PricingError::InvalidContract(_))));
    ///
    /// // Expiry today is fine: it prices at intrinsic value
    /// let today = ContractSpec::new(100.0, 90.0, 0.0, 0.05, 0.2, OptionType::Call);
    /// assert!(today.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), PricingError> {
        self.validate_inputs()?;
        if self.expiry < 0.0 {
            return Err(PricingError::InvalidContract(format!(
                "expiry must be non-negative, got {}",
                self.expiry
            )));
        }
        if self.volatility < 0.0 {
            return Err(PricingError::InvalidContract(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm() -> ContractSpec {
        ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    // ========================================
    // OptionType Tests
    // ========================================

    #[test]
    fn test_intrinsic_values() {
        assert_eq!(OptionType::Call.intrinsic(100.0, 105.0), 0.0);
        assert_eq!(OptionType::Call.intrinsic(110.0, 105.0), 5.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 105.0), 5.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 105.0), 0.0);
    }

    #[test]
    fn test_option_type_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Call ".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("P".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_option_type_display_and_sign() {
        assert_eq!(OptionType::Call.to_string(), "call");
        assert_eq!(OptionType::Put.to_string(), "put");
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
        assert_eq!(OptionType::default(), OptionType::Call);
    }

    // ========================================
    // ContractSpec Tests
    // ========================================

    #[test]
    fn test_new_defaults_dividend_yield_to_zero() {
        let c = atm();
        assert_eq!(c.dividend_yield, 0.0);
        assert_eq!(c.option_type, OptionType::Call);
    }

    #[test]
    fn test_modifiers_return_new_values() {
        let base = atm();
        let put = base.with_option_type(OptionType::Put).with_dividend_yield(0.02);
        assert_eq!(base.option_type, OptionType::Call);
        assert_eq!(base.dividend_yield, 0.0);
        assert_eq!(put.option_type, OptionType::Put);
        assert_eq!(put.dividend_yield, 0.02);
        assert_eq!(put.spot, base.spot);
    }

    #[test]
    fn test_expiry_flags_and_factors() {
        let c = atm().with_dividend_yield(0.03);
        assert!(!c.is_expired());
        assert_relative_eq!(c.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(c.dividend_factor(), (-0.03_f64).exp(), epsilon = 1e-15);

        let expired = ContractSpec { expiry: 0.0, ..c };
        assert!(expired.is_expired());
        assert_eq!(expired.discount_factor(), 1.0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(atm().validate().is_ok());
        assert!(atm().with_volatility(0.0).validate().is_ok());
        // Negative rates are legitimate
        assert!(ContractSpec { rate: -0.01, ..atm() }.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let cases = [
            ContractSpec { spot: 0.0, ..atm() },
            ContractSpec { spot: -5.0, ..atm() },
            ContractSpec { strike: 0.0, ..atm() },
            ContractSpec { expiry: -0.1, ..atm() },
            ContractSpec { volatility: -0.2, ..atm() },
            ContractSpec { rate: f64::NAN, ..atm() },
            ContractSpec { dividend_yield: f64::INFINITY, ..atm() },
        ];
        for c in cases {
            assert!(
                matches!(c.validate(), Err(PricingError::InvalidContract(_))),
                "expected rejection for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_validate_inputs_passes_degenerate_expiry_and_vol() {
        let lapsed = ContractSpec {
            expiry: -0.1,
            volatility: -0.2,
            ..atm()
        };
        assert!(lapsed.validate_inputs().is_ok());

        for c in [
            ContractSpec { spot: 0.0, ..atm() },
            ContractSpec { strike: -1.0, ..atm() },
            ContractSpec { volatility: f64::NAN, ..atm() },
        ] {
            assert!(
                matches!(c.validate_inputs(), Err(PricingError::InvalidContract(_))),
                "expected rejection for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_validate_message_names_field() {
        let err = ContractSpec { strike: -1.0, ..atm() }.validate().unwrap_err();
        assert!(err.to_string().contains("strike"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_contract_serde_lowercase_type_and_default_q() {
        let json = r#"{"spot":100.0,"strike":95.0,"expiry":0.5,"rate":0.01,
                       "volatility":0.3,"option_type":"put"}"#;
        let c: ContractSpec = serde_json::from_str(json).unwrap();
        assert_eq!(c.option_type, OptionType::Put);
        assert_eq!(c.dividend_yield, 0.0);

        let back = serde_json::to_string(&c).unwrap();
        assert!(back.contains("\"put\""));
    }
}
