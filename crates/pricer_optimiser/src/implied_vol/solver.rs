//! Implied volatility by Brent's method.
//!
//! The Black-Scholes-Merton price is strictly increasing in volatility for
//! `T > 0`, so the objective
//!
//! ```text
//! f(σ) = price(contract with σ) - market_price
//! ```
//!
//! has at most one root. It is searched for on a fixed bracket; a quote
//! outside the prices attainable on the bracket is reported as not bracketed
//! rather than extrapolated.

use pricer_core::math::solvers::{BrentSolver, SolverConfig};
use pricer_core::types::{ContractSpec, OptionType};
use pricer_models::analytical::black_scholes;
use tracing::debug;

use super::error::ImpliedVolError;

/// Default lower volatility bound.
pub const DEFAULT_VOL_LOWER: f64 = 1e-6;

/// Default upper volatility bound.
pub const DEFAULT_VOL_UPPER: f64 = 5.0;

/// Volatility search interval.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::implied_vol::VolBracket;
///
/// let bracket = VolBracket::default();
/// assert_eq!((bracket.low, bracket.high), (1e-6, 5.0));
/// assert!(bracket.is_valid());
/// assert!(!VolBracket::new(0.5, 0.1).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolBracket {
    /// Lower volatility bound (exclusive of zero).
    pub low: f64,
    /// Upper volatility bound.
    pub high: f64,
}

impl VolBracket {
    /// Creates a bracket; see [`VolBracket::is_valid`].
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `0 < low < high`, both finite.
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low > 0.0 && self.low < self.high
    }
}

impl Default for VolBracket {
    fn default() -> Self {
        Self::new(DEFAULT_VOL_LOWER, DEFAULT_VOL_UPPER)
    }
}

/// Implied volatility solver.
///
/// Wraps a [`BrentSolver`] with a volatility bracket. Defaults: bracket
/// `[1e-6, 5.0]`, absolute price tolerance `1e-12`, 200 iterations.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_optimiser::implied_vol::{ImpliedVolError, ImpliedVolSolver};
///
/// let solver = ImpliedVolSolver::default();
/// let contract = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
///
/// // Above the spot: no volatility can reach it
/// let err = solver.solve(1000.0, &contract, OptionType::Call).unwrap_err();
/// assert!(matches!(err, ImpliedVolError::RootNotBracketed { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    bracket: VolBracket,
    solver: BrentSolver<f64>,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new(VolBracket::default(), SolverConfig::default())
    }
}

impl ImpliedVolSolver {
    /// Creates a solver over `bracket` with the given Brent settings.
    pub fn new(bracket: VolBracket, config: SolverConfig<f64>) -> Self {
        Self {
            bracket,
            solver: BrentSolver::new(config),
        }
    }

    /// Returns the search interval.
    pub fn bracket(&self) -> VolBracket {
        self.bracket
    }

    /// Returns the root-finding settings.
    pub fn config(&self) -> &SolverConfig<f64> {
        self.solver.config()
    }

    /// Solves for the volatility that reproduces `market_price`.
    ///
    /// The contract's own volatility is ignored.
    ///
    /// # Errors
    ///
    /// - `InvalidContract` if `T <= 0`, `S <= 0`, `K <= 0` or a market input
    ///   is non-finite
    /// - `InvalidMarketPrice` if the quote is negative or non-finite
    /// - `InvalidBracket` if the configured interval is unusable
    /// - `RootNotBracketed` if the quote is unattainable on the interval
    /// - `RootNotConverged` if Brent's method runs out of iterations
    /// - `InvalidRoot` if the result is non-finite or non-positive
    pub fn solve(
        &self,
        market_price: f64,
        contract: &ContractSpec,
        option_type: OptionType,
    ) -> Result<f64, ImpliedVolError> {
        check_contract(contract)?;
        if !market_price.is_finite() || market_price < 0.0 {
            return Err(ImpliedVolError::InvalidMarketPrice {
                price: market_price,
            });
        }

        let VolBracket { low, high } = self.bracket;
        if !self.bracket.is_valid() {
            return Err(ImpliedVolError::InvalidBracket { low, high });
        }

        let objective =
            |sigma: f64| black_scholes::price(&contract.with_volatility(sigma), option_type) - market_price;

        let result = self
            .solver
            .solve(objective, low, high)
            .map_err(|err| ImpliedVolError::from_solver(err, low, high));

        let root = match result {
            Ok(root) => root,
            Err(err) => {
                debug!(market_price, %option_type, error = %err, "implied volatility failed");
                return Err(err);
            }
        };

        debug!(
            market_price,
            %option_type,
            sigma = root.root,
            iterations = root.iterations,
            residual = root.residual,
            "implied volatility solved"
        );

        if !root.root.is_finite() || root.root <= 0.0 {
            return Err(ImpliedVolError::InvalidRoot { root: root.root });
        }
        Ok(root.root)
    }
}

/// Solves for implied volatility with the default solver.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ContractSpec, OptionType};
/// use pricer_models::analytical::black_scholes;
/// use pricer_optimiser::implied_vol::implied_vol;
///
/// let contract = ContractSpec::new(100.0, 95.0, 0.5, 0.03, 0.35, OptionType::Put);
/// let quote = black_scholes::price(&contract, OptionType::Put);
///
/// let sigma = implied_vol(quote, &contract, OptionType::Put).unwrap();
/// assert!((sigma - 0.35).abs() < 1e-6);
/// ```
pub fn implied_vol(
    market_price: f64,
    contract: &ContractSpec,
    option_type: OptionType,
) -> Result<f64, ImpliedVolError> {
    ImpliedVolSolver::default().solve(market_price, contract, option_type)
}

/// Rejects contracts for which implied volatility is undefined.
fn check_contract(contract: &ContractSpec) -> Result<(), ImpliedVolError> {
    let fields = [
        ("spot", contract.spot),
        ("strike", contract.strike),
        ("expiry", contract.expiry),
        ("rate", contract.rate),
        ("dividend_yield", contract.dividend_yield),
    ];
    if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(ImpliedVolError::InvalidContract(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }

    for (name, value) in &fields[..3] {
        if *value <= 0.0 {
            return Err(ImpliedVolError::InvalidContract(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_call() -> ContractSpec {
        ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    // ========================================
    // Recovery
    // ========================================

    #[test]
    fn test_recovers_reference_vol() {
        let sigma = implied_vol(10.4506, &atm_call(), OptionType::Call).unwrap();
        assert_relative_eq!(sigma, 0.20, epsilon = 1e-4);
    }

    #[test]
    fn test_exact_price_recovers_exact_vol() {
        let contract = atm_call();
        let quote = black_scholes::price(&contract, OptionType::Call);
        let sigma = implied_vol(quote, &contract, OptionType::Call).unwrap();
        assert_relative_eq!(sigma, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_contract_vol_is_ignored() {
        let quote = black_scholes::price(&atm_call(), OptionType::Put);
        let wrong_vol = atm_call().with_volatility(1.7);
        let sigma = implied_vol(quote, &wrong_vol, OptionType::Put).unwrap();
        assert_relative_eq!(sigma, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_recovers_with_dividends() {
        let contract = ContractSpec::new(120.0, 100.0, 2.0, 0.03, 0.45, OptionType::Call)
            .with_dividend_yield(0.025);
        let quote = black_scholes::price(&contract, OptionType::Call);
        let sigma = implied_vol(quote, &contract, OptionType::Call).unwrap();
        assert_relative_eq!(sigma, 0.45, epsilon = 1e-8);
    }

    // ========================================
    // Failures
    // ========================================

    #[test]
    fn test_unreachable_quote_not_bracketed() {
        let err = implied_vol(1000.0, &atm_call(), OptionType::Call).unwrap_err();
        assert_eq!(
            err,
            ImpliedVolError::RootNotBracketed {
                low: 1e-6,
                high: 5.0
            }
        );
    }

    #[test]
    fn test_quote_below_lower_bound_not_bracketed() {
        // Less than the discounted forward intrinsic value
        let err = implied_vol(1.0, &atm_call(), OptionType::Call).unwrap_err();
        assert!(matches!(err, ImpliedVolError::RootNotBracketed { .. }));
    }

    #[test]
    fn test_expired_contract_rejected() {
        let contract = ContractSpec::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
        let err = implied_vol(5.0, &contract, OptionType::Call).unwrap_err();
        assert!(matches!(err, ImpliedVolError::InvalidContract(_)));
        assert!(err.to_string().contains("expiry"));
    }

    #[test]
    fn test_non_positive_spot_and_strike_rejected() {
        let bad_spot = ContractSpec {
            spot: 0.0,
            ..atm_call()
        };
        let bad_strike = ContractSpec {
            strike: -5.0,
            ..atm_call()
        };
        for contract in [bad_spot, bad_strike] {
            assert!(matches!(
                implied_vol(5.0, &contract, OptionType::Call),
                Err(ImpliedVolError::InvalidContract(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let contract = ContractSpec {
            rate: f64::NAN,
            ..atm_call()
        };
        let err = implied_vol(5.0, &contract, OptionType::Call).unwrap_err();
        assert!(err.to_string().contains("rate must be finite"));
    }

    #[test]
    fn test_bad_market_price_rejected() {
        for price in [f64::NAN, f64::INFINITY, -1.0] {
            assert!(matches!(
                implied_vol(price, &atm_call(), OptionType::Call),
                Err(ImpliedVolError::InvalidMarketPrice { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_bracket_rejected() {
        let solver = ImpliedVolSolver::new(VolBracket::new(2.0, 1.0), SolverConfig::default());
        let err = solver.solve(10.0, &atm_call(), OptionType::Call).unwrap_err();
        assert_eq!(err, ImpliedVolError::InvalidBracket { low: 2.0, high: 1.0 });
    }

    #[test]
    fn test_iteration_budget_reported() {
        let solver = ImpliedVolSolver::new(
            VolBracket::default(),
            SolverConfig {
                tolerance: 1e-300,
                max_iterations: 2,
            },
        );
        let err = solver.solve(10.4506, &atm_call(), OptionType::Call).unwrap_err();
        assert_eq!(err, ImpliedVolError::RootNotConverged { iterations: 2 });
    }

    #[test]
    fn test_accessors() {
        let solver = ImpliedVolSolver::default();
        assert_eq!(solver.bracket(), VolBracket::default());
        assert_eq!(solver.config().max_iterations, 200);
        assert_eq!(solver.config().tolerance, 1e-12);
    }
}
