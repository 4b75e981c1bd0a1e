//! Payoff-at-expiry grids for payoff diagrams.
//!
//! Chart renderers receive a ready-made series of `(S_T, payoff)` points and
//! never evaluate payoffs themselves.

use pricer_core::types::{OptionType, PricingError};

/// Lower edge of the grid as a fraction of `min(S, K)`.
const LOWER_FRACTION: f64 = 0.2;
/// Upper edge of the grid as a multiple of `max(S, K)`.
const UPPER_MULTIPLE: f64 = 1.8;

/// Default number of points in a payoff diagram.
pub const DEFAULT_POINTS: usize = 200;

/// One point of a payoff diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Underlying price at expiry (S_T).
    pub terminal_spot: f64,
    /// Option payoff at that price.
    pub payoff: f64,
}

/// Range of terminal prices covered by a payoff diagram:
/// `[max(0, 0.2·min(S, K)), 1.8·max(S, K)]`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::payoff_range;
///
/// let (lo, hi) = payoff_range(100.0, 120.0);
/// assert!((lo - 20.0).abs() < 1e-12);
/// assert!((hi - 216.0).abs() < 1e-12);
/// ```
pub fn payoff_range(spot: f64, strike: f64) -> (f64, f64) {
    let lower = (spot.min(strike) * LOWER_FRACTION).max(0.0);
    let upper = spot.max(strike) * UPPER_MULTIPLE;
    (lower, upper)
}

/// Evenly spaced payoff-at-expiry points over [`payoff_range`].
///
/// Both endpoints are included.
///
/// # Errors
/// `PricingError::InvalidInput` when `n_points < 2` or when `spot` or
/// `strike` is not a positive finite number.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::payoff_curve;
///
/// let points = payoff_curve(OptionType::Put, 100.0, 100.0, 5).unwrap();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0].terminal_spot, 20.0);
/// assert_eq!(points[0].payoff, 80.0);
/// assert_eq!(points[4].payoff, 0.0);
/// ```
pub fn payoff_curve(
    option_type: OptionType,
    strike: f64,
    spot: f64,
    n_points: usize,
) -> Result<Vec<PayoffPoint>, PricingError> {
    if n_points < 2 {
        return Err(PricingError::InvalidInput(format!(
            "payoff diagram needs at least 2 points, got {}",
            n_points
        )));
    }
    for (name, value) in [("strike", strike), ("spot", spot)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "{} must be a positive finite number, got {}",
                name, value
            )));
        }
    }

    let (lower, upper) = payoff_range(spot, strike);
    let step = (upper - lower) / (n_points - 1) as f64;

    Ok((0..n_points)
        .map(|i| {
            // Pin the last point to the upper edge to avoid rounding drift
            let terminal_spot = if i == n_points - 1 {
                upper
            } else {
                lower + step * i as f64
            };
            PayoffPoint {
                terminal_spot,
                payoff: option_type.intrinsic(terminal_spot, strike),
            }
        })
        .collect())
}
