//! Closed-form option sensitivities.
//!
//! Provides [`Greeks`], the eight Black-Scholes-Merton sensitivities
//! reported for every valuation, and [`GreekName`] to address them by name.
//!
//! Degenerate inputs (expired contract, zero volatility, non-positive spot or
//! strike) produce [`Greeks::nan`]: every entry NaN, never an error.

use std::fmt;

/// Identifies one entry of [`Greeks`].
///
/// The string form matches the field name and the key used when Greeks are
/// serialised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GreekName {
    /// Call delta: ∂C/∂S
    DeltaCall,
    /// Put delta: ∂P/∂S
    DeltaPut,
    /// Gamma: ∂²V/∂S² (same for calls and puts)
    Gamma,
    /// Vega: ∂V/∂σ per unit of volatility (same for calls and puts)
    Vega,
    /// Call theta: ∂C/∂t
    ThetaCall,
    /// Put theta: ∂P/∂t
    ThetaPut,
    /// Call rho: ∂C/∂r
    RhoCall,
    /// Put rho: ∂P/∂r
    RhoPut,
}

impl GreekName {
    /// All names in report order.
    pub const ALL: [GreekName; 8] = [
        GreekName::DeltaCall,
        GreekName::DeltaPut,
        GreekName::Gamma,
        GreekName::Vega,
        GreekName::ThetaCall,
        GreekName::ThetaPut,
        GreekName::RhoCall,
        GreekName::RhoPut,
    ];

    /// Snake-case key, e.g. `"delta_call"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GreekName::DeltaCall => "delta_call",
            GreekName::DeltaPut => "delta_put",
            GreekName::Gamma => "gamma",
            GreekName::Vega => "vega",
            GreekName::ThetaCall => "theta_call",
            GreekName::ThetaPut => "theta_put",
            GreekName::RhoCall => "rho_call",
            GreekName::RhoPut => "rho_put",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        GreekName::ALL.into_iter().find(|name| name.as_str() == key)
    }
}

impl fmt::Display for GreekName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Black-Scholes-Merton Greeks for both option rights.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::{GreekName, Greeks};
///
/// let greeks = Greeks::nan();
/// assert!(greeks.is_degenerate());
/// assert!(greeks.get(GreekName::Vega).is_nan());
/// assert_eq!(greeks.iter().count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Greeks {
    /// ∂C/∂S = e^(-qT)·N(d₁)
    pub delta_call: f64,
    /// ∂P/∂S = e^(-qT)·(N(d₁) - 1)
    pub delta_put: f64,
    /// ∂²V/∂S² = e^(-qT)·φ(d₁) / (S·σ·√T)
    pub gamma: f64,
    /// ∂V/∂σ = S·e^(-qT)·φ(d₁)·√T
    pub vega: f64,
    /// Call time decay (per year).
    pub theta_call: f64,
    /// Put time decay (per year).
    pub theta_put: f64,
    /// ∂C/∂r = K·T·e^(-rT)·N(d₂)
    pub rho_call: f64,
    /// ∂P/∂r = -K·T·e^(-rT)·N(-d₂)
    pub rho_put: f64,
}

impl Greeks {
    /// All eight entries set to NaN.
    pub const fn nan() -> Self {
        Self {
            delta_call: f64::NAN,
            delta_put: f64::NAN,
            gamma: f64::NAN,
            vega: f64::NAN,
            theta_call: f64::NAN,
            theta_put: f64::NAN,
            rho_call: f64::NAN,
            rho_put: f64::NAN,
        }
    }

    /// Returns `true` if any entry is NaN.
    pub fn is_degenerate(&self) -> bool {
        self.iter().any(|(_, value)| value.is_nan())
    }

    /// Value of one sensitivity.
    #[inline]
    pub fn get(&self, name: GreekName) -> f64 {
        match name {
            GreekName::DeltaCall => self.delta_call,
            GreekName::DeltaPut => self.delta_put,
            GreekName::Gamma => self.gamma,
            GreekName::Vega => self.vega,
            GreekName::ThetaCall => self.theta_call,
            GreekName::ThetaPut => self.theta_put,
            GreekName::RhoCall => self.rho_call,
            GreekName::RhoPut => self.rho_put,
        }
    }

    fn slot_mut(&mut self, name: GreekName) -> &mut f64 {
        match name {
            GreekName::DeltaCall => &mut self.delta_call,
            GreekName::DeltaPut => &mut self.delta_put,
            GreekName::Gamma => &mut self.gamma,
            GreekName::Vega => &mut self.vega,
            GreekName::ThetaCall => &mut self.theta_call,
            GreekName::ThetaPut => &mut self.theta_put,
            GreekName::RhoCall => &mut self.rho_call,
            GreekName::RhoPut => &mut self.rho_put,
        }
    }

    /// Iterates `(name, value)` pairs in [`GreekName::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (GreekName, f64)> + '_ {
        GreekName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

impl Default for Greeks {
    fn default() -> Self {
        Self::nan()
    }
}

// Serde support (optional feature)
//
// Greeks serialise as a flat name -> number map. NaN entries are written as
// `null` and read back as NaN so degenerate results survive a round trip.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Greeks {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(GreekName::ALL.len()))?;
            for (name, value) in self.iter() {
                let value = if value.is_nan() { None } else { Some(value) };
                map.serialize_entry(name.as_str(), &value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for Greeks {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct GreeksVisitor;

            impl<'de> Visitor<'de> for GreeksVisitor {
                type Value = Greeks;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map of Greek name to number or null")
                }

                fn visit_map<A>(self, mut access: A) -> Result<Greeks, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut greeks = Greeks::nan();
                    while let Some(key) = access.next_key::<String>()? {
                        let name = GreekName::from_key(&key).ok_or_else(|| {
                            de::Error::unknown_field(&key, GREEK_KEYS)
                        })?;
                        let value: Option<f64> = access.next_value()?;
                        *greeks.slot_mut(name) = value.unwrap_or(f64::NAN);
                    }
                    Ok(greeks)
                }
            }

            deserializer.deserialize_map(GreeksVisitor)
        }
    }

    const GREEK_KEYS: &[&str] = &[
        "delta_call",
        "delta_put",
        "gamma",
        "vega",
        "theta_call",
        "theta_put",
        "rho_call",
        "rho_put",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Greeks {
        Greeks {
            delta_call: 0.6,
            delta_put: -0.4,
            gamma: 0.02,
            vega: 37.5,
            theta_call: -6.4,
            theta_put: -1.6,
            rho_call: 53.2,
            rho_put: -41.9,
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let g = sample();
        assert_eq!(g.get(GreekName::DeltaCall), 0.6);
        assert_eq!(g.get(GreekName::DeltaPut), -0.4);
        assert_eq!(g.get(GreekName::Gamma), 0.02);
        assert_eq!(g.get(GreekName::Vega), 37.5);
        assert_eq!(g.get(GreekName::ThetaCall), -6.4);
        assert_eq!(g.get(GreekName::ThetaPut), -1.6);
        assert_eq!(g.get(GreekName::RhoCall), 53.2);
        assert_eq!(g.get(GreekName::RhoPut), -41.9);
    }

    #[test]
    fn test_iter_order_and_names() {
        let names: Vec<&str> = sample().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "delta_call",
                "delta_put",
                "gamma",
                "vega",
                "theta_call",
                "theta_put",
                "rho_call",
                "rho_put"
            ]
        );
    }

    #[test]
    fn test_nan_is_degenerate() {
        assert!(Greeks::nan().is_degenerate());
        assert!(Greeks::nan().iter().all(|(_, v)| v.is_nan()));
        assert!(!sample().is_degenerate());

        let mut partial = sample();
        partial.gamma = f64::NAN;
        assert!(partial.is_degenerate());
    }

    #[test]
    fn test_from_key() {
        for name in GreekName::ALL {
            assert_eq!(GreekName::from_key(name.as_str()), Some(name));
        }
        assert_eq!(GreekName::from_key("vanna"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_as_flat_map() {
        let json = serde_json::to_value(sample()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 8);
        assert_eq!(map["vega"], serde_json::json!(37.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_nan_round_trips_through_null() {
        let json = serde_json::to_string(&Greeks::nan()).unwrap();
        assert!(json.contains("\"gamma\":null"));

        let back: Greeks = serde_json::from_str(&json).unwrap();
        assert!(back.iter().all(|(_, v)| v.is_nan()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Greeks, _> = serde_json::from_str(r#"{"vanna": 1.0}"#);
        assert!(result.is_err());
    }
}
