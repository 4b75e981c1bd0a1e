//! Serde adapter writing NaN floats as `null`.
//!
//! NaN is the "not computable" sentinel for prices and sensitivities. JSON
//! has no NaN literal, so the sentinel travels as `null` and comes back as
//! NaN.
//!
//! ```
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Quote {
//!     #[serde(with = "pricer_core::types::nan_as_null")]
//!     price: f64,
//! }
//!
//! let json = serde_json::to_string(&Quote { price: f64::NAN }).unwrap();
//! assert_eq!(json, r#"{"price":null}"#);
//!
//! let back: Quote = serde_json::from_str(&json).unwrap();
//! assert!(back.price.is_nan());
//! ```

use serde::{Deserialize, Deserializer, Serializer};

/// Serialises `value`, mapping NaN to `None`.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(value)
    }
}

/// Deserialises an optional float, mapping `None` to NaN.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
