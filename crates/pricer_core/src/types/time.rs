//! Calendar dates and the ACT/365F year fraction used for option expiries.
//!
//! The engine measures time to expiry in years on an Actual/365 Fixed basis:
//! calendar days between the valuation date and the expiry date, divided by
//! 365, with past expiries clamped to zero.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, Date};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let t = year_fraction(valuation, expiry);
//! assert!((t - 182.0 / 365.0).abs() < 1e-12);
//!
//! // An expiry in the past counts as "now"
//! assert_eq!(year_fraction(expiry, valuation), 0.0);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Denominator of the Actual/365 Fixed convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `DateError::InvalidDate` for impossible dates such as
    /// February 30th.
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the date `days` calendar days later (earlier if negative).
    ///
    /// Saturates at the chrono calendar bounds.
    pub fn add_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .unwrap_or(self)
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Signed number of calendar days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Time to expiry in years, Actual/365 Fixed, floored at zero.
///
/// `max(expiry - valuation, 0) / 365` where the difference is in calendar
/// days. Expired contracts therefore get `T = 0` and price at intrinsic.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{year_fraction, Date};
///
/// let today = Date::from_ymd(2025, 3, 1).unwrap();
/// let expiry = Date::from_ymd(2026, 3, 1).unwrap();
/// assert_eq!(year_fraction(today, expiry), 1.0);
/// ```
pub fn year_fraction(valuation: Date, expiry: Date) -> f64 {
    days_to_years(expiry - valuation)
}

/// Converts a signed day count to ACT/365F years, flooring negatives at zero.
#[inline]
pub fn days_to_years(days: i64) -> f64 {
    days.max(0) as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Date Tests
    // ========================================

    #[test]
    fn test_from_ymd_rejects_invalid_dates() {
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
        assert_eq!(
            Date::from_ymd(2024, 2, 30),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let date = Date::parse("2025-11-03").unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 3);
        assert_eq!(date.to_string(), "2025-11-03");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            Date::parse(" 2025-01-02\n").unwrap(),
            Date::from_ymd(2025, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_error_mentions_input() {
        match Date::parse("02/01/2025") {
            Err(DateError::ParseError(msg)) => assert!(msg.contains("02/01/2025")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_add_days_and_sub() {
        let start = Date::from_ymd(2024, 12, 25).unwrap();
        let later = start.add_days(10);
        assert_eq!(later, Date::from_ymd(2025, 1, 4).unwrap());
        assert_eq!(later - start, 10);
        assert_eq!(start - later, -10);
        assert_eq!(later.add_days(-10), start);
    }

    // ========================================
    // Year Fraction Tests
    // ========================================

    #[test]
    fn test_year_fraction_act_365_fixed() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end), 182.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_leap_year_exceeds_one() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_same_day_is_zero() {
        let d = Date::from_ymd(2024, 5, 5).unwrap();
        assert_eq!(year_fraction(d, d), 0.0);
    }

    #[test]
    fn test_year_fraction_past_expiry_clamped() {
        let valuation = Date::from_ymd(2024, 5, 5).unwrap();
        let expiry = Date::from_ymd(2024, 5, 1).unwrap();
        assert_eq!(year_fraction(valuation, expiry), 0.0);
    }

    #[test]
    fn test_days_to_years() {
        assert_eq!(days_to_years(365), 1.0);
        assert_eq!(days_to_years(0), 0.0);
        assert_eq!(days_to_years(-30), 0.0);
        assert_relative_eq!(days_to_years(73), 0.2, epsilon = 1e-15);
    }
}
