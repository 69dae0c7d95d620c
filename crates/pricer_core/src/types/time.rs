//! Dates and day count conventions.
//!
//! - `Date`: calendar date wrapper over `chrono::NaiveDate`
//! - `DayCountConvention`: year fraction between two dates
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let valuation = Date::from_ymd(2012, 2, 13).unwrap();
//! let payment = Date::from_ymd(2012, 5, 4).unwrap();
//!
//! assert_eq!(payment - valuation, 81);
//! let t = DayCountConvention::Act365Fixed.year_fraction(valuation, payment);
//! assert!((t - 81.0 / 365.0).abs() < 1e-15);
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Calendar date without time zone.
///
/// Serialised as ISO 8601 (`YYYY-MM-DD`). Subtracting two dates yields the
/// signed number of days between them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidDate` for impossible dates such as 2023-02-29.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{s}: {e}")))
    }

    /// Returns the underlying `NaiveDate`.
    #[inline]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days later (earlier if negative).
    ///
    /// Saturates at the last representable date.
    pub fn plus_days(&self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .unwrap_or(*self)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

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

/// Day count convention used to turn a date interval into a year fraction.
///
/// Year fractions are signed: a start date after the end date gives a
/// negative fraction.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual days / 365.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ACT/365F", alias = "ACT/365"))]
    Act365Fixed,
    /// Actual days / 360.
    #[cfg_attr(feature = "serde", serde(rename = "ACT/360"))]
    Act360,
    /// 30/360 US bond basis.
    #[cfg_attr(feature = "serde", serde(rename = "30/360"))]
    Thirty360,
}

impl DayCountConvention {
    /// Returns the market name of the convention.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Year fraction from `start` to `end`, negative when `start > end`.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act365Fixed => (end - start) as f64 / 365.0,
            DayCountConvention::Act360 => (end - start) as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                let (from, to, sign) = if start <= end {
                    (start, end, 1.0)
                } else {
                    (end, start, -1.0)
                };
                let d1 = from.day().min(30);
                let d2 = if to.day() == 31 && d1 == 30 { 30 } else { to.day() };
                let days = 360 * (to.year() - from.year())
                    + 30 * (to.month() as i32 - from.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days as f64 / 360.0
            }
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = DateError;

    /// Accepts `ACT/365F`, `ACT/365`, `A365`, `ACT/360`, `A360`, `30/360`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, DateError> {
        match s.trim().to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365F" | "ACT365" | "A365" => Ok(DayCountConvention::Act365Fixed),
            "ACT360" | "A360" => Ok(DayCountConvention::Act360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(DateError::ParseError(format!(
                "unknown day count convention: {s}"
            ))),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
