//! Currency types for financial calculations.
//!
//! ISO 4217 currency codes with decimal precision metadata. Currencies are
//! totally ordered by code so that multi-currency containers keyed by
//! currency iterate deterministically.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::currency::Currency;
//!
//! let krw = Currency::KRW;
//! assert_eq!(krw.code(), "KRW");
//! assert_eq!(krw.decimal_places(), 0);
//! assert!(Currency::EUR < Currency::USD);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes with decimal precision metadata.
///
/// Variant order is alphabetical so that the derived `Ord` agrees with
/// ordering by ISO code.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Swiss Franc (2 decimal places)
    CHF,
    /// Euro (2 decimal places)
    EUR,
    /// British Pound Sterling (2 decimal places)
    GBP,
    /// Japanese Yen (no minor units)
    JPY,
    /// South Korean Won (no minor units)
    KRW,
    /// United States Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// All supported currencies, in code order.
    pub const ALL: [Currency; 6] = [
        Currency::CHF,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::KRW,
        Currency::USD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::KRW.code(), "KRW");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
            Currency::USD => "USD",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            Currency::CHF | Currency::EUR | Currency::GBP | Currency::USD => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!("krw".parse::<Currency>().unwrap(), Currency::KRW);
    /// assert!("XYZ".parse::<Currency>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
