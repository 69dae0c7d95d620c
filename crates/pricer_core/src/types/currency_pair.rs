//! Currency pair types for FX calculations.
//!
//! A [`CurrencyPair`] names the direction of an exchange rate without
//! carrying the rate itself; see [`FxRate`](super::FxRate) for the quoted
//! value.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::USD, Currency::KRW).unwrap();
//! assert_eq!(pair.code(), "USD/KRW");
//!
//! let inverse = pair.inverse();
//! assert_eq!(inverse.base(), Currency::KRW);
//! assert!(pair.is_inverse(&inverse));
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered pair of distinct currencies, BASE/COUNTER.
///
/// The convention is that a rate quoted on this pair expresses units of
/// the counter currency per one unit of the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurrencyPair"))]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
}

/// Unvalidated wire form of [`CurrencyPair`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurrencyPair {
    base: Currency,
    counter: Currency,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurrencyPair> for CurrencyPair {
    type Error = CurrencyError;

    fn try_from(raw: RawCurrencyPair) -> Result<Self, Self::Error> {
        Self::new(raw.base, raw.counter)
    }
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and counter are the same.
    pub fn new(base: Currency, counter: Currency) -> Result<Self, CurrencyError> {
        if base == counter {
            return Err(CurrencyError::SameCurrency(base));
        }
        Ok(Self { base, counter })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter currency.
    #[inline]
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns the pair with base and counter swapped.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Checks if this pair contains the given currency.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }

    /// Checks if `other` is this pair with base and counter swapped.
    #[inline]
    pub fn is_inverse(&self, other: &CurrencyPair) -> bool {
        self.base == other.counter && self.counter == other.base
    }

    /// Returns the currency of the pair that is not `currency`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::NotInPair` if `currency` is in neither side.
    pub fn other(&self, currency: Currency) -> Result<Currency, CurrencyError> {
        if currency == self.base {
            Ok(self.counter)
        } else if currency == self.counter {
            Ok(self.base)
        } else {
            Err(CurrencyError::NotInPair {
                currency,
                pair: self.code(),
            })
        }
    }

    /// Returns the pair code in standard format (BASE/COUNTER).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses "BASE/COUNTER", e.g. "USD/KRW".
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| CurrencyError::ParseError(format!("expected BASE/COUNTER, got {s}")))?;
        CurrencyPair::new(base.parse()?, counter.parse()?)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}
