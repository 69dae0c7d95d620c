//! FX rates and the rate-source abstraction used for currency conversion.

use std::fmt;

use super::currency::Currency;
use super::currency_pair::CurrencyPair;
use super::error::{CurrencyError, PricingError};

/// A source of FX rates.
///
/// `fx_rate(base, counter)` returns the number of units of `counter` per
/// unit of `base`. Implementations must return `1.0` when both currencies are
/// the same.
pub trait FxRateProvider {
    /// Returns the rate to convert one unit of `base` into `counter`.
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, PricingError>;

    /// Converts `amount` expressed in `from` into `to`.
    fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, PricingError> {
        Ok(amount * self.fx_rate(from, to)?)
    }
}

/// An exchange rate quoted on a currency pair.
///
/// `rate` is the number of units of the pair's counter currency per one unit
/// of its base currency. The rate can be applied in either direction.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Currency, FxRate};
///
/// let usd_krw = FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap();
/// assert_eq!(usd_krw.fx_rate(Currency::USD, Currency::KRW).unwrap(), 1123.45);
///
/// let krw_usd = usd_krw.inverse();
/// assert!((krw_usd.rate() - 1.0 / 1123.45).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFxRate"))]
pub struct FxRate {
    pair: CurrencyPair,
    rate: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFxRate {
    pair: CurrencyPair,
    rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFxRate> for FxRate {
    type Error = CurrencyError;

    fn try_from(raw: RawFxRate) -> Result<Self, Self::Error> {
        Self::new(raw.pair, raw.rate)
    }
}

impl FxRate {
    /// Creates an FX rate on the given pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` if the rate is not positive and finite.
    pub fn new(pair: CurrencyPair, rate: f64) -> Result<Self, CurrencyError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CurrencyError::InvalidRate { rate });
        }
        Ok(Self { pair, rate })
    }

    /// Creates an FX rate from two currencies.
    pub fn of(base: Currency, counter: Currency, rate: f64) -> Result<Self, CurrencyError> {
        Self::new(CurrencyPair::new(base, counter)?, rate)
    }

    /// Returns the currency pair.
    #[inline]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the quoted rate (counter per base).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the inverse rate, quoted on the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            pair: self.pair.inverse(),
            rate: 1.0 / self.rate,
        }
    }

    /// Returns a copy of this rate with `delta` added to the quote.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` if the shifted rate is not positive.
    pub fn shifted_by(&self, delta: f64) -> Result<Self, CurrencyError> {
        Self::new(self.pair, self.rate + delta)
    }

    /// Returns the rate to convert `base` into `counter` using this quote.
    ///
    /// Works in both directions of the pair and returns `1.0` for identical
    /// currencies.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::NotInPair` if either currency is not in the pair.
    pub fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, CurrencyError> {
        if base == counter {
            return Ok(1.0);
        }
        if base == self.pair.base() && counter == self.pair.counter() {
            return Ok(self.rate);
        }
        if base == self.pair.counter() && counter == self.pair.base() {
            return Ok(1.0 / self.rate);
        }
        let missing = if self.pair.contains(base) { counter } else { base };
        Err(CurrencyError::NotInPair {
            currency: missing,
            pair: self.pair.code(),
        })
    }

    /// Converts an amount in `from` to the other currency of the pair.
    pub fn convert(&self, amount: f64, from: Currency) -> Result<f64, CurrencyError> {
        let to = self.pair.other(from)?;
        Ok(amount * self.fx_rate(from, to)?)
    }
}

impl FxRateProvider for FxRate {
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, PricingError> {
        Ok(FxRate::fx_rate(self, base, counter)?)
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pair, self.rate)
    }
}
