//! Single- and multi-currency amounts.
//!
//! - [`CurrencyAmount`]: a signed amount in one currency
//! - [`MultiCurrencyAmount`]: at most one amount per currency, iterated in
//!   currency order
//!
//! Amounts in different currencies are never added directly; combining a
//! [`MultiCurrencyAmount`] sums entries that share a currency and keeps the
//! others side by side.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyAmount, MultiCurrencyAmount};
//!
//! let pv = MultiCurrencyAmount::of([
//!     CurrencyAmount::new(Currency::USD, 100.0),
//!     CurrencyAmount::new(Currency::KRW, -112_345.0),
//! ]);
//! assert_eq!(pv.amount(Currency::USD).amount(), 100.0);
//! assert_eq!(pv.amount(Currency::EUR).amount(), 0.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use super::currency::Currency;
use super::error::{CurrencyError, PricingError};
use super::fx_rate::FxRateProvider;

/// A signed amount of a single currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    currency: Currency,
    amount: f64,
}

impl CurrencyAmount {
    /// Creates an amount.
    #[inline]
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount of `currency`.
    #[inline]
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, 0.0)
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true if the amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if the amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns the amount with its sign flipped.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(self.currency, -self.amount)
    }

    /// Returns the amount scaled by `factor`.
    #[inline]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self::new(self.currency, self.amount * factor)
    }

    /// Adds another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Mismatch` if the currencies differ.
    pub fn plus(&self, other: CurrencyAmount) -> Result<Self, CurrencyError> {
        self.check_currency(other.currency)?;
        Ok(Self::new(self.currency, self.amount + other.amount))
    }

    /// Subtracts another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Mismatch` if the currencies differ.
    pub fn minus(&self, other: CurrencyAmount) -> Result<Self, CurrencyError> {
        self.check_currency(other.currency)?;
        Ok(Self::new(self.currency, self.amount - other.amount))
    }

    /// Converts this amount into `currency` using `rates`.
    pub fn converted_to<R: FxRateProvider + ?Sized>(
        &self,
        currency: Currency,
        rates: &R,
    ) -> Result<Self, PricingError> {
        if currency == self.currency {
            return Ok(*self);
        }
        let rate = rates.fx_rate(self.currency, currency)?;
        Ok(Self::new(currency, self.amount * rate))
    }

    fn check_currency(&self, other: Currency) -> Result<(), CurrencyError> {
        if other != self.currency {
            return Err(CurrencyError::Mismatch {
                expected: self.currency,
                actual: other,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// A collection of amounts keyed by currency, at most one per currency.
///
/// An empty value and a value holding an explicit zero entry are distinct:
/// presence of a currency is observable through [`contains`](Self::contains)
/// and equality.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiCurrencyAmount {
    amounts: BTreeMap<Currency, f64>,
}

impl MultiCurrencyAmount {
    /// Returns an empty amount.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an amount from single-currency amounts, summing duplicates.
    pub fn of<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = CurrencyAmount>,
    {
        amounts
            .into_iter()
            .fold(Self::empty(), |acc, amount| acc.plus(amount))
    }

    /// Returns the amount for `currency`, or zero when absent.
    pub fn amount(&self, currency: Currency) -> CurrencyAmount {
        CurrencyAmount::new(
            currency,
            self.amounts.get(&currency).copied().unwrap_or(0.0),
        )
    }

    /// Returns true if an entry exists for `currency`.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.amounts.contains_key(&currency)
    }

    /// Returns the number of currencies present.
    #[inline]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no currency is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Returns the currencies present, in order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.amounts.keys().copied()
    }

    /// Iterates over the entries in currency order.
    pub fn iter(&self) -> impl Iterator<Item = CurrencyAmount> + '_ {
        self.amounts
            .iter()
            .map(|(&currency, &amount)| CurrencyAmount::new(currency, amount))
    }

    /// Returns a copy with `amount` added to the entry of its currency.
    pub fn plus(mut self, amount: CurrencyAmount) -> Self {
        *self.amounts.entry(amount.currency()).or_insert(0.0) += amount.amount();
        self
    }

    /// Sums two multi-currency amounts currency by currency.
    pub fn combined_with(&self, other: &MultiCurrencyAmount) -> Self {
        other.iter().fold(self.clone(), |acc, amount| acc.plus(amount))
    }

    /// Returns a copy with every entry negated.
    pub fn negated(&self) -> Self {
        Self {
            amounts: self
                .amounts
                .iter()
                .map(|(&currency, &amount)| (currency, -amount))
                .collect(),
        }
    }

    /// Converts every entry into `currency` using `rates` and sums them.
    pub fn converted_to<R: FxRateProvider + ?Sized>(
        &self,
        currency: Currency,
        rates: &R,
    ) -> Result<CurrencyAmount, PricingError> {
        self.iter().try_fold(CurrencyAmount::zero(currency), |acc, amount| {
            let converted = amount.converted_to(currency, rates)?;
            Ok(acc.plus(converted)?)
        })
    }
}

impl From<CurrencyAmount> for MultiCurrencyAmount {
    fn from(amount: CurrencyAmount) -> Self {
        Self::empty().plus(amount)
    }
}

impl FromIterator<CurrencyAmount> for MultiCurrencyAmount {
    fn from_iter<I: IntoIterator<Item = CurrencyAmount>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl fmt::Display for MultiCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, amount) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", amount)?;
        }
        f.write_str("]")
    }
}
