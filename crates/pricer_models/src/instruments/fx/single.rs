//! Single FX exchange (FX forward).
//!
//! An [`FxSingle`] is the exchange of two amounts in different currencies on
//! one payment date: one amount is received, the other paid. The first
//! amount defines the base currency of the trade.

use pricer_core::types::{CurrencyAmount, CurrencyPair, Date, FxRate};

use super::super::error::InstrumentError;

/// Exchange of two currency amounts on a single payment date.
///
/// # Invariants
/// - The two amounts are in different currencies
/// - The amounts never share a non-zero sign (zero amounts are accepted)
///
/// # Examples
/// ```
/// use pricer_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use pricer_models::instruments::fx::FxSingle;
///
/// let usd = CurrencyAmount::new(Currency::USD, 100_000_000.0);
/// let rate = FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap();
/// let date = Date::from_ymd(2012, 5, 4).unwrap();
///
/// let fx = FxSingle::of_rate(usd, &rate, date).unwrap();
/// assert_eq!(fx.counter_currency_amount().currency(), Currency::KRW);
/// assert!((fx.counter_currency_amount().amount() + 112_345_000_000.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFxSingle"))]
pub struct FxSingle {
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pair: CurrencyPair,
    base_currency_amount: CurrencyAmount,
    counter_currency_amount: CurrencyAmount,
    payment_date: Date,
}

/// Wire form of [`FxSingle`], checked by [`FxSingle::new`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFxSingle {
    base_currency_amount: CurrencyAmount,
    counter_currency_amount: CurrencyAmount,
    payment_date: Date,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFxSingle> for FxSingle {
    type Error = InstrumentError;

    fn try_from(raw: RawFxSingle) -> Result<Self, Self::Error> {
        Self::new(
            raw.base_currency_amount,
            raw.counter_currency_amount,
            raw.payment_date,
        )
    }
}

impl FxSingle {
    /// Creates an exchange of `amount1` against `amount2` on `payment_date`.
    ///
    /// `amount1` becomes the base amount.
    ///
    /// # Errors
    /// - `InstrumentError::SameCurrency` if both amounts share a currency
    /// - `InstrumentError::SameSign` if both amounts are received or both paid
    pub fn new(
        amount1: CurrencyAmount,
        amount2: CurrencyAmount,
        payment_date: Date,
    ) -> Result<Self, InstrumentError> {
        let pair = CurrencyPair::new(amount1.currency(), amount2.currency())
            .map_err(|_| InstrumentError::SameCurrency(amount1.currency()))?;
        if (amount1.is_positive() && amount2.is_positive())
            || (amount1.is_negative() && amount2.is_negative())
        {
            return Err(InstrumentError::SameSign {
                first: amount1,
                second: amount2,
            });
        }
        Ok(Self {
            pair,
            base_currency_amount: amount1,
            counter_currency_amount: amount2,
            payment_date,
        })
    }

    /// Creates an exchange of `amount` at `fx_rate`.
    ///
    /// The other amount is `-amount × rate`, with the rate inverted when
    /// `amount` is in the counter currency of the quote. The base currency of
    /// the result is always the base of `fx_rate`.
    ///
    /// # Errors
    /// - `InstrumentError::Currency` if `amount` is not in the quoted pair
    pub fn of_rate(
        amount: CurrencyAmount,
        fx_rate: &FxRate,
        payment_date: Date,
    ) -> Result<Self, InstrumentError> {
        let pair = fx_rate.pair();
        let other = pair.other(amount.currency())?;
        let converted = fx_rate.convert(amount.amount(), amount.currency())?;
        let opposite = CurrencyAmount::new(other, -converted);
        if amount.currency() == pair.base() {
            Self::new(amount, opposite, payment_date)
        } else {
            Self::new(opposite, amount, payment_date)
        }
    }

    /// Returns the base currency amount.
    #[inline]
    pub fn base_currency_amount(&self) -> CurrencyAmount {
        self.base_currency_amount
    }

    /// Returns the counter currency amount.
    #[inline]
    pub fn counter_currency_amount(&self) -> CurrencyAmount {
        self.counter_currency_amount
    }

    /// Returns the payment date of both amounts.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the currency pair, base/counter.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the amount received: the base amount if it is positive,
    /// otherwise the counter amount.
    #[inline]
    pub fn receive_currency_amount(&self) -> CurrencyAmount {
        if self.base_currency_amount.is_positive() {
            self.base_currency_amount
        } else {
            self.counter_currency_amount
        }
    }

    /// Returns the amount paid: the base amount if it is negative,
    /// otherwise the counter amount.
    #[inline]
    pub fn pay_currency_amount(&self) -> CurrencyAmount {
        if self.base_currency_amount.is_negative() {
            self.base_currency_amount
        } else {
            self.counter_currency_amount
        }
    }

    /// Returns the contract rate, counter units per base unit.
    ///
    /// # Errors
    /// - `InstrumentError::ZeroAmount` if the base amount is zero
    /// - `InstrumentError::Currency` if the implied rate is not positive
    pub fn fx_rate(&self) -> Result<FxRate, InstrumentError> {
        if self.base_currency_amount.is_zero() {
            return Err(InstrumentError::ZeroAmount(self.base_currency_amount));
        }
        let rate = -self.counter_currency_amount.amount() / self.base_currency_amount.amount();
        Ok(FxRate::new(self.pair, rate)?)
    }

    /// Returns a copy that keeps the base amount and exchanges it at `rate`.
    ///
    /// # Errors
    /// - `InstrumentError::SameSign` if `rate` is negative and the base
    ///   amount is non-zero
    pub fn with_rate(&self, rate: f64) -> Result<Self, InstrumentError> {
        let counter = CurrencyAmount::new(
            self.counter_currency_amount.currency(),
            -self.base_currency_amount.amount() * rate,
        );
        Self::new(self.base_currency_amount, counter, self.payment_date)
    }
}
