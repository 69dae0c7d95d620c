//! FX swap: two opposite FX exchanges on different dates.

use pricer_core::types::{CurrencyAmount, CurrencyPair, Date, FxRate};

use super::super::error::InstrumentError;
use super::single::FxSingle;

/// A near and a far [`FxSingle`] exchanging the base currency in opposite
/// directions.
///
/// # Invariants
/// - The near leg pays strictly before the far leg
/// - Both legs share one currency pair, base/counter
/// - The base amounts are non-zero and of opposite sign
///
/// # Examples
/// ```
/// use pricer_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use pricer_models::instruments::fx::FxSwap;
///
/// let swap = FxSwap::of_conventional(
///     CurrencyAmount::new(Currency::USD, 100_000_000.0),
///     &FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap(),
///     Date::from_ymd(2012, 2, 15).unwrap(),
///     &FxRate::of(Currency::USD, Currency::KRW, 1125.0).unwrap(),
///     Date::from_ymd(2012, 5, 15).unwrap(),
/// )
/// .unwrap();
///
/// assert!(swap.near_leg().base_currency_amount().is_positive());
/// assert!(swap.far_leg().base_currency_amount().is_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFxSwap"))]
pub struct FxSwap {
    near_leg: FxSingle,
    far_leg: FxSingle,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFxSwap {
    near_leg: FxSingle,
    far_leg: FxSingle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFxSwap> for FxSwap {
    type Error = InstrumentError;

    fn try_from(raw: RawFxSwap) -> Result<Self, Self::Error> {
        Self::new(raw.near_leg, raw.far_leg)
    }
}

impl FxSwap {
    /// Creates a swap from its two legs.
    ///
    /// # Errors
    /// - `InstrumentError::LegDateOrder` if the near leg does not pay first
    /// - `InstrumentError::CurrencyPairMismatch` if the legs differ in pair
    /// - `InstrumentError::ZeroAmount` if a base amount is zero
    /// - `InstrumentError::SameDirection` if both base amounts share a sign
    pub fn new(near_leg: FxSingle, far_leg: FxSingle) -> Result<Self, InstrumentError> {
        if near_leg.payment_date() >= far_leg.payment_date() {
            return Err(InstrumentError::LegDateOrder {
                near: near_leg.payment_date(),
                far: far_leg.payment_date(),
            });
        }
        if near_leg.currency_pair() != far_leg.currency_pair() {
            return Err(InstrumentError::CurrencyPairMismatch {
                near: near_leg.currency_pair(),
                far: far_leg.currency_pair(),
            });
        }
        let near_base = near_leg.base_currency_amount();
        let far_base = far_leg.base_currency_amount();
        for base in [near_base, far_base] {
            if base.is_zero() {
                return Err(InstrumentError::ZeroAmount(base));
            }
        }
        if near_base.is_positive() == far_base.is_positive() {
            return Err(InstrumentError::SameDirection(near_base.currency()));
        }
        Ok(Self { near_leg, far_leg })
    }

    /// Creates a swap exchanging `amount` on the near date and `-amount`
    /// on the far date, each at its own rate.
    ///
    /// # Errors
    /// As for [`FxSingle::of_rate`] and [`FxSwap::new`].
    pub fn of_conventional(
        amount: CurrencyAmount,
        near_rate: &FxRate,
        near_date: Date,
        far_rate: &FxRate,
        far_date: Date,
    ) -> Result<Self, InstrumentError> {
        let near = FxSingle::of_rate(amount, near_rate, near_date)?;
        let far = FxSingle::of_rate(amount.negated(), far_rate, far_date)?;
        Self::new(near, far)
    }

    /// Returns the near leg.
    #[inline]
    pub fn near_leg(&self) -> &FxSingle {
        &self.near_leg
    }

    /// Returns the far leg.
    #[inline]
    pub fn far_leg(&self) -> &FxSingle {
        &self.far_leg
    }

    /// Returns the currency pair shared by both legs.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.near_leg.currency_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::Currency;

    const NOTIONAL: f64 = 100_000_000.0;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn usd_krw(rate: f64) -> FxRate {
        FxRate::of(Currency::USD, Currency::KRW, rate).unwrap()
    }

    fn leg(amount: f64, rate: f64, on: Date) -> FxSingle {
        FxSingle::of_rate(CurrencyAmount::new(Currency::USD, amount), &usd_krw(rate), on).unwrap()
    }

    #[test]
    fn test_of_conventional() {
        let swap = FxSwap::of_conventional(
            CurrencyAmount::new(Currency::USD, NOTIONAL),
            &usd_krw(1123.45),
            date(2012, 2, 15),
            &usd_krw(1125.0),
            date(2012, 5, 15),
        )
        .unwrap();

        assert_eq!(swap.currency_pair().code(), "USD/KRW");
        assert_eq!(swap.near_leg().base_currency_amount().amount(), NOTIONAL);
        assert_eq!(swap.far_leg().base_currency_amount().amount(), -NOTIONAL);
        assert_relative_eq!(swap.far_leg().counter_currency_amount().amount(), NOTIONAL * 1125.0);
        assert_eq!(swap.far_leg().payment_date(), date(2012, 5, 15));
    }

    #[test]
    fn test_rejects_unordered_dates() {
        let result = FxSwap::new(
            leg(NOTIONAL, 1123.0, date(2012, 5, 15)),
            leg(-NOTIONAL, 1125.0, date(2012, 5, 15)),
        );
        assert!(matches!(result, Err(InstrumentError::LegDateOrder { .. })));
    }

    #[test]
    fn test_rejects_pair_mismatch() {
        let near = leg(NOTIONAL, 1123.0, date(2012, 2, 15));
        let far = FxSingle::of_rate(
            CurrencyAmount::new(Currency::EUR, -NOTIONAL),
            &FxRate::of(Currency::EUR, Currency::KRW, 1400.0).unwrap(),
            date(2012, 5, 15),
        )
        .unwrap();
        assert!(matches!(
            FxSwap::new(near, far),
            Err(InstrumentError::CurrencyPairMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_same_direction() {
        let result = FxSwap::new(
            leg(NOTIONAL, 1123.0, date(2012, 2, 15)),
            leg(NOTIONAL, 1125.0, date(2012, 5, 15)),
        );
        assert_eq!(result, Err(InstrumentError::SameDirection(Currency::USD)));
    }

    #[test]
    fn test_rejects_zero_base_amount() {
        let result = FxSwap::new(
            leg(0.0, 1123.0, date(2012, 2, 15)),
            leg(-NOTIONAL, 1125.0, date(2012, 5, 15)),
        );
        assert!(matches!(result, Err(InstrumentError::ZeroAmount(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let swap = FxSwap::new(
            leg(NOTIONAL, 1123.0, date(2012, 2, 15)),
            leg(-NOTIONAL, 1125.0, date(2012, 5, 15)),
        )
        .unwrap();
        let json = serde_json::to_string(&swap).unwrap();
        assert_eq!(serde_json::from_str::<FxSwap>(&json).unwrap(), swap);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_reversed_dates() {
        let near = leg(NOTIONAL, 1123.0, date(2013, 1, 1));
        let far = leg(-NOTIONAL, 1125.0, date(2012, 1, 1));
        let value = serde_json::json!({
            "near_leg": serde_json::to_value(near).unwrap(),
            "far_leg": serde_json::to_value(far).unwrap(),
        });

        let err = serde_json::from_value::<FxSwap>(value).unwrap_err();
        assert!(err.to_string().contains("2013-01-01"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_same_direction() {
        let value = serde_json::json!({
            "near_leg": serde_json::to_value(leg(NOTIONAL, 1123.0, date(2012, 2, 15))).unwrap(),
            "far_leg": serde_json::to_value(leg(NOTIONAL, 1125.0, date(2012, 5, 15))).unwrap(),
        });
        assert!(serde_json::from_value::<FxSwap>(value).is_err());
    }
}
