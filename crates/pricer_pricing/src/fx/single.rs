//! Discounting pricer for a single FX exchange.

use pricer_core::sensitivity::{PointSensitivities, PointSensitivity};
use pricer_core::traits::RatesProvider;
use pricer_core::types::{CurrencyAmount, FxRate, MultiCurrencyAmount, PricingError};
use pricer_models::instruments::FxSingle;
use tracing::debug;

/// Prices an [`FxSingle`] by discounting each amount on its own curve.
///
/// # Examples
///
/// ```rust,ignore
/// let pricer = DiscountingFxSingleProductPricer::DEFAULT;
/// let pv = pricer.present_value(&fx, &provider)?;
/// let spread = pricer.par_spread(&fx, &provider)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountingFxSingleProductPricer;

impl DiscountingFxSingleProductPricer {
    /// Default pricer instance.
    pub const DEFAULT: Self = Self;

    /// Present value of both amounts, each in its own currency.
    ///
    /// Returns an empty amount once the payment date is on or before the
    /// valuation date.
    ///
    /// # Errors
    ///
    /// Propagates missing discount curves from the provider.
    pub fn present_value<P>(
        &self,
        fx: &FxSingle,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        debug!(
            pair = %fx.currency_pair(),
            payment_date = %fx.payment_date(),
            "FX single present value"
        );
        if is_expired(fx, provider) {
            return Ok(MultiCurrencyAmount::empty());
        }
        let base = discounted(fx.base_currency_amount(), fx, provider)?;
        let counter = discounted(fx.counter_currency_amount(), fx, provider)?;
        Ok(MultiCurrencyAmount::of([base, counter]))
    }

    /// Currency exposure, equal to the present value for a linear product.
    pub fn currency_exposure<P>(
        &self,
        fx: &FxSingle,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.present_value(fx, provider)
    }

    /// Spread to add to the contract rate so that the present value is zero.
    ///
    /// Computed as the present value converted to the counter currency,
    /// divided by the base notional times the counter discount factor.
    ///
    /// # Errors
    ///
    /// - `PricingError::Undefined` for a zero base notional or a zero
    ///   counter discount factor
    /// - Missing market data from the provider
    pub fn par_spread<P>(&self, fx: &FxSingle, provider: &P) -> Result<f64, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let counter = fx.counter_currency_amount().currency();
        let pv = self.present_value(fx, provider)?;
        let pv_counter = pv.converted_to(counter, provider)?;
        let df_counter = provider.discount_factor(counter, fx.payment_date())?;
        spread_of(pv_counter, fx.base_currency_amount(), df_counter)
    }

    /// Sensitivity of the present value to each discount factor.
    ///
    /// One record per amount, valued at the amount itself since
    /// `∂(N × DF) / ∂DF = N`. Empty once the payment date has passed.
    pub fn present_value_sensitivity<P>(
        &self,
        fx: &FxSingle,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        if is_expired(fx, provider) {
            return Ok(PointSensitivities::empty());
        }
        let date = fx.payment_date();
        let base = fx.base_currency_amount();
        let counter = fx.counter_currency_amount();
        Ok(PointSensitivities::of([
            PointSensitivity::discount(base.currency(), date, base.amount()),
            PointSensitivity::discount(counter.currency(), date, counter.amount()),
        ]))
    }

    /// Forward FX rate of the product's pair for delivery on its payment date.
    ///
    /// # Errors
    ///
    /// - `PricingError::Undefined` if the counter discount factor is zero
    /// - Missing market data from the provider
    pub fn forward_fx_rate<P>(&self, fx: &FxSingle, provider: &P) -> Result<FxRate, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let pair = fx.currency_pair();
        let rate = provider.fx_forward_rate(pair, fx.payment_date())?;
        Ok(FxRate::new(pair, rate)?)
    }
}

fn is_expired<P: RatesProvider + ?Sized>(fx: &FxSingle, provider: &P) -> bool {
    fx.payment_date() <= provider.valuation_date()
}

fn discounted<P: RatesProvider + ?Sized>(
    amount: CurrencyAmount,
    fx: &FxSingle,
    provider: &P,
) -> Result<CurrencyAmount, PricingError> {
    let df = provider.discount_factor(amount.currency(), fx.payment_date())?;
    Ok(amount.multiplied_by(df))
}

/// Par spread from a counter currency present value.
///
/// Shared with the swap pricer, where the base amount and discount factor
/// come from the far leg.
pub(crate) fn spread_of(
    pv_counter: CurrencyAmount,
    base: CurrencyAmount,
    df_counter: f64,
) -> Result<f64, PricingError> {
    if base.is_zero() {
        return Err(PricingError::Undefined(format!(
            "par spread with zero {} notional",
            base.currency()
        )));
    }
    if df_counter == 0.0 {
        return Err(PricingError::Undefined(format!(
            "par spread with zero {} discount factor",
            pv_counter.currency()
        )));
    }
    Ok(pv_counter.amount() / (base.amount() * df_counter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, provider, usd_krw, FX_RATE, NOTIONAL, TOL};
    use approx::assert_relative_eq;
    use pricer_core::sensitivity::CurveKey;
    use pricer_core::types::{Currency, Date, FxRateProvider};

    const PRICER: DiscountingFxSingleProductPricer = DiscountingFxSingleProductPricer::DEFAULT;

    fn payment() -> Date {
        date(2012, 5, 4)
    }

    fn fx() -> FxSingle {
        FxSingle::of_rate(CurrencyAmount::new(Currency::USD, NOTIONAL), &usd_krw(), payment())
            .unwrap()
    }

    fn expired() -> FxSingle {
        FxSingle::of_rate(
            CurrencyAmount::new(Currency::USD, NOTIONAL),
            &usd_krw(),
            date(2011, 11, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_present_value() {
        let p = provider();
        let pv = PRICER.present_value(&fx(), &p).unwrap();

        let df_usd = p.discount_factor(Currency::USD, payment()).unwrap();
        let df_krw = p.discount_factor(Currency::KRW, payment()).unwrap();
        assert_eq!(pv.len(), 2);
        assert_relative_eq!(pv.amount(Currency::USD).amount(), NOTIONAL * df_usd, max_relative = TOL);
        assert_relative_eq!(
            pv.amount(Currency::KRW).amount(),
            -NOTIONAL * FX_RATE * df_krw,
            max_relative = TOL
        );
    }

    #[test]
    fn test_payment_on_valuation_date_is_expired() {
        let p = provider();
        let fx = FxSingle::of_rate(
            CurrencyAmount::new(Currency::USD, NOTIONAL),
            &usd_krw(),
            p.valuation_date(),
        )
        .unwrap();
        assert!(PRICER.present_value(&fx, &p).unwrap().is_empty());
        assert!(PRICER.present_value_sensitivity(&fx, &p).unwrap().is_empty());
    }

    #[test]
    fn test_payment_day_after_valuation_is_live() {
        let p = provider();
        let fx = FxSingle::of_rate(
            CurrencyAmount::new(Currency::USD, NOTIONAL),
            &usd_krw(),
            date(2012, 2, 14),
        )
        .unwrap();
        assert_eq!(PRICER.present_value(&fx, &p).unwrap().len(), 2);
        assert_eq!(PRICER.present_value_sensitivity(&fx, &p).unwrap().len(), 2);
    }

    #[test]
    fn test_present_value_expired() {
        let pv = PRICER.present_value(&expired(), &provider()).unwrap();
        assert!(pv.is_empty());
    }

    #[test]
    fn test_present_value_sensitivity_expired() {
        let sens = PRICER.present_value_sensitivity(&expired(), &provider()).unwrap();
        assert!(sens.is_empty());
    }

    #[test]
    fn test_currency_exposure_matches_present_value() {
        let p = provider();
        assert_eq!(
            PRICER.currency_exposure(&fx(), &p).unwrap(),
            PRICER.present_value(&fx(), &p).unwrap()
        );
    }

    #[test]
    fn test_present_value_sensitivity_records() {
        let sens = PRICER.present_value_sensitivity(&fx(), &provider()).unwrap();
        let records = sens.sensitivities();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].curve, CurveKey::Discount(Currency::USD));
        assert_eq!(records[0].date, payment());
        assert_eq!(records[0].sensitivity, NOTIONAL);
        assert_eq!(records[1].curve, CurveKey::Discount(Currency::KRW));
        assert_relative_eq!(records[1].sensitivity, -NOTIONAL * FX_RATE, max_relative = TOL);
    }

    #[test]
    fn test_par_spread_round_trip() {
        let p = provider();
        let fx = fx();
        let spread = PRICER.par_spread(&fx, &p).unwrap();
        let par_rate = fx.fx_rate().unwrap().shifted_by(spread).unwrap();
        let at_par = fx.with_rate(par_rate.rate()).unwrap();

        let pv = PRICER.present_value(&at_par, &p).unwrap();
        let pv_usd = pv.converted_to(Currency::USD, &p).unwrap();
        assert!(pv_usd.amount().abs() < NOTIONAL * TOL, "pv = {}", pv_usd.amount());
    }

    #[test]
    fn test_par_spread_zero_notional_is_undefined() {
        let fx = FxSingle::new(
            CurrencyAmount::zero(Currency::USD),
            CurrencyAmount::new(Currency::KRW, -NOTIONAL * FX_RATE),
            payment(),
        )
        .unwrap();
        let err = PRICER.par_spread(&fx, &provider()).unwrap_err();
        assert!(matches!(err, PricingError::Undefined(_)));
    }

    #[test]
    fn test_forward_fx_rate_interest_parity() {
        let p = provider();
        let forward = PRICER.forward_fx_rate(&fx(), &p).unwrap();

        let spot = p.fx_rate(Currency::USD, Currency::KRW).unwrap();
        let df_usd = p.discount_factor(Currency::USD, payment()).unwrap();
        let df_krw = p.discount_factor(Currency::KRW, payment()).unwrap();
        assert_eq!(forward.pair(), fx().currency_pair());
        assert_relative_eq!(forward.rate(), spot * df_usd / df_krw, max_relative = TOL);
        // KRW rates above USD rates put the forward above spot.
        assert!(forward.rate() > spot);
    }

    #[test]
    fn test_par_spread_is_forward_minus_contract_rate() {
        let p = provider();
        let spread = PRICER.par_spread(&fx(), &p).unwrap();
        let forward = PRICER.forward_fx_rate(&fx(), &p).unwrap();
        assert_relative_eq!(spread, forward.rate() - FX_RATE, epsilon = 1e-8);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_par_spread_round_trip_any_rate(
                rate in 900.0..1400.0_f64,
                notional in prop_oneof![1.0e6..1.0e9_f64, -1.0e9..-1.0e6_f64],
            ) {
                let p = provider();
                let quote = FxRate::of(Currency::USD, Currency::KRW, rate).unwrap();
                let fx = FxSingle::of_rate(CurrencyAmount::new(Currency::USD, notional), &quote, payment())
                    .unwrap();

                let spread = PRICER.par_spread(&fx, &p).unwrap();
                let forward = PRICER.forward_fx_rate(&fx, &p).unwrap();
                prop_assert!((rate + spread - forward.rate()).abs() < 1e-8);

                let at_par = fx.with_rate(quote.shifted_by(spread).unwrap().rate()).unwrap();
                let pv_usd = PRICER
                    .present_value(&at_par, &p)
                    .unwrap()
                    .converted_to(Currency::USD, &p)
                    .unwrap();
                prop_assert!(pv_usd.amount().abs() < notional.abs() * TOL);
            }
        }
    }
}
