//! Property tests for FX product construction.

use approx::assert_relative_eq;
use pricer_core::types::{Currency, CurrencyAmount, Date, FxRate};
use pricer_models::instruments::{FxSingle, FxSwap, InstrumentError};
use proptest::prelude::*;

fn payment() -> Date {
    Date::from_ymd(2012, 5, 4).unwrap()
}

proptest! {
    #[test]
    fn prop_of_rate_recovers_contract_rate(
        notional in prop_oneof![-1e9..-1.0f64, 1.0..1e9f64],
        rate in 0.5..2000.0f64,
    ) {
        let quote = FxRate::of(Currency::USD, Currency::KRW, rate).unwrap();
        let fx = FxSingle::of_rate(CurrencyAmount::new(Currency::USD, notional), &quote, payment())
            .unwrap();

        assert_relative_eq!(fx.fx_rate().unwrap().rate(), rate, max_relative = 1e-12);
        prop_assert!(fx.receive_currency_amount().is_positive());
        prop_assert!(fx.pay_currency_amount().is_negative());
    }

    #[test]
    fn prop_with_rate_keeps_base_amount(
        notional in 1.0..1e9f64,
        rate in 0.5..2000.0f64,
        spread in -0.4..10.0f64,
    ) {
        let quote = FxRate::of(Currency::EUR, Currency::USD, rate).unwrap();
        let fx = FxSingle::of_rate(CurrencyAmount::new(Currency::EUR, notional), &quote, payment())
            .unwrap();
        let repriced = fx.with_rate(rate + spread).unwrap();

        prop_assert_eq!(repriced.base_currency_amount(), fx.base_currency_amount());
        prop_assert_eq!(repriced.payment_date(), fx.payment_date());
        assert_relative_eq!(repriced.fx_rate().unwrap().rate(), rate + spread, max_relative = 1e-12);
    }

    #[test]
    fn prop_swap_legs_oppose(notional in prop_oneof![-1e9..-1.0f64, 1.0..1e9f64]) {
        let swap = FxSwap::of_conventional(
            CurrencyAmount::new(Currency::USD, notional),
            &FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap(),
            Date::from_ymd(2012, 2, 15).unwrap(),
            &FxRate::of(Currency::USD, Currency::KRW, 1125.0).unwrap(),
            Date::from_ymd(2012, 5, 15).unwrap(),
        )
        .unwrap();

        prop_assert_eq!(
            swap.near_leg().base_currency_amount().amount(),
            -swap.far_leg().base_currency_amount().amount()
        );
    }
}

#[test]
fn test_swap_rejects_far_leg_first() {
    let result = FxSwap::of_conventional(
        CurrencyAmount::new(Currency::USD, 1.0),
        &FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap(),
        Date::from_ymd(2012, 5, 15).unwrap(),
        &FxRate::of(Currency::USD, Currency::KRW, 1125.0).unwrap(),
        Date::from_ymd(2012, 2, 15).unwrap(),
    );
    assert!(matches!(result, Err(InstrumentError::LegDateOrder { .. })));
}
