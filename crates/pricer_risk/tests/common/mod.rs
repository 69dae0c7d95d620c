//! Shared market data for the integration tests.
//!
//! USD and KRW zero-rate curves on ACT/365F with a USD/KRW and EUR/USD spot,
//! valued on 2012-02-13.

#![allow(dead_code)]

use pricer_core::market_data::{CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve};
use pricer_core::types::{Currency, CurrencyAmount, Date, DayCountConvention, FxRate};
use pricer_models::instruments::{FxSingle, FxSwap};

pub const NOTIONAL: f64 = 100_000_000.0;
pub const FX_RATE: f64 = 1123.45;
pub const TOL: f64 = 1e-12;
pub const EPS_FD: f64 = 1e-7;

pub const TENORS: [f64; 6] = [0.25, 0.5, 1.0, 2.0, 5.0, 10.0];
pub const USD_RATES: [f64; 6] = [0.0045, 0.0055, 0.0070, 0.0085, 0.0120, 0.0190];
pub const KRW_RATES: [f64; 6] = [0.0335, 0.0340, 0.0345, 0.0350, 0.0365, 0.0380];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

pub fn valuation_date() -> Date {
    date(2012, 2, 13)
}

pub fn payment_date() -> Date {
    date(2012, 5, 4)
}

pub fn expired_payment_date() -> Date {
    date(2011, 11, 2)
}

pub fn usd_krw() -> FxRate {
    FxRate::of(Currency::USD, Currency::KRW, FX_RATE).unwrap()
}

pub fn provider_with(interpolation: CurveInterpolation) -> ImmutableRatesProvider {
    let usd = InterpolatedCurve::new("USD-DSC", &TENORS, &USD_RATES, interpolation, true).unwrap();
    let krw = InterpolatedCurve::new("KRW-DSC", &TENORS, &KRW_RATES, interpolation, true).unwrap();
    ImmutableRatesProvider::builder(valuation_date())
        .day_count(DayCountConvention::Act365Fixed)
        .discount_curve(Currency::USD, usd)
        .discount_curve(Currency::KRW, krw)
        .fx_rate(usd_krw())
        .unwrap()
        .fx_rate(FxRate::of(Currency::EUR, Currency::USD, 1.31).unwrap())
        .unwrap()
        .build()
        .unwrap()
}

pub fn provider() -> ImmutableRatesProvider {
    provider_with(CurveInterpolation::Linear)
}

/// Receive USD 100,000,000, pay KRW at 1123.45.
pub fn fx_single(payment: Date) -> FxSingle {
    FxSingle::of_rate(CurrencyAmount::new(Currency::USD, NOTIONAL), &usd_krw(), payment).unwrap()
}

pub fn fx_swap() -> FxSwap {
    FxSwap::of_conventional(
        CurrencyAmount::new(Currency::USD, NOTIONAL),
        &usd_krw(),
        date(2012, 2, 15),
        &FxRate::of(Currency::USD, Currency::KRW, 1130.0).unwrap(),
        date(2012, 8, 15),
    )
    .unwrap()
}
