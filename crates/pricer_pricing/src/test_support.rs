//! Market data shared by the unit tests.

use pricer_core::market_data::{CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve};
use pricer_core::types::{Currency, Date, FxRate};

pub(crate) const NOTIONAL: f64 = 100_000_000.0;
pub(crate) const FX_RATE: f64 = 1123.45;
pub(crate) const TOL: f64 = 1e-12;

pub(crate) fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

pub(crate) fn valuation_date() -> Date {
    date(2012, 2, 13)
}

pub(crate) fn usd_krw() -> FxRate {
    FxRate::of(Currency::USD, Currency::KRW, FX_RATE).unwrap()
}

pub(crate) fn provider() -> ImmutableRatesProvider {
    let tenors = [0.25_f64, 0.5, 1.0, 2.0, 5.0, 10.0];
    let usd = InterpolatedCurve::new(
        "USD-DSC",
        &tenors,
        &[0.0045, 0.0055, 0.0070, 0.0085, 0.0120, 0.0190],
        CurveInterpolation::Linear,
        true,
    )
    .unwrap();
    let krw = InterpolatedCurve::new(
        "KRW-DSC",
        &tenors,
        &[0.0335, 0.0340, 0.0345, 0.0350, 0.0365, 0.0380],
        CurveInterpolation::Linear,
        true,
    )
    .unwrap();
    ImmutableRatesProvider::builder(valuation_date())
        .discount_curve(Currency::USD, usd)
        .discount_curve(Currency::KRW, krw)
        .fx_rate(usd_krw())
        .unwrap()
        .build()
        .unwrap()
}
