//! # Pricer Pricing (Layer 3: Pricers)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns Layer 2 products into values and sensitivities
//! against any Layer 1 [`RatesProvider`](pricer_core::traits::RatesProvider):
//! - Present value per currency and currency exposure
//! - Par spread on the contract rate
//! - Point sensitivities to discount factors
//! - Forward FX rate at the payment date
//!
//! Pricers are stateless unit structs with a `DEFAULT` instance. They only
//! read the provider; curve parameter sensitivities are obtained by handing
//! the point sensitivities back to it.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::{CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve};
//! use pricer_core::types::{Currency, CurrencyAmount, Date, FxRate};
//! use pricer_models::instruments::FxSingle;
//! use pricer_pricing::fx::DiscountingFxSingleProductPricer;
//!
//! let tenors = [0.5_f64, 1.0, 2.0];
//! let provider = ImmutableRatesProvider::builder(Date::from_ymd(2012, 2, 13).unwrap())
//!     .discount_curve(
//!         Currency::USD,
//!         InterpolatedCurve::new("USD-DSC", &tenors, &[0.01, 0.012, 0.015], CurveInterpolation::Linear, true).unwrap(),
//!     )
//!     .discount_curve(
//!         Currency::KRW,
//!         InterpolatedCurve::new("KRW-DSC", &tenors, &[0.03, 0.032, 0.035], CurveInterpolation::Linear, true).unwrap(),
//!     )
//!     .fx_rate(FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap())
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let fx = FxSingle::of_rate(
//!     CurrencyAmount::new(Currency::USD, 1_000_000.0),
//!     &FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap(),
//!     Date::from_ymd(2012, 5, 4).unwrap(),
//! )
//! .unwrap();
//!
//! let pv = DiscountingFxSingleProductPricer::DEFAULT.present_value(&fx, &provider).unwrap();
//! assert_eq!(pv.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod fx;

#[cfg(test)]
mod test_support;

pub use fx::{DiscountingFxSingleProductPricer, DiscountingFxSwapProductPricer};
