//! Rates provider capability traits.
//!
//! Pricers are written against [`RatesProvider`] only. They never see curve
//! internals: a pricer reads discount factors and FX rates, and hands point
//! sensitivities back to the provider for conversion into curve parameter
//! space.

use crate::market_data::curves::CurveName;
use crate::market_data::error::MarketDataError;
use crate::sensitivity::{CurveParameterSensitivities, PointSensitivities};
use crate::types::{Currency, CurrencyPair, Date, FxRateProvider, PricingError};

/// Market data needed to discount cash flows in several currencies.
///
/// `fx_rate` comes from the [`FxRateProvider`] supertrait and gives today's
/// rate, used to convert amounts between currencies.
pub trait RatesProvider: FxRateProvider {
    /// Valuation date. Cash flows paid on or before it have no value.
    fn valuation_date(&self) -> Date;

    /// Discount factor of `currency` for a payment on `date`.
    ///
    /// # Errors
    ///
    /// `PricingError::MarketData` if no discount curve exists for `currency`.
    fn discount_factor(&self, currency: Currency, date: Date) -> Result<f64, PricingError>;

    /// Forward FX rate of `pair` for delivery on `date`.
    ///
    /// Defaults to covered interest rate parity,
    /// `F = S × DF(base, date) / DF(counter, date)`.
    fn fx_forward_rate(&self, pair: CurrencyPair, date: Date) -> Result<f64, PricingError> {
        let spot = self.fx_rate(pair.base(), pair.counter())?;
        let df_base = self.discount_factor(pair.base(), date)?;
        let df_counter = self.discount_factor(pair.counter(), date)?;
        if df_counter == 0.0 {
            return Err(PricingError::Undefined(format!(
                "zero {} discount factor on {date}",
                pair.counter()
            )));
        }
        Ok(spot * df_base / df_counter)
    }

    /// Converts point sensitivities into curve parameter sensitivities by
    /// applying the chain rule through each referenced curve.
    fn curve_parameter_sensitivity(
        &self,
        sensitivities: &PointSensitivities,
    ) -> Result<CurveParameterSensitivities, PricingError>;
}

/// A rates provider whose curve parameters can be bumped one at a time.
///
/// Bumping returns a new provider; the receiver is never modified, so
/// shifted copies can be evaluated independently and in parallel.
pub trait ShiftableRatesProvider: RatesProvider + Sized {
    /// Name and parameter count of every curve, in a stable order.
    fn curve_parameter_counts(&self) -> Vec<(CurveName, usize)>;

    /// Returns a copy with parameter `index` of `curve` increased by `shift`.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::CurveNotFound` for an unknown curve
    /// - `MarketDataError::ParameterIndexOutOfRange` for a bad index
    fn with_parameter_shift(
        &self,
        curve: &CurveName,
        index: usize,
        shift: f64,
    ) -> Result<Self, MarketDataError>;
}
