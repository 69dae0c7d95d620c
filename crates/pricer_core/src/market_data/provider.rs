//! Immutable multi-currency rates provider.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use super::curves::{CurveName, ParameterizedCurve, YieldCurve};
use super::error::MarketDataError;
use super::fx_matrix::{FxMatrix, FxMatrixBuilder};
use crate::sensitivity::{
    CurveKey, CurveParameterSensitivities, CurveParameterSensitivity, PointSensitivities,
};
use crate::traits::{RatesProvider, ShiftableRatesProvider};
use crate::types::{Currency, Date, DayCountConvention, FxRate, FxRateProvider, PricingError};

/// Rates provider backed by one discount curve per currency and an
/// [`FxMatrix`] of spot rates.
///
/// Curves are shared behind `Arc`, so cloning the provider or bumping one
/// curve leaves every other curve shared with the original.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve};
/// use pricer_core::market_data::ImmutableRatesProvider;
/// use pricer_core::traits::RatesProvider;
/// use pricer_core::types::{Currency, Date, FxRate};
///
/// let valuation = Date::from_ymd(2012, 2, 13).unwrap();
/// let usd = InterpolatedCurve::new(
///     "USD-DSC", &[0.5_f64, 1.0], &[0.01, 0.01], CurveInterpolation::Linear, true,
/// ).unwrap();
///
/// let provider = ImmutableRatesProvider::builder(valuation)
///     .discount_curve(Currency::USD, usd)
///     .fx_rate(FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap())
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let df = provider
///     .discount_factor(Currency::USD, Date::from_ymd(2013, 2, 12).unwrap())
///     .unwrap();
/// assert!((df - (-0.01_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct ImmutableRatesProvider {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: BTreeMap<Currency, Arc<dyn ParameterizedCurve>>,
    fx_matrix: FxMatrix,
}

impl ImmutableRatesProvider {
    /// Starts building a provider valued on `valuation_date`.
    pub fn builder(valuation_date: Date) -> ImmutableRatesProviderBuilder {
        ImmutableRatesProviderBuilder::new(valuation_date)
    }

    /// Day count used to turn dates into curve times.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Spot FX rates.
    pub fn fx_matrix(&self) -> &FxMatrix {
        &self.fx_matrix
    }

    /// Currencies with a discount curve.
    pub fn discount_currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.discount_curves.keys().copied()
    }

    /// Discount curve of `currency`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::CurveNotFound` if the currency has no curve.
    pub fn discount_curve(&self, currency: Currency) -> Result<&Arc<dyn ParameterizedCurve>, MarketDataError> {
        self.discount_curves
            .get(&currency)
            .ok_or_else(|| MarketDataError::CurveNotFound {
                name: CurveKey::Discount(currency).to_string(),
            })
    }

    /// Curve time of `date`, negative before the valuation date.
    pub fn relative_time(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.valuation_date, date)
    }
}

impl FxRateProvider for ImmutableRatesProvider {
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, PricingError> {
        Ok(self.fx_matrix.rate(base, counter)?)
    }
}

impl RatesProvider for ImmutableRatesProvider {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns 1.0 for dates on or before the valuation date.
    fn discount_factor(&self, currency: Currency, date: Date) -> Result<f64, PricingError> {
        let curve = self.discount_curve(currency)?;
        let t = self.relative_time(date);
        if t <= 0.0 {
            return Ok(1.0);
        }
        Ok(curve.discount_factor(t)?)
    }

    fn curve_parameter_sensitivity(
        &self,
        sensitivities: &PointSensitivities,
    ) -> Result<CurveParameterSensitivities, PricingError> {
        let mut result = CurveParameterSensitivities::empty();
        for point in sensitivities {
            let curve = match point.curve {
                CurveKey::Discount(currency) => self.discount_curve(currency)?,
            };
            let t = self.relative_time(point.date);
            if t <= 0.0 {
                continue;
            }
            let jacobian = curve.discount_factor_parameter_sensitivity(t)?;
            trace!(curve = %curve.name(), date = %point.date, t, value = point.sensitivity, "chain rule");
            let values = jacobian.iter().map(|d| d * point.sensitivity).collect();
            result.add(CurveParameterSensitivity::new(
                curve.name().clone(),
                point.currency,
                values,
            ))?;
        }
        debug!(
            points = sensitivities.len(),
            entries = result.len(),
            "converted point sensitivities to curve parameter sensitivities"
        );
        Ok(result)
    }
}

impl ShiftableRatesProvider for ImmutableRatesProvider {
    fn curve_parameter_counts(&self) -> Vec<(CurveName, usize)> {
        self.discount_curves
            .values()
            .map(|curve| (curve.name().clone(), curve.parameter_count()))
            .collect()
    }

    fn with_parameter_shift(
        &self,
        curve: &CurveName,
        index: usize,
        shift: f64,
    ) -> Result<Self, MarketDataError> {
        let (&currency, existing) = self
            .discount_curves
            .iter()
            .find(|(_, c)| c.name() == curve)
            .ok_or_else(|| MarketDataError::CurveNotFound {
                name: curve.to_string(),
            })?;
        let shifted = existing.with_parameter_shift(index, shift)?;
        let mut provider = self.clone();
        provider.discount_curves.insert(currency, shifted);
        Ok(provider)
    }
}

/// Builder for [`ImmutableRatesProvider`].
#[derive(Debug, Clone)]
pub struct ImmutableRatesProviderBuilder {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: BTreeMap<Currency, Arc<dyn ParameterizedCurve>>,
    fx_matrix: FxMatrixBuilder,
}

impl ImmutableRatesProviderBuilder {
    /// Creates a builder with ACT/365F day count and no market data.
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            day_count: DayCountConvention::default(),
            discount_curves: BTreeMap::new(),
            fx_matrix: FxMatrix::builder(),
        }
    }

    /// Sets the day count used to turn dates into curve times.
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the discount curve of `currency`, replacing any previous one.
    pub fn discount_curve<C>(self, currency: Currency, curve: C) -> Self
    where
        C: ParameterizedCurve + 'static,
    {
        self.shared_discount_curve(currency, Arc::new(curve))
    }

    /// Sets an already shared discount curve.
    pub fn shared_discount_curve(mut self, currency: Currency, curve: Arc<dyn ParameterizedCurve>) -> Self {
        self.discount_curves.insert(currency, curve);
        self
    }

    /// Adds a spot FX rate.
    ///
    /// # Errors
    ///
    /// `MarketDataError::FxRateNotFound` if the rate links no currency
    /// already present.
    pub fn fx_rate(mut self, rate: FxRate) -> Result<Self, MarketDataError> {
        self.fx_matrix = self.fx_matrix.add_rate(rate)?;
        Ok(self)
    }

    /// Builds the provider.
    ///
    /// # Errors
    ///
    /// `MarketDataError::DuplicateCurveName` if two currencies share a
    /// curve name.
    pub fn build(self) -> Result<ImmutableRatesProvider, MarketDataError> {
        let mut names: Vec<&CurveName> = self.discount_curves.values().map(|c| c.name()).collect();
        names.sort();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(MarketDataError::DuplicateCurveName {
                name: pair[0].to_string(),
            });
        }
        Ok(ImmutableRatesProvider {
            valuation_date: self.valuation_date,
            day_count: self.day_count,
            discount_curves: self.discount_curves,
            fx_matrix: self.fx_matrix.build(),
        })
    }
}
