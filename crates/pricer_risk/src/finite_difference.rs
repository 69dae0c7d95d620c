//! Bump-and-revalue curve parameter sensitivities.
//!
//! Each curve parameter is shifted on a copy of the provider and the
//! valuation rerun; the forward difference `(shifted - base) / shift` is the
//! sensitivity to that parameter. Used as an independent check of the
//! analytic chain rule in the provider.

use pricer_core::market_data::curves::CurveName;
use pricer_core::sensitivity::{CurveParameterSensitivities, CurveParameterSensitivity};
use pricer_core::traits::ShiftableRatesProvider;
use pricer_core::types::{CurrencyAmount, PricingError};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::FiniteDifferenceConfig;
use crate::error::RiskError;

/// Finite-difference sensitivity calculator.
///
/// # Examples
///
/// ```rust,ignore
/// let calculator = FiniteDifferenceSensitivityCalculator::new(FiniteDifferenceConfig::default());
/// let fd = calculator.sensitivity(&provider, |p| {
///     let pv = pricer.present_value(&fx, p)?;
///     Ok(pv.amount(Currency::USD))
/// })?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FiniteDifferenceSensitivityCalculator {
    config: FiniteDifferenceConfig,
}

impl FiniteDifferenceSensitivityCalculator {
    /// Creates a calculator with the given configuration.
    pub fn new(config: FiniteDifferenceConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FiniteDifferenceConfig {
        &self.config
    }

    /// Computes the sensitivity of `valuation_fn` to every curve parameter
    /// of `provider`.
    ///
    /// Entries are keyed by curve name and the currency of the base value,
    /// one value per parameter in parameter order. The provider itself is
    /// never modified.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidConfig` for a non-positive shift
    /// - `RiskError::Pricing` if any valuation fails, or a bumped valuation
    ///   comes back in a different currency
    /// - `RiskError::MarketData` if a parameter cannot be bumped
    pub fn sensitivity<P, F>(
        &self,
        provider: &P,
        valuation_fn: F,
    ) -> Result<CurveParameterSensitivities, RiskError>
    where
        P: ShiftableRatesProvider + Sync,
        F: Fn(&P) -> Result<CurrencyAmount, PricingError> + Sync,
    {
        self.config.validate()?;
        let base = valuation_fn(provider)?;
        let curves = provider.curve_parameter_counts();
        debug!(
            curves = curves.len(),
            parameters = curves.iter().map(|(_, count)| count).sum::<usize>(),
            shift = self.config.shift,
            parallel = self.config.parallel,
            currency = %base.currency(),
            "finite-difference sensitivity"
        );

        let mut result = CurveParameterSensitivities::empty();
        for (name, count) in curves {
            let bump = |index: usize| self.derivative(provider, &valuation_fn, base, &name, index);
            let values = if self.config.parallel {
                (0..count)
                    .into_par_iter()
                    .map(bump)
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                (0..count).map(bump).collect::<Result<Vec<_>, _>>()?
            };
            result.add(CurveParameterSensitivity::new(name, base.currency(), values))?;
        }
        Ok(result)
    }

    fn derivative<P, F>(
        &self,
        provider: &P,
        valuation_fn: &F,
        base: CurrencyAmount,
        curve: &CurveName,
        index: usize,
    ) -> Result<f64, RiskError>
    where
        P: ShiftableRatesProvider,
        F: Fn(&P) -> Result<CurrencyAmount, PricingError>,
    {
        let shifted = provider.with_parameter_shift(curve, index, self.config.shift)?;
        let bumped = valuation_fn(&shifted)?;
        let diff = bumped.minus(base).map_err(PricingError::from)?;
        let value = diff.amount() / self.config.shift;
        trace!(curve = %curve, index, value, "bumped parameter");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, ParameterizedCurve};
    use pricer_core::market_data::{ImmutableRatesProvider, MarketDataError};
    use pricer_core::traits::RatesProvider;
    use pricer_core::types::{Currency, CurrencyError, Date};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn provider() -> ImmutableRatesProvider {
        let curve = InterpolatedCurve::new(
            "EUR-DSC",
            &[0.5_f64, 1.0, 2.0],
            &[0.02, 0.025, 0.03],
            CurveInterpolation::Linear,
            true,
        )
        .unwrap();
        ImmutableRatesProvider::builder(date(2020, 1, 1))
            .discount_curve(Currency::EUR, curve)
            .build()
            .unwrap()
    }

    fn discounted_eur(p: &ImmutableRatesProvider) -> Result<CurrencyAmount, PricingError> {
        let df = p.discount_factor(Currency::EUR, date(2021, 1, 1))?;
        Ok(CurrencyAmount::new(Currency::EUR, 1_000_000.0 * df))
    }

    #[test]
    fn test_forward_difference_matches_jacobian() {
        let p = provider();
        let fd = FiniteDifferenceSensitivityCalculator::default()
            .sensitivity(&p, discounted_eur)
            .unwrap();
        let entry = fd.get(&CurveName::new("EUR-DSC"), Currency::EUR).unwrap();
        assert_eq!(entry.parameter_count(), 3);

        let t = p.relative_time(date(2021, 1, 1));
        let df = p.discount_factor(Currency::EUR, date(2021, 1, 1)).unwrap();
        let jacobian = p
            .discount_curve(Currency::EUR)
            .unwrap()
            .discount_factor_parameter_sensitivity(t)
            .unwrap();
        for (value, expected) in entry.sensitivity().iter().zip(&jacobian) {
            assert_relative_eq!(*value, 1_000_000.0 * expected, epsilon = 1_000_000.0 * df * 1e-6);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let p = provider();
        let sequential = FiniteDifferenceSensitivityCalculator::default()
            .sensitivity(&p, discounted_eur)
            .unwrap();
        let parallel = FiniteDifferenceSensitivityCalculator::new(
            FiniteDifferenceConfig::default().with_parallel(true),
        )
        .sensitivity(&p, discounted_eur)
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_invalid_shift() {
        let calculator =
            FiniteDifferenceSensitivityCalculator::new(FiniteDifferenceConfig::default().with_shift(0.0));
        let err = calculator.sensitivity(&provider(), discounted_eur).unwrap_err();
        assert!(matches!(err, RiskError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_curve_propagates() {
        let err = FiniteDifferenceSensitivityCalculator::default()
            .sensitivity(&provider(), |p| {
                let df = p.discount_factor(Currency::USD, date(2021, 1, 1))?;
                Ok(CurrencyAmount::new(Currency::USD, df))
            })
            .unwrap_err();
        assert!(matches!(
            err,
            RiskError::Pricing(PricingError::MarketData(MarketDataError::CurveNotFound { .. }))
        ));
    }

    #[test]
    fn test_currency_change_is_rejected() {
        let p = provider();
        let base_df = p.discount_factor(Currency::EUR, date(2021, 1, 1)).unwrap();
        let err = FiniteDifferenceSensitivityCalculator::default()
            .sensitivity(&p, |q| {
                let df = q.discount_factor(Currency::EUR, date(2021, 1, 1))?;
                let currency = if df == base_df { Currency::EUR } else { Currency::USD };
                Ok(CurrencyAmount::new(currency, df))
            })
            .unwrap_err();
        assert!(matches!(
            err,
            RiskError::Pricing(PricingError::Currency(CurrencyError::Mismatch { .. }))
        ));
    }
}
