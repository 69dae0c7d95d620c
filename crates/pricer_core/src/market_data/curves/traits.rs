//! Curve trait definitions.

use std::fmt;
use std::sync::Arc;

use super::CurveName;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve returning discount factors by time.
///
/// # Contract
///
/// - `discount_factor(t)` returns D(t) for a year fraction `t >= 0`
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `forward_rate(t1, t2)` returns the continuously compounded forward rate
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, YieldCurve};
///
/// let curve = InterpolatedCurve::new(
///     "USD-DSC",
///     &[1.0_f64, 2.0],
///     &[0.05, 0.05],
///     CurveInterpolation::Linear,
///     true,
/// )
/// .unwrap();
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Returns the discount factor for year fraction `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Returns the continuously compounded zero rate, `-ln(D(t)) / t`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Returns the forward rate `-ln(D(t2) / D(t1)) / (t2 - t1)`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / dt)
    }
}

/// A discount curve defined by an ordered vector of real parameters.
///
/// The curve owns the mapping from parameters to discount factors, so it
/// also owns the derivative of that mapping. Rates providers use
/// [`discount_factor_parameter_sensitivity`](Self::discount_factor_parameter_sensitivity)
/// to turn point sensitivities into parameter sensitivities, and
/// [`with_parameter_shift`](Self::with_parameter_shift) to build bumped
/// copies for finite differences. Neither the pricers nor the finite
/// difference calculator depend on the concrete curve type.
pub trait ParameterizedCurve: YieldCurve<f64> + fmt::Debug + Send + Sync {
    /// Curve name.
    fn name(&self) -> &CurveName;

    /// Number of parameters.
    fn parameter_count(&self) -> usize;

    /// Parameter value at `index`.
    fn parameter(&self, index: usize) -> Result<f64, MarketDataError>;

    /// Returns `∂D(t)/∂pᵢ` for every parameter, in parameter order.
    fn discount_factor_parameter_sensitivity(&self, t: f64) -> Result<Vec<f64>, MarketDataError>;

    /// Returns a new curve with parameter `index` increased by `shift`.
    ///
    /// The receiver is left untouched.
    fn with_parameter_shift(
        &self,
        index: usize,
        shift: f64,
    ) -> Result<Arc<dyn ParameterizedCurve>, MarketDataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantRate {
        rate: f64,
    }

    impl YieldCurve<f64> for ConstantRate {
        fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
            if t < 0.0 {
                return Err(MarketDataError::InvalidMaturity { t });
            }
            Ok((-self.rate * t).exp())
        }
    }

    #[test]
    fn test_default_zero_rate() {
        let curve = ConstantRate { rate: 0.05 };
        assert!((curve.zero_rate(1.0).unwrap() - 0.05).abs() < 1e-12);
        assert_eq!(
            curve.zero_rate(0.0),
            Err(MarketDataError::InvalidMaturity { t: 0.0 })
        );
    }

    #[test]
    fn test_default_forward_rate() {
        let curve = ConstantRate { rate: 0.03 };
        assert!((curve.forward_rate(0.5, 2.0).unwrap() - 0.03).abs() < 1e-12);
        assert!(matches!(
            curve.forward_rate(2.0, 1.0),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }
}
