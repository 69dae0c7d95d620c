//! Interpolated zero-rate curve.

use std::sync::Arc;

use super::{CurveName, ParameterizedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::LinearInterpolator;
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates, D(t) = exp(-r(t)·t).
    #[default]
    Linear,

    /// Linear interpolation on ln D(t), i.e. piecewise constant forwards.
    LogLinear,
}

/// Zero-rate curve defined on pillar tenors.
///
/// The parameters of the curve are its pillar zero rates, in tenor order.
/// Beyond the pillars the boundary zero rate is held flat when
/// extrapolation is allowed.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{
///     CurveInterpolation, InterpolatedCurve, ParameterizedCurve, YieldCurve,
/// };
///
/// let curve = InterpolatedCurve::new(
///     "USD-DSC",
///     &[0.5_f64, 1.0, 2.0],
///     &[0.02, 0.025, 0.03],
///     CurveInterpolation::Linear,
///     true,
/// )
/// .unwrap();
///
/// let df = curve.discount_factor(0.75).unwrap();
/// assert!((df - (-0.0225_f64 * 0.75).exp()).abs() < 1e-15);
///
/// let jacobian = curve.discount_factor_parameter_sensitivity(0.75).unwrap();
/// assert_eq!(jacobian.len(), 3);
/// assert_eq!(jacobian[2], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    name: CurveName,
    tenors: Vec<T>,
    rates: Vec<T>,
    method: CurveInterpolation,
    allow_extrapolation: bool,
    /// Zero rates (Linear) or log discount factors (LogLinear) on the pillars.
    nodes: LinearInterpolator<T>,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Builds a curve from pillar tenors (year fractions) and zero rates.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` with fewer than two pillars or mismatched lengths
    /// - `InvalidMaturity` for a non-positive or non-increasing tenor
    pub fn new(
        name: impl Into<CurveName>,
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }
        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }
        for (i, &tenor) in tenors.iter().enumerate() {
            if tenor <= T::zero() || (i > 0 && tenor <= tenors[i - 1]) {
                return Err(MarketDataError::InvalidMaturity {
                    t: tenor.to_f64().unwrap_or(0.0),
                });
            }
        }

        let node_values: Vec<T> = match method {
            CurveInterpolation::Linear => rates.to_vec(),
            CurveInterpolation::LogLinear => tenors
                .iter()
                .zip(rates)
                .map(|(&tenor, &rate)| -rate * tenor)
                .collect(),
        };
        let nodes = LinearInterpolator::new(tenors, &node_values)?;

        Ok(Self {
            name: name.into(),
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            method,
            allow_extrapolation,
            nodes,
        })
    }

    /// Pillar tenors.
    #[inline]
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    /// Pillar zero rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// `(first tenor, last tenor)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Whether flat extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Checks `t` against the domain; true when `t` lies beyond the pillars.
    fn check_domain(&self, t: T) -> Result<bool, MarketDataError> {
        let (t_min, t_max) = self.domain();
        let outside = t < t_min || t > t_max;
        if outside && !self.allow_extrapolation {
            return Err(MarketDataError::OutOfBounds {
                x: t.to_f64().unwrap_or(0.0),
                min: t_min.to_f64().unwrap_or(0.0),
                max: t_max.to_f64().unwrap_or(0.0),
            });
        }
        Ok(outside)
    }

    fn boundary_index(&self, t: T) -> usize {
        if t < self.tenors[0] {
            0
        } else {
            self.tenors.len() - 1
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let outside = self.check_domain(t)?;
        match self.method {
            CurveInterpolation::Linear => Ok((-self.nodes.interpolate_flat(t) * t).exp()),
            CurveInterpolation::LogLinear if outside => {
                Ok((-self.rates[self.boundary_index(t)] * t).exp())
            }
            CurveInterpolation::LogLinear => Ok(self.nodes.interpolate_flat(t).exp()),
        }
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        match self.method {
            CurveInterpolation::Linear => {
                self.check_domain(t)?;
                Ok(self.nodes.interpolate_flat(t))
            }
            CurveInterpolation::LogLinear => Ok(-self.discount_factor(t)?.ln() / t),
        }
    }
}

impl ParameterizedCurve for InterpolatedCurve<f64> {
    fn name(&self) -> &CurveName {
        &self.name
    }

    fn parameter_count(&self) -> usize {
        self.rates.len()
    }

    fn parameter(&self, index: usize) -> Result<f64, MarketDataError> {
        self.rates
            .get(index)
            .copied()
            .ok_or_else(|| MarketDataError::ParameterIndexOutOfRange {
                curve: self.name.to_string(),
                index,
                count: self.rates.len(),
            })
    }

    fn discount_factor_parameter_sensitivity(&self, t: f64) -> Result<Vec<f64>, MarketDataError> {
        let mut jacobian = vec![0.0; self.rates.len()];
        if t <= 0.0 {
            return Ok(jacobian);
        }
        let df = self.discount_factor(t)?;
        let outside = self.check_domain(t)?;
        match self.method {
            CurveInterpolation::Linear => {
                // D = exp(-r(t)·t), r(t) = Σ wⱼ rⱼ
                let w = self.nodes.weights(t);
                jacobian[w.lower] = -t * df * w.weight_lower;
                jacobian[w.lower + 1] = -t * df * w.weight_upper;
            }
            CurveInterpolation::LogLinear if outside => {
                jacobian[self.boundary_index(t)] = -t * df;
            }
            CurveInterpolation::LogLinear => {
                // ln D = Σ wⱼ (-rⱼ tⱼ)
                let w = self.nodes.weights(t);
                jacobian[w.lower] = -df * w.weight_lower * self.tenors[w.lower];
                jacobian[w.lower + 1] = -df * w.weight_upper * self.tenors[w.lower + 1];
            }
        }
        Ok(jacobian)
    }

    fn with_parameter_shift(
        &self,
        index: usize,
        shift: f64,
    ) -> Result<Arc<dyn ParameterizedCurve>, MarketDataError> {
        let mut rates = self.rates.clone();
        let rate = rates
            .get_mut(index)
            .ok_or_else(|| MarketDataError::ParameterIndexOutOfRange {
                curve: self.name.to_string(),
                index,
                count: self.rates.len(),
            })?;
        *rate += shift;
        let shifted = InterpolatedCurve::new(
            self.name.clone(),
            &self.tenors,
            &rates,
            self.method,
            self.allow_extrapolation,
        )?;
        Ok(Arc::new(shifted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const TENORS: [f64; 6] = [0.25, 0.5, 1.0, 2.0, 5.0, 10.0];
    const RATES: [f64; 6] = [0.010, 0.012, 0.015, 0.020, 0.025, 0.030];

    fn curve(method: CurveInterpolation) -> InterpolatedCurve<f64> {
        InterpolatedCurve::new("TEST", &TENORS, &RATES, method, true).unwrap()
    }

    /// Central difference of D(t) with respect to each pillar rate.
    fn bumped_jacobian(curve: &InterpolatedCurve<f64>, t: f64) -> Vec<f64> {
        let h = 1e-6;
        (0..curve.parameter_count())
            .map(|i| {
                let up = curve.with_parameter_shift(i, h).unwrap();
                let down = curve.with_parameter_shift(i, -h).unwrap();
                (up.discount_factor(t).unwrap() - down.discount_factor(t).unwrap()) / (2.0 * h)
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_bad_pillars() {
        assert!(matches!(
            InterpolatedCurve::new("X", &[1.0_f64], &[0.01], CurveInterpolation::Linear, true),
            Err(MarketDataError::InsufficientData { got: 1, need: 2 })
        ));
        assert!(matches!(
            InterpolatedCurve::new("X", &[0.0_f64, 1.0], &[0.01, 0.02], CurveInterpolation::Linear, true),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
        assert!(matches!(
            InterpolatedCurve::new("X", &[2.0_f64, 1.0], &[0.01, 0.02], CurveInterpolation::Linear, true),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
        assert!(InterpolatedCurve::new("X", &[1.0_f64, 2.0], &[0.01], CurveInterpolation::Linear, true).is_err());
    }

    #[test]
    fn test_discount_factor_at_zero_and_negative() {
        let c = curve(CurveInterpolation::Linear);
        assert_eq!(c.discount_factor(0.0).unwrap(), 1.0);
        assert!(matches!(
            c.discount_factor(-0.1),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_linear_pillar_rates_are_recovered() {
        let c = curve(CurveInterpolation::Linear);
        for (&t, &r) in TENORS.iter().zip(RATES.iter()) {
            assert_relative_eq!(c.zero_rate(t).unwrap(), r, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_log_linear_pillar_rates_are_recovered() {
        let c = curve(CurveInterpolation::LogLinear);
        for (&t, &r) in TENORS.iter().zip(RATES.iter()) {
            assert_relative_eq!(c.zero_rate(t).unwrap(), r, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_flat_extrapolation() {
        let c = curve(CurveInterpolation::Linear);
        assert_relative_eq!(c.zero_rate(0.1).unwrap(), 0.010, epsilon = 1e-15);
        assert_relative_eq!(c.zero_rate(20.0).unwrap(), 0.030, epsilon = 1e-15);
    }

    #[test]
    fn test_out_of_bounds_without_extrapolation() {
        let c = InterpolatedCurve::new("X", &TENORS, &RATES, CurveInterpolation::Linear, false)
            .unwrap();
        assert!(matches!(
            c.discount_factor(0.1),
            Err(MarketDataError::OutOfBounds { .. })
        ));
        assert!(c.discount_factor(0.3).is_ok());
    }

    #[test]
    fn test_parameter_access() {
        let c = curve(CurveInterpolation::Linear);
        assert_eq!(c.name().as_str(), "TEST");
        assert_eq!(c.parameter_count(), 6);
        assert_eq!(c.parameter(3).unwrap(), 0.020);
        assert!(matches!(
            c.parameter(6),
            Err(MarketDataError::ParameterIndexOutOfRange { index: 6, count: 6, .. })
        ));
    }

    #[test]
    fn test_parameter_shift_leaves_original_untouched() {
        let c = curve(CurveInterpolation::Linear);
        let shifted = c.with_parameter_shift(2, 0.001).unwrap();
        assert_relative_eq!(shifted.parameter(2).unwrap(), 0.016, epsilon = 1e-15);
        assert_eq!(c.parameter(2).unwrap(), 0.015);
        assert_eq!(shifted.name(), c.name());
        assert!(c.with_parameter_shift(9, 0.001).is_err());
    }

    #[test]
    fn test_jacobian_is_zero_at_valuation() {
        let c = curve(CurveInterpolation::LogLinear);
        assert!(c
            .discount_factor_parameter_sensitivity(0.0)
            .unwrap()
            .iter()
            .all(|&v| v == 0.0));
    }

    #[test]
    fn test_jacobian_matches_bump_linear() {
        let c = curve(CurveInterpolation::Linear);
        for t in [0.1, 0.2219, 0.75, 3.0, 12.0] {
            let analytic = c.discount_factor_parameter_sensitivity(t).unwrap();
            let bumped = bumped_jacobian(&c, t);
            for (a, b) in analytic.iter().zip(&bumped) {
                assert_relative_eq!(a, b, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_jacobian_matches_bump_log_linear() {
        let c = curve(CurveInterpolation::LogLinear);
        for t in [0.1, 0.2219, 0.75, 3.0, 12.0] {
            let analytic = c.discount_factor_parameter_sensitivity(t).unwrap();
            let bumped = bumped_jacobian(&c, t);
            for (a, b) in analytic.iter().zip(&bumped) {
                assert_relative_eq!(a, b, epsilon = 1e-8);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_discount_factor_positive_and_at_most_one(t in 0.0..30.0_f64) {
            for method in [CurveInterpolation::Linear, CurveInterpolation::LogLinear] {
                let df = curve(method).discount_factor(t).unwrap();
                prop_assert!(df > 0.0 && df <= 1.0);
            }
        }
    }
}
