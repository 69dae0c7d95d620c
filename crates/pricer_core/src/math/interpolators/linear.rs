//! Piecewise linear interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Weights of a query point on the two nodes bracketing it.
///
/// The interpolated value is
/// `weight_lower * ys[lower] + weight_upper * ys[lower + 1]`, so these
/// weights are also the derivatives of the result with respect to the two
/// node values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeWeights<T> {
    /// Index of the lower node
    pub lower: usize,
    /// Weight on `ys[lower]`
    pub weight_lower: T,
    /// Weight on `ys[lower + 1]`
    pub weight_upper: T,
}

impl<T: Float> NodeWeights<T> {
    /// Returns the weight on node `index`, zero for nodes outside the segment.
    #[inline]
    pub fn weight(&self, index: usize) -> T {
        if index == self.lower {
            self.weight_lower
        } else if index == self.lower + 1 {
            self.weight_upper
        } else {
            T::zero()
        }
    }
}

/// Piecewise linear interpolator over strictly increasing nodes.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0_f64, 2.0, 4.0]).unwrap();
/// assert!((interp.interpolate(0.5).unwrap() - 1.0).abs() < 1e-12);
///
/// let w = interp.weights(0.25);
/// assert_eq!(w.lower, 0);
/// assert!((w.weight_upper - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Builds an interpolator from node coordinates and values.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the slices differ in length
    /// - `InsufficientData` with fewer than two nodes
    /// - `NonMonotonicData` if `xs` is not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if let Some(index) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: index + 1 });
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Node coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Node values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the node weights of `x`, holding the boundary node value flat
    /// outside the domain.
    pub fn weights(&self, x: T) -> NodeWeights<T> {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return NodeWeights {
                lower: 0,
                weight_lower: T::one(),
                weight_upper: T::zero(),
            };
        }
        if x >= self.xs[n - 1] {
            return NodeWeights {
                lower: n - 2,
                weight_lower: T::zero(),
                weight_upper: T::one(),
            };
        }
        let i = self.find_segment(x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        NodeWeights {
            lower: i,
            weight_lower: T::one() - w,
            weight_upper: w,
        }
    }

    /// Interpolates with flat extrapolation beyond the boundary nodes.
    pub fn interpolate_flat(&self, x: T) -> T {
        let w = self.weights(x);
        w.weight_lower * self.ys[w.lower] + w.weight_upper * self.ys[w.lower + 1]
    }

    /// Index `i` with `xs[i] <= x < xs[i+1]`, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.clamp(1, self.xs.len() - 1) - 1
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.interpolate_flat(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn sample() -> LinearInterpolator<f64> {
        LinearInterpolator::new(&[0.5, 1.0, 2.0, 5.0], &[0.01, 0.02, 0.025, 0.03]).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(matches!(
            LinearInterpolator::new(&[1.0_f64], &[1.0]),
            Err(InterpolationError::InsufficientData { got: 1, need: 2 })
        ));
        assert!(matches!(
            LinearInterpolator::new(&[0.0_f64, 1.0], &[1.0]),
            Err(InterpolationError::InvalidInput(_))
        ));
        assert_eq!(
            LinearInterpolator::new(&[0.0_f64, 2.0, 1.0], &[0.0, 0.0, 0.0]).unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_interpolate_at_nodes() {
        let interp = sample();
        for (&x, &y) in interp.xs().iter().zip(interp.ys()) {
            assert_relative_eq!(interp.interpolate(x).unwrap(), y, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_interpolate_between_nodes() {
        let interp = sample();
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.0225, epsilon = 1e-15);
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = sample();
        assert!(matches!(
            interp.interpolate(0.1),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert_relative_eq!(interp.interpolate_flat(0.1), 0.01);
        assert_relative_eq!(interp.interpolate_flat(10.0), 0.03);
    }

    #[test]
    fn test_weights_at_boundaries() {
        let interp = sample();
        let below = interp.weights(0.1);
        assert_eq!(below.lower, 0);
        assert_eq!(below.weight(0), 1.0);
        assert_eq!(below.weight(1), 0.0);

        let above = interp.weights(7.0);
        assert_eq!(above.lower, 2);
        assert_eq!(above.weight(3), 1.0);
        assert_eq!(above.weight(2), 0.0);
    }

    #[test]
    fn test_weights_at_interior_node() {
        let w = sample().weights(2.0);
        assert_eq!(w.lower, 2);
        assert_relative_eq!(w.weight(2), 1.0);
        assert_relative_eq!(w.weight(3), 0.0);
    }

    proptest! {
        #[test]
        fn prop_weights_sum_to_one(x in 0.0..8.0_f64) {
            let w = sample().weights(x);
            prop_assert!((w.weight_lower + w.weight_upper - 1.0).abs() < 1e-12);
            prop_assert!(w.weight_lower >= 0.0 && w.weight_upper >= 0.0);
        }
    }
}
