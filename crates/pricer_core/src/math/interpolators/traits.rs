//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over sorted nodes.
pub trait Interpolator<T: Float> {
    /// Interpolates the value at `x`.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::OutOfBounds` if `x` lies outside
    /// [`domain`](Self::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Returns `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
