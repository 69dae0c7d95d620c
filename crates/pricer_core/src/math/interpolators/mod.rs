//! Interpolation methods for curve construction.
//!
//! All 1D interpolators implement [`Interpolator`], which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: interpolated value
//! - `domain() -> (T, T)`: valid interpolation range
//!
//! [`LinearInterpolator`] additionally exposes the node weights of a query
//! point, which is what curve parameter sensitivities are built from.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0_f64, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//!
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod linear;
mod traits;

pub use linear::{LinearInterpolator, NodeWeights};
pub use traits::Interpolator;
