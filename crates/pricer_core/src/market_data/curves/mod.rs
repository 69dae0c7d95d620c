//! Discount curves.
//!
//! This module provides:
//! - [`YieldCurve`]: discount factors, zero rates and forward rates by time
//! - [`ParameterizedCurve`]: a curve that exposes its parameters, can be
//!   bumped, and owns the Jacobian of its discount factors
//! - [`InterpolatedCurve`]: pillar-based zero-rate curve
//! - [`CurveInterpolation`]: interpolation method selection
//! - [`CurveName`]: curve identifier

mod interpolated;
mod name;
mod traits;

pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use name::CurveName;
pub use traits::{ParameterizedCurve, YieldCurve};
