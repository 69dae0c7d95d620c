//! Market data: discount curves, spot FX rates and the rates provider that
//! combines them.
//!
//! # Components
//!
//! - [`curves`]: yield curve traits and the interpolated zero-rate curve
//! - [`FxMatrix`]: spot FX rates between linked currencies
//! - [`ImmutableRatesProvider`]: the [`RatesProvider`](crate::traits::RatesProvider)
//!   used for pricing and finite difference bumping
//! - [`error`]: market data error types
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, YieldCurve};
//!
//! let curve = InterpolatedCurve::new(
//!     "EUR-DSC",
//!     &[1.0_f64, 5.0],
//!     &[0.02, 0.03],
//!     CurveInterpolation::LogLinear,
//!     true,
//! )
//! .unwrap();
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - (-0.02_f64).exp()).abs() < 1e-15);
//! ```

pub mod curves;
pub mod error;
mod fx_matrix;
mod provider;

pub use curves::{CurveInterpolation, CurveName, InterpolatedCurve, ParameterizedCurve, YieldCurve};
pub use error::MarketDataError;
pub use fx_matrix::{FxMatrix, FxMatrixBuilder};
pub use provider::{ImmutableRatesProvider, ImmutableRatesProviderBuilder};
