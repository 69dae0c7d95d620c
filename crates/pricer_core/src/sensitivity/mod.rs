//! Sensitivity containers.
//!
//! - [`point`]: sensitivities to single market observables (a discount
//!   factor at one date), produced by pricers
//! - [`parameter`]: sensitivities to curve parameters, produced by rates
//!   providers from point sensitivities or by finite differences

pub mod parameter;
pub mod point;

pub use parameter::{CurveParameterSensitivities, CurveParameterSensitivity};
pub use point::{CurveKey, PointSensitivities, PointSensitivity};
