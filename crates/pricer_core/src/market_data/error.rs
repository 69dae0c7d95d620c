//! Market data error types.
//!
//! Failures raised while looking up curves and FX rates, building curves,
//! or mapping sensitivities onto curve parameters.

use crate::types::{Currency, InterpolationError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `CurveNotFound`: No curve registered under the requested key
/// - `DuplicateCurveName`: Curve names must be unique within a provider
/// - `FxRateNotFound`: No rate linking two currencies
/// - `InvalidMaturity`: Negative time or unordered pillar tenors
/// - `OutOfBounds`: Query outside the curve domain with extrapolation off
/// - `InsufficientData`: Not enough pillars for construction
/// - `Interpolation`: Wrapped interpolation error
/// - `ParameterIndexOutOfRange`: Bump or lookup of a parameter that does not exist
/// - `SensitivityLengthMismatch`: Two sensitivity vectors for one curve differ in length
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::CurveNotFound { name: "KRW-DSC".to_string() };
/// assert_eq!(format!("{}", err), "Curve not found: KRW-DSC");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// No curve for the requested key.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// Curve name or key description
        name: String,
    },

    /// Two curves registered under the same name.
    #[error("Duplicate curve name: {name}")]
    DuplicateCurveName {
        /// The repeated name
        name: String,
    },

    /// No FX rate available between two currencies.
    #[error("FX rate not found: {base}/{counter}")]
    FxRateNotFound {
        /// Base currency of the request
        base: Currency,
        /// Counter currency of the request
        counter: Currency,
    },

    /// Invalid maturity (negative time or unordered tenor).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Curve parameter index outside `0..count`.
    #[error("Parameter index {index} out of range for curve {curve} with {count} parameters")]
    ParameterIndexOutOfRange {
        /// Curve name
        curve: String,
        /// Requested index
        index: usize,
        /// Number of parameters of the curve
        count: usize,
    },

    /// Sensitivity vectors for the same curve have different lengths.
    #[error("Sensitivity length mismatch for curve {curve}: {left} vs {right}")]
    SensitivityLengthMismatch {
        /// Curve name
        curve: String,
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },
}
