//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing and currency arithmetic
//! - `InterpolationError`: Errors from interpolation operations

use thiserror::Error;

use super::currency::Currency;
use crate::market_data::error::MarketDataError;

/// Categorised pricing errors.
///
/// A pricing call either succeeds or fails with one of these variants; there
/// is no partial result and nothing is retried.
///
/// # Variants
/// - `InvalidInput`: Invalid parameters handed to a pricer
/// - `MarketData`: The rates provider could not supply a required input
/// - `Currency`: Currency arithmetic or FX conversion failed
/// - `Undefined`: The measure is mathematically undefined for these inputs
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative notional".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative notional");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or unusable market data
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Currency arithmetic or conversion failure
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Measure is undefined (e.g. division by a zero discount factor)
    #[error("Undefined result: {0}")]
    Undefined(String),
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Failed to parse a currency or currency pair string.
    #[error("Currency parse error: {0}")]
    ParseError(String),

    /// Base and counter currencies are the same.
    #[error("Base and counter currencies are the same: {0}")]
    SameCurrency(Currency),

    /// FX rate is not strictly positive and finite.
    #[error("Invalid FX rate {rate}: must be positive")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    Mismatch {
        /// Currency of the receiving amount
        expected: Currency,
        /// Currency of the offending amount
        actual: Currency,
    },

    /// A currency that is not part of the pair was requested.
    #[error("Currency {currency} is not part of pair {pair}")]
    NotInPair {
        /// The requested currency
        currency: Currency,
        /// The pair code, e.g. "USD/KRW"
        pair: String,
    },
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not strictly increasing in x.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index of the first offending point
        index: usize,
    },

    /// General invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
