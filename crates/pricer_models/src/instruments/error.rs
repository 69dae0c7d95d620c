//! Instrument error types.
//!
//! Products are validated once, at construction; pricers assume every
//! product they receive satisfies these checks.

use pricer_core::types::{Currency, CurrencyAmount, CurrencyError, CurrencyPair, Date, PricingError};
use thiserror::Error;

/// Product construction errors.
///
/// # Variants
/// - `SameCurrency`: Both legs of an FX exchange in one currency
/// - `SameSign`: Both amounts of an FX exchange received, or both paid
/// - `ZeroAmount`: A base amount that must carry a direction is zero
/// - `LegDateOrder`: FX swap near leg does not settle before the far leg
/// - `CurrencyPairMismatch`: FX swap legs on different currency pairs
/// - `SameDirection`: FX swap legs exchange the base currency the same way
/// - `Currency`: Wrapped currency error
///
/// # Examples
/// ```
/// use pricer_core::types::Currency;
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::SameCurrency(Currency::USD);
/// assert_eq!(format!("{}", err), "FX exchange requires two different currencies, got USD twice");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Both amounts are in the same currency.
    #[error("FX exchange requires two different currencies, got {0} twice")]
    SameCurrency(Currency),

    /// Both amounts have the same non-zero sign.
    #[error("FX exchange amounts must have opposite signs: {first} and {second}")]
    SameSign {
        /// First amount
        first: CurrencyAmount,
        /// Second amount
        second: CurrencyAmount,
    },

    /// A base amount that must be signed is zero.
    #[error("Amount must be non-zero: {0}")]
    ZeroAmount(CurrencyAmount),

    /// Near leg does not pay strictly before the far leg.
    #[error("Near leg payment date {near} must be before far leg payment date {far}")]
    LegDateOrder {
        /// Near leg payment date
        near: Date,
        /// Far leg payment date
        far: Date,
    },

    /// Legs are quoted on different currency pairs.
    #[error("FX swap legs must share a currency pair: {near} vs {far}")]
    CurrencyPairMismatch {
        /// Near leg pair
        near: CurrencyPair,
        /// Far leg pair
        far: CurrencyPair,
    },

    /// Both legs receive (or both pay) the base currency.
    #[error("FX swap legs must exchange {0} in opposite directions")]
    SameDirection(Currency),

    /// Currency error.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::Currency(e) => PricingError::Currency(e),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
