//! Core financial value types.
//!
//! This module provides:
//! - `currency`: ISO 4217 currency codes
//! - `currency_pair`: ordered BASE/COUNTER pairs
//! - `fx_rate`: quoted FX rates and the [`FxRateProvider`] conversion seam
//! - `amount`: single- and multi-currency amounts
//! - `time`: dates and day count conventions
//! - `error`: structured error types shared by every layer

pub mod amount;
pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod fx_rate;
pub mod time;

pub use amount::{CurrencyAmount, MultiCurrencyAmount};
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, DateError, InterpolationError, PricingError};
pub use fx_rate::{FxRate, FxRateProvider};
pub use time::{Date, DayCountConvention};
