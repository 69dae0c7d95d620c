//! Risk calculation errors.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised by the finite-difference calculator and its configuration.
///
/// # Variants
///
/// - `Pricing`: The valuation function failed on the base or a bumped provider
/// - `MarketData`: A curve could not be bumped or results could not be merged
/// - `InvalidConfig`: Configuration values out of range
/// - `Config`: Configuration file could not be read or parsed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Valuation failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Bumping or aggregation failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file error.
    #[error("Configuration file error: {0}")]
    Config(String),
}
