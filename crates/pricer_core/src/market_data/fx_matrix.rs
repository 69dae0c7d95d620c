//! Spot FX rates between any number of linked currencies.

use std::collections::BTreeMap;

use super::error::MarketDataError;
use crate::types::{Currency, FxRate, FxRateProvider, PricingError};

/// Spot FX rates for a set of currencies.
///
/// Every currency is stored as its value against a reference currency (the
/// base of the first rate added), so a rate is available between any two
/// currencies of the matrix, including crosses that were never quoted
/// directly.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::FxMatrix;
/// use pricer_core::types::{Currency, FxRate, FxRateProvider};
///
/// let matrix = FxMatrix::builder()
///     .add_rate(FxRate::of(Currency::USD, Currency::KRW, 1123.45).unwrap())
///     .unwrap()
///     .add_rate(FxRate::of(Currency::EUR, Currency::USD, 1.4).unwrap())
///     .unwrap()
///     .build();
///
/// let eur_krw = matrix.fx_rate(Currency::EUR, Currency::KRW).unwrap();
/// assert!((eur_krw - 1.4 * 1123.45).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxMatrix {
    /// Units of each currency per one unit of the reference currency.
    rates: BTreeMap<Currency, f64>,
}

impl FxMatrix {
    /// Returns an empty matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a matrix.
    pub fn builder() -> FxMatrixBuilder {
        FxMatrixBuilder::default()
    }

    /// Currencies present in the matrix.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.rates.keys().copied()
    }

    /// Returns true if the matrix holds no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the rate converting one unit of `base` into `counter`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::FxRateNotFound` if either currency is unknown.
    pub fn rate(&self, base: Currency, counter: Currency) -> Result<f64, MarketDataError> {
        if base == counter {
            return Ok(1.0);
        }
        match (self.rates.get(&base), self.rates.get(&counter)) {
            (Some(b), Some(c)) => Ok(c / b),
            _ => Err(MarketDataError::FxRateNotFound { base, counter }),
        }
    }
}

impl FxRateProvider for FxMatrix {
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, PricingError> {
        Ok(self.rate(base, counter)?)
    }
}

/// Builder for [`FxMatrix`].
#[derive(Debug, Clone, Default)]
pub struct FxMatrixBuilder {
    reference: Option<Currency>,
    rates: BTreeMap<Currency, f64>,
}

impl FxMatrixBuilder {
    /// Adds a rate. The first rate fixes the reference currency; each later
    /// rate must share a currency with those already present.
    ///
    /// When both currencies are already present the quote replaces the
    /// implied rate by re-pricing its counter currency (or its base if the
    /// counter is the reference).
    ///
    /// # Errors
    ///
    /// `MarketDataError::FxRateNotFound` if the rate links no known currency.
    pub fn add_rate(mut self, rate: FxRate) -> Result<Self, MarketDataError> {
        let base = rate.pair().base();
        let counter = rate.pair().counter();
        let quote = rate.rate();

        let Some(reference) = self.reference else {
            self.reference = Some(base);
            self.rates.insert(base, 1.0);
            self.rates.insert(counter, quote);
            return Ok(self);
        };

        match (self.rates.get(&base).copied(), self.rates.get(&counter).copied()) {
            (Some(b), _) if counter != reference => {
                self.rates.insert(counter, b * quote);
            }
            (_, Some(c)) => {
                self.rates.insert(base, c / quote);
            }
            _ => return Err(MarketDataError::FxRateNotFound { base, counter }),
        }
        Ok(self)
    }

    /// Builds the matrix.
    pub fn build(self) -> FxMatrix {
        FxMatrix { rates: self.rates }
    }
}
