//! Curve parameter sensitivities.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::market_data::curves::CurveName;
use crate::market_data::error::MarketDataError;
use crate::types::{Currency, FxRateProvider, PricingError};

/// Sensitivity of a value in one currency to every parameter of one curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParameterSensitivity {
    curve_name: CurveName,
    currency: Currency,
    sensitivity: Vec<f64>,
}

impl CurveParameterSensitivity {
    /// Creates an entry; `sensitivity[i]` is the derivative with respect to
    /// parameter `i` of the curve.
    pub fn new(curve_name: CurveName, currency: Currency, sensitivity: Vec<f64>) -> Self {
        Self {
            curve_name,
            currency,
            sensitivity,
        }
    }

    /// Curve name.
    pub fn curve_name(&self) -> &CurveName {
        &self.curve_name
    }

    /// Currency of the values.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Values in parameter order.
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Number of parameters.
    pub fn parameter_count(&self) -> usize {
        self.sensitivity.len()
    }

    /// Sum of the values.
    pub fn total(&self) -> f64 {
        self.sensitivity.iter().sum()
    }

    /// Returns a copy with every value scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivity: self.sensitivity.iter().map(|v| v * factor).collect(),
            ..self.clone()
        }
    }

    fn add_assign(&mut self, other: &[f64]) -> Result<(), MarketDataError> {
        if other.len() != self.sensitivity.len() {
            return Err(MarketDataError::SensitivityLengthMismatch {
                curve: self.curve_name.to_string(),
                left: self.sensitivity.len(),
                right: other.len(),
            });
        }
        for (acc, v) in self.sensitivity.iter_mut().zip(other) {
            *acc += v;
        }
        Ok(())
    }
}

/// Curve parameter sensitivities keyed by `(curve name, currency)`.
///
/// Iteration follows key order, so comparisons and printed output are
/// reproducible.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::CurveName;
/// use pricer_core::sensitivity::{CurveParameterSensitivities, CurveParameterSensitivity};
/// use pricer_core::types::Currency;
///
/// let usd = CurveName::new("USD-DSC");
/// let a = CurveParameterSensitivities::of(CurveParameterSensitivity::new(
///     usd.clone(), Currency::USD, vec![1.0, 2.0],
/// ));
/// let b = CurveParameterSensitivities::of(CurveParameterSensitivity::new(
///     usd.clone(), Currency::USD, vec![0.5, 0.5],
/// ));
///
/// let sum = a.combined_with(&b).unwrap();
/// assert_eq!(sum.get(&usd, Currency::USD).unwrap().sensitivity(), &[1.5, 2.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveParameterSensitivities {
    entries: BTreeMap<(CurveName, Currency), CurveParameterSensitivity>,
}

impl CurveParameterSensitivities {
    /// Returns an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from entries, summing entries that share a key.
    pub fn from_entries<I>(entries: I) -> Result<Self, MarketDataError>
    where
        I: IntoIterator<Item = CurveParameterSensitivity>,
    {
        let mut result = Self::empty();
        for entry in entries {
            result.add(entry)?;
        }
        Ok(result)
    }

    /// Returns a set holding one entry.
    pub fn of(entry: CurveParameterSensitivity) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert((entry.curve_name.clone(), entry.currency), entry);
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `curve_name` in `currency`, if any.
    pub fn get(&self, curve_name: &CurveName, currency: Currency) -> Option<&CurveParameterSensitivity> {
        self.entries.get(&(curve_name.clone(), currency))
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CurveParameterSensitivity> {
        self.entries.values()
    }

    /// Adds an entry, summing element-wise into an existing entry with the
    /// same key.
    ///
    /// # Errors
    ///
    /// `MarketDataError::SensitivityLengthMismatch` if an existing entry has a
    /// different number of parameters.
    pub fn add(&mut self, entry: CurveParameterSensitivity) -> Result<(), MarketDataError> {
        match self.entries.entry((entry.curve_name.clone(), entry.currency)) {
            Entry::Occupied(mut existing) => existing.get_mut().add_assign(&entry.sensitivity),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Sums two sets element-wise over entries present in either operand.
    pub fn combined_with(&self, other: &CurveParameterSensitivities) -> Result<Self, MarketDataError> {
        let mut combined = self.clone();
        for entry in other.iter() {
            combined.add(entry.clone())?;
        }
        Ok(combined)
    }

    /// Returns a copy with every value scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.multiplied_by(factor)))
                .collect(),
        }
    }

    /// Converts every entry into `currency` and merges entries of the same
    /// curve.
    pub fn converted_to<R: FxRateProvider + ?Sized>(
        &self,
        currency: Currency,
        rates: &R,
    ) -> Result<Self, PricingError> {
        let mut converted = Self::empty();
        for entry in self.iter() {
            let rate = rates.fx_rate(entry.currency, currency)?;
            let mut scaled = entry.multiplied_by(rate);
            scaled.currency = currency;
            converted.add(scaled)?;
        }
        Ok(converted)
    }

    /// Compares element-wise with absolute tolerance `tolerance`.
    ///
    /// An entry missing from one side compares as a zero vector of the other
    /// side's length.
    pub fn equal_within_tolerance(&self, other: &CurveParameterSensitivities, tolerance: f64) -> bool {
        let within = |left: &CurveParameterSensitivity, right: Option<&CurveParameterSensitivity>| {
            match right {
                Some(right) => {
                    left.sensitivity.len() == right.sensitivity.len()
                        && left
                            .sensitivity
                            .iter()
                            .zip(&right.sensitivity)
                            .all(|(a, b)| (a - b).abs() <= tolerance)
                }
                None => left.sensitivity.iter().all(|a| a.abs() <= tolerance),
            }
        };
        self.entries
            .iter()
            .all(|(key, entry)| within(entry, other.entries.get(key)))
            && other
                .entries
                .iter()
                .all(|(key, entry)| within(entry, self.entries.get(key)))
    }
}
