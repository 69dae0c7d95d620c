//! Point sensitivities.
//!
//! A point sensitivity is the derivative of a present value with respect to
//! one market observable, before any curve parametrisation is involved. The
//! records are plain data so that the conversion into curve parameter space
//! can be tested apart from pricing.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{Currency, Date};

/// Identifies the market object a point sensitivity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKey {
    /// The discount curve of a currency.
    Discount(Currency),
}

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKey::Discount(currency) => write!(f, "Discount({currency})"),
        }
    }
}

/// Derivative of a present value with respect to one discount factor.
///
/// `currency` is the currency the present value is expressed in and
/// `sensitivity` is `∂PV/∂DF(curve, date)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSensitivity {
    /// Curve the discount factor is read from
    pub curve: CurveKey,
    /// Currency of the sensitivity value
    pub currency: Currency,
    /// Date of the discount factor
    pub date: Date,
    /// Sensitivity value
    pub sensitivity: f64,
}

impl PointSensitivity {
    /// Sensitivity to the discount factor of `currency` at `date`, expressed
    /// in that same currency.
    pub fn discount(currency: Currency, date: Date, sensitivity: f64) -> Self {
        Self {
            curve: CurveKey::Discount(currency),
            currency,
            date,
            sensitivity,
        }
    }

    /// Returns a copy with the value scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivity: self.sensitivity * factor,
            ..*self
        }
    }

    /// Orders records by curve, currency, then date, ignoring the value.
    pub fn compare_key(&self, other: &Self) -> Ordering {
        (self.curve, self.currency, self.date).cmp(&(other.curve, other.currency, other.date))
    }
}

/// Ordered collection of point sensitivities.
///
/// Records are kept in insertion order and never merged implicitly; use
/// [`normalized`](Self::normalized) to merge records that share a key.
///
/// # Example
///
/// ```
/// use pricer_core::sensitivity::{PointSensitivities, PointSensitivity};
/// use pricer_core::types::{Currency, Date};
///
/// let date = Date::from_ymd(2012, 5, 4).unwrap();
/// let a = PointSensitivities::of([PointSensitivity::discount(Currency::USD, date, 100.0)]);
/// let b = PointSensitivities::of([PointSensitivity::discount(Currency::USD, date, 50.0)]);
///
/// let both = a.combined_with(&b);
/// assert_eq!(both.len(), 2);
/// assert_eq!(both.normalized().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSensitivities {
    sensitivities: Vec<PointSensitivity>,
}

impl PointSensitivities {
    /// Returns an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a collection from records, keeping their order.
    pub fn of<I: IntoIterator<Item = PointSensitivity>>(records: I) -> Self {
        Self {
            sensitivities: records.into_iter().collect(),
        }
    }

    /// Records in order.
    pub fn sensitivities(&self) -> &[PointSensitivity] {
        &self.sensitivities
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, PointSensitivity> {
        self.sensitivities.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Concatenates two collections, `self` first. No merging is done.
    pub fn combined_with(&self, other: &PointSensitivities) -> Self {
        let mut sensitivities = Vec::with_capacity(self.len() + other.len());
        sensitivities.extend_from_slice(&self.sensitivities);
        sensitivities.extend_from_slice(&other.sensitivities);
        Self { sensitivities }
    }

    /// Returns a copy with every value scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.iter().map(|s| s.multiplied_by(factor)).collect()
    }

    /// Sorts by key and sums records sharing curve, currency and date.
    pub fn normalized(&self) -> Self {
        let mut sorted = self.sensitivities.clone();
        sorted.sort_by(PointSensitivity::compare_key);
        let mut merged: Vec<PointSensitivity> = Vec::with_capacity(sorted.len());
        for record in sorted {
            match merged.last_mut() {
                Some(last) if last.compare_key(&record) == Ordering::Equal => {
                    last.sensitivity += record.sensitivity;
                }
                _ => merged.push(record),
            }
        }
        Self {
            sensitivities: merged,
        }
    }
}

impl FromIterator<PointSensitivity> for PointSensitivities {
    fn from_iter<I: IntoIterator<Item = PointSensitivity>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a> IntoIterator for &'a PointSensitivities {
    type Item = &'a PointSensitivity;
    type IntoIter = std::slice::Iter<'a, PointSensitivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
