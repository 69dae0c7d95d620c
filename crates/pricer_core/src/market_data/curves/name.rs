//! Curve identifiers.

use std::fmt;

/// Name of a curve, unique within a rates provider.
///
/// Curve names key curve parameter sensitivities, so they are ordered and
/// compare by string value.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::CurveName;
///
/// let name = CurveName::new("USD-DSC");
/// assert_eq!(name.as_str(), "USD-DSC");
/// assert_eq!(name, CurveName::from("USD-DSC"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CurveName(String);

impl CurveName {
    /// Creates a curve name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurveName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CurveName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
