//! Finite-difference configuration.
//!
//! Loaded from TOML or built in code:
//!
//! ```toml
//! shift = 1e-7
//! parallel = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Default additive bump applied to one curve parameter.
pub const DEFAULT_SHIFT: f64 = 1e-7;

/// Finite-difference settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiniteDifferenceConfig {
    /// Additive bump applied to each curve parameter
    pub shift: f64,
    /// Evaluate bumped providers on the rayon thread pool
    pub parallel: bool,
}

impl Default for FiniteDifferenceConfig {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            parallel: false,
        }
    }
}

impl FiniteDifferenceConfig {
    /// Returns a copy with the given shift.
    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    /// Returns a copy with parallel evaluation switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the shift is finite and strictly positive.
    pub fn validate(&self) -> Result<(), RiskError> {
        if !self.shift.is_finite() || self.shift <= 0.0 {
            return Err(RiskError::InvalidConfig(format!(
                "shift must be finite and positive, got {}",
                self.shift
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, RiskError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| RiskError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RiskError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RiskError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
