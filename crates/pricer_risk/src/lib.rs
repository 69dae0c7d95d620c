//! # Pricer Risk (L4: Application)
//!
//! Finite-difference curve sensitivities.
//!
//! This crate provides:
//! - [`FiniteDifferenceSensitivityCalculator`]: bump-and-revalue
//!   sensitivities to every curve parameter of a rates provider
//! - [`FiniteDifferenceConfig`]: shift size and parallel evaluation, loadable
//!   from TOML
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! │  finite_difference/ - bump and reprice  │
//! │  config/            - TOML settings     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Discounting FX pricers                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Bumped providers are independent copies, so parameters can be evaluated
//! on the rayon thread pool when [`FiniteDifferenceConfig::parallel`] is set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod finite_difference;

pub use config::{FiniteDifferenceConfig, DEFAULT_SHIFT};
pub use error::RiskError;
pub use finite_difference::FiniteDifferenceSensitivityCalculator;
