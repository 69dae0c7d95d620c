//! # pricer_core: Foundation layer for FX discounting and curve risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the 4-layer architecture, providing:
//! - Currency and amount types: `Currency`, `CurrencyPair`, `FxRate`,
//!   `CurrencyAmount`, `MultiCurrencyAmount` (`types`)
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `PricingError`, `DateError`, `CurrencyError` (`types::error`)
//! - Discount curves that expose their parameters (`market_data::curves`)
//! - The `RatesProvider` capability trait and an immutable implementation
//!   (`traits`, `market_data`)
//! - Point and curve parameter sensitivity containers (`sensitivity`)
//!
//! ## Dependencies
//!
//! Layer 1 has no dependencies on other pricer_* crates:
//! - num-traits: generic floating-point curves and interpolators
//! - chrono: date arithmetic
//! - thiserror: error enums
//! - tracing: debug output from the rates provider
//! - serde: serialisation of value types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Currency, CurrencyAmount, Date, DayCountConvention, MultiCurrencyAmount};
//!
//! let start = Date::from_ymd(2012, 2, 13).unwrap();
//! let end = Date::from_ymd(2012, 5, 4).unwrap();
//! let t = DayCountConvention::Act365Fixed.year_fraction(start, end);
//! assert!((t - 81.0 / 365.0).abs() < 1e-15);
//!
//! let pv = MultiCurrencyAmount::of([
//!     CurrencyAmount::new(Currency::USD, 99_990_000.0),
//!     CurrencyAmount::new(Currency::KRW, -111_700_000_000.0),
//! ]);
//! assert_eq!(pv.len(), 2);
//! assert_eq!(pv.amount(Currency::EUR).amount(), 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialisation for currencies, dates, amounts and
//!   point sensitivities

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod sensitivity;
pub mod traits;
pub mod types;
