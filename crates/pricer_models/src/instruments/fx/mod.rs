//! Foreign exchange products.
//!
//! - [`FxSingle`]: exchange of two currency amounts on one date (FX forward)
//! - [`FxSwap`]: near and far exchanges in opposite directions
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyAmount, Date};
//! use pricer_models::instruments::fx::FxSingle;
//!
//! let fx = FxSingle::new(
//!     CurrencyAmount::new(Currency::EUR, 1_000_000.0),
//!     CurrencyAmount::new(Currency::USD, -1_120_000.0),
//!     Date::from_ymd(2024, 6, 19).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(fx.currency_pair().code(), "EUR/USD");
//! ```

mod single;
mod swap;

pub use single::FxSingle;
pub use swap::FxSwap;
