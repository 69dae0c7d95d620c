//! Financial instrument definitions.
//!
//! Products are immutable values, validated once on construction. They carry
//! no market data and no pricing logic; see `pricer_pricing` for the
//! discounting pricers.
//!
//! # Asset Class Modules
//!
//! - [`fx`]: FX forwards and FX swaps

mod error;
pub mod fx;

pub use error::InstrumentError;
pub use fx::{FxSingle, FxSwap};
