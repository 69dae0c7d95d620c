//! Capability traits at the seams between layers.
//!
//! - [`RatesProvider`]: market data consumed by pricers
//! - [`ShiftableRatesProvider`]: a provider whose curve parameters can be
//!   bumped, consumed by finite difference calculators

pub mod rates;

pub use rates::{RatesProvider, ShiftableRatesProvider};
