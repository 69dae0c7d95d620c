//! Discounting pricers for FX products.
//!
//! Each cash flow is valued as its amount times the discount factor of its
//! currency at the payment date. Cash flows paid on or before the valuation
//! date have no value and no sensitivity.

mod single;
mod swap;

pub use single::DiscountingFxSingleProductPricer;
pub use swap::DiscountingFxSwapProductPricer;
