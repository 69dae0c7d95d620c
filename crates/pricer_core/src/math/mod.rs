//! Numerical building blocks used by the market data layer.
//!
//! - [`interpolators`]: 1D interpolation with exposed node weights

pub mod interpolators;
