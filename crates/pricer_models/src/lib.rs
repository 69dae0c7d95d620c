//! # Pricer Models (L2: Business Logic)
//!
//! FX product definitions.
//!
//! This crate provides:
//! - [`FxSingle`](instruments::FxSingle): exchange of two currency amounts on
//!   one payment date, the FX forward
//! - [`FxSwap`](instruments::FxSwap): a near and a far exchange in opposite
//!   directions
//!
//! ## Design Principles
//!
//! - **Immutable products** validated once, on construction
//! - **No market data** inside products; pricers read it from a provider
//! - **Optional serde** support behind the `serde` feature

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
