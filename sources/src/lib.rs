//! Module to deal with the upstream source we fetch fuel-price data from.
//!
//! There is a single source for now, the GOV.UK Fuel Finder feed, but the
//! access pattern is behind the `Fetchable` trait so the CLI does not care
//! where the bytes come from:
//!
//! - building the list of candidate URLs (direct endpoint, optional
//!   proxy-derived fallback)
//! - fetching data (plain GET, no authentication).
//!

use std::fmt::Debug;

// Re-export these modules for a shorter import path.
//
pub use error::*;
pub use fuelfinder::*;

mod error;
mod fuelfinder;

#[macro_use]
mod macros;

/// This trait enables us to manage different ways of connecting and fetching
/// data under a single interface.
///
pub trait Fetchable: Debug {
    /// Return the source's name
    fn name(&self) -> String;
    /// Fetch actual data, returning the raw payload
    fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
