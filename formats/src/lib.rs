//! Module handling the payload formats for the fuel-price feed.
//!
//! Two operations are exposed:
//!
//! - `validate_csv` checks that a payload is lexically well-formed CSV,
//!   accepting rows of differing widths.
//! - `csv_to_json` turns the payload into an indented JSON array, one object
//!   per row, with dotted header keys expanded into nested objects.
//!

// Re-export these modules for a shorter import path.
//
pub use convert::*;
pub use error::*;
pub use format::*;

mod convert;
mod error;
mod format;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
