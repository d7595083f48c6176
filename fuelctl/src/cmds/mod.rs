//! All the commands available in `fuelctl`.
//!

pub use convert::*;
pub use fetch::*;

mod convert;
mod fetch;
