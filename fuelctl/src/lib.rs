//! Library part of the `fuelctl` utility.
//!
//! The actual work lives in the two support crates: `fuel-sources` knows how
//! to reach the upstream feed (including the proxy fallback) and
//! `fuel-formats` knows how to validate and convert the payload.  This crate
//! only resolves the configuration (flags over environment variables over
//! built-in defaults), drives fetch → validate → convert → write, and maps
//! failures onto the process exit status.
//!

// Re-export
//
pub use cli::*;
pub use cmds::*;
pub use config::*;
pub use error::*;

mod cli;
mod cmds;
mod config;
mod error;
