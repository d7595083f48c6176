//! Error module
//!

use thiserror::Error;

/// Configuration problems are reported before any fetch is attempted.
///
#[derive(Debug, Error)]
pub enum Status {
    #[error("output path cannot be empty")]
    EmptyOutputPath,
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}
