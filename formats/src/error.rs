use thiserror::Error;

/// Custom error type for decoding, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing header row")]
    MissingHeader,
    #[error("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("parse {key}: {value:?} is not a valid number")]
    BadNumber { key: String, value: String },
    #[error("set {key}: {path} is not an object")]
    NotAnObject { key: String, path: String },
    #[error("set {key}: empty key segment")]
    EmptySegment { key: String },
    #[error("serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
}
