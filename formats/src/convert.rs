//! Module handling the conversion from the raw CSV payload into nested JSON.
//!
//! The upstream CSV carries dotted column names (`forecourts.fuel_price.e10`)
//! that encode where each cell lands inside a per-row JSON object.  The
//! conversion walks those paths, creating intermediate objects on demand, and
//! coerces each cell according to the column it sits in.
//!
//! Cell coercion is schema-driven, not data-driven: a hardcoded allow-list
//! names the columns whose empty cells mean "no value" (JSON null) and whose
//! non-empty cells must parse as numbers.  The source columns can be empty
//! for reasons unrelated to their type, so inferring types from the data
//! would get it wrong.
//!

use csv::ReaderBuilder;
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::DecodeError;

/// Keys whose empty cells become JSON null and whose values parse as f64
const NULLABLE_NUMERIC: [&str; 2] = [
    "forecourts.location.latitude",
    "forecourts.location.longitude",
];

/// Every per-fuel price column is nullable numeric as well
const NULLABLE_NUMERIC_PREFIX: &str = "forecourts.fuel_price.";

/// Check that the payload parses as CSV, consuming the whole stream.
///
/// Rows of differing widths are fine here, the reader is `flexible`.  Only a
/// lexical error (for us: invalid UTF-8 in a record) fails the payload.
///
#[tracing::instrument(skip(payload))]
pub fn validate_csv(payload: &[u8]) -> Result<(), DecodeError> {
    trace!("validate_csv({} bytes)", payload.len());

    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(payload);
    for record in rdr.records() {
        record?;
    }
    Ok(())
}

/// Convert the CSV payload into an indented JSON array, one object per data
/// row.  Unlike the validator this is strict: every row must match the
/// header's width exactly.
///
#[tracing::instrument(skip(payload))]
pub fn csv_to_json(payload: &[u8]) -> Result<Vec<u8>, DecodeError> {
    trace!("csv_to_json({} bytes)", payload.len());

    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(payload);
    let mut rows = rdr.records();

    let header = match rows.next() {
        Some(record) => record?,
        None => return Err(DecodeError::MissingHeader),
    };
    if header.is_empty() {
        return Err(DecodeError::MissingHeader);
    }

    let mut records: Vec<Value> = vec![];
    for (n, row) in rows.enumerate() {
        let row = row?;
        if row.len() != header.len() {
            return Err(DecodeError::FieldCount {
                row: n + 1,
                expected: header.len(),
                found: row.len(),
            });
        }

        let mut entry = Map::new();
        for (key, raw) in header.iter().zip(row.iter()) {
            let value = coerce_value(key, raw)?;
            insert_nested(&mut entry, key, value)?;
        }
        records.push(Value::Object(entry));
    }

    trace!("{} records", records.len());
    Ok(serde_json::to_vec_pretty(&records)?)
}

/// Does this column's empty cell mean "no value"?
///
#[inline]
pub fn is_nullable_numeric(key: &str) -> bool {
    NULLABLE_NUMERIC.contains(&key) || key.starts_with(NULLABLE_NUMERIC_PREFIX)
}

/// Coerce one cell into its JSON value, driven by the column key.
///
/// Only the exact lowercase literals `true` and `false` become booleans;
/// `True` or `1` stay strings, matching what the upstream actually emits.
///
pub fn coerce_value(key: &str, raw: &str) -> Result<Value, DecodeError> {
    if raw.is_empty() {
        if is_nullable_numeric(key) {
            return Ok(Value::Null);
        }
        return Ok(Value::String(String::new()));
    }

    if is_nullable_numeric(key) {
        let number = raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .ok_or_else(|| DecodeError::BadNumber {
                key: key.to_owned(),
                value: raw.to_owned(),
            })?;
        return Ok(Value::Number(number));
    }

    match raw {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Ok(Value::String(raw.to_owned())),
    }
}

/// Graft `value` into `root` at the location described by the dotted `key`,
/// creating intermediate objects as needed.
///
/// A prefix already holding a non-object is a schema conflict (the same
/// prefix used once as a leaf and once as a container) and fails.  The final
/// segment overwrites silently.
///
pub fn insert_nested(
    root: &mut Map<String, Value>,
    key: &str,
    value: Value,
) -> Result<(), DecodeError> {
    let path: Vec<&str> = key.split('.').collect();

    // split always yields at least one element
    let (leaf, parents) = path.split_last().unwrap();

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        if segment.is_empty() {
            return Err(DecodeError::EmptySegment {
                key: key.to_owned(),
            });
        }
        current = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| DecodeError::NotAnObject {
                key: key.to_owned(),
                path: path[..=depth].join("."),
            })?;
    }

    if leaf.is_empty() {
        return Err(DecodeError::EmptySegment {
            key: key.to_owned(),
        });
    }
    current.insert(leaf.to_string(), value);
    Ok(())
}
