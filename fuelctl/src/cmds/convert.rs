//! This is the module handling the `convert` sub-command.
//!
//! Same validation and conversion as `fetch -F json`, but on a local file.
//!

use std::fs;

use eyre::{Result, WrapErr};
use tracing::{info, trace};

use fuel_formats::{csv_to_json, validate_csv};

use crate::ConvertOpts;

/// Convert a local CSV file into the nested JSON document.
///
#[tracing::instrument]
pub fn convert_from_file(copts: &ConvertOpts) -> Result<()> {
    trace!("convert_from_file({:?})", copts.input);

    let output = match &copts.output {
        Some(path) => path.clone(),
        None => copts.input.with_extension("json"),
    };

    let payload = fs::read(&copts.input)
        .wrap_err_with(|| format!("read input {}", copts.input.display()))?;

    validate_csv(&payload).wrap_err("invalid CSV")?;
    let payload = csv_to_json(&payload).wrap_err("convert to JSON")?;

    info!("Writing to {}", output.display());

    fs::write(&output, &payload)
        .wrap_err_with(|| format!("write output {}", output.display()))?;
    Ok(())
}
