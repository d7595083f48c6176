//! This is the module handling the `fetch` sub-command.
//!

use std::fs;

use eyre::{Result, WrapErr};
use tracing::{info, trace};

use fuel_formats::{csv_to_json, validate_csv, Format};
use fuel_sources::{Fetchable, FuelFinder};

use crate::{Config, FetchOpts};

/// Actual fetching of the feed: resolve the configuration, fetch and
/// validate the payload, convert it when json was asked for, write the
/// output file in one go.
///
#[tracing::instrument]
pub fn fetch_fuel_prices(fopts: &FetchOpts) -> Result<()> {
    trace!("fetch_fuel_prices");

    let cfg = Config::resolve(fopts)?;

    let mut site = FuelFinder::new()?;
    site.url(&cfg.url);
    if let Some(template) = &cfg.proxy_template {
        site.proxy(template);
    }

    info!("Fetching from network site {}", site.name());

    let payload = site.fetch()?;

    validate_csv(&payload).wrap_err("invalid CSV")?;

    let payload = match cfg.format {
        Format::Json => csv_to_json(&payload).wrap_err("convert to JSON")?,
        Format::Csv => payload,
    };

    info!("Writing to {}", cfg.output);

    fs::write(&cfg.output, &payload).wrap_err_with(|| format!("write output {}", cfg.output))?;
    Ok(())
}
