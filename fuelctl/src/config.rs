//! Resolved configuration for one run.
//!
//! Precedence is flag over environment variable over built-in default, and
//! everything is resolved and checked here before any network traffic.
//!

use std::env;
use std::str::FromStr;

use tracing::trace;

use fuel_formats::Format;
use fuel_sources::FUEL_FINDER_URL;

use crate::{FetchOpts, Status};

/// Environment fallbacks, for running out of cron without arguments
///
pub const ENV_OUT: &str = "FUEL_OUT";
pub const ENV_FORMAT: &str = "FUEL_FORMAT";
pub const ENV_PROXY_TEMPLATE: &str = "FUEL_PROXY_TEMPLATE";

/// Default output paths per format
const DEFAULT_OUT: &str = "data.csv";
const DEFAULT_JSON_OUT: &str = "data.json";

/// Everything the fetch pipeline needs, fully resolved.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Endpoint to fetch from
    pub url: String,
    /// Output file path
    pub output: String,
    /// Output format
    pub format: Format,
    /// Optional proxy template for the fallback URL
    pub proxy_template: Option<String>,
}

impl Config {
    /// Resolve flags, environment and defaults into a validated `Config`.
    ///
    #[tracing::instrument]
    pub fn resolve(opts: &FetchOpts) -> Result<Config, Status> {
        trace!("config::resolve");

        let mut output = opts
            .output
            .clone()
            .or_else(|| env::var(ENV_OUT).ok())
            .unwrap_or_else(|| DEFAULT_OUT.to_string());
        let format = opts
            .format
            .clone()
            .or_else(|| env::var(ENV_FORMAT).ok())
            .unwrap_or_else(|| Format::default().to_string());

        // In json mode the `.csv` default makes no sense, switch it.
        //
        if format == "json" && output == DEFAULT_OUT {
            output = DEFAULT_JSON_OUT.to_string();
        }

        if output.is_empty() {
            return Err(Status::EmptyOutputPath);
        }

        let format =
            Format::from_str(&format).map_err(|_| Status::UnsupportedFormat(format.clone()))?;

        let proxy_template = opts
            .proxy_template
            .clone()
            .or_else(|| env::var(ENV_PROXY_TEMPLATE).ok())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let url = opts
            .url
            .clone()
            .unwrap_or_else(|| FUEL_FINDER_URL.to_string());

        Ok(Config {
            url,
            output,
            format,
            proxy_template,
        })
    }
}
