//! Module describing all possible commands and sub-commands to the `fuelctl`
//! main driver
//!
//! We have two main commands:
//!
//! - `fetch`
//! - `convert`
//!
//! `fetch` retrieves the latest fuel-price CSV from the GOV.UK Fuel Finder
//! feed (falling back through a proxy when one is configured) and dumps it
//! into a file, either raw or converted to nested JSON.
//!
//! `convert` runs the same validation and conversion on a local CSV file,
//! without touching the network.
//!
//! `completion` is here just to configure the various shells completion
//! system and `version` reports the component versions.
//!

use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Parser};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!())]
pub struct Opts {
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `fetch [-o FILE] [-F csv|json] [--proxy-template TEMPLATE]`
/// `convert [-o FILE] INPUT`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch the latest fuel prices from the feed
    Fetch(FetchOpts),
    /// Convert a local CSV file into nested JSON
    Convert(ConvertOpts),
    /// List all package versions
    Version,
}

// ------

/// Options for fetching the feed.  Every flag has an environment fallback so
/// the tool can run from cron without arguments: `FUEL_OUT`, `FUEL_FORMAT`
/// and `FUEL_PROXY_TEMPLATE`.
///
#[derive(Debug, Default, Parser)]
pub struct FetchOpts {
    /// Output file (default `data.csv`, or `data.json` in json mode).
    #[clap(short = 'o', long, visible_alias = "out")]
    pub output: Option<String>,
    /// Output format, `csv` or `json`.
    #[clap(short = 'F', long)]
    pub format: Option<String>,
    /// Proxy template used to derive a fallback URL, `{url}` is substituted.
    #[clap(long)]
    pub proxy_template: Option<String>,
    /// Fetch from a different endpoint (mirrors, tests).
    #[clap(short = 'u', long)]
    pub url: Option<String>,
}

// ------

/// Options for converting a local file.
///
#[derive(Debug, Parser)]
pub struct ConvertOpts {
    /// Output file (default: input with a `.json` extension).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Input CSV file.
    pub input: PathBuf,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}
