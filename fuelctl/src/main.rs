use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::trace;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter::EnvFilter, fmt};

use fuelctl::{convert_from_file, fetch_fuel_prices, Opts, SubCommand};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");

fn main() {
    let opts = Opts::parse();

    // Initialise logging.
    //
    let fmt = fmt::layer().with_target(false).compact();

    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Combine filter & specific format
    //
    tracing_subscriber::registry().with(filter).with(fmt).init();

    // Errors go to stderr as a single line, nothing is printed on success.
    //
    if let Err(err) = handle_subcmd(&opts.subcmd) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

pub fn handle_subcmd(subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `fetch`
        //
        SubCommand::Fetch(fopts) => {
            trace!("fetch");

            fetch_fuel_prices(fopts)
        }

        // Handle `convert file`
        //
        SubCommand::Convert(copts) => {
            trace!("convert");

            convert_from_file(copts)
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and
        //       vice-versa.  Not worth trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
            Ok(())
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", fuel_sources::version());
            eprintln!("\t{}", fuel_formats::version());
            Ok(())
        }
    }
}
