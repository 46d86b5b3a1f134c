//! `trains` - CLI for trainlog
//!
//! This binary records train departures in a JSON data file and prints
//! them as tables.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use trainlog::cli::{dispatch, Cli};
use trainlog::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, letting --data-dir win over every other source
    let config = Config::load_with(cli.config.clone(), cli.data_dir.clone())
        .context("could not load configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}
