//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `syndicate` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All lookups and formatting are implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use syndicate::initialization::{init_logger_with, init_resolver};
use syndicate::{dispatch, Cli, Config, Query};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(kind) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let query = Query::from_config(&config, kind);
    let resolver = init_resolver();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = dispatch(&query, &resolver, &mut out).await;
    out.flush()?;

    if let Err(e) = outcome {
        eprintln!("syndicate error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
