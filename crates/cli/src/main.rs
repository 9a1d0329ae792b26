//! dotenv-flow - load layered .env files for the selected environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install logging before any file is read.
//! - Run the selected command and exit with a structured code.
//!
//! Does NOT handle:
//! - Cascade resolution (see the `dotenv-flow` library crate).
//!
//! Invariants:
//! - Logs go to stderr so `list`/`print` output stays machine-readable.
//! - `RUST_LOG` wins over `--verbose` when set.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let exit_code = match run_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
