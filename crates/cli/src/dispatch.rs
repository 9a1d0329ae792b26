//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Parse the output format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).
//!
//! Invariants:
//! - The returned code is the process exit code: 0 for `list`/`print`, the
//!   child's status for `exec`.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;
use crate::output::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: &Cli) -> Result<i32> {
    let format = OutputFormat::from_str(&cli.output)?;

    match &cli.command {
        Commands::List => {
            commands::list::run(cli, format)?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Print => {
            commands::print::run(cli, format)?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Exec { command } => commands::exec::run(cli, command),
    }
}
