//! `list`: show which files the cascade applies.

use anyhow::Result;

use super::process_snapshot;
use crate::args::Cli;
use crate::output::{OutputFormat, format_report};

pub fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let env = process_snapshot();
    let report = cli.flow().load_into(&env)?;
    if report.disabled {
        tracing::info!("dotenv loading disabled by DOTENV_DISABLED");
    }
    print!("{}", format_report(&report, format)?);
    Ok(())
}
