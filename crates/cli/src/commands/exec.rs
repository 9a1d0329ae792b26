//! `exec`: run a program with the cascade applied.

use anyhow::Result;
use std::io::ErrorKind;
use std::process::Command;
use thiserror::Error;

use crate::args::Cli;

/// Failures to start the child program.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Command not found: {program}")]
    NotFound { program: String },

    #[error("Failed to run {program}: {kind}")]
    Spawn { program: String, kind: ErrorKind },
}

/// Apply the cascade, run `command`, and return the child's exit code.
pub fn run(cli: &Cli, command: &[String]) -> Result<i32> {
    let report = cli.flow().load()?;
    tracing::debug!(files = report.files.len(), "dotenv cascade applied");

    let Some((program, args)) = command.split_first() else {
        anyhow::bail!("No command given");
    };

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExecError::NotFound {
                program: program.clone(),
            },
            kind => ExecError::Spawn {
                program: program.clone(),
                kind,
            },
        })?;

    Ok(exit_code_of(status))
}

#[cfg(unix)]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    // Shell convention: 128 + signal number.
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
