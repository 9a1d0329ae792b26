//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `FlowError` and `ExecError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - The child's status for `exec` (forwarded unchanged).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.
//! - Exit codes 126/127 follow the shell convention for programs that cannot run.

use dotenv_flow::FlowError;

use crate::commands::exec::ExecError;

/// Structured exit codes for dotenv-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A dotenv file exists but could not be parsed.
    ///
    /// Scripts should fix the file, or set DOTENV_DISABLED=1 to skip loading.
    InvalidDotenv = 3,

    /// Filesystem error - unusable base path, unreadable file or directory.
    FileSystem = 4,

    /// `--require` was given and no candidate file exists.
    NoFilesFound = 5,

    /// The program passed to `exec` exists but could not be started.
    CommandNotExecutable = 126,

    /// The program passed to `exec` was not found.
    CommandNotFound = 127,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&FlowError> for ExitCode {
    fn from(err: &FlowError) -> Self {
        match err {
            FlowError::DotenvParse { .. } => ExitCode::InvalidDotenv,

            FlowError::DotenvIo { .. }
            | FlowError::BasePathUnavailable { .. }
            | FlowError::BasePathNotDirectory { .. }
            | FlowError::CurrentDirUnavailable { .. }
            | FlowError::FileAccess { .. } => ExitCode::FileSystem,

            FlowError::NoFilesFound { .. } => ExitCode::NoFilesFound,

            FlowError::InvalidEnvironmentName { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&ExecError> for ExitCode {
    fn from(err: &ExecError) -> Self {
        match err {
            ExecError::NotFound { .. } => ExitCode::CommandNotFound,
            ExecError::Spawn { .. } => ExitCode::CommandNotExecutable,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(flow_err) = cause.downcast_ref::<FlowError>() {
                return ExitCode::from(flow_err);
            }
            if let Some(exec_err) = cause.downcast_ref::<ExecError>() {
                return ExitCode::from(exec_err);
            }
        }

        ExitCode::GeneralError
    }
}
