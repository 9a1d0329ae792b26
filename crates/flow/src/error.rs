//! Error types for cascade loading.
//!
//! Responsibilities:
//! - Define error variants for every fatal failure of a cascade load.
//! - Report dotenv syntax and read failures without carrying file contents.
//!
//! Does NOT handle:
//! - Missing candidate files (those are skipped, never reported as errors).
//! - The "no environment selected" condition (a warning, see `FlowWarning`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, names, kinds).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or applying a cascade.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid environment name '{name}': must not be '.', '..', or contain path separators")]
    InvalidEnvironmentName { name: String },

    #[error("Base path {path} is not accessible: {kind}")]
    BasePathUnavailable { path: PathBuf, kind: ErrorKind },

    #[error("Base path {path} is not a directory")]
    BasePathNotDirectory { path: PathBuf },

    #[error("Unable to determine the current directory: {kind}")]
    CurrentDirUnavailable { kind: ErrorKind },

    #[error("Failed to check candidate file {path}: {kind}")]
    FileAccess { path: PathBuf, kind: ErrorKind },

    /// Failed to parse a dotenv file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the line number of the binding that
    /// failed, NOT its content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file {path} at line {line}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { path: PathBuf, line: usize },

    /// Failed to read a dotenv file due to an I/O error.
    #[error("Failed to read .env file {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    #[error("No dotenv files found (searched for: {searched})")]
    NoFilesFound { searched: String },
}
