//! Locating candidate files on disk.
//!
//! Responsibilities:
//! - Define the `FindFile` seam and the `SearchMode` it honors.
//! - Provide `FsFinder`, the filesystem implementation.
//!
//! Does NOT handle:
//! - Validating the base path itself (the resolver does that once per load).
//!
//! Invariants:
//! - Returned paths are absolute whenever the search root is absolute.
//! - A directory carrying a candidate's name is never returned.
//! - `NotFound` and `NotADirectory` mean "absent"; other I/O errors are fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FlowError;

/// Where to look for a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Check the directory and each of its ancestors, nearest first.
    Upward(PathBuf),
    /// Check only the direct child of this directory.
    Exact(PathBuf),
}

impl SearchMode {
    /// Directory the search starts from.
    pub fn root(&self) -> &Path {
        match self {
            SearchMode::Upward(root) | SearchMode::Exact(root) => root,
        }
    }
}

/// Resolve a candidate file name to a path.
pub trait FindFile {
    fn find(&self, name: &str, mode: &SearchMode) -> Result<Option<PathBuf>, FlowError>;
}

/// Zero-sized type, searches the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFinder;

impl FindFile for FsFinder {
    fn find(&self, name: &str, mode: &SearchMode) -> Result<Option<PathBuf>, FlowError> {
        match mode {
            SearchMode::Exact(base) => regular_file(&base.join(name)),
            SearchMode::Upward(root) => {
                for dir in root.ancestors() {
                    if let Some(path) = regular_file(&dir.join(name))? {
                        return Ok(Some(path));
                    }
                }
                Ok(None)
            }
        }
    }
}

fn regular_file(path: &Path) -> Result<Option<PathBuf>, FlowError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(path.to_path_buf())),
        Ok(_) => Ok(None),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(FlowError::FileAccess {
            path: path.to_path_buf(),
            kind: e.kind(),
        }),
    }
}
