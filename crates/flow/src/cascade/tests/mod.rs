//! Tests for the cascade resolver.
//!
//! Responsibilities:
//! - Test precedence across every layer, with and without override.
//! - Test selector handling end to end (warnings, fallback variable, gate).
//! - Test failure modes (bad base path, malformed files, required files).
//! - Test upward search from the current directory.
//!
//! Invariants:
//! - Tests apply cascades to `InMemoryEnv` unless they exercise the process
//!   environment or the current directory, which use `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::DotenvFlow;


/// A temporary directory holding dotenv files.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fixture = Self::new();
        for (name, content) in files {
            fixture.write(name, content);
        }
        fixture
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    /// Resolver rooted at this directory.
    pub fn flow(&self) -> DotenvFlow {
        DotenvFlow::new().with_base_path(self.path())
    }
}
