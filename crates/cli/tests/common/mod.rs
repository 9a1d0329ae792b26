//! Shared test utilities for dotenv-flow integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Provide a temp directory fixture holding dotenv files.
//!
//! Invariants / Assumptions:
//! - Commands never inherit `PY_ENV`, `DOTENV_DISABLED`, `RUST_LOG`, or any
//!   `DOTENV_FLOW_*` setting from the host.
//! - Commands run inside the fixture directory.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `dotenv-flow` command running in `dir`.
pub fn flow_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotenv-flow");
    cmd.current_dir(dir);

    // Clear potential host leakage
    cmd.env_remove("PY_ENV")
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG")
        .env_remove("DOTENV_FLOW_BASE_PATH")
        .env_remove("DOTENV_FLOW_OVERRIDE")
        .env_remove("DOTENV_FLOW_SELECTOR_VAR");

    cmd
}

/// Temp directory pre-populated with dotenv files.
pub fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// The `dev` layout used across tests.
#[allow(dead_code)]
pub fn dev_fixture() -> TempDir {
    fixture(&[
        (".env.defaults", "PUBLIC=D_PUB\n"),
        (".env", "PUBLIC=PUB\n"),
        (".env.dev", "PUBLIC=DEV_PUB\nPRIVATE=DEV_PRIV\n"),
        (".env.dev.local", "PRIVATE=DEV_PRIV_LOCAL\n"),
    ])
}
