//! Purpose: Keep test fixtures on disk self-cleaning.
//!
//! Dotenv fixtures are written to real directories. They must live in
//! `tempfile::TempDir` so a panicking test never leaves `.env` files behind
//! where a later upward search could pick them up.
//!
//! Non-scope: This test does not verify runtime behavior; files are analyzed
//! statically.
//!
//! Invariants:
//! - No `std::env::temp_dir()` in files that contain tests.
//! - No hardcoded `/tmp` paths in files that contain tests.
//! - `TempDir` values are bound to a name, never to `_`.

mod common;

fn has_tests(content: &str) -> bool {
    content.contains("#[test]") || content.contains("proptest!")
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for file in common::rust_sources() {
        if !has_tests(&file.content) {
            continue;
        }

        if file.content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{}: uses std::env::temp_dir() - prefer tempfile::TempDir for RAII cleanup",
                file.relative
            ));
        }

        if file.content.contains("\"/tmp") {
            violations.push(format!(
                "{}: contains hardcoded /tmp path - prefer tempfile crate",
                file.relative
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdir_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for file in common::rust_sources() {
        if !has_tests(&file.content) {
            continue;
        }

        for (i, line) in file.content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = TempDir::new")
                || trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = fixture(")
            {
                violations.push(format!(
                    "{}:{}: temp directory bound to `_` is deleted immediately",
                    file.relative,
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found temp directories not properly retained:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_cli_tests_are_hermetic() {
    let mut violations: Vec<String> = Vec::new();

    for file in common::rust_sources() {
        if !file.relative.starts_with("crates/cli/tests/") {
            continue;
        }
        if file.content.contains("cargo_bin_cmd!") && file.relative != "crates/cli/tests/common/mod.rs"
        {
            violations.push(format!(
                "{}: builds the CLI command directly - use common::flow_cmd",
                file.relative
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "CLI tests must inherit no selector or dotenv settings from the host:\n{}",
        violations.join("\n")
    );
}
