//! Source walking shared by the architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives at crates/architecture-tests")
        .to_path_buf()
}

/// A Rust source file under `crates/`, outside this crate.
pub struct SourceFile {
    /// Path relative to the workspace root, with `/` separators.
    pub relative: String,
    pub content: String,
}

impl SourceFile {
    /// True for integration tests and in-crate test trees.
    #[allow(dead_code)]
    pub fn is_test_file(&self) -> bool {
        self.relative.contains("/tests/") || self.relative.ends_with("_tests.rs")
    }

    /// Content before the first `#[cfg(test)]`, i.e. production code.
    #[allow(dead_code)]
    pub fn non_test_content(&self) -> &str {
        match self.content.find("#[cfg(test)]") {
            Some(idx) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Every `.rs` file in the workspace crates except architecture-tests itself.
pub fn rust_sources() -> Vec<SourceFile> {
    let root = workspace_root();
    let crates_dir = root.join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| !e.path().components().any(|c| c.as_os_str() == "target"))
        .filter_map(|e| {
            let relative = e
                .path()
                .strip_prefix(&root)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            if relative.starts_with("crates/architecture-tests/") {
                return None;
            }
            let content = fs::read_to_string(e.path()).ok()?;
            Some(SourceFile { relative, content })
        })
        .collect()
}
