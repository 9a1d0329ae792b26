//! Result of a cascade load.

use serde::Serialize;
use std::path::PathBuf;

use super::candidates::Candidate;
use crate::selector::FlowWarning;

/// A file that was found, applied, and defined at least one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub candidate: Candidate,
    /// Keys the file defines, whether or not they were written.
    pub keys: Vec<String>,
}

/// Everything a cascade load did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    /// Environment layer that was selected, if any.
    pub environment: Option<String>,
    /// Applied files, least to most specific.
    pub files: Vec<LoadedFile>,
    pub warnings: Vec<FlowWarning>,
    /// Set when `DOTENV_DISABLED` skipped the whole cascade.
    pub disabled: bool,
}

impl FlowReport {
    pub(crate) fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Paths of the applied files, least to most specific.
    pub fn paths(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect()
    }

    /// Distinct keys defined anywhere in the cascade, in file order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for key in self.files.iter().flat_map(|f| f.keys.iter()) {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }
}
