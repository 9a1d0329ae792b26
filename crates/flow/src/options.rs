//! Options forwarded to the dotenv applier.

use serde::Serialize;

/// How each dotenv file is applied to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOptions {
    /// Replace values that are already present in the environment.
    ///
    /// The resolver flips its application order with this flag so the most
    /// specific file wins either way.
    pub override_existing: bool,
    /// Expand `$VAR` / `${VAR}` references inside values.
    pub interpolate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            override_existing: false,
            interpolate: true,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn with_interpolate(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }
}
