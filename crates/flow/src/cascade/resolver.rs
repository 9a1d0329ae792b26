//! Cascade resolver implementation.
//!
//! Responsibilities:
//! - Provide the builder-pattern `DotenvFlow` and the `dotenv_flow` shortcut.
//! - Normalize the selector, pick the search mode, and drive the finder and
//!   applier over the candidates in precedence-safe order.
//!
//! Does NOT handle:
//! - Parsing dotenv files (delegated to an `ApplyDotenv`).
//! - Filesystem lookups (delegated to a `FindFile`).
//!
//! Invariants / Assumptions:
//! - The most specific file present wins for every key, with or without
//!   `override_existing`.
//! - A path is applied at most once per load.
//! - Applier errors abort the load; files applied before the failure keep
//!   their effect.
//! - The `DOTENV_DISABLED` variable is checked before anything is read from disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::candidates::{application_order, candidate_names};
use super::report::{FlowReport, LoadedFile};
use crate::applier::{ApplyDotenv, DotenvApplier};
use crate::constants::{DEFAULT_SELECTOR_VAR, DOTENV_DISABLED_VAR};
use crate::env::{Environment, ProcessEnv};
use crate::error::FlowError;
use crate::finder::{FindFile, FsFinder, SearchMode};
use crate::options::LoadOptions;
use crate::selector::EnvSelector;

/// Load the cascade into the process environment.
///
/// Returns the applied file paths, least to most specific. Pass
/// `EnvSelector::Unspecified` to read `PY_ENV`, `EnvSelector::NoEnvironment`
/// for defaults only, or a name.
///
/// # Errors
///
/// Returns an error if the base path is unusable, the environment name is
/// invalid, or a candidate file cannot be read or parsed. Missing files are
/// skipped.
pub fn dotenv_flow(
    env: impl Into<EnvSelector>,
    base_path: Option<&Path>,
    options: LoadOptions,
) -> Result<Vec<String>, FlowError> {
    let mut flow = DotenvFlow::new().with_env(env).with_options(options);
    if let Some(base) = base_path {
        flow = flow.with_base_path(base);
    }
    Ok(flow.load()?.paths())
}

/// Resolves and applies a dotenv cascade.
#[derive(Debug, Clone)]
pub struct DotenvFlow<F = FsFinder, A = DotenvApplier> {
    selector: EnvSelector,
    base_path: Option<PathBuf>,
    search_root: Option<PathBuf>,
    options: LoadOptions,
    selector_var: String,
    require_files: bool,
    finder: F,
    applier: A,
}

impl Default for DotenvFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DotenvFlow {
    /// Create a resolver using the filesystem and `DotenvApplier`.
    pub fn new() -> Self {
        Self {
            selector: EnvSelector::Unspecified,
            base_path: None,
            search_root: None,
            options: LoadOptions::default(),
            selector_var: DEFAULT_SELECTOR_VAR.to_string(),
            require_files: false,
            finder: FsFinder,
            applier: DotenvApplier,
        }
    }
}

impl<F: FindFile, A: ApplyDotenv> DotenvFlow<F, A> {
    /// Select the environment layer.
    pub fn with_env(mut self, env: impl Into<EnvSelector>) -> Self {
        self.selector = env.into();
        self
    }

    /// Look only in this directory instead of searching upward.
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Start the upward search here instead of the current directory.
    ///
    /// Ignored when a base path is set.
    pub fn search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_root = Some(dir.into());
        self
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.options.override_existing = override_existing;
        self
    }

    pub fn interpolate(mut self, interpolate: bool) -> Self {
        self.options.interpolate = interpolate;
        self
    }

    /// Variable read when the selector is `Unspecified`.
    pub fn with_selector_var(mut self, var: impl Into<String>) -> Self {
        self.selector_var = var.into();
        self
    }

    /// Fail with `NoFilesFound` when no candidate exists at all.
    pub fn require_files(mut self, require: bool) -> Self {
        self.require_files = require;
        self
    }

    pub fn with_finder<F2: FindFile>(self, finder: F2) -> DotenvFlow<F2, A> {
        DotenvFlow {
            selector: self.selector,
            base_path: self.base_path,
            search_root: self.search_root,
            options: self.options,
            selector_var: self.selector_var,
            require_files: self.require_files,
            finder,
            applier: self.applier,
        }
    }

    pub fn with_applier<A2: ApplyDotenv>(self, applier: A2) -> DotenvFlow<F, A2> {
        DotenvFlow {
            selector: self.selector,
            base_path: self.base_path,
            search_root: self.search_root,
            options: self.options,
            selector_var: self.selector_var,
            require_files: self.require_files,
            finder: self.finder,
            applier,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Apply the cascade to the process environment.
    pub fn load(&self) -> Result<FlowReport, FlowError> {
        self.load_into(&ProcessEnv)
    }

    /// Apply the cascade to `env`.
    pub fn load_into<E: Environment + ?Sized>(&self, env: &E) -> Result<FlowReport, FlowError> {
        if dotenv_disabled(env) {
            tracing::debug!("{} is set, skipping dotenv cascade", DOTENV_DISABLED_VAR);
            return Ok(FlowReport::disabled());
        }

        let selection = self.selector.resolve(env, &self.selector_var)?;
        let environment = selection.environment.as_deref();
        tracing::debug!(
            selector_var = %self.selector_var,
            environment = ?environment,
            "resolved dotenv environment"
        );

        let mut report = FlowReport {
            environment: selection.environment.clone(),
            ..FlowReport::default()
        };
        if let Some(warning) = selection.warning {
            tracing::warn!("{}", warning);
            report.warnings.push(warning);
        }

        let mode = self.search_mode()?;
        tracing::debug!(
            root = %mode.root().display(),
            upward = matches!(mode, SearchMode::Upward(_)),
            "searching for dotenv files"
        );
        let order = application_order(environment, self.options.override_existing);
        let count = order.len();

        let mut visited: Vec<PathBuf> = Vec::with_capacity(count);
        let mut loaded: Vec<(usize, LoadedFile)> = Vec::with_capacity(count);
        for (position, candidate) in order.into_iter().enumerate() {
            let Some(path) = self.finder.find(&candidate.file_name, &mode)? else {
                tracing::debug!(file = %candidate.file_name, "dotenv candidate not found");
                continue;
            };
            if visited.contains(&path) {
                continue;
            }
            visited.push(path.clone());

            tracing::info!(path = %path.display(), "loading dotenv file");
            let keys = self.applier.apply(&path, &self.options, env)?;
            if keys.is_empty() {
                tracing::debug!(path = %path.display(), "dotenv file defines no variables");
                continue;
            }

            // Rank from least (0) to most specific.
            let rank = if self.options.override_existing {
                position
            } else {
                count - 1 - position
            };
            loaded.push((
                rank,
                LoadedFile {
                    path,
                    candidate,
                    keys,
                },
            ));
        }

        if self.require_files && visited.is_empty() {
            return Err(FlowError::NoFilesFound {
                searched: candidate_names(environment).join(", "),
            });
        }

        loaded.sort_by_key(|(rank, _)| *rank);
        report.files = loaded.into_iter().map(|(_, file)| file).collect();
        Ok(report)
    }

    fn search_mode(&self) -> Result<SearchMode, FlowError> {
        if let Some(base) = &self.base_path {
            let unavailable = |e: std::io::Error| FlowError::BasePathUnavailable {
                path: base.clone(),
                kind: e.kind(),
            };
            let base = std::path::absolute(base).map_err(unavailable)?;
            let meta = fs::metadata(&base).map_err(unavailable)?;
            if !meta.is_dir() {
                return Err(FlowError::BasePathNotDirectory { path: base });
            }
            return Ok(SearchMode::Exact(base));
        }

        let root = match &self.search_root {
            Some(dir) => std::path::absolute(dir),
            None => std::env::current_dir(),
        }
        .map_err(|e| FlowError::CurrentDirUnavailable { kind: e.kind() })?;
        Ok(SearchMode::Upward(root))
    }
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled<E: Environment + ?Sized>(env: &E) -> bool {
    matches!(
        env.var(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}
