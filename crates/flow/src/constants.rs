//! Centralized constants for the dotenv cascade.
//!
//! File names, suffixes, and environment variable names shared by the
//! resolver, the CLI, and the tests.

// =============================================================================
// Candidate File Names
// =============================================================================

/// Generic defaults, the least specific layer.
pub const DEFAULTS_FILE: &str = ".env.defaults";

/// Base file shared by every environment.
pub const BASE_FILE: &str = ".env";

/// Suffix appended to a public file name to get its private variant.
pub const LOCAL_SUFFIX: &str = ".local";

// =============================================================================
// Environment Variables
// =============================================================================

/// Variable read for the environment name when no selector is given.
pub const DEFAULT_SELECTOR_VAR: &str = "PY_ENV";

/// When set to `1` or `true`, the cascade is skipped entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
