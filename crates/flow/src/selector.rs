//! Environment selection.
//!
//! Responsibilities:
//! - Model the three selector states (`Unspecified`, `NoEnvironment`, `Named`).
//! - Resolve a selector against an `Environment` into an optional layer name
//!   plus an optional warning.
//!
//! Does NOT handle:
//! - Building file names from the layer (see `cascade/candidates.rs`).
//!
//! Invariants:
//! - `NoEnvironment` never reads the selector variable and never warns.
//! - Blank names (explicit or read from the fallback variable) select no
//!   layer and produce exactly one `NoEnvironmentSelected` warning.
//! - A resolved name is trimmed and never contains a path separator.

use serde::Serialize;
use std::fmt;

use crate::env::{Environment, env_var_or_none};
use crate::error::FlowError;

/// Which environment-specific layer to add to the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvSelector {
    /// Read the name from the selector variable (`PY_ENV` by default).
    #[default]
    Unspecified,
    /// Defaults only, without a warning.
    NoEnvironment,
    /// Add `.env.<name>` and `.env.<name>.local`.
    Named(String),
}

impl EnvSelector {
    pub fn named(name: impl Into<String>) -> Self {
        EnvSelector::Named(name.into())
    }

    /// Resolve the selector to the layer name it designates.
    pub fn resolve<E: Environment + ?Sized>(
        &self,
        env: &E,
        selector_var: &str,
    ) -> Result<Selection, FlowError> {
        let raw = match self {
            EnvSelector::NoEnvironment => return Ok(Selection::default()),
            EnvSelector::Unspecified => env_var_or_none(env, selector_var),
            EnvSelector::Named(name) => Some(name.trim().to_string()).filter(|n| !n.is_empty()),
        };

        match raw {
            Some(name) => {
                validate_name(&name)?;
                Ok(Selection {
                    environment: Some(name),
                    warning: None,
                })
            }
            None => Ok(Selection {
                environment: None,
                warning: Some(FlowWarning::NoEnvironmentSelected {
                    selector_var: selector_var.to_string(),
                }),
            }),
        }
    }
}

impl From<&str> for EnvSelector {
    fn from(name: &str) -> Self {
        EnvSelector::Named(name.to_string())
    }
}

impl From<String> for EnvSelector {
    fn from(name: String) -> Self {
        EnvSelector::Named(name)
    }
}

impl<T: Into<String>> From<Option<T>> for EnvSelector {
    fn from(name: Option<T>) -> Self {
        match name {
            Some(name) => EnvSelector::Named(name.into()),
            None => EnvSelector::NoEnvironment,
        }
    }
}

/// Outcome of resolving an `EnvSelector`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub environment: Option<String>,
    pub warning: Option<FlowWarning>,
}

/// Non-fatal conditions reported by a cascade load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowWarning {
    /// No environment name was given or found; only defaults are used.
    NoEnvironmentSelected { selector_var: String },
}

impl fmt::Display for FlowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowWarning::NoEnvironmentSelected { selector_var } => write!(
                f,
                "no environment selected ({selector_var} is unset), using defaults only"
            ),
        }
    }
}

fn validate_name(name: &str) -> Result<(), FlowError> {
    let invalid = name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(FlowError::InvalidEnvironmentName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::InMemoryEnv;

    #[test]
    fn test_unspecified_reads_selector_var() {
        let env = InMemoryEnv::from_vars([("PY_ENV", "staging")]);
        let selection = EnvSelector::Unspecified.resolve(&env, "PY_ENV").unwrap();
        assert_eq!(selection.environment.as_deref(), Some("staging"));
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_unspecified_without_fallback_warns() {
        let env = InMemoryEnv::new();
        let selection = EnvSelector::Unspecified.resolve(&env, "PY_ENV").unwrap();
        assert!(selection.environment.is_none());
        assert_eq!(
            selection.warning,
            Some(FlowWarning::NoEnvironmentSelected {
                selector_var: "PY_ENV".to_string()
            })
        );
    }

    #[test]
    fn test_unspecified_with_blank_fallback_warns() {
        let env = InMemoryEnv::from_vars([("APP_ENV", "  ")]);
        let selection = EnvSelector::Unspecified.resolve(&env, "APP_ENV").unwrap();
        assert!(selection.environment.is_none());
        assert!(selection.warning.is_some());
    }

    #[test]
    fn test_no_environment_ignores_fallback() {
        let env = InMemoryEnv::from_vars([("PY_ENV", "production")]);
        let selection = EnvSelector::NoEnvironment.resolve(&env, "PY_ENV").unwrap();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_named_ignores_fallback() {
        let env = InMemoryEnv::from_vars([("PY_ENV", "production")]);
        let selection = EnvSelector::named(" dev ").resolve(&env, "PY_ENV").unwrap();
        assert_eq!(selection.environment.as_deref(), Some("dev"));
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_empty_name_is_no_environment_with_warning() {
        let env = InMemoryEnv::new();
        let explicit = EnvSelector::named("").resolve(&env, "PY_ENV").unwrap();
        let unset = EnvSelector::Unspecified.resolve(&env, "PY_ENV").unwrap();
        assert_eq!(explicit, unset);
    }

    #[test]
    fn test_rejects_path_like_names() {
        let env = InMemoryEnv::new();
        for name in ["..", ".", "../prod", "a/b", "a\\b"] {
            let result = EnvSelector::named(name).resolve(&env, "PY_ENV");
            assert!(
                matches!(result, Err(FlowError::InvalidEnvironmentName { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(EnvSelector::from("dev"), EnvSelector::named("dev"));
        assert_eq!(EnvSelector::from(None::<String>), EnvSelector::NoEnvironment);
        assert_eq!(
            EnvSelector::from(Some("test".to_string())),
            EnvSelector::named("test")
        );
        assert_eq!(EnvSelector::default(), EnvSelector::Unspecified);
    }

    #[test]
    fn test_warning_display_names_variable() {
        let warning = FlowWarning::NoEnvironmentSelected {
            selector_var: "PY_ENV".to_string(),
        };
        assert!(warning.to_string().contains("PY_ENV"));
        assert!(warning.to_string().contains("defaults only"));
    }
}
