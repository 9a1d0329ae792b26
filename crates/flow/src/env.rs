//! Environment variable access for the cascade.
//!
//! Responsibilities:
//! - Define the `Environment` accessor the resolver reads from and writes to.
//! - Provide `ProcessEnv` (the real process environment) and `InMemoryEnv`
//!   (a map that never touches global state).
//! - Provide `env_var_or_none` for reading selector-style variables.
//!
//! Does NOT handle:
//! - Parsing dotenv files (see `applier.rs`).
//! - Deciding which keys to overwrite (the applier applies the merge policy).
//!
//! Invariants:
//! - `ProcessEnv` is the only type in the workspace that mutates the process
//!   environment. Callers serialize concurrent use.
//! - Empty or whitespace-only values read through `env_var_or_none` are unset.

use std::cell::RefCell;
use std::collections::HashMap;

/// Read/write access to a set of environment variables.
///
/// Does **not** require `Send + Sync`; add the bounds at your call site if
/// you need them.
pub trait Environment {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any existing value.
    fn set_var(&self, key: &str, value: &str);

    /// Whether `key` is present, regardless of its value.
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: the resolver is single-threaded and documents that callers
        // must not read or write the environment from other threads while a
        // cascade is being applied.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    #[inline]
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability so every method takes `&self`,
/// matching `ProcessEnv`.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the map from any key/value iterator, e.g. `std::env::vars()`.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RefCell::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    /// Snapshot of every variable currently held.
    pub fn vars(&self) -> HashMap<String, String> {
        self.vars.borrow().clone()
    }
}

impl Environment for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        self.set(key, value);
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none<E: Environment + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_in_memory_env_set_get_remove() {
        let env = InMemoryEnv::new();
        env.set("APP_KEY", "value");
        assert_eq!(env.var("APP_KEY").as_deref(), Some("value"));
        assert!(env.contains("APP_KEY"));

        env.remove("APP_KEY");
        assert!(env.var("APP_KEY").is_none());
        assert!(!env.contains("APP_KEY"));
    }

    #[test]
    fn test_in_memory_env_contains_empty_value() {
        let env = InMemoryEnv::from_vars([("EMPTY", "")]);
        assert!(env.contains("EMPTY"));
        assert!(env_var_or_none(&env, "EMPTY").is_none());
    }

    #[test]
    fn test_env_var_or_none_trims() {
        let env = InMemoryEnv::from_vars([("PY_ENV", "  dev \n")]);
        assert_eq!(env_var_or_none(&env, "PY_ENV"), Some("dev".to_string()));
    }

    #[test]
    fn test_reference_delegates() {
        let env = InMemoryEnv::new();
        let by_ref = &env;
        by_ref.set_var("A", "1");
        assert_eq!(env.var("A").as_deref(), Some("1"));
    }

    #[test]
    #[serial]
    fn test_process_env_reads_and_writes() {
        let key = "_DOTENV_FLOW_TEST_PROCESS_ENV";
        temp_env::with_vars([(key, None::<&str>)], || {
            assert!(!ProcessEnv.contains(key));
            ProcessEnv.set_var(key, "written");
            assert_eq!(std::env::var(key).as_deref(), Ok("written"));
            assert_eq!(ProcessEnv.var(key).as_deref(), Some("written"));
        });
        assert!(std::env::var_os(key).is_none());
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank_process_values() {
        let key = "_DOTENV_FLOW_TEST_BLANK";
        temp_env::with_vars([(key, Some("   "))], || {
            assert!(env_var_or_none(&ProcessEnv, key).is_none());
        });
    }
}
