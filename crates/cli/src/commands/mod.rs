//! Command implementations.
//!
//! Responsibilities:
//! - `list`/`print`: resolve the cascade against a copy of the process
//!   environment and report the outcome.
//! - `exec`: apply the cascade to the process environment and run a program.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Exit code mapping (see `error`).

pub mod exec;
pub mod list;
pub mod print;

use dotenv_flow::InMemoryEnv;
use std::ffi::OsString;

/// Copy of the process environment.
///
/// Entries that are not unicode are kept with lossy text so the cascade
/// still sees them as set, as it would in the real process environment.
pub(crate) fn process_snapshot() -> InMemoryEnv {
    snapshot_of(std::env::vars_os())
}

fn snapshot_of(vars: impl IntoIterator<Item = (OsString, OsString)>) -> InMemoryEnv {
    InMemoryEnv::from_vars(vars.into_iter().map(|(key, value)| {
        (
            key.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotenv_flow::Environment;

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_values_stay_set() {
        use std::os::unix::ffi::OsStringExt;

        let env = snapshot_of([
            (OsString::from("PLAIN"), OsString::from("value")),
            (OsString::from("BINARY"), OsString::from_vec(vec![b'a', 0xff])),
        ]);

        assert_eq!(env.var("PLAIN").as_deref(), Some("value"));
        assert!(env.contains("BINARY"));
    }
}
