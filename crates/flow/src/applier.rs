//! Applying a single dotenv file to an environment.
//!
//! Responsibilities:
//! - Define the `ApplyDotenv` seam used by the resolver.
//! - Provide `DotenvApplier`, which resolves `$NAME` references against the
//!   environment it writes into.
//!
//! Does NOT handle:
//! - Choosing which files to apply or in which order (see `cascade/`).
//! - The dotenv syntax itself (see `parser.rs`).
//!
//! Invariants:
//! - A file is parsed completely before any of its keys is written, so a
//!   syntax error never leaves half of a file applied.
//! - Existing keys are kept unless `override_existing` is set. Within one
//!   file that means the first occurrence of a key wins, or the last one
//!   when overriding.
//! - References never read the process environment unless it is the target.

use std::fs;
use std::path::Path;

use crate::env::Environment;
use crate::error::FlowError;
use crate::options::LoadOptions;
use crate::parser::{self, Segment};

/// Parse a dotenv file and write its variables into an environment.
pub trait ApplyDotenv {
    /// Apply `path` to `env`, returning the keys the file defines in first
    /// occurrence order. An empty vector means the file defined nothing.
    fn apply<E: Environment + ?Sized>(
        &self,
        path: &Path,
        options: &LoadOptions,
        env: &E,
    ) -> Result<Vec<String>, FlowError>;
}

/// Zero-sized type, reads files from disk.
///
/// With `interpolate`, `$NAME` and `${NAME}` are replaced by the value the
/// target environment holds, or by the value an earlier line of the same
/// file defined. Without override the environment is consulted first, so a
/// reference sees the value that is actually in effect. Unknown names
/// expand to an empty string. Without `interpolate`, values are stored as
/// written.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvApplier;

impl ApplyDotenv for DotenvApplier {
    fn apply<E: Environment + ?Sized>(
        &self,
        path: &Path,
        options: &LoadOptions,
        env: &E,
    ) -> Result<Vec<String>, FlowError> {
        let content = fs::read_to_string(path).map_err(|e| FlowError::DotenvIo {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        let bindings = parser::parse(&content).map_err(|e| FlowError::DotenvParse {
            path: path.to_path_buf(),
            line: e.line,
        })?;

        // Values this file defines, in first occurrence order.
        let mut defined: Vec<(String, String)> = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let value = render(&binding.value, options, env, &defined);
            if options.override_existing || !env.contains(&binding.key) {
                env.set_var(&binding.key, &value);
            }
            match defined.iter_mut().find(|(key, _)| *key == binding.key) {
                Some(entry) if options.override_existing => entry.1 = value,
                Some(_) => {}
                None => defined.push((binding.key, value)),
            }
        }

        tracing::debug!(path = %path.display(), defined = defined.len(), "applied dotenv file");
        Ok(defined.into_iter().map(|(key, _)| key).collect())
    }
}

fn render<E: Environment + ?Sized>(
    segments: &[Segment],
    options: &LoadOptions,
    env: &E,
    defined: &[(String, String)],
) -> String {
    let mut value = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => value.push_str(text),
            Segment::Reference { raw, .. } if !options.interpolate => value.push_str(raw),
            Segment::Reference { name, .. } => {
                let from_file = || {
                    defined
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, v)| v.clone())
                };
                let resolved = if options.override_existing {
                    from_file().or_else(|| env.var(name))
                } else {
                    env.var(name).or_else(from_file)
                };
                value.push_str(resolved.as_deref().unwrap_or_default());
            }
        }
    }
    value
}
