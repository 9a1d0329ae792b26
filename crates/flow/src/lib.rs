//! Layered `.env` loading selected by environment name.
//!
//! Generic defaults come first, environment-specific files override them, and
//! private `*.local` files override their committed counterpart at every layer:
//!
//! | Rank | File | Purpose |
//! |------|------|---------|
//! | 1 | `.env.defaults` | committed defaults |
//! | 2 | `.env.defaults.local` | private defaults |
//! | 3 | `.env` | committed base |
//! | 4 | `.env.local` | private base |
//! | 5 | `.env.<name>` | committed environment layer |
//! | 6 | `.env.<name>.local` | private environment layer |
//!
//! Higher ranks win. Variables already set in the process are kept unless
//! `override_existing` is enabled.
//!
//! ```no_run
//! use dotenv_flow::{EnvSelector, LoadOptions, dotenv_flow};
//!
//! # fn main() -> Result<(), dotenv_flow::FlowError> {
//! // Reads PY_ENV to pick the environment layer.
//! let loaded = dotenv_flow(EnvSelector::Unspecified, None, LoadOptions::default())?;
//! for path in loaded {
//!     println!("loaded {path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod applier;
pub mod cascade;
pub mod constants;
pub mod env;
mod error;
pub mod finder;
mod options;
mod parser;
pub mod selector;

pub use applier::{ApplyDotenv, DotenvApplier};
pub use cascade::{Candidate, DotenvFlow, FlowReport, Layer, LoadedFile, Visibility, dotenv_flow};
pub use env::{Environment, InMemoryEnv, ProcessEnv, env_var_or_none};
pub use error::FlowError;
pub use finder::{FindFile, FsFinder, SearchMode};
pub use options::LoadOptions;
pub use selector::{EnvSelector, FlowWarning, Selection};
