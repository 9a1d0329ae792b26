//! Dotenv cascade resolution.
//!
//! Responsibilities:
//! - Compute the ordered candidate list for an environment selection.
//! - Resolve candidates to files and apply them so the most specific value wins.
//! - Report exactly which files were applied.
//!
//! Does NOT handle:
//! - The dotenv syntax (see `applier.rs`).
//! - Reading or writing variables directly (see `env.rs`).
//!
//! Invariants / Assumptions:
//! - Precedence, least to most specific: `.env.defaults`, `.env.defaults.local`,
//!   `.env`, `.env.local`, `.env.<name>`, `.env.<name>.local`.
//! - Missing files are skipped silently; unreadable or malformed ones abort.

mod candidates;
mod report;
mod resolver;

pub use candidates::{Candidate, Layer, Visibility, application_order, candidate_names, candidates};
pub use report::{FlowReport, LoadedFile};
pub use resolver::{DotenvFlow, dotenv_flow};

#[cfg(test)]
mod tests;
