//! Candidate file names and their precedence.
//!
//! Responsibilities:
//! - Build the logical name list for an optional environment layer.
//! - Expand each name into its public and local candidates, ranked from
//!   least to most specific.
//! - Derive the application order for a merge policy.
//!
//! Invariants:
//! - `candidates()` is ordered least to most specific:
//!   `.env.defaults`, `.env.defaults.local`, `.env`, `.env.local`,
//!   `.env.<n>`, `.env.<n>.local`.
//! - File names are unique. When an environment name repeats a base file
//!   name (`local`, `defaults`), only the most specific occurrence is kept.
//! - Without override the most specific file is applied first (first writer
//!   wins); with override it is applied last (last writer wins).

use serde::Serialize;

use crate::constants::{BASE_FILE, DEFAULTS_FILE, LOCAL_SUFFIX};

/// Specificity level a candidate belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layer", content = "name", rename_all = "snake_case")]
pub enum Layer {
    Defaults,
    Base,
    Environment(String),
}

/// Public files are committed; local ones are private overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Local,
}

/// One file name the cascade looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub file_name: String,
    pub layer: Layer,
    pub visibility: Visibility,
}

impl Candidate {
    fn new(layer: Layer, visibility: Visibility) -> Self {
        let public = match &layer {
            Layer::Defaults => DEFAULTS_FILE.to_string(),
            Layer::Base => BASE_FILE.to_string(),
            Layer::Environment(name) => format!("{BASE_FILE}.{name}"),
        };
        let file_name = match visibility {
            Visibility::Public => public,
            Visibility::Local => format!("{public}{LOCAL_SUFFIX}"),
        };
        Self {
            file_name,
            layer,
            visibility,
        }
    }
}

/// Logical names, without the local variants.
pub fn candidate_names(environment: Option<&str>) -> Vec<String> {
    let mut names = vec![DEFAULTS_FILE.to_string(), BASE_FILE.to_string()];
    if let Some(name) = environment {
        let file_name = format!("{BASE_FILE}.{name}");
        if !names.contains(&file_name) {
            names.push(file_name);
        }
    }
    names
}

/// Every candidate, least specific first.
pub fn candidates(environment: Option<&str>) -> Vec<Candidate> {
    let mut layers = vec![Layer::Defaults, Layer::Base];
    if let Some(name) = environment {
        layers.push(Layer::Environment(name.to_string()));
    }

    let ranked = layers.into_iter().flat_map(|layer| {
        [
            Candidate::new(layer.clone(), Visibility::Public),
            Candidate::new(layer, Visibility::Local),
        ]
    });

    let mut unique: Vec<Candidate> = Vec::with_capacity(6);
    for candidate in ranked.rev() {
        if !unique.iter().any(|c| c.file_name == candidate.file_name) {
            unique.push(candidate);
        }
    }
    unique.reverse();
    unique
}

/// Order in which candidates must be applied so the most specific wins.
pub fn application_order(environment: Option<&str>, override_existing: bool) -> Vec<Candidate> {
    let mut order = candidates(environment);
    if !override_existing {
        order.reverse();
    }
    order
}
