//! Output formatting for `list` and `print`.
//!
//! Responsibilities:
//! - Render a `FlowReport` or a variable listing as text or JSON.
//!
//! Invariants:
//! - Text output for `print` is valid dotenv syntax; values that need it are
//!   double-quoted with `\`, `"`, `$` and newlines escaped.

use anyhow::Result;
use dotenv_flow::FlowReport;
use serde_json::{Map, Value};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Applied files, one path per line, or the whole report as JSON.
pub fn format_report(report: &FlowReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .paths()
            .iter()
            .map(|p| format!("{p}\n"))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

/// `KEY=VALUE` lines, or a JSON object.
pub fn format_vars(vars: &[(String, String)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(vars
            .iter()
            .map(|(key, value)| format!("{key}={}\n", quote_value(value)))
            .collect()),
        OutputFormat::Json => {
            let object: Map<String, Value> = vars
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&Value::Object(object))?
            ))
        }
    }
}

fn quote_value(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_-./:@+,=%".contains(c));
    if plain {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
