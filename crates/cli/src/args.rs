//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate global flags into an `EnvSelector` and a configured `DotenvFlow`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load any files (see `commands`).

use clap::{Parser, Subcommand};
use dotenv_flow::constants::DEFAULT_SELECTOR_VAR;
use dotenv_flow::{DotenvFlow, EnvSelector};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotenv-flow")]
#[command(about = "Load layered .env files for the selected environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Files, least to most specific:\n  .env.defaults, .env.defaults.local, .env, .env.local, .env.<ENV>, .env.<ENV>.local\n\nExamples:\n  dotenv-flow --env dev list\n  PY_ENV=test dotenv-flow print\n  dotenv-flow --env production exec -- ./server --port 8080\n"
)]
pub struct Cli {
    /// Environment name; adds .env.<ENV> and .env.<ENV>.local
    #[arg(short, long, global = true, value_name = "ENV", conflicts_with = "no_env")]
    pub env: Option<String>,

    /// Load default files only, without reading the selector variable
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Directory holding the dotenv files (disables the upward search)
    #[arg(
        short,
        long,
        global = true,
        env = "DOTENV_FLOW_BASE_PATH",
        value_name = "DIR"
    )]
    pub base_path: Option<PathBuf>,

    /// Replace variables that are already set in the environment
    #[arg(long = "override", global = true, env = "DOTENV_FLOW_OVERRIDE")]
    pub override_existing: bool,

    /// Variable holding the environment name when --env is not given
    #[arg(
        long,
        global = true,
        env = "DOTENV_FLOW_SELECTOR_VAR",
        default_value = DEFAULT_SELECTOR_VAR,
        value_name = "VAR"
    )]
    pub selector_var: String,

    /// Fail when none of the candidate files exists
    #[arg(long, global = true)]
    pub require: bool,

    /// Log every file as it is loaded
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the dotenv files the cascade applies
    List,

    /// Print every variable the cascade defines with its effective value
    Print,

    /// Apply the cascade and run a command with the resulting environment
    Exec {
        /// Program to run, followed by its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },
}

impl Cli {
    /// Selector built from `--env` / `--no-env`; neither means "read the variable".
    pub fn selector(&self) -> EnvSelector {
        if self.no_env {
            EnvSelector::NoEnvironment
        } else {
            match &self.env {
                Some(name) => EnvSelector::named(name.clone()),
                None => EnvSelector::Unspecified,
            }
        }
    }

    /// Resolver configured from the global flags.
    pub fn flow(&self) -> DotenvFlow {
        let mut flow = DotenvFlow::new()
            .with_env(self.selector())
            .with_selector_var(self.selector_var.clone())
            .override_existing(self.override_existing)
            .require_files(self.require);

        // Blank/whitespace-only values are ignored to allow the upward search
        if let Some(path) = &self.base_path
            && !path.to_string_lossy().trim().is_empty()
        {
            flow = flow.with_base_path(path.clone());
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dotenv-flow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_selector_from_flags() {
        assert_eq!(parse(&["list"]).selector(), EnvSelector::Unspecified);
        assert_eq!(parse(&["--no-env", "list"]).selector(), EnvSelector::NoEnvironment);
        assert_eq!(
            parse(&["list", "--env", "dev"]).selector(),
            EnvSelector::named("dev")
        );
    }

    #[test]
    fn test_env_conflicts_with_no_env() {
        let result = Cli::try_parse_from(["dotenv-flow", "--env", "dev", "--no-env", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exec_keeps_hyphenated_arguments() {
        let cli = parse(&["--env", "dev", "exec", "--", "server", "--port", "8080"]);
        match cli.command {
            Commands::Exec { command } => {
                assert_eq!(command, vec!["server", "--port", "8080"])
            }
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_exec_requires_a_command() {
        let result = Cli::try_parse_from(["dotenv-flow", "exec"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flow_options_from_flags() {
        let cli = parse(&["--override", "list"]);
        assert!(cli.flow().options().override_existing);
        assert!(cli.flow().options().interpolate);
    }
}
