//! `print`: show the effective value of every variable the cascade defines.

use anyhow::Result;
use dotenv_flow::Environment;

use super::process_snapshot;
use crate::args::Cli;
use crate::output::{OutputFormat, format_vars};

pub fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let env = process_snapshot();
    let report = cli.flow().load_into(&env)?;

    let vars: Vec<(String, String)> = report
        .keys()
        .into_iter()
        .filter_map(|key| env.var(key).map(|value| (key.to_string(), value)))
        .collect();

    print!("{}", format_vars(&vars, format)?);
    Ok(())
}
