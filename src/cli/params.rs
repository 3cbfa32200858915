//! `params` command

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use argon2_pwhash::{config, Params};
use colored::Colorize;

pub fn run(output: &Path) -> anyhow::Result<ExitCode> {
    config::save_params(output, &Params::DEFAULT)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("{} {}", "Preset written to".green(), output.display());
    Ok(ExitCode::SUCCESS)
}
