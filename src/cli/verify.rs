//! `verify` command

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use argon2_pwhash::{check_hash, config, needs_rehash, Variant};
use colored::Colorize;
use zeroize::Zeroizing;

use super::read_password;
use crate::PasswordArgs;

pub fn run(hash: &str, preset: Option<&Path>, mut input: PasswordArgs) -> anyhow::Result<ExitCode> {
    let hash = hash.trim();
    let password = read_password(&mut input, false)?;
    let secret = Zeroizing::new(std::mem::take(&mut input.secret));

    let (matched, stored) = check_hash(password.as_bytes(), secret.as_bytes(), hash)
        .context("stored hash cannot be verified")?;

    if !matched {
        println!("{}", "no match".red().bold());
        return Ok(ExitCode::from(1));
    }
    println!("{}", "match".green().bold());

    if let Some(path) = preset {
        let target = config::load_params(path)
            .with_context(|| format!("failed to load preset {}", path.display()))?;
        if needs_rehash(hash, Variant::Argon2id, &target)? {
            println!(
                "{} hash uses m={},t={},p={}; rehash with argon2id m={},t={},p={} on next login",
                "Note:".yellow().bold(),
                stored.memory,
                stored.iterations,
                stored.parallelism,
                target.memory,
                target.iterations,
                target.parallelism,
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
