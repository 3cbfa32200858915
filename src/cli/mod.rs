//! CLI command implementations

pub mod hash;
pub mod inspect;
pub mod params;
pub mod verify;

use anyhow::{bail, Context};
use argon2_pwhash::{config, Params};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use crate::{ParamArgs, PasswordArgs};

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("argon2_pwhash={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Preset file (or defaults) with command-line overrides applied
pub fn resolve_params(args: &ParamArgs) -> anyhow::Result<Params> {
    let mut params = match &args.file {
        Some(path) => config::load_params(path)
            .with_context(|| format!("failed to load preset {}", path.display()))?,
        None => Params::DEFAULT,
    };

    if let Some(memory) = args.memory {
        params.memory = memory;
    }
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }
    if let Some(parallelism) = args.parallelism {
        params.parallelism = parallelism;
    }
    if let Some(salt_len) = args.salt_len {
        params.salt_length = salt_len;
    }
    if let Some(key_len) = args.key_len {
        params.key_length = key_len;
    }

    Ok(params)
}

/// Password from the flag/environment, or prompted for.
///
/// With `confirm`, the prompt asks twice and fails if the entries differ.
pub fn read_password(input: &mut PasswordArgs, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(password) = input.password.take() {
        return Ok(Zeroizing::new(password));
    }

    let password = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if confirm {
        let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
        if *password != *again {
            bail!("passwords do not match");
        }
    }
    if password.is_empty() {
        eprintln!("{} empty password", "Warning:".yellow().bold());
    }

    Ok(password)
}
