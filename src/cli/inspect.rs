//! `inspect` command

use std::process::ExitCode;

use argon2_pwhash::{decode, VERSION};
use colored::Colorize;

pub fn run(hash: &str) -> anyhow::Result<ExitCode> {
    let decoded = decode(hash.trim())?;
    let params = decoded.params;

    println!("{:<12} {}", "variant:".cyan(), decoded.variant);
    println!("{:<12} {}", "version:".cyan(), VERSION);
    println!("{:<12} {} KiB", "memory:".cyan(), params.memory);
    println!("{:<12} {}", "iterations:".cyan(), params.iterations);
    println!("{:<12} {}", "parallelism:".cyan(), params.parallelism);
    println!(
        "{:<12} {} ({} bytes)",
        "salt:".cyan(),
        hex::encode(&decoded.salt),
        params.salt_length
    );
    println!("{:<12} {} bytes", "key:".cyan(), params.key_length);

    Ok(ExitCode::SUCCESS)
}
