use std::path::PathBuf;
use std::process::ExitCode;

use argon2_pwhash::Variant;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

mod cli;

#[derive(Parser)]
#[command(name = "argon2-pwhash")]
#[command(version)]
#[command(about = "Hash and verify passwords with Argon2", long_about = None)]
struct Cli {
    /// Log library events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a password and print the encoded hash
    Hash {
        /// Argon2 variant
        #[arg(long, default_value = "argon2id")]
        variant: Variant,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        input: PasswordArgs,
    },

    /// Verify a password against an encoded hash
    ///
    /// Exit status: 0 on match, 1 on mismatch, 2 on error.
    Verify {
        /// Encoded hash, e.g. '$argon2id$v=19$m=65536,t=1,p=2$...'
        hash: String,

        /// Report whether the hash should be upgraded to this preset
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        #[command(flatten)]
        input: PasswordArgs,
    },

    /// Show the variant and parameters stored in an encoded hash
    Inspect {
        hash: String,
    },

    /// Write the default parameter preset to a JSON file
    Params {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

/// Parameter preset and per-field overrides
#[derive(Args)]
pub struct ParamArgs {
    /// JSON preset file (fields not set fall back to the defaults)
    #[arg(long = "params", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Memory in KiB
    #[arg(short, long)]
    pub memory: Option<u32>,

    /// Iterations over memory
    #[arg(short = 't', long)]
    pub iterations: Option<u32>,

    /// Lanes
    #[arg(short, long)]
    pub parallelism: Option<u8>,

    /// Salt length in bytes
    #[arg(long)]
    pub salt_len: Option<u32>,

    /// Key length in bytes
    #[arg(long)]
    pub key_len: Option<u32>,
}

#[derive(Args)]
pub struct PasswordArgs {
    /// Secret (pepper) mixed into the derivation
    #[arg(long, env = "ARGON2_SECRET", hide_env_values = true, default_value = "")]
    pub secret: String,

    /// Password; prompted for when absent
    #[arg(long, env = "ARGON2_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Hash {
            variant,
            params,
            input,
        } => cli::hash::run(variant, &params, input),
        Commands::Verify {
            hash,
            params,
            input,
        } => cli::verify::run(&hash, params.as_deref(), input),
        Commands::Inspect { hash } => cli::inspect::run(&hash),
        Commands::Params { output } => cli::params::run(&output),
    }
}
