//! `hash` command

use std::process::ExitCode;

use argon2_pwhash::{create_hash, Variant};
use zeroize::Zeroizing;

use super::{read_password, resolve_params};
use crate::{ParamArgs, PasswordArgs};

pub fn run(variant: Variant, args: &ParamArgs, mut input: PasswordArgs) -> anyhow::Result<ExitCode> {
    let params = resolve_params(args)?;
    let password = read_password(&mut input, true)?;
    let secret = Zeroizing::new(std::mem::take(&mut input.secret));

    let hash = create_hash(variant, password.as_bytes(), secret.as_bytes(), &params)?;
    println!("{}", hash);

    Ok(ExitCode::SUCCESS)
}
