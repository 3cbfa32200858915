//! Password verification against stored hashes

use crate::crypto;
use crate::encoding;
use crate::error::Result;
use crate::params::{Params, Variant};

/// Check a password against a stored hash.
///
/// Returns `Ok(true)` on a match and `Ok(false)` for a wrong password. An
/// `Err` means the stored hash could not be used at all (malformed,
/// unsupported variant or version) or derivation failed; it never means the
/// password was wrong.
pub fn compare_password_and_hash(password: &[u8], secret: &[u8], hash: &str) -> Result<bool> {
    let (matched, _) = check_hash(password, secret, hash)?;
    Ok(matched)
}

/// Like [`compare_password_and_hash`], but also returns the parameters the
/// hash was created with, so callers can rehash with stronger ones.
pub fn check_hash(password: &[u8], secret: &[u8], hash: &str) -> Result<(bool, Params)> {
    let decoded = encoding::decode(hash)?;

    let candidate = crypto::derive_key(
        decoded.variant,
        password,
        secret,
        &decoded.salt,
        &decoded.params,
    )?;
    let matched = candidate.ct_eq(&decoded.key);

    tracing::debug!(
        variant = %decoded.variant,
        memory = decoded.params.memory,
        iterations = decoded.params.iterations,
        parallelism = decoded.params.parallelism,
        "verified password hash"
    );

    Ok((matched, decoded.params))
}

/// Whether a stored hash was made with a different variant or parameters
/// than `target`. Salt and key lengths count as parameters.
pub fn needs_rehash(hash: &str, variant: Variant, target: &Params) -> Result<bool> {
    let decoded = encoding::decode(hash)?;
    Ok(decoded.variant != variant || decoded.params != *target)
}
