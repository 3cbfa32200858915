//! Password hash creation

use crate::crypto;
use crate::encoding;
use crate::error::Result;
use crate::params::{Params, Variant, VERSION};

/// Hash a password with Argon2i.
///
/// See [`create_hash`].
pub fn argon2i_hash(password: &[u8], secret: &[u8], params: &Params) -> Result<String> {
    create_hash(Variant::Argon2i, password, secret, params)
}

/// Hash a password with Argon2id.
///
/// See [`create_hash`].
pub fn argon2id_hash(password: &[u8], secret: &[u8], params: &Params) -> Result<String> {
    create_hash(Variant::Argon2id, password, secret, params)
}

/// Hash a password and return it in the encoded format, e.g.
///
/// ```text
/// $argon2id$v=19$m=65536,t=1,p=2$FmIYUI9SfLj+xHJJsM3JXw$DI8bBB2wHgOFwWVXXUSjmwRMeh/1pVVu5PDbsjoFtYE
/// ```
///
/// A fresh salt of `params.salt_length` bytes is drawn for every call, so
/// hashing the same password twice gives different strings. An empty
/// `secret` hashes without one. The same secret must be supplied again to
/// verify.
pub fn create_hash(
    variant: Variant,
    password: &[u8],
    secret: &[u8],
    params: &Params,
) -> Result<String> {
    let salt = crypto::generate_salt(params.salt_length)?;
    let key = crypto::derive_key(variant, password, secret, &salt, params)?;

    tracing::debug!(
        %variant,
        memory = params.memory,
        iterations = params.iterations,
        parallelism = params.parallelism,
        keyed = !secret.is_empty(),
        "created password hash"
    );

    Ok(encoding::encode(variant, VERSION, params, &salt, &key))
}
