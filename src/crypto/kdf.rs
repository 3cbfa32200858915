//! Argon2 key derivation and salt generation
//!
//! Thin adapter over the `argon2` crate. The optional secret is passed as
//! the Argon2 secret key `K` (a pepper); an empty secret means none.

use argon2::{Argon2, Version};
use rand::rngs::OsRng;
use rand::RngCore;

use super::SecretBytes;
use crate::error::{HashError, Result};
use crate::params::{Params, Variant};

/// Fill a fresh salt of `len` bytes from the OS random generator.
///
/// Failure is returned as-is; an unavailable entropy source is not retried.
pub fn generate_salt(len: u32) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len as usize];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| HashError::Entropy(e.to_string()))?;
    Ok(salt)
}

/// Derive `params.key_length` bytes from a password with the given variant.
///
/// `salt_length` in `params` is ignored: the salt slice is used as given.
/// Ranges Argon2 cannot work with (salt under 8 bytes, memory below
/// 8 * parallelism, zero iterations...) surface as [`HashError::Derivation`].
pub fn derive_key(
    variant: Variant,
    password: &[u8],
    secret: &[u8],
    salt: &[u8],
    params: &Params,
) -> Result<SecretBytes> {
    let argon2_params = argon2::Params::new(
        params.memory,
        params.iterations,
        u32::from(params.parallelism),
        Some(params.key_length as usize),
    )
    .map_err(|e| HashError::Derivation(format!("invalid parameters: {}", e)))?;

    let argon2 = if secret.is_empty() {
        Argon2::new(variant.algorithm(), Version::V0x13, argon2_params)
    } else {
        Argon2::new_with_secret(secret, variant.algorithm(), Version::V0x13, argon2_params)
            .map_err(|e| HashError::Derivation(format!("invalid secret: {}", e)))?
    };

    let mut key = SecretBytes::zeroed(params.key_length as usize);
    argon2
        .hash_password_into(password, salt, key.as_mut_slice())
        .map_err(|e| HashError::Derivation(e.to_string()))?;

    Ok(key)
}
