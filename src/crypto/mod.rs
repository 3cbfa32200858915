//! Cryptographic primitives for argon2-pwhash
//!
//! This module provides:
//! - Argon2i/Argon2id key derivation, optionally keyed with a secret
//! - Salt generation from the OS random generator
//! - A zeroizing container for derived keys with constant-time equality

mod kdf;
mod secret_bytes;

pub use kdf::{derive_key, generate_salt};
pub use secret_bytes::SecretBytes;
