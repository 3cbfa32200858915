//! Container for derived key material
//!
//! Derived keys are:
//! 1. Zeroed when dropped
//! 2. Never printed by `Debug`
//! 3. Compared in constant time

use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret bytes that are zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Zeroed buffer of `len` bytes, ready to be filled by a KDF
    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Constant-time equality against `other`.
    ///
    /// Lengths are compared first, also in constant time; content is only
    /// compared when they agree. Length is already visible in an encoded
    /// hash, so branching on it leaks nothing about the content.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        let self_len = self.0.len() as u64;
        let other_len = other.len() as u64;

        if !bool::from(self_len.ct_eq(&other_len)) {
            return false;
        }
        bool::from(self.0.as_slice().ct_eq(other))
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Deref for SecretBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Keep key material out of logs
impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBytes")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}
