//! Argon2 cost parameters, variants and the supported version
//!
//! Parameters are plain values: nothing here validates ranges. Values the
//! derivation cannot work with are rejected when a key is derived.

use std::fmt;
use std::str::FromStr;

use argon2::{Algorithm, Version};
use serde::{Deserialize, Serialize};

use crate::error::HashError;

/// The single Argon2 version this crate reads and writes (0x13).
pub const VERSION: u32 = Version::V0x13 as u32;

/// Input parameters for Argon2.
///
/// `memory` and `iterations` control the cost of hashing. `parallelism` is
/// the number of lanes; changing it changes the derived key, so it is part
/// of the encoded hash.
///
/// `salt_length` and `key_length` are not written into the parameter segment
/// of an encoded hash. When a hash is decoded they are recovered from the
/// decoded salt and key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Memory used by the algorithm, in KiB.
    pub memory: u32,
    /// Passes over the memory.
    pub iterations: u32,
    /// Number of lanes.
    pub parallelism: u8,
    /// Random salt length in bytes.
    pub salt_length: u32,
    /// Derived key length in bytes.
    pub key_length: u32,
}

impl Params {
    /// Development preset following RFC 9106's recommendation of t=1 with as
    /// much memory as is affordable. Tune for production hardware.
    pub const DEFAULT: Params = Params {
        memory: 64 * 1024,
        iterations: 1,
        parallelism: 2,
        salt_length: 16,
        key_length: 32,
    };
}

impl Default for Params {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Argon2 variants the hash format supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Argon2i,
    Argon2id,
}

impl Variant {
    /// Tag used in the first segment of an encoded hash.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Argon2i => "argon2i",
            Variant::Argon2id => "argon2id",
        }
    }

    pub(crate) fn algorithm(self) -> Algorithm {
        match self {
            Variant::Argon2i => Algorithm::Argon2i,
            Variant::Argon2id => Algorithm::Argon2id,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argon2i" => Ok(Variant::Argon2i),
            "argon2id" => Ok(Variant::Argon2id),
            other => Err(HashError::IncompatibleVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_0x13() {
        assert_eq!(VERSION, 19);
    }

    #[test]
    fn variant_tags() {
        assert_eq!("argon2i".parse::<Variant>().unwrap(), Variant::Argon2i);
        assert_eq!("argon2id".parse::<Variant>().unwrap(), Variant::Argon2id);
        assert_eq!(Variant::Argon2id.to_string(), "argon2id");
    }

    #[test]
    fn unknown_variant_is_incompatible() {
        for tag in ["argon2d", "Argon2id", "", "argon2id "] {
            assert!(matches!(
                tag.parse::<Variant>(),
                Err(HashError::IncompatibleVariant(_))
            ));
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: Params = serde_json::from_str(r#"{"memory": 19456, "iterations": 2}"#).unwrap();

        assert_eq!(params.memory, 19456);
        assert_eq!(params.iterations, 2);
        assert_eq!(params.parallelism, Params::DEFAULT.parallelism);
        assert_eq!(params.salt_length, 16);
        assert_eq!(params.key_length, 32);
    }
}
