//! argon2-pwhash - Argon2 password hashing with self-describing hashes
//!
//! This crate:
//! - Hashes passwords with Argon2i or Argon2id, optionally keyed with a secret
//! - Stores everything needed to verify in one string:
//!   `$argon2id$v=19$m=65536,t=1,p=2$<salt>$<key>`
//! - Decodes that string strictly and verifies in constant time
//!
//! ```no_run
//! use argon2_pwhash::{argon2id_hash, compare_password_and_hash, Params};
//!
//! let hash = argon2id_hash(b"pa$$word", b"", &Params::DEFAULT)?;
//! assert!(compare_password_and_hash(b"pa$$word", b"", &hash)?);
//! # Ok::<(), argon2_pwhash::HashError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod params;
pub mod verify;

pub use encoding::{decode, encode, DecodedHash};
pub use error::{HashError, Result};
pub use hash::{argon2i_hash, argon2id_hash, create_hash};
pub use params::{Params, Variant, VERSION};
pub use verify::{check_hash, compare_password_and_hash, needs_rehash};
