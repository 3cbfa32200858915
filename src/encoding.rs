//! Encoded hash format
//!
//! ```text
//! $<variant>$v=<version>$m=<memory>,t=<iterations>,p=<parallelism>$<salt>$<key>
//! ```
//!
//! Salt and key are unpadded standard base64. This is the format written by
//! the Argon2 reference C implementation, so hashes are portable between
//! implementations. Decoding is strict: a given (variant, params, salt, key)
//! has exactly one accepted text form.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;

use crate::error::{HashError, Result};
use crate::params::{Params, Variant, VERSION};

const DELIMITER: char = '$';
const SEGMENTS: usize = 6;

/// Components recovered from an encoded hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHash {
    pub variant: Variant,
    /// `salt_length` and `key_length` are the decoded byte counts.
    pub params: Params,
    pub salt: Vec<u8>,
    pub key: Vec<u8>,
}

/// Serialize a hash into its text form.
pub fn encode(variant: Variant, version: u32, params: &Params, salt: &[u8], key: &[u8]) -> String {
    format!(
        "${}$v={}$m={},t={},p={}${}${}",
        variant,
        version,
        params.memory,
        params.iterations,
        params.parallelism,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(key),
    )
}

/// Parse and validate an encoded hash.
///
/// # Errors
/// - [`HashError::InvalidFormat`] unless the hash starts with `$` and has exactly six segments
/// - [`HashError::IncompatibleVariant`] for any tag other than `argon2i`/`argon2id`
/// - [`HashError::MalformedSegment`] if the version or parameter segment does not parse
/// - [`HashError::IncompatibleVersion`] if the version parses but is not [`VERSION`]
/// - [`HashError::Encoding`] if salt or key is not strict unpadded base64
pub fn decode(hash: &str) -> Result<DecodedHash> {
    parse(hash).map_err(|e| {
        tracing::debug!(error = %e, "rejected encoded hash");
        e
    })
}

fn parse(hash: &str) -> Result<DecodedHash> {
    let segments: Vec<&str> = hash.split(DELIMITER).collect();
    if segments.len() != SEGMENTS || !segments[0].is_empty() {
        return Err(HashError::InvalidFormat);
    }

    let variant: Variant = segments[1].parse()?;

    let version = parse_version(segments[2])?;
    if version != VERSION {
        return Err(HashError::IncompatibleVersion(version));
    }

    let mut params = parse_costs(segments[3])?;

    let salt = decode_base64("salt", segments[4])?;
    params.salt_length = byte_len(&salt)?;

    let key = decode_base64("key", segments[5])?;
    params.key_length = byte_len(&key)?;

    Ok(DecodedHash {
        variant,
        params,
        salt,
        key,
    })
}

fn parse_version(segment: &str) -> Result<u32> {
    let malformed = || HashError::MalformedSegment {
        segment: "version",
        value: segment.to_string(),
    };

    let digits = segment.strip_prefix("v=").ok_or_else(malformed)?;
    parse_decimal(digits).ok_or_else(malformed)
}

/// `m=<memory>,t=<iterations>,p=<parallelism>`, in exactly that order.
fn parse_costs(segment: &str) -> Result<Params> {
    let malformed = || HashError::MalformedSegment {
        segment: "parameter",
        value: segment.to_string(),
    };

    let mut fields = segment.split(',');

    let memory = field(&mut fields, "m=").and_then(parse_decimal).ok_or_else(malformed)?;
    let iterations = field(&mut fields, "t=").and_then(parse_decimal).ok_or_else(malformed)?;
    let parallelism = field(&mut fields, "p=").and_then(parse_decimal).ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Params {
        memory,
        iterations,
        parallelism,
        salt_length: 0,
        key_length: 0,
    })
}

fn field<'a>(fields: &mut std::str::Split<'a, char>, prefix: &str) -> Option<&'a str> {
    fields.next()?.strip_prefix(prefix)
}

/// Plain ASCII decimal: no sign, no whitespace, must fit in `T`.
fn parse_decimal<T: FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn decode_base64(segment: &'static str, value: &str) -> Result<Vec<u8>> {
    STANDARD_NO_PAD
        .decode(value)
        .map_err(|source| HashError::Encoding { segment, source })
}

fn byte_len(bytes: &[u8]) -> Result<u32> {
    u32::try_from(bytes.len()).map_err(|_| HashError::InvalidFormat)
}

impl FromStr for DecodedHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl fmt::Display for DecodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(
            self.variant,
            VERSION,
            &self.params,
            &self.salt,
            &self.key,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &str = "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE";

    fn replace_segment(hash: &str, index: usize, value: &str) -> String {
        let mut segments: Vec<&str> = hash.split('$').collect();
        segments[index] = value;
        segments.join("$")
    }

    #[test]
    fn encode_layout() {
        let salt = [0x11u8; 16];
        let key = [0x22u8; 32];
        let hash = encode(Variant::Argon2id, VERSION, &Params::DEFAULT, &salt, &key);

        let segments: Vec<&str> = hash.split('$').collect();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0], "");
        assert_eq!(segments[1], "argon2id");
        assert_eq!(segments[2], "v=19");
        assert_eq!(segments[3], "m=65536,t=1,p=2");
        assert_eq!(STANDARD_NO_PAD.decode(segments[4]).unwrap().len(), 16);
        assert_eq!(STANDARD_NO_PAD.decode(segments[5]).unwrap().len(), 32);
        assert!(!segments[4].ends_with('=') && !segments[5].ends_with('='));
    }

    #[test]
    fn decode_roundtrip_preserves_everything() {
        let params = Params {
            memory: 4096,
            iterations: 3,
            parallelism: 4,
            salt_length: 8,
            key_length: 20,
        };
        let salt: Vec<u8> = (0u8..8).collect();
        let key: Vec<u8> = (100u8..120).collect();

        let decoded = decode(&encode(Variant::Argon2i, VERSION, &params, &salt, &key)).unwrap();

        assert_eq!(decoded.variant, Variant::Argon2i);
        assert_eq!(decoded.params, params);
        assert_eq!(decoded.salt, salt);
        assert_eq!(decoded.key, key);
    }

    #[test]
    fn lengths_come_from_decoded_bytes() {
        let decoded = decode(KNOWN).unwrap();
        assert_eq!(decoded.params.salt_length, 16);
        assert_eq!(decoded.params.key_length, 32);
        assert_eq!(decoded.params, Params::DEFAULT);
    }

    #[test]
    fn display_reproduces_input() {
        let decoded: DecodedHash = KNOWN.parse().unwrap();
        assert_eq!(decoded.to_string(), KNOWN);
    }

    #[test]
    fn wrong_segment_count() {
        let extra = format!("{KNOWN}$extra");
        for hash in [
            "",
            "argon2id",
            "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw",
            extra.as_str(),
        ] {
            assert!(matches!(decode(hash), Err(HashError::InvalidFormat)), "{hash}");
        }
    }

    #[test]
    fn text_before_leading_delimiter_is_rejected() {
        for prefix in ["junk", " ", "argon2id"] {
            let hash = format!("{prefix}{KNOWN}");
            assert!(matches!(decode(&hash), Err(HashError::InvalidFormat)), "{hash}");
        }
    }

    #[test]
    fn argon2d_is_incompatible() {
        let hash = "$argon2d$v=19$m=16,t=2,p=1$RDZuTU9Mam1TemlBaUVtNA$iDDBu2UH7maUgYcBWCgTVw";
        assert!(matches!(
            decode(hash),
            Err(HashError::IncompatibleVariant(tag)) if tag == "argon2d"
        ));
    }

    #[test]
    fn wrong_version_is_incompatible_not_malformed() {
        let hash = replace_segment(KNOWN, 2, "v=16");
        assert!(matches!(decode(&hash), Err(HashError::IncompatibleVersion(16))));
    }

    #[test]
    fn unparseable_version_is_malformed() {
        for version in ["v=", "v=abc", "19", "v=+19", "v= 19", "v=19x", "version=19"] {
            let hash = replace_segment(KNOWN, 2, version);
            assert!(
                matches!(
                    decode(&hash),
                    Err(HashError::MalformedSegment { segment: "version", .. })
                ),
                "{version}"
            );
        }
    }

    #[test]
    fn malformed_parameter_segment() {
        for costs in [
            "",
            "m=65536,t=1",
            "t=1,m=65536,p=2",
            "m=65536;t=1;p=2",
            "m=65536,t=1,p=2,k=1",
            "m=65536,t=-1,p=2",
            "m=65536,t=1,p=256",
            "m=,t=1,p=2",
            "m=65536, t=1,p=2",
        ] {
            let hash = replace_segment(KNOWN, 3, costs);
            assert!(
                matches!(
                    decode(&hash),
                    Err(HashError::MalformedSegment { segment: "parameter", .. })
                ),
                "{costs}"
            );
        }
    }

    #[test]
    fn strict_base64_rejects_non_canonical_forms() {
        // Non-zero trailing bits in the last symbol.
        let tampered_key = KNOWN.replace("9tE", "9tF");
        assert!(matches!(
            decode(&tampered_key),
            Err(HashError::Encoding { segment: "key", .. })
        ));

        // Padding is not part of the format.
        let padded_salt = replace_segment(KNOWN, 4, "UDk0zEuIzbt0x3bwkf8Bgw==");
        assert!(matches!(
            decode(&padded_salt),
            Err(HashError::Encoding { segment: "salt", .. })
        ));

        // URL-safe alphabet is a different encoding.
        let url_safe = replace_segment(KNOWN, 4, "UDk0zEuIzbt0x3bwkf8_gw");
        assert!(matches!(
            decode(&url_safe),
            Err(HashError::Encoding { segment: "salt", .. })
        ));
    }
}
