use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("argon2: hash is not in the correct format")]
    InvalidFormat,

    #[error("argon2: malformed {segment} segment: {value:?}")]
    MalformedSegment {
        segment: &'static str,
        value: String,
    },

    #[error("argon2: incompatible variant of argon2: {0:?}")]
    IncompatibleVariant(String),

    #[error("argon2: incompatible version of argon2: {0}")]
    IncompatibleVersion(u32),

    #[error("argon2: invalid base64 in {segment} segment: {source}")]
    Encoding {
        segment: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("OS random generator unavailable: {0}")]
    Entropy(String),

    #[error("key derivation failed: {0}")]
    Derivation(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HashError {
    /// True when the stored hash itself is unreadable or was produced by an
    /// unsupported variant/version, as opposed to an operational failure.
    pub fn is_malformed_hash(&self) -> bool {
        matches!(
            self,
            HashError::InvalidFormat
                | HashError::MalformedSegment { .. }
                | HashError::IncompatibleVariant(_)
                | HashError::IncompatibleVersion(_)
                | HashError::Encoding { .. }
        )
    }
}
