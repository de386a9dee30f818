//! Error types for certa-core.

use std::path::PathBuf;

/// Errors raised while computing digests.
///
/// A malformed digest is never an error; see [`crate::integrity::ComparisonResult`].
#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    /// The requested hash algorithm is not one the verifier supports.
    #[error("unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// The byte source could not be read to completion.
    #[error("failed to read byte source: {0}")]
    Io(#[from] std::io::Error),
}

impl IntegrityError {
    /// Whether retrying the same call may succeed.
    ///
    /// Only I/O failures are retryable, and only if the source itself is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Certificate data and metadata errors.
#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("certificate data must be a JSON object")]
    NotAnObject,

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("failed to access metadata file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metadata JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ledger (certificate store) errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A record with this digest is already stored.
    #[error("certificate already recorded: {digest}")]
    DuplicateDigest { digest: String },

    #[error("ledger I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ledger file is corrupt: {message}")]
    Corrupt { message: String },

    /// The in-memory ledger could not be encoded; the file is untouched.
    #[error("failed to serialize ledger: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unsupported ledger version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },
}

/// Upload admission errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("file type not allowed: {filename}")]
    ExtensionNotAllowed { filename: String },

    #[error("file too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("empty filename")]
    EmptyFilename,
}

/// Base64 helper errors.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Result alias for digest computation.
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
