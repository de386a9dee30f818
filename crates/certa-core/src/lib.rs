//! Content-digest integrity verification for issued certificates.
//!
//! This crate provides:
//!
//! - Streaming digest computation (SHA-2 family, SHA-256 by default)
//! - Digest syntax validation and constant-time comparison
//! - Tamper classification (authentic / tampered / invalid input)
//! - A certificate ledger keyed by digest
//! - QR verification payloads and certificate metadata documents
//!
//! # Quick Start
//!
//! ```
//! use certa_core::{classify_tamper, compute_digest_from_text, ComparisonResult};
//!
//! let stored = compute_digest_from_text("hello world", "sha256").unwrap();
//! let current = compute_digest_from_text("hello world", "sha256").unwrap();
//! assert_eq!(
//!     classify_tamper(stored.as_str(), current.as_str()),
//!     ComparisonResult::Authentic
//! );
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `CERTA_HASH_ALGORITHM` | Digest algorithm (default: `sha256`) |
//! | `CERTA_LEDGER_PATH` | Ledger file (default: `<data dir>/certa/ledger.json`) |
//! | `CERTA_MAX_UPLOAD_BYTES` | Upload size cap (default: 16 MiB) |
//! | `CERTA_ALLOWED_EXTENSIONS` | Comma-separated allow-list (default: `png,jpg,jpeg,pdf,txt`) |

pub mod algorithm;
pub mod certificate;
pub mod config;
mod digest;
pub mod encoding;
pub mod error;
pub mod integrity;
pub mod ledger;
pub mod qr;
pub mod search;
pub mod upload;

// Re-export main types
pub use algorithm::HashAlgorithm;
pub use certificate::{
    generate_certificate_id, validate_certificate_data, verification_url, CertificateMetadata,
    CertificateRecord,
};
pub use config::CertaConfig;
pub use encoding::{decode_from_base64, encode_to_base64};
pub use error::{
    CertificateError, ConfigError, EncodingError, IntegrityError, IntegrityResult, LedgerError,
    LedgerResult, UploadError,
};
pub use integrity::{
    classify_tamper, compare_digests_constant_time, compute_digest, compute_digest_from_text,
    compute_file_digest, is_well_formed_digest, is_well_formed_digest_value, ComparisonResult,
    ContentDigest, DigestField, IntegrityVerifier,
};
pub use ledger::{CertificateStore, JsonFileStore, MemoryStore, LEDGER_FILE_NAME, LEDGER_VERSION};
pub use qr::{create_qr_data, parse_qr_data, QrPayload};
pub use search::binary_search;
pub use upload::{secure_filename, UploadPolicy, DEFAULT_MAX_UPLOAD_BYTES};
