//! Content-hash integrity verification with tamper detection.
//!
//! Digests are lowercase hex strings. Validation accepts either case;
//! classification lowercases both sides before the constant-time compare,
//! so `ABCD…` and `abcd…` are treated as the same digest.
//!
//! Every operation here is a pure or read-only function over its inputs.
//! Hashing holds a single fixed-size read buffer regardless of input size.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Serialize, Serializer};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::algorithm::HashAlgorithm;
use crate::digest::hex_reader;
use crate::error::IntegrityResult;

/// A lowercase hex digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    algorithm: HashAlgorithm,
    hex: String,
}

impl ContentDigest {
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn into_string(self) -> String {
        self.hex
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

/// Which side of a comparison failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestField {
    Original,
    Current,
}

impl fmt::Display for DigestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// Outcome of comparing a stored digest against a recomputed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonResult {
    Authentic,
    Tampered,
    InvalidInput { field: DigestField },
}

impl ComparisonResult {
    pub fn is_authentic(&self) -> bool {
        matches!(self, Self::Authentic)
    }

    /// Human-readable summary for display.
    pub fn message(&self) -> String {
        match self {
            Self::Authentic => "certificate is authentic".to_string(),
            Self::Tampered => "certificate has been tampered with".to_string(),
            Self::InvalidInput { field } => format!("invalid {field} digest"),
        }
    }
}

/// Hash a byte stream with the named algorithm.
///
/// Fails with `UnsupportedAlgorithm` for an unknown name and `Io` if the
/// reader errors before end of stream.
pub fn compute_digest<R: Read>(reader: R, algorithm: &str) -> IntegrityResult<ContentDigest> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    IntegrityVerifier::new(algorithm).digest_reader(reader)
}

/// Hash the UTF-8 encoding of `text` with the named algorithm.
pub fn compute_digest_from_text(text: &str, algorithm: &str) -> IntegrityResult<ContentDigest> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(IntegrityVerifier::new(algorithm).digest_text(text))
}

/// Hash the contents of a file with the named algorithm.
pub fn compute_file_digest(path: &Path, algorithm: &str) -> IntegrityResult<ContentDigest> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    IntegrityVerifier::new(algorithm).digest_file(path)
}

/// True iff `candidate` has exactly the hex length of `expected` and only hex digits.
pub fn is_well_formed_digest(candidate: &str, expected: HashAlgorithm) -> bool {
    candidate.len() == expected.hex_len() && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Like [`is_well_formed_digest`] for untyped input; non-strings are rejected.
pub fn is_well_formed_digest_value(candidate: &serde_json::Value, expected: HashAlgorithm) -> bool {
    candidate
        .as_str()
        .is_some_and(|s| is_well_formed_digest(s, expected))
}

/// Compare two digests in time that depends only on their lengths.
///
/// Length is not treated as secret: unequal lengths return `false` at once.
pub fn compare_digests_constant_time(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Classify two SHA-256 digests as authentic, tampered or invalid input.
pub fn classify_tamper(original: &str, current: &str) -> ComparisonResult {
    IntegrityVerifier::default().classify(original, current)
}

/// Digest computation and comparison bound to one algorithm.
///
/// Cheap to copy; hold one per configuration rather than a global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrityVerifier {
    algorithm: HashAlgorithm,
}

impl IntegrityVerifier {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Build a verifier from an algorithm name, e.g. from configuration.
    pub fn from_name(name: &str) -> IntegrityResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn digest_reader<R: Read>(&self, reader: R) -> IntegrityResult<ContentDigest> {
        let hex = hex_reader(self.algorithm, reader)?;
        debug!(algorithm = %self.algorithm, digest = %hex, "computed content digest");
        Ok(ContentDigest {
            algorithm: self.algorithm,
            hex,
        })
    }

    pub fn digest_bytes(&self, bytes: &[u8]) -> ContentDigest {
        ContentDigest {
            algorithm: self.algorithm,
            hex: crate::digest::hex_bytes(self.algorithm, bytes),
        }
    }

    pub fn digest_text(&self, text: &str) -> ContentDigest {
        self.digest_bytes(text.as_bytes())
    }

    pub fn digest_file(&self, path: &Path) -> IntegrityResult<ContentDigest> {
        let file = File::open(path)?;
        self.digest_reader(file)
    }

    pub fn is_well_formed(&self, candidate: &str) -> bool {
        is_well_formed_digest(candidate, self.algorithm)
    }

    /// Validate both digests, then compare them in constant time.
    ///
    /// The original digest is validated first, so when both are malformed
    /// the result names `original`.
    pub fn classify(&self, original: &str, current: &str) -> ComparisonResult {
        if !self.is_well_formed(original) {
            return ComparisonResult::InvalidInput {
                field: DigestField::Original,
            };
        }
        if !self.is_well_formed(current) {
            return ComparisonResult::InvalidInput {
                field: DigestField::Current,
            };
        }

        let original = original.to_ascii_lowercase();
        let current = current.to_ascii_lowercase();
        if compare_digests_constant_time(&original, &current) {
            ComparisonResult::Authentic
        } else {
            warn!(
                algorithm = %self.algorithm,
                expected = %original,
                actual = %current,
                "digest mismatch: content has been modified"
            );
            ComparisonResult::Tampered
        }
    }

    /// Recompute the digest of `reader` and classify it against `stored`.
    pub fn verify_reader<R: Read>(&self, stored: &str, reader: R) -> IntegrityResult<ComparisonResult> {
        let current = self.digest_reader(reader)?;
        Ok(self.classify(stored, current.as_str()))
    }
}
