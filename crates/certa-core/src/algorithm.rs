//! Hash algorithms recognized by the verifier.
//!
//! The set is limited to what the `sha2` crate provides. Names are parsed
//! case-insensitively and accept both `sha512-256` and `sha512_256` forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntegrityError;

/// A supported cryptographic hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 6] = [
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_224 => "sha512-224",
            Self::Sha512_256 => "sha512-256",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha224 | Self::Sha512_224 => 28,
            Self::Sha256 | Self::Sha512_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex rendering (two characters per byte).
    pub fn hex_len(self) -> usize {
        self.output_len() * 2
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = IntegrityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "sha224" | "sha-224" => Ok(Self::Sha224),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha384" | "sha-384" => Ok(Self::Sha384),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "sha512-224" | "sha-512/224" => Ok(Self::Sha512_224),
            "sha512-256" | "sha-512/256" => Ok(Self::Sha512_256),
            _ => Err(IntegrityError::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = IntegrityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(value: HashAlgorithm) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("SHA-384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
        assert_eq!(
            "sha512_256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha512_256
        );
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["md5", "sha1", "blake3", ""] {
            let err = name.parse::<HashAlgorithm>().unwrap_err();
            assert!(
                matches!(err, IntegrityError::UnsupportedAlgorithm { .. }),
                "{name} should be unsupported"
            );
        }
    }

    #[test]
    fn names_round_trip() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(alg.name().parse::<HashAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn hex_lengths() {
        assert_eq!(HashAlgorithm::Sha256.hex_len(), 64);
        assert_eq!(HashAlgorithm::Sha224.hex_len(), 56);
        assert_eq!(HashAlgorithm::Sha384.hex_len(), 96);
        assert_eq!(HashAlgorithm::Sha512.hex_len(), 128);
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_string(&HashAlgorithm::Sha512_224).unwrap();
        assert_eq!(json, "\"sha512-224\"");
        let back: HashAlgorithm = serde_json::from_str("\"SHA256\"").unwrap();
        assert_eq!(back, HashAlgorithm::Sha256);
        assert!(serde_json::from_str::<HashAlgorithm>("\"md5\"").is_err());
    }
}
