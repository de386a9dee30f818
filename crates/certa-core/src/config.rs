//! Runtime configuration.
//!
//! A `CertaConfig` is built once (defaults, YAML file, or environment) and
//! passed to whatever needs it. There is no global instance.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::algorithm::HashAlgorithm;
use crate::error::ConfigError;
use crate::integrity::IntegrityVerifier;
use crate::ledger::{JsonFileStore, LEDGER_FILE_NAME};
use crate::upload::UploadPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertaConfig {
    /// Hash algorithm for new digests and validation.
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Ledger file location.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,

    #[serde(default)]
    pub upload: UploadPolicy,
}

/// `$XDG_DATA_HOME/certa/ledger.json`, or `./.certa/ledger.json` when no
/// data directory is known.
pub fn default_ledger_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("certa"))
        .unwrap_or_else(|| PathBuf::from(".certa"))
        .join(LEDGER_FILE_NAME)
}

impl Default for CertaConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            ledger_path: default_ledger_path(),
            upload: UploadPolicy::default(),
        }
    }
}

impl CertaConfig {
    /// Load from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `CERTA_HASH_ALGORITHM` | Digest algorithm (default `sha256`) |
    /// | `CERTA_LEDGER_PATH` | Ledger file |
    /// | `CERTA_MAX_UPLOAD_BYTES` | Upload size cap |
    /// | `CERTA_ALLOWED_EXTENSIONS` | Comma-separated extension allow-list |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup on top of `self`.
    ///
    /// Unparseable values are errors, never silently replaced by defaults.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(alg) = lookup("CERTA_HASH_ALGORITHM") {
            self.algorithm = alg.parse::<HashAlgorithm>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: "CERTA_HASH_ALGORITHM",
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(path) = lookup("CERTA_LEDGER_PATH").filter(|p| !p.is_empty()) {
            self.ledger_path = PathBuf::from(path);
        }
        if let Some(max) = lookup("CERTA_MAX_UPLOAD_BYTES") {
            self.upload.max_bytes = max.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: "CERTA_MAX_UPLOAD_BYTES",
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(exts) = lookup("CERTA_ALLOWED_EXTENSIONS") {
            self.upload.allowed_extensions = exts
                .split(',')
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
        }
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    pub fn verifier(&self) -> IntegrityVerifier {
        IntegrityVerifier::new(self.algorithm)
    }

    pub fn ledger(&self) -> JsonFileStore {
        JsonFileStore::new(&self.ledger_path)
    }
}
