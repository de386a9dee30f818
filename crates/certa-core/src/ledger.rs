//! Certificate ledger: the storage collaborator for issued records.
//!
//! The ledger never validates digests; callers hand it digests that the
//! integrity layer already produced or checked. Digests are stored in lower
//! case and both sides are lowercased on lookup, so neither a query typed in
//! upper case nor a hand-edited ledger entry goes unmatched. Matching uses the
//! constant-time comparison.
//!
//! # Ledger file format (v1)
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "digest": "b94d27…", "issuer_name": "…", "recipient_name": "…",
//!       "issue_date": "2026-03-14", "document_name": "cert.pdf",
//!       "created_at": "2026-03-14T09:26:53Z" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::certificate::CertificateRecord;
use crate::error::{LedgerError, LedgerResult};
use crate::integrity::compare_digests_constant_time;

/// Current ledger schema version.
pub const LEDGER_VERSION: u8 = 1;

/// Default ledger file name.
pub const LEDGER_FILE_NAME: &str = "ledger.json";

/// Persists and looks up certificate records by digest.
pub trait CertificateStore {
    /// Store a new record. Fails with `DuplicateDigest` if one exists.
    fn insert(&mut self, record: CertificateRecord) -> LedgerResult<()>;

    fn find_by_digest(&self, digest: &str) -> LedgerResult<Option<CertificateRecord>>;

    /// All records, newest first.
    fn list(&self) -> LedgerResult<Vec<CertificateRecord>>;
}

fn newest_first(records: &mut [CertificateRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn find_in<'a>(records: &'a [CertificateRecord], digest: &str) -> Option<&'a CertificateRecord> {
    let digest = digest.trim().to_ascii_lowercase();
    records
        .iter()
        .find(|r| compare_digests_constant_time(&r.digest.to_ascii_lowercase(), &digest))
}

fn normalize(mut record: CertificateRecord) -> CertificateRecord {
    record.digest = record.digest.trim().to_ascii_lowercase();
    record
}

/// Volatile store, mostly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<CertificateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CertificateStore for MemoryStore {
    fn insert(&mut self, record: CertificateRecord) -> LedgerResult<()> {
        let record = normalize(record);
        if find_in(&self.records, &record.digest).is_some() {
            return Err(LedgerError::DuplicateDigest {
                digest: record.digest,
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn find_by_digest(&self, digest: &str) -> LedgerResult<Option<CertificateRecord>> {
        Ok(find_in(&self.records, digest).cloned())
    }

    fn list(&self) -> LedgerResult<Vec<CertificateRecord>> {
        let mut records = self.records.clone();
        newest_first(&mut records);
        Ok(records)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LedgerDocument {
    version: u8,
    #[serde(default)]
    records: Vec<CertificateRecord>,
}

/// Ledger persisted as one JSON document.
///
/// Every operation re-reads the file, and writes go through a temp file and
/// rename. Assumes a single writer process.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&self) -> LedgerResult<Vec<CertificateRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let doc: LedgerDocument =
            serde_json::from_str(&content).map_err(|e| LedgerError::Corrupt {
                message: format!("{}: {}", self.path.display(), e),
            })?;

        if doc.version != LEDGER_VERSION {
            return Err(LedgerError::UnsupportedVersion {
                found: doc.version,
                expected: LEDGER_VERSION,
            });
        }
        Ok(doc.records)
    }

    fn save(&self, records: Vec<CertificateRecord>) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let doc = LedgerDocument {
            version: LEDGER_VERSION,
            records,
        };
        let json = serde_json::to_string_pretty(&doc).map_err(LedgerError::Serialize)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl CertificateStore for JsonFileStore {
    fn insert(&mut self, record: CertificateRecord) -> LedgerResult<()> {
        let record = normalize(record);
        let mut records = self.load()?;
        if find_in(&records, &record.digest).is_some() {
            return Err(LedgerError::DuplicateDigest {
                digest: record.digest,
            });
        }
        info!(
            digest = %record.digest,
            issuer = %record.issuer_name,
            path = %self.path.display(),
            "recorded certificate"
        );
        records.push(record);
        self.save(records)
    }

    fn find_by_digest(&self, digest: &str) -> LedgerResult<Option<CertificateRecord>> {
        let records = self.load()?;
        Ok(find_in(&records, digest).cloned())
    }

    fn list(&self) -> LedgerResult<Vec<CertificateRecord>> {
        let mut records = self.load()?;
        newest_first(&mut records);
        Ok(records)
    }
}
