//! Certificate records and metadata documents.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CertificateError;

/// Fields a certificate data object must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["issuer_name", "recipient_name", "issue_date"];

/// Default issuer when none is supplied.
pub const UNKNOWN_ISSUER: &str = "Unknown Issuer";

/// Default recipient when none is supplied.
pub const UNKNOWN_RECIPIENT: &str = "Unknown Recipient";

/// A stored certificate, keyed by the digest of its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Lowercase hex digest of the document.
    pub digest: String,

    pub issuer_name: String,

    pub recipient_name: String,

    /// Calendar date of issue (`YYYY-MM-DD`).
    pub issue_date: NaiveDate,

    /// Sanitised name of the uploaded document.
    pub document_name: String,

    /// Opaque signature blob. Never produced or checked by certa.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// QR payload text, if one was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_payload: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl CertificateRecord {
    /// Build a record for a freshly hashed document issued at `now`.
    ///
    /// Blank issuer or recipient names fall back to the `Unknown …` defaults.
    pub fn new(
        digest: impl Into<String>,
        issuer_name: &str,
        recipient_name: &str,
        document_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            digest: digest.into().to_ascii_lowercase(),
            issuer_name: non_blank_or(issuer_name, UNKNOWN_ISSUER),
            recipient_name: non_blank_or(recipient_name, UNKNOWN_RECIPIENT),
            issue_date: now.with_timezone(&Local).date_naive(),
            document_name: document_name.into(),
            signature: None,
            qr_payload: None,
            created_at: now,
        }
    }

    pub fn with_qr_payload(mut self, payload: impl Into<String>) -> Self {
        self.qr_payload = Some(payload.into());
        self
    }

    /// Plain-text verification block suitable for a QR code.
    pub fn verification_line(&self) -> String {
        format!(
            "Certificate Hash: {}\nIssuer: {}\nRecipient: {}",
            self.digest, self.issuer_name, self.recipient_name
        )
    }

    /// Relative URL a verifier can resolve.
    pub fn verification_url(&self) -> String {
        verification_url(&self.digest)
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Relative verification URL for a digest.
pub fn verification_url(digest: &str) -> String {
    format!("/verify/{digest}")
}

/// Check that `data` is an object carrying every [`REQUIRED_FIELDS`] entry.
///
/// Reports the first missing field.
pub fn validate_certificate_data(data: &Value) -> Result<(), CertificateError> {
    let obj = data.as_object().ok_or(CertificateError::NotAnObject)?;
    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(CertificateError::MissingField { field });
        }
    }
    Ok(())
}

/// Unique-enough certificate id: `CERT` followed by a microsecond timestamp.
pub fn generate_certificate_id(now: DateTime<Local>) -> String {
    format!("CERT{}", now.format("%Y%m%d%H%M%S%6f"))
}

/// Sidecar metadata document written next to an issued certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateMetadata {
    pub certificate_hash: String,
    pub issuer: String,
    pub recipient: String,
    /// ISO-8601 issue timestamp.
    pub issue_date: String,
    pub verification_url: String,
    /// Unix time in fractional seconds.
    pub timestamp: f64,
}

impl CertificateMetadata {
    pub fn new(certificate_hash: &str, issuer: &str, recipient: &str, now: DateTime<Utc>) -> Self {
        Self {
            certificate_hash: certificate_hash.to_string(),
            issuer: issuer.to_string(),
            recipient: recipient.to_string(),
            issue_date: now.to_rfc3339(),
            verification_url: verification_url(certificate_hash),
            timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
        }
    }

    pub fn from_record(record: &CertificateRecord) -> Self {
        Self::new(
            &record.digest,
            &record.issuer_name,
            &record.recipient_name,
            record.created_at,
        )
    }

    /// Write as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CertificateError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| CertificateError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CertificateError> {
        let content = fs::read_to_string(path).map_err(|source| CertificateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn validate_accepts_complete_object() {
        let data = json!({
            "issuer_name": "University",
            "recipient_name": "Student",
            "issue_date": "2026-03-14",
            "extra": true,
        });
        assert!(validate_certificate_data(&data).is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let err = validate_certificate_data(&json!({"issue_date": "x"})).unwrap_err();
        assert!(matches!(
            err,
            CertificateError::MissingField {
                field: "issuer_name"
            }
        ));

        let err =
            validate_certificate_data(&json!({"issuer_name": "a", "issue_date": "x"})).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: recipient_name");
    }

    #[test]
    fn validate_rejects_non_objects() {
        for value in [json!([]), json!("text"), json!(null), json!(3)] {
            assert!(matches!(
                validate_certificate_data(&value),
                Err(CertificateError::NotAnObject)
            ));
        }
    }

    #[test]
    fn certificate_id_format() {
        let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let id = generate_certificate_id(now);
        assert_eq!(id, "CERT20260102030405000000");
    }

    #[test]
    fn metadata_fields() {
        let meta = CertificateMetadata::new("abc", "Issuer", "Recipient", fixed_now());
        assert_eq!(meta.verification_url, "/verify/abc");
        assert_eq!(meta.issue_date, "2026-03-14T09:26:53+00:00");
        assert_eq!(meta.timestamp, fixed_now().timestamp() as f64);
    }

    #[test]
    fn metadata_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        let meta = CertificateMetadata::new(&"f".repeat(64), "Issuer", "Recipient", fixed_now());
        meta.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"certificate_hash\""), "pretty-printed");

        assert_eq!(CertificateMetadata::load(&path).unwrap(), meta);
    }

    #[test]
    fn metadata_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            CertificateMetadata::load(&missing),
            Err(CertificateError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{not json").unwrap();
        assert!(matches!(
            CertificateMetadata::load(&broken),
            Err(CertificateError::Json(_))
        ));
    }

    #[test]
    fn record_defaults_blank_names() {
        let record = CertificateRecord::new("ABCDEF", "  ", "", "cert.pdf", fixed_now());
        assert_eq!(record.digest, "abcdef");
        assert_eq!(record.issuer_name, UNKNOWN_ISSUER);
        assert_eq!(record.recipient_name, UNKNOWN_RECIPIENT);
        assert!(record.signature.is_none());
    }

    #[test]
    fn record_verification_line() {
        let record = CertificateRecord::new("abc", "Uni", "Ada", "cert.pdf", fixed_now());
        assert_eq!(
            record.verification_line(),
            "Certificate Hash: abc\nIssuer: Uni\nRecipient: Ada"
        );
        assert_eq!(record.verification_url(), "/verify/abc");
    }

    #[test]
    fn record_serde_omits_empty_optionals() {
        let record = CertificateRecord::new("abc", "Uni", "Ada", "cert.pdf", fixed_now());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("signature").is_none());
        assert!(json.get("qr_payload").is_none());
        let back: CertificateRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
