//! QR verification payloads.
//!
//! Only the text handed to a QR encoder is produced here; rendering the
//! image is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::certificate::CertificateRecord;

/// Payload type marker.
pub const PAYLOAD_TYPE: &str = "certificate_verification";

/// The JSON document encoded into a verification QR code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

impl QrPayload {
    pub fn new(data: Value, now: DateTime<Utc>) -> Self {
        Self {
            payload_type: PAYLOAD_TYPE.to_string(),
            data,
            timestamp: now,
        }
    }

    /// Payload carrying the digest, issuer and recipient of `record`.
    pub fn for_record(record: &CertificateRecord, now: DateTime<Utc>) -> Self {
        Self::new(
            json!({
                "certificate_hash": record.digest,
                "issuer": record.issuer_name,
                "recipient": record.recipient_name,
                "verification_url": record.verification_url(),
            }),
            now,
        )
    }

    /// Digest carried by the payload, if any.
    pub fn certificate_hash(&self) -> Option<&str> {
        self.data.get("certificate_hash").and_then(Value::as_str)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("QrPayload serialization is infallible")
    }
}

/// Serialise `data` into QR payload text.
pub fn create_qr_data(data: Value, now: DateTime<Utc>) -> String {
    QrPayload::new(data, now).to_json()
}

/// Parse scanned QR text.
///
/// Anything that is not JSON is wrapped as `{"raw_data": text}` so callers
/// can still show what was scanned.
pub fn parse_qr_data(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => json!({ "raw_data": text }),
    }
}
