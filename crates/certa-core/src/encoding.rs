//! Base64 helpers for signature blobs and payload transport.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::EncodingError;

/// Standard-alphabet, padded base64.
pub fn encode_to_base64(data: impl AsRef<[u8]>) -> String {
    BASE64.encode(data)
}

/// Decode base64 text that is expected to hold UTF-8.
pub fn decode_from_base64(encoded: &str) -> Result<String, EncodingError> {
    let bytes = BASE64.decode(encoded.trim())?;
    Ok(String::from_utf8(bytes)?)
}
