//! Exit codes for `certa`.
//! These codes are part of the public contract; scripts branch on them.

use certa_core::{ConfigError, IntegrityError, LedgerError, UploadError};

pub const SUCCESS: i32 = 0;
pub const NOT_FOUND: i32 = 1; // No ledger record for the digest
pub const INVALID_INPUT: i32 = 2; // Malformed digest, rejected upload, bad config or algorithm
pub const IO_ERROR: i32 = 3; // File or ledger could not be read/written
pub const TAMPERED: i32 = 4; // Digests are well-formed but differ

/// Map a command failure onto an exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<IntegrityError>() {
        return match e {
            IntegrityError::UnsupportedAlgorithm { .. } => INVALID_INPUT,
            IntegrityError::Io(_) => IO_ERROR,
        };
    }
    if let Some(e) = err.downcast_ref::<LedgerError>() {
        return match e {
            LedgerError::DuplicateDigest { .. } => INVALID_INPUT,
            LedgerError::Io { .. }
            | LedgerError::Corrupt { .. }
            | LedgerError::Serialize(_)
            | LedgerError::UnsupportedVersion { .. } => IO_ERROR,
        };
    }
    if err.downcast_ref::<UploadError>().is_some() || err.downcast_ref::<ConfigError>().is_some() {
        return INVALID_INPUT;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return IO_ERROR;
    }
    INVALID_INPUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_core_errors() {
        let err = anyhow::Error::new(IntegrityError::UnsupportedAlgorithm {
            name: "md5".into(),
        });
        assert_eq!(for_error(&err), INVALID_INPUT);

        let err = anyhow::Error::new(IntegrityError::Io(std::io::Error::other("gone")));
        assert_eq!(for_error(&err), IO_ERROR);

        let err = anyhow::Error::new(LedgerError::DuplicateDigest {
            digest: "ab".into(),
        });
        assert_eq!(for_error(&err), INVALID_INPUT);

        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let err = anyhow::Error::new(LedgerError::Serialize(json_err));
        assert_eq!(for_error(&err), IO_ERROR);
        assert!(err.to_string().starts_with("failed to serialize ledger"));

        let err = anyhow::Error::new(UploadError::EmptyFilename).context("rejected upload");
        assert_eq!(for_error(&err), INVALID_INPUT);
    }
}
