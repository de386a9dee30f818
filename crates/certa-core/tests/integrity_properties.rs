//! Property tests for digest computation and tamper classification.

use std::io::Cursor;

use certa_core::{
    classify_tamper, compare_digests_constant_time, compute_digest, is_well_formed_digest,
    ComparisonResult, DigestField, HashAlgorithm, IntegrityVerifier,
};
use proptest::prelude::*;

fn hex_digest() -> impl Strategy<Value = String> {
    "[0-9a-f]{64}"
}

proptest! {
    #[test]
    fn digest_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let a = compute_digest(Cursor::new(&bytes), "sha256").unwrap();
        let b = compute_digest(Cursor::new(&bytes), "sha256").unwrap();
        prop_assert_eq!(a.as_str(), b.as_str());
        prop_assert!(is_well_formed_digest(a.as_str(), HashAlgorithm::Sha256));
        prop_assert_eq!(a.as_str().to_ascii_lowercase(), a.as_str());
    }

    #[test]
    fn flipping_one_byte_changes_digest(
        bytes in proptest::collection::vec(any::<u8>(), 1..2048),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255
    ) {
        let verifier = IntegrityVerifier::default();
        let original = verifier.digest_bytes(&bytes);

        let mut modified = bytes.clone();
        let i = index.index(modified.len());
        modified[i] ^= flip;
        let current = verifier.digest_bytes(&modified);

        prop_assert_ne!(original.as_str(), current.as_str());
        prop_assert_eq!(
            classify_tamper(original.as_str(), current.as_str()),
            ComparisonResult::Tampered
        );
    }

    #[test]
    fn digest_equals_itself(d in hex_digest()) {
        prop_assert!(compare_digests_constant_time(&d, &d));
        prop_assert_eq!(classify_tamper(&d, &d), ComparisonResult::Authentic);
    }

    #[test]
    fn last_character_difference_is_detected(d in hex_digest()) {
        let last = d.chars().last().unwrap();
        let replacement = if last == '0' { '1' } else { '0' };
        let mut other = d[..63].to_string();
        other.push(replacement);
        prop_assert!(!compare_digests_constant_time(&d, &other));
        prop_assert_eq!(classify_tamper(&d, &other), ComparisonResult::Tampered);
    }

    #[test]
    fn malformed_original_is_invalid_input(junk in "[g-z]{1,80}", d in hex_digest()) {
        prop_assert_eq!(
            classify_tamper(&junk, &d),
            ComparisonResult::InvalidInput { field: DigestField::Original }
        );
        prop_assert_eq!(
            classify_tamper(&d, &junk),
            ComparisonResult::InvalidInput { field: DigestField::Current }
        );
    }
}

#[test]
fn end_to_end_scenarios() {
    let a = "0123456789abcdef".repeat(4);
    let b = "fedcba9876543210".repeat(4);
    assert_eq!(classify_tamper(&a, &a), ComparisonResult::Authentic);
    assert_eq!(classify_tamper(&a, &b), ComparisonResult::Tampered);
    assert_eq!(
        classify_tamper("not-a-hash", &a),
        ComparisonResult::InvalidInput {
            field: DigestField::Original
        }
    );
}
