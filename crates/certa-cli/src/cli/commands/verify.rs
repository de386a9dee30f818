//! `certa verify` - Look up a certificate by digest or by re-hashing a document.

use anyhow::{Context, Result};

use certa_core::{secure_filename, CertaConfig, CertificateStore, ComparisonResult};

use crate::cli::args::VerifyArgs;
use crate::cli::helpers::{print_record, record_json};
use crate::exit_codes::{INVALID_INPUT, NOT_FOUND, SUCCESS};

pub fn run(args: VerifyArgs, config: &CertaConfig) -> Result<i32> {
    let verifier = config.verifier();

    let query = if let Some(digest) = &args.digest {
        let digest = digest.trim();
        if !verifier.is_well_formed(digest) {
            report_invalid(&args, digest, config);
            return Ok(INVALID_INPUT);
        }
        digest.to_ascii_lowercase()
    } else if let Some(path) = &args.file {
        let name = path
            .file_name()
            .map(|n| secure_filename(&n.to_string_lossy()))
            .unwrap_or_default();
        if !config.upload.allows(&name) {
            anyhow::bail!(certa_core::UploadError::ExtensionNotAllowed { filename: name });
        }
        verifier
            .digest_file(path)
            .with_context(|| format!("failed to hash {}", path.display()))?
            .into_string()
    } else {
        anyhow::bail!("must specify <FILE> or --digest");
    };

    let ledger = config.ledger();
    let Some(record) = ledger.find_by_digest(&query)? else {
        if args.json {
            println!("{}", serde_json::json!({ "status": "not_found" }));
        } else if args.file.is_some() {
            println!("Certificate is not authentic: no record for {query}");
        } else {
            println!("Certificate not found: {query}");
        }
        return Ok(NOT_FOUND);
    };

    // A ledger hit is the authenticity check.
    let outcome = ComparisonResult::Authentic;
    if args.json {
        let mut body = serde_json::to_value(outcome)?;
        body["certificate"] = record_json(&record);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Certificate found ({}):", outcome.message());
        print_record(&record);
    }
    Ok(SUCCESS)
}

fn report_invalid(args: &VerifyArgs, digest: &str, config: &CertaConfig) {
    if args.json {
        println!(
            "{}",
            serde_json::json!({ "status": "invalid_input", "field": "digest" })
        );
    } else {
        println!(
            "Invalid digest: expected {} hex characters for {}, got {:?}",
            config.algorithm.hex_len(),
            config.algorithm,
            digest
        );
    }
}
