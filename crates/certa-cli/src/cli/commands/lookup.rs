//! `certa lookup` - Print the stored record for a digest.

use anyhow::Result;

use certa_core::{CertaConfig, CertificateStore};

use crate::cli::args::LookupArgs;
use crate::cli::helpers::{print_record, record_json};
use crate::exit_codes::{INVALID_INPUT, NOT_FOUND, SUCCESS};

pub fn run(args: LookupArgs, config: &CertaConfig) -> Result<i32> {
    let digest = args.digest.trim();
    if !config.verifier().is_well_formed(digest) {
        eprintln!("Invalid digest: {digest:?}");
        return Ok(INVALID_INPUT);
    }

    let Some(record) = config.ledger().find_by_digest(digest)? else {
        if args.json {
            println!("{}", serde_json::json!({ "error": "Certificate not found" }));
        } else {
            eprintln!("Certificate not found: {digest}");
        }
        return Ok(NOT_FOUND);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record_json(&record))?);
    } else {
        print_record(&record);
    }
    Ok(SUCCESS)
}
