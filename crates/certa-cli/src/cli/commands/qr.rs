//! `certa qr` - Print the QR payload of a recorded certificate, or decode one.

use anyhow::Result;
use chrono::Utc;

use certa_core::{parse_qr_data, CertaConfig, CertificateStore, QrPayload};

use crate::cli::args::QrArgs;
use crate::exit_codes::{NOT_FOUND, SUCCESS};

pub fn run(args: QrArgs, config: &CertaConfig) -> Result<i32> {
    if let Some(text) = &args.decode {
        println!("{}", serde_json::to_string_pretty(&parse_qr_data(text))?);
        return Ok(SUCCESS);
    }

    let Some(digest) = &args.digest else {
        anyhow::bail!("must specify <DIGEST> or --decode");
    };

    let Some(record) = config.ledger().find_by_digest(digest)? else {
        eprintln!("Certificate not found: {digest}");
        return Ok(NOT_FOUND);
    };

    let payload = match &record.qr_payload {
        Some(stored) => stored.clone(),
        None => QrPayload::for_record(&record, Utc::now()).to_json(),
    };
    println!("{payload}");
    Ok(SUCCESS)
}
