//! `certa issue` - Hash a document and record it in the ledger.

use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;

use certa_core::{
    secure_filename, CertaConfig, CertificateMetadata, CertificateRecord, CertificateStore,
    QrPayload,
};

use crate::cli::args::IssueArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: IssueArgs, config: &CertaConfig) -> Result<i32> {
    let raw_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document_name = secure_filename(&raw_name);

    let size = fs::metadata(&args.file)
        .with_context(|| format!("failed to stat {}", args.file.display()))?
        .len();
    config
        .upload
        .check(&document_name, size)
        .with_context(|| format!("rejected upload: {}", args.file.display()))?;

    let digest = config
        .verifier()
        .digest_file(&args.file)
        .with_context(|| format!("failed to hash {}", args.file.display()))?;

    let now = Utc::now();
    let record = CertificateRecord::new(
        digest.into_string(),
        &args.issuer,
        &args.recipient,
        document_name,
        now,
    );
    let payload = QrPayload::for_record(&record, now).to_json();
    let record = record.with_qr_payload(payload.clone());

    let mut ledger = config.ledger();
    ledger.insert(record.clone())?;

    if let Some(path) = &args.metadata_out {
        CertificateMetadata::from_record(&record)
            .save(path)
            .with_context(|| format!("failed to write metadata: {}", path.display()))?;
    }

    println!("Certificate recorded:");
    println!("  digest:     {}", record.digest);
    println!("  issuer:     {}", record.issuer_name);
    println!("  recipient:  {}", record.recipient_name);
    println!("  issue_date: {}", record.issue_date);
    println!("  verify at:  {}", record.verification_url());
    println!();
    println!("QR payload:");
    println!("{payload}");

    Ok(SUCCESS)
}
