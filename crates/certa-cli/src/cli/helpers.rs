use anyhow::{Context, Result};

use certa_core::{CertaConfig, CertificateRecord, HashAlgorithm};

use super::args::GlobalArgs;

/// Resolve configuration: defaults < config file < environment < flags.
pub fn load_config(global: &GlobalArgs) -> Result<CertaConfig> {
    let base = match &global.config {
        Some(path) => CertaConfig::from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => CertaConfig::default(),
    };

    let mut config = base.with_env_overrides(|key| std::env::var(key).ok())?;

    if let Some(ledger) = &global.ledger {
        config = config.with_ledger_path(ledger);
    }
    if let Some(name) = &global.algorithm {
        config = config.with_algorithm(name.parse::<HashAlgorithm>()?);
    }
    Ok(config)
}

pub fn print_record(record: &CertificateRecord) {
    println!("  digest:     {}", record.digest);
    println!("  issuer:     {}", record.issuer_name);
    println!("  recipient:  {}", record.recipient_name);
    println!("  issue_date: {}", record.issue_date);
    println!("  document:   {}", record.document_name);
    if let Some(sig) = &record.signature {
        println!("  signature:  {sig}");
    }
}

/// `record` as the JSON object the verify endpoints return.
pub fn record_json(record: &CertificateRecord) -> serde_json::Value {
    serde_json::json!({
        "hash": record.digest,
        "issuer": record.issuer_name,
        "recipient": record.recipient_name,
        "issue_date": record.issue_date,
        "digital_signature": record.signature,
    })
}
