//! `certa list` - Show recorded certificates, newest first.

use anyhow::Result;

use certa_core::{CertaConfig, CertificateStore};

use crate::cli::args::ListArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: ListArgs, config: &CertaConfig) -> Result<i32> {
    let records = config.ledger().list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(SUCCESS);
    }

    if records.is_empty() {
        println!("No certificates recorded.");
        return Ok(SUCCESS);
    }

    println!(
        "{:<16}  {:<10}  {:<24}  {:<24}",
        "DIGEST", "ISSUED", "ISSUER", "RECIPIENT"
    );
    for r in &records {
        let short = r.digest.get(..16).unwrap_or(&r.digest);
        println!(
            "{:<16}  {:<10}  {:<24}  {:<24}",
            short,
            r.issue_date.to_string(),
            r.issuer_name,
            r.recipient_name
        );
    }
    println!();
    println!("{} certificate(s)", records.len());
    Ok(SUCCESS)
}
