use clap::{Parser, Subcommand};
use std::path::PathBuf;

use certa_core::certificate::{UNKNOWN_ISSUER, UNKNOWN_RECIPIENT};

#[derive(Parser)]
#[command(
    name = "certa",
    version,
    about = "Record document digests and verify certificates for tampering"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (YAML)
    #[arg(long, global = true, env = "CERTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ledger file (overrides config and CERTA_LEDGER_PATH)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Hash algorithm (sha224, sha256, sha384, sha512, sha512-224, sha512-256)
    #[arg(long, global = true)]
    pub algorithm: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the digest of a file or text
    Hash(HashArgs),
    /// Hash a document and record it as an issued certificate
    Issue(IssueArgs),
    /// Look up a certificate by digest or by re-hashing a document
    Verify(VerifyArgs),
    /// Classify two digests as authentic, tampered or invalid
    Compare(CompareArgs),
    /// Print the stored record for a digest
    Lookup(LookupArgs),
    /// List recorded certificates, newest first
    List(ListArgs),
    /// Print or decode a QR verification payload
    Qr(QrArgs),
    /// Print the bare version number (`--version` prefixes the name)
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct HashArgs {
    /// Document to hash
    #[arg(required_unless_present = "text")]
    pub file: Option<PathBuf>,

    /// Hash this text (UTF-8) instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct IssueArgs {
    /// Certificate document
    pub file: PathBuf,

    #[arg(long, default_value = UNKNOWN_ISSUER)]
    pub issuer: String,

    #[arg(long, default_value = UNKNOWN_RECIPIENT)]
    pub recipient: String,

    /// Also write a metadata JSON document here
    #[arg(long)]
    pub metadata_out: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Document to re-hash and look up
    #[arg(required_unless_present = "digest")]
    pub file: Option<PathBuf>,

    /// Digest to look up
    #[arg(long, conflicts_with = "file")]
    pub digest: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CompareArgs {
    /// Stored (original) digest
    pub original: String,

    /// Current digest
    #[arg(required_unless_present = "file")]
    pub current: Option<String>,

    /// Recompute the current digest from this document
    #[arg(long, conflicts_with = "current")]
    pub file: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LookupArgs {
    /// Digest to look up
    #[arg(long)]
    pub digest: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct QrArgs {
    /// Digest of a recorded certificate
    #[arg(required_unless_present = "decode")]
    pub digest: Option<String>,

    /// Decode scanned QR text instead
    #[arg(long, conflicts_with = "digest")]
    pub decode: Option<String>,
}
