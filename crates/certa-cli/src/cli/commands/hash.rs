//! `certa hash` - Print the digest of a file or text.

use anyhow::{Context, Result};

use certa_core::CertaConfig;

use crate::cli::args::HashArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: HashArgs, config: &CertaConfig) -> Result<i32> {
    let verifier = config.verifier();

    let digest = match (&args.text, &args.file) {
        (Some(text), _) => verifier.digest_text(text),
        (None, Some(path)) => verifier
            .digest_file(path)
            .with_context(|| format!("failed to hash {}", path.display()))?,
        (None, None) => anyhow::bail!("must specify <FILE> or --text"),
    };

    println!("{digest}");
    Ok(SUCCESS)
}
