//! `certa compare` - Classify a stored digest against a current one.

use anyhow::{Context, Result};

use certa_core::{CertaConfig, ComparisonResult};

use crate::cli::args::CompareArgs;
use crate::exit_codes::{INVALID_INPUT, SUCCESS, TAMPERED};

pub fn run(args: CompareArgs, config: &CertaConfig) -> Result<i32> {
    let verifier = config.verifier();

    let current = match (&args.current, &args.file) {
        (Some(digest), _) => digest.trim().to_string(),
        (None, Some(path)) => verifier
            .digest_file(path)
            .with_context(|| format!("failed to hash {}", path.display()))?
            .into_string(),
        (None, None) => anyhow::bail!("must specify <CURRENT> or --file"),
    };

    let outcome = verifier.classify(args.original.trim(), &current);

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}", outcome.message());
    }

    Ok(match outcome {
        ComparisonResult::Authentic => SUCCESS,
        ComparisonResult::Tampered => TAMPERED,
        ComparisonResult::InvalidInput { .. } => INVALID_INPUT,
    })
}
