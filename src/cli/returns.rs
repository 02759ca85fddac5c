use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::syntax::returns::classify_returns;

use super::formatters::print_returns;

#[derive(Args, Debug)]
pub struct ReturnsArgs {
    /// C# source file to inspect
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handles the `returns` command.
pub fn handle_returns(args: ReturnsArgs) -> Result<()> {
    log::debug!("ReturnsArgs: {:?}", args);

    let code = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let returns = classify_returns(&code)
        .with_context(|| format!("Failed to analyse {}", args.file.display()))?;

    print_returns(&args.file.to_string_lossy(), &returns, args.json)
}
