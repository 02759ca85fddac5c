use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::syntax::extract_paths;

use super::formatters::print_reports;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Files or directories to extract from
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handles the `extract` command.
pub fn handle_extract(args: ExtractArgs, config: &AppConfig) -> Result<()> {
    log::info!("Starting extraction...");
    log::debug!("ExtractArgs: {:?}", args);

    let reports = extract_paths(&args.paths, config)
        .context("Failed to extract documented methods")?;

    let total: usize = reports.iter().map(|r| r.units.len()).sum();
    log::info!("Extracted {} documented units from {} files", total, reports.len());

    print_reports(&reports, args.json)
}
