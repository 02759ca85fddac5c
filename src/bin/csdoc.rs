use anyhow::{Context, Result};
use clap::Parser;
use std::process::exit;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use csdoc_lib::{
    cli::{handle_command, CliArgs},
    config,
};

fn main() -> Result<()> {
    // --- Setup Tracing ---
    // `init` also installs the `log` bridge, so library records are formatted here.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // --- Parse Args ---
    let args = CliArgs::parse();

    // --- Load Configuration ---
    let config = if args.needs_config() {
        config::load_config(args.config.as_ref()).context("Failed to load configuration")?
    } else {
        tracing::debug!("Skipping config load for {:?}", args.command);
        config::AppConfig::default()
    };

    // --- Execute Command ---
    tracing::info!("Executing command: {:?}", args.command);

    if let Err(e) = handle_command(args, &config) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        exit(1);
    }

    tracing::debug!("Command executed successfully.");
    Ok(())
}
