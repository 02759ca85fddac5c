use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{get_config_path_or_default, save_config, AppConfig};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Handles the `config` command.
pub fn handle_config(args: ConfigArgs, config: &AppConfig, override_path: Option<&PathBuf>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let path = get_config_path_or_default(override_path)?;
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(config).context("Failed to serialize configuration")?);
        }
        ConfigCommand::Init { force } => {
            let path = get_config_path_or_default(override_path)?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at '{}'. Use --force to overwrite.",
                    path.display()
                );
            }
            let written = save_config(&AppConfig::default(), override_path)?;
            println!("Wrote default configuration to {}", written.display());
        }
    }
    Ok(())
}
