use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

use super::config::{handle_config, ConfigArgs, ConfigCommand};
use super::demo::handle_demo;
use super::extract::{handle_extract, ExtractArgs};
use super::returns::{handle_returns, ReturnsArgs};

/// Extract documented C# methods and constructors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a config.toml to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the documented methods and constructors found in files or directories
    Extract(ExtractArgs),
    /// Report whether a file contains a `return` statement with a value
    Returns(ReturnsArgs),
    /// Run extraction on a built-in sample
    Demo,
    /// Show or initialise the configuration file
    Config(ConfigArgs),
}

impl CliArgs {
    /// Whether the command reads the config file before running.
    ///
    /// `config init` writes a fresh file, so a malformed one must not block it.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self.command,
            Commands::Config(ConfigArgs {
                command: ConfigCommand::Init { .. }
            })
        )
    }
}

/// Dispatches a parsed command to its handler.
pub fn handle_command(args: CliArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        Commands::Extract(cmd_args) => handle_extract(cmd_args, config),
        Commands::Returns(cmd_args) => handle_returns(cmd_args),
        Commands::Demo => handle_demo(config),
        Commands::Config(cmd_args) => handle_config(cmd_args, config, args.config.as_ref()),
    }
}
