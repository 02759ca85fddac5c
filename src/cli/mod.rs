//! This module defines the command-line interface structure and handlers.

pub mod commands;
pub mod formatters;

pub mod extract;
pub mod returns;
pub mod demo;
pub mod config;

// Re-export the main handler and the command enum
pub use commands::{handle_command, CliArgs, Commands};

// Re-export the Args structs for use in the main binary
pub use extract::ExtractArgs;
pub use returns::ReturnsArgs;
pub use config::{ConfigArgs, ConfigCommand};
