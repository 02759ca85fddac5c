//!
//! Handles application configuration: the line markers used by the
//! doc-comment scan and the file selection rules used for extraction.
//! Configuration is typically loaded from a `config.toml` file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::error::CsDocError;

const APP_NAME: &str = "csdoc";
const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides every other config location.
pub const CONFIG_PATH_ENV: &str = "CSDOC_CONFIG_PATH";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Line markers recognised while scanning upward from a declaration.
pub struct ScanConfig {
    /// Leading token of a documentation comment line.
    #[serde(default = "default_doc_comment_marker")]
    pub doc_comment_marker: String,
    /// Leading token of an attribute line; such lines are skipped, never attached.
    #[serde(default = "default_attribute_marker")]
    pub attribute_marker: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            doc_comment_marker: default_doc_comment_marker(),
            attribute_marker: default_attribute_marker(),
        }
    }
}

fn default_doc_comment_marker() -> String {
    "///".to_string()
}

fn default_attribute_marker() -> String {
    "[".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Controls which files are picked up when extracting from directories.
pub struct ExtractionConfig {
    /// File extensions (without the dot) that are parsed.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Maximum file size in bytes that will be processed
    #[serde(default = "default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_file_size_bytes: default_max_file_size_bytes(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_max_file_size_bytes() -> u64 {
    5 * 1024 * 1024 // 5 MB
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
/// Main application configuration structure.
pub struct AppConfig {
    /// Doc-comment scan settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// File selection settings.
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl AppConfig {
    /// Rejects settings the scanner cannot work with.
    ///
    /// An empty marker would classify every line as a match, so both markers
    /// must be non-blank.
    pub fn validate(&self) -> std::result::Result<(), CsDocError> {
        if self.scan.doc_comment_marker.trim().is_empty() {
            return Err(CsDocError::Config(
                "scan.doc_comment_marker must not be empty".to_string(),
            ));
        }
        if self.scan.attribute_marker.trim().is_empty() {
            return Err(CsDocError::Config(
                "scan.attribute_marker must not be empty".to_string(),
            ));
        }
        if self.extraction.extensions.is_empty() {
            return Err(CsDocError::Config(
                "extraction.extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not find config directory"))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Gets the configuration path by checking ENV, override, or default XDG.
pub fn get_config_path_or_default(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        log::debug!("Using config path from ENV: {}", env_path);
        return Ok(PathBuf::from(env_path));
    }
    if let Some(path) = override_path {
        log::debug!("Using override config path: {}", path.display());
        return Ok(path.clone());
    }
    get_config_path()
}

/// Loads the application configuration from ENV, a specified path, or the default location.
///
/// A missing file yields the defaults without touching the filesystem.
/// Returns an error if the file exists but cannot be read, parsed or validated.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<AppConfig> {
    let config_file_path = get_config_path_or_default(override_path)?;
    log::debug!("Attempting to load config from: {}", config_file_path.display());

    if !config_file_path.exists() {
        log::info!(
            "Config file not found at '{}'. Using defaults.",
            config_file_path.display()
        );
        return Ok(AppConfig::default());
    }

    log::info!("Loading config from '{}'", config_file_path.display());
    let config_content = fs::read_to_string(&config_file_path).with_context(|| {
        format!("Failed to read config file at '{}'", config_file_path.display())
    })?;

    let config: AppConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            log::error!(
                "Failed to parse config file at '{}': {}. Ensure it is valid TOML.",
                config_file_path.display(),
                e
            );
            anyhow::bail!("Failed to parse configuration file: {}", e)
        }
    };
    config.validate()?;
    log::debug!("Parsed config successfully: {:?}", config);
    Ok(config)
}

/// Saves the provided configuration to ENV, a specified path, or the default location.
///
/// Creates the configuration directory if it doesn't exist and overwrites any
/// existing file. Returns the path written to.
pub fn save_config(config: &AppConfig, override_path: Option<&PathBuf>) -> Result<PathBuf> {
    let config_file_path = get_config_path_or_default(override_path)?;
    let app_config_dir = config_file_path
        .parent()
        .ok_or_else(|| anyhow!("Invalid config file path provided or determined"))?;

    fs::create_dir_all(app_config_dir).with_context(|| {
        format!("Failed to create config directory: {}", app_config_dir.display())
    })?;

    let config_content = toml::to_string_pretty(config)
        .with_context(|| "Failed to serialize configuration to TOML")?;
    fs::write(&config_file_path, config_content).with_context(|| {
        format!("Failed to write config file: {}", config_file_path.display())
    })?;
    log::info!("Saved config to '{}'", config_file_path.display());
    Ok(config_file_path)
}
