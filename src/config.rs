//! Configuration management for indexdate
//!
//! This module handles loading, parsing, and validation of configuration files.
//! The loaded [`FormatConfig`] is handed to
//! [`DateFormatService::from_config`](crate::DateFormatService::from_config)
//! instead of being looked up globally.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_XDG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE,
    FALLBACK_OUTPUT_FORMAT,
};
use crate::error::FormatResult;
use crate::pattern::PatternSyntax;
use crate::zone::Zone;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub logging: LoggingConfig,
}

/// Date format configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Output pattern used when a caller passes none
    /// When unset, `%Y-%m-%d` is used
    pub default_output_format: Option<String>,
    /// Zone used for non-UTC conversions
    /// Options: "local", "utc", "+HH:MM", or an IANA name such as "Europe/Berlin"
    pub timezone: String,
    /// Syntax of all configured and caller-supplied patterns
    pub syntax: PatternSyntax,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            default_output_format: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
            syntax: PatternSyntax::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FormatConfig {
    /// Resolve the configured zone name
    pub fn zone(&self) -> FormatResult<Zone> {
        self.timezone.parse()
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_XDG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.format.default_output_format {
            if pattern.is_empty() {
                log::warn!("default_output_format is empty, falling back to {}", FALLBACK_OUTPUT_FORMAT);
            } else if let Err(e) = self.format.syntax.resolve(pattern) {
                anyhow::bail!("Invalid default_output_format '{}': {}", pattern, e);
            }
        }

        if let Err(e) = self.format.zone() {
            anyhow::bail!("Invalid timezone '{}': {}", self.format.timezone, e);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# indexdate Configuration File\n# Generated on {}\n# Set [format] default_output_format to override {}\n\n",
            chrono::Local::now().format(FALLBACK_OUTPUT_FORMAT),
            FALLBACK_OUTPUT_FORMAT
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_XDG_FILE_NAME))
    }
}
