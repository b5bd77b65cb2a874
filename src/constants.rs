//! Constants used throughout the crate
//!
//! This module centralizes the fixed patterns, default values and
//! configuration file names so they stay consistent between modules.

// Patterns
/// Wire format of the search index: `YYYY-MM-DDTHH:MM:SSZ`.
///
/// The trailing `Z` is a literal. It does not mark the value as UTC; callers
/// that need UTC must use the UTC-specific conversions.
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Output pattern used when neither the caller nor the configuration supplies one
pub const FALLBACK_OUTPUT_FORMAT: &str = "%Y-%m-%d";

// Configuration
pub const CONFIG_FILE_NAME: &str = "indexdate.toml";
pub const CONFIG_DIR_NAME: &str = "indexdate";
pub const CONFIG_XDG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DEFAULT_TIMEZONE: &str = "local";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Logging
pub const LOG_FILE_NAME: &str = "indexdate.log";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
