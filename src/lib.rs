//! indexdate - date format conversion for a search index
//!
//! This library converts between human-configurable date patterns, Unix
//! timestamps and the fixed `YYYY-MM-DDTHH:MM:SSZ` format a search index
//! stores dates in.
//!
//! # Modules
//!
//! * [`service`] - The conversion service
//! * [`config`] - TOML configuration supplying the default output pattern
//! * [`zone`] - Timezone selection
//! * [`pattern`] - strftime and PHP `date()` pattern syntaxes
//!
//! # Example
//!
//! ```
//! use indexdate::{DateFormatService, Zone};
//!
//! let service = DateFormatService::new().with_timezone(Zone::Utc);
//! assert_eq!(service.timestamp_to_utc_iso(Some(0)), "1970-01-01T00:00:00Z");
//! assert_eq!(service.format("05.01.2024", "%d.%m.%Y", "", None), "2024-01-05");
//! assert_eq!(service.iso_to_timestamp("invalid"), 0);
//! ```

/// Configuration module for managing the default output pattern and zone
pub mod config;

/// Fixed patterns and default values
pub mod constants;

/// Error type of the strict conversion API
pub mod error;

/// Logging setup for the `log` facade
pub mod logger;

/// Pattern syntaxes and translation
pub mod pattern;

/// Date format conversion service
pub mod service;

/// Timezone selection
pub mod zone;

pub use constants::ISO_DATETIME_FORMAT;
pub use error::{FormatError, FormatResult};
pub use pattern::PatternSyntax;
pub use service::DateFormatService;
pub use zone::Zone;
