//! Error type of the strict conversion API.
//!
//! The sentinel operations on [`crate::DateFormatService`] never surface
//! these; they are returned by the `try_*` variants and by pattern and zone
//! parsing.

/// Errors raised while parsing dates, patterns or zones.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to parse '{input}' with pattern '{pattern}': {source}")]
    Parse {
        input: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Local time does not exist in the target zone: {0}")]
    NonexistentLocalTime(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Unsupported pattern token: '{0}'")]
    UnsupportedToken(char),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Result alias for the strict API.
pub type FormatResult<T> = Result<T, FormatError>;
