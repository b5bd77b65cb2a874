//! Date format conversion service
//!
//! [`DateFormatService`] converts between configurable date patterns, Unix
//! timestamps and the fixed wire format of the search index
//! ([`ISO_DATETIME_FORMAT`]).
//!
//! Two flavours of every parsing operation exist:
//!
//! * the sentinel API (`format`, `iso_to_timestamp`, ...) never fails; a value
//!   that cannot be parsed yields the unchanged input string or `0`
//! * the strict API (`try_format`, `try_iso_to_timestamp`, ...) returns a
//!   [`FormatError`] instead, so callers can tell a failure apart from a
//!   legitimate epoch or an input that already matched the output

use crate::config::FormatConfig;
use crate::constants::{FALLBACK_OUTPUT_FORMAT, ISO_DATETIME_FORMAT};
use crate::error::{FormatError, FormatResult};
use crate::pattern::{self, PatternSyntax};
use crate::zone::Zone;
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime};
use log::debug;
use std::borrow::Cow;
use std::fmt::Write;

/// Stateless converter between date patterns and timestamps
#[derive(Debug, Clone, Default)]
pub struct DateFormatService {
    default_output_format: Option<String>,
    timezone: Zone,
    syntax: PatternSyntax,
}

impl DateFormatService {
    /// Service with strftime patterns, the local zone and no configured output pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service from the `[format]` configuration section
    pub fn from_config(config: &FormatConfig) -> FormatResult<Self> {
        let service = Self::new()
            .with_syntax(config.syntax)
            .with_timezone(config.zone()?);

        Ok(match config.default_output_format.as_deref() {
            Some(pattern) => service.with_default_output_format(pattern),
            None => service,
        })
    }

    /// Pattern used by [`format`](Self::format) when the caller passes an empty one
    ///
    /// An empty string clears the configured pattern.
    pub fn with_default_output_format(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.default_output_format = (!pattern.is_empty()).then_some(pattern);
        self
    }

    /// Zone standing in for "local" in every operation that is not UTC-specific
    pub fn with_timezone(mut self, timezone: Zone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_syntax(mut self, syntax: PatternSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn timezone(&self) -> Zone {
        self.timezone
    }

    pub fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    pub fn default_output_format(&self) -> Option<&str> {
        self.default_output_format.as_deref()
    }

    /// Re-render `input` from `input_format` into `output_format`
    ///
    /// `timezone` defaults to the service zone. An empty `output_format` falls
    /// back to the configured default pattern, then to `%Y-%m-%d`. Returns
    /// `input` unchanged when it cannot be parsed.
    pub fn format(&self, input: &str, input_format: &str, output_format: &str, timezone: Option<&Zone>) -> String {
        match self.try_format(input, input_format, output_format, timezone) {
            Ok(formatted) => formatted,
            Err(e) => {
                debug!("Keeping date input '{}' as is: {}", input, e);
                input.to_string()
            }
        }
    }

    /// Strict variant of [`format`](Self::format)
    pub fn try_format(
        &self,
        input: &str,
        input_format: &str,
        output_format: &str,
        timezone: Option<&Zone>,
    ) -> FormatResult<String> {
        let moment = self.parse(input, input_format, timezone)?;
        let output = self.output_pattern(output_format)?;
        render(&moment, &output)
    }

    /// Parse `input` with a pattern in the service syntax
    ///
    /// Wall-clock values are placed in `timezone` (the service zone when
    /// `None`). Inputs carrying their own offset keep it.
    pub fn parse(&self, input: &str, input_format: &str, timezone: Option<&Zone>) -> FormatResult<DateTime<FixedOffset>> {
        let pattern = self.syntax.resolve(input_format)?;
        parse_in(input, &pattern, timezone.unwrap_or(&self.timezone))
    }

    /// Render a Unix timestamp in the wire format, in the service zone
    ///
    /// `None` is treated as the epoch.
    pub fn timestamp_to_iso(&self, timestamp: Option<i64>) -> String {
        self.timezone
            .at_timestamp(timestamp.unwrap_or(0))
            .format(ISO_DATETIME_FORMAT)
            .to_string()
    }

    /// Parse a wire-format string in the service zone; `0` on failure
    pub fn iso_to_timestamp(&self, iso: &str) -> i64 {
        self.try_iso_to_timestamp(iso).unwrap_or_else(|e| {
            debug!("Treating '{}' as timestamp 0: {}", iso, e);
            0
        })
    }

    pub fn try_iso_to_timestamp(&self, iso: &str) -> FormatResult<i64> {
        parse_in(iso, ISO_DATETIME_FORMAT, &self.timezone).map(|moment| moment.timestamp())
    }

    /// Render a Unix timestamp in the wire format, in UTC
    ///
    /// `None` is treated as the epoch.
    pub fn timestamp_to_utc_iso(&self, timestamp: Option<i64>) -> String {
        Zone::Utc
            .at_timestamp(timestamp.unwrap_or(0))
            .format(ISO_DATETIME_FORMAT)
            .to_string()
    }

    /// Parse a wire-format string holding a UTC time; `0` on failure
    pub fn utc_iso_to_timestamp(&self, iso: &str) -> i64 {
        self.try_utc_iso_to_timestamp(iso).unwrap_or_else(|e| {
            debug!("Treating UTC '{}' as timestamp 0: {}", iso, e);
            0
        })
    }

    pub fn try_utc_iso_to_timestamp(&self, iso: &str) -> FormatResult<i64> {
        parse_in(iso, ISO_DATETIME_FORMAT, &Zone::Utc).map(|moment| moment.timestamp())
    }

    fn output_pattern<'a>(&'a self, output_format: &'a str) -> FormatResult<Cow<'a, str>> {
        if !output_format.is_empty() {
            return self.syntax.resolve(output_format);
        }

        match self.default_output_format.as_deref() {
            Some(pattern) => self.syntax.resolve(pattern),
            None => Ok(Cow::Borrowed(FALLBACK_OUTPUT_FORMAT)),
        }
    }
}

/// Parse `input` against a strftime pattern
///
/// Resolution order: an offset field in the pattern wins, then a `%s`
/// timestamp, then the wall-clock fields placed in `zone`. Missing time fields
/// default to midnight; missing date fields are taken from today in `zone`.
fn parse_in(input: &str, pattern: &str, zone: &Zone) -> FormatResult<DateTime<FixedOffset>> {
    let parse_error = |source| FormatError::Parse {
        input: input.to_string(),
        pattern: pattern.to_string(),
        source,
    };

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(pattern)).map_err(parse_error)?;

    if pattern::has_offset(pattern) {
        return parsed.to_datetime().map_err(parse_error);
    }

    if pattern::has_timestamp(pattern) {
        let instant = parsed.to_naive_datetime_with_offset(0).map_err(parse_error)?;
        return Ok(zone.at(&instant.and_utc()));
    }

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(_) => {
            // Setters refuse to overwrite a field the input already set
            let today = zone.today();
            let _ = parsed.set_year(i64::from(today.year()));
            let _ = parsed.set_month(i64::from(today.month()));
            let _ = parsed.set_day(i64::from(today.day()));
            parsed.to_naive_date().map_err(parse_error)?
        }
    };
    let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
    let naive = date.and_time(time);

    zone.localize(&naive)
        .ok_or_else(|| FormatError::NonexistentLocalTime(naive.to_string()))
}

fn render(moment: &DateTime<FixedOffset>, pattern: &str) -> FormatResult<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", moment.format(pattern)).map_err(|_| FormatError::InvalidPattern(pattern.to_string()))?;
    Ok(rendered)
}
