//! Timezone selection for parsing and rendering
//!
//! A [`Zone`] decides which offset applies to a wall-clock date/time. The
//! default is the process local zone; UTC, fixed offsets and IANA zones can
//! be requested explicitly.

use crate::constants::DEFAULT_TIMEZONE;
use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Offset rules applied to a moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Process local zone, as reported by the operating system
    #[default]
    Local,
    Utc,
    /// Constant offset such as `+05:30`
    Fixed(FixedOffset),
    /// IANA zone such as `Europe/Berlin`
    Named(Tz),
}

impl Zone {
    /// Parse a zone name
    ///
    /// Accepts `local`, `utc` (or `z`), a `+HH:MM` / `-HH:MM` offset, or an IANA
    /// zone name. Keywords are case-insensitive.
    pub fn parse(name: &str) -> Result<Self, FormatError> {
        let name = name.trim();

        if name.eq_ignore_ascii_case(DEFAULT_TIMEZONE) {
            return Ok(Zone::Local);
        }
        if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
            return Ok(Zone::Utc);
        }
        if name.starts_with('+') || name.starts_with('-') {
            return name
                .parse::<FixedOffset>()
                .map(Zone::Fixed)
                .map_err(|_| FormatError::UnknownTimezone(name.to_string()));
        }

        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| FormatError::UnknownTimezone(name.to_string()))
    }

    /// Attach this zone to a wall-clock date/time
    ///
    /// Returns `None` when the local time falls into a gap (e.g. a DST
    /// transition). Ambiguous times resolve to the earlier instant.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Zone::Utc => Some(Utc.from_utc_datetime(naive).fixed_offset()),
            Zone::Fixed(offset) => offset.from_local_datetime(naive).single(),
            Zone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
        }
    }

    /// Express an instant in this zone
    pub fn at(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => instant.with_timezone(&Local).fixed_offset(),
            Zone::Utc => instant.fixed_offset(),
            Zone::Fixed(offset) => instant.with_timezone(offset),
            Zone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    /// Current calendar date in this zone
    pub fn today(&self) -> NaiveDate {
        self.at(&Utc::now()).date_naive()
    }

    /// Express a Unix timestamp (seconds) in this zone
    ///
    /// Timestamps chrono cannot represent are treated as the epoch.
    pub fn at_timestamp(&self, timestamp: i64) -> DateTime<FixedOffset> {
        let instant = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
        self.at(&instant)
    }
}

impl FromStr for Zone {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::parse(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str(DEFAULT_TIMEZONE),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}
