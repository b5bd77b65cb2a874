//! Date pattern syntaxes
//!
//! Patterns are chrono strftime strings (`%Y-%m-%d`). Host applications that
//! store PHP `date()` style patterns (`Y-m-d\TH:i:s\Z`) can opt into
//! [`PatternSyntax::Php`], which translates them to strftime before use.

use crate::error::{FormatError, FormatResult};
use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Syntax in which caller and configuration patterns are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSyntax {
    /// chrono strftime specifiers
    #[default]
    Strftime,
    /// PHP `date()` format letters
    Php,
}

impl PatternSyntax {
    /// Turn a pattern written in this syntax into a checked strftime pattern
    pub fn resolve<'a>(&self, pattern: &'a str) -> FormatResult<Cow<'a, str>> {
        match self {
            PatternSyntax::Strftime => {
                validate(pattern)?;
                Ok(Cow::Borrowed(pattern))
            }
            PatternSyntax::Php => {
                let translated = php_to_strftime(pattern)?;
                validate(&translated)?;
                Ok(Cow::Owned(translated))
            }
        }
    }
}

/// Reject strftime patterns chrono cannot interpret
pub fn validate(pattern: &str) -> FormatResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidPattern(pattern.to_string()));
    }
    Ok(())
}

/// Whether the pattern carries a Unix timestamp (`%s`)
pub(crate) fn has_timestamp(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| matches!(item, Item::Numeric(Numeric::Timestamp, _)))
}

/// Whether the pattern carries a UTC offset (`%z`, `%:z`, `%+`, ...)
pub(crate) fn has_offset(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| {
        matches!(
            item,
            Item::Fixed(
                Fixed::TimezoneOffset
                    | Fixed::TimezoneOffsetColon
                    | Fixed::TimezoneOffsetDoubleColon
                    | Fixed::TimezoneOffsetTripleColon
                    | Fixed::TimezoneOffsetColonZ
                    | Fixed::TimezoneOffsetZ
                    | Fixed::RFC2822
                    | Fixed::RFC3339
            )
        )
    })
}

/// Translate a PHP `date()` pattern into chrono strftime
///
/// A backslash makes the next character literal. `!` and `|` (field reset
/// modifiers of PHP's parser) are dropped since unparsed fields already
/// default to zero here. Letters without a strftime equivalent are rejected.
pub fn php_to_strftime(pattern: &str) -> FormatResult<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => push_literal(&mut out, escaped),
                None => out.push('\\'),
            },
            '!' | '|' => {}
            c if c.is_ascii_alphabetic() => out.push_str(php_token(c)?),
            c => push_literal(&mut out, c),
        }
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn php_token(c: char) -> FormatResult<&'static str> {
    let strftime = match c {
        // Day
        'd' => "%d",
        'D' => "%a",
        'j' => "%-d",
        'l' => "%A",
        'N' => "%u",
        'w' => "%w",
        // Week
        'W' => "%V",
        // Month
        'F' => "%B",
        'm' => "%m",
        'M' => "%b",
        'n' => "%-m",
        // Year
        'o' => "%G",
        'Y' => "%Y",
        'y' => "%y",
        // Time
        'a' => "%P",
        'A' => "%p",
        'g' => "%-I",
        'G' => "%-H",
        'h' => "%I",
        'H' => "%H",
        'i' => "%M",
        's' => "%S",
        'u' => "%6f",
        'v' => "%3f",
        // Zone
        'e' | 'T' => "%Z",
        'P' => "%:z",
        'O' => "%z",
        // Full date/time
        'U' => "%s",
        'c' => "%Y-%m-%dT%H:%M:%S%:z",
        'r' => "%a, %d %b %Y %H:%M:%S %z",
        other => return Err(FormatError::UnsupportedToken(other)),
    };
    Ok(strftime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_php_iso_pattern() {
        assert_eq!(php_to_strftime("Y-m-d\\TH:i:s\\Z").unwrap(), "%Y-%m-%dT%H:%M:%SZ");
    }

    #[test]
    fn test_php_escaped_percent() {
        assert_eq!(php_to_strftime("d% \\%").unwrap(), "%d%% %%");
    }

    #[test]
    fn test_php_unsupported_letter() {
        assert!(matches!(php_to_strftime("Y-t"), Err(FormatError::UnsupportedToken('t'))));
    }

    #[test]
    fn test_validate() {
        assert!(validate("%Y-%m-%d").is_ok());
        assert!(validate("%Y-%").is_err());
    }

    #[test]
    fn test_has_timestamp() {
        assert!(has_timestamp("%s"));
        assert!(!has_timestamp("%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn test_has_offset() {
        assert!(has_offset("%Y-%m-%d %H:%M:%S %z"));
        assert!(has_offset("%+"));
        assert!(has_offset(&php_to_strftime("c").unwrap()));
        assert!(!has_offset("%s"));
        assert!(!has_offset(crate::constants::ISO_DATETIME_FORMAT));
    }
}
