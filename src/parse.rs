//! RFC 2822 and ISO 8601 parsing
//!
//! Both entry points hand the string to chrono's parsers and fall back to a
//! short list of looser layouts (the kind a browser `Date` constructor
//! accepts), including those of the other standard, before giving up.
//! Layouts that carry no zone are read in the host's local time zone, except
//! a bare ISO 8601 date which is midnight UTC.

use crate::config::{Config, ParsingConfig};
use crate::constants::{
    ISO8601_DATE_FORMAT, ISO8601_LOCAL_FORMATS, ISO8601_OFFSET_FORMATS, RFC2822_LOOSE_DATETIME_FORMATS,
    RFC2822_LOOSE_DATE_FORMATS,
};
use crate::date_value::DateValue;
use crate::error::{DateFormat, ParseError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::{debug, trace};
use once_cell::sync::Lazy;

static DEFAULT_PARSER: Lazy<Parser> = Lazy::new(Parser::default);

/// Parse an RFC 2822 date such as `Tue, 26 Jan 2016 13:48:02 GMT`.
///
/// Loose forms like `December 17, 1995 03:24:00` are accepted too and read
/// as local time.
///
/// # Errors
/// Returns [`ParseError`] when no accepted layout matches; there is no
/// "invalid date" value to check for afterwards.
pub fn parse_rfc2822(value: &str) -> Result<DateValue, ParseError> {
    DEFAULT_PARSER.parse_rfc2822(value)
}

/// Parse an ISO 8601 date such as `2016-01-19T16:07:37+00:00` or
/// `2016-01-19T08:07:37Z`.
///
/// # Errors
/// Returns [`ParseError`] when no accepted layout matches.
pub fn parse_iso8601(value: &str) -> Result<DateValue, ParseError> {
    DEFAULT_PARSER.parse_iso8601(value)
}

/// Date parser with optional user-supplied layouts.
///
/// Each entry point tries its own standard's layouts first, then the other
/// standard's, then the extra layouts (chrono strftime strings). Errors name
/// the standard that was asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    extra_formats: Vec<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that also tries the given layouts
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from(&config.parsing)
    }

    /// Build a parser from the configuration file found by [`Config::load`].
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::from_config(&Config::load()?))
    }

    pub fn extra_formats(&self) -> &[String] {
        &self.extra_formats
    }

    /// See [`parse_rfc2822`].
    pub fn parse_rfc2822(&self, value: &str) -> Result<DateValue, ParseError> {
        let value = non_empty(value)?;

        rfc2822_layouts(value)
            .or_else(|| {
                debug!("'{value}' matched no RFC 2822 layout, trying ISO 8601");
                iso8601_layouts(value)
            })
            .or_else(|| self.try_extra_formats(value))
            .ok_or_else(|| ParseError::invalid(DateFormat::Rfc2822, value))
    }

    /// See [`parse_iso8601`].
    pub fn parse_iso8601(&self, value: &str) -> Result<DateValue, ParseError> {
        let value = non_empty(value)?;

        iso8601_layouts(value)
            .or_else(|| {
                debug!("'{value}' matched no ISO 8601 layout, trying RFC 2822");
                rfc2822_layouts(value)
            })
            .or_else(|| self.try_extra_formats(value))
            .ok_or_else(|| ParseError::invalid(DateFormat::Iso8601, value))
    }

    fn try_extra_formats(&self, value: &str) -> Option<DateValue> {
        if self.extra_formats.is_empty() {
            return None;
        }
        try_parse(value, &self.extra_formats, |value, fmt| {
            parse_offset_datetime(value, fmt)
                .or_else(|| parse_local_datetime(value, fmt))
                .or_else(|| parse_local_date(value, fmt))
        })
    }
}

impl From<&ParsingConfig> for Parser {
    fn from(config: &ParsingConfig) -> Self {
        Self::with_formats(config.extra_formats.iter().cloned())
    }
}

fn rfc2822_layouts(value: &str) -> Option<DateValue> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        trace!("Parsed '{value}' as strict RFC 2822");
        return Some(DateValue::from(&dt));
    }
    debug!("'{value}' is not strict RFC 2822, trying loose layouts");

    try_parse(value, RFC2822_LOOSE_DATETIME_FORMATS, parse_local_datetime)
        .or_else(|| try_parse(value, RFC2822_LOOSE_DATE_FORMATS, parse_local_date))
}

fn iso8601_layouts(value: &str) -> Option<DateValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        trace!("Parsed '{value}' as RFC 3339");
        return Some(DateValue::from(&dt));
    }
    debug!("'{value}' is not RFC 3339, trying other ISO 8601 layouts");

    try_parse(value, ISO8601_OFFSET_FORMATS, parse_offset_datetime)
        .or_else(|| try_parse(value, ISO8601_LOCAL_FORMATS, parse_local_datetime))
        .or_else(|| parse_utc_date(value, ISO8601_DATE_FORMAT))
}

fn non_empty(value: &str) -> Result<&str, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(value)
}

fn try_parse<I, F>(value: &str, formats: I, parser: F) -> Option<DateValue>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str, &str) -> Option<DateValue>,
{
    for format in formats {
        let format = format.as_ref();
        match parser(value, format) {
            Some(date) => {
                trace!("Parsed '{value}' with layout {format:?}");
                return Some(date);
            }
            None => {
                debug!("Failed to parse '{value}' with layout {format:?}");
                continue;
            }
        }
    }
    None
}

fn parse_offset_datetime(value: &str, fmt: &str) -> Option<DateValue> {
    DateTime::parse_from_str(value, fmt).ok().map(|dt| DateValue::from(&dt))
}

fn parse_local_datetime(value: &str, fmt: &str) -> Option<DateValue> {
    NaiveDateTime::parse_from_str(value, fmt)
        .ok()
        .and_then(DateValue::from_naive_local)
}

fn parse_local_date(value: &str, fmt: &str) -> Option<DateValue> {
    NaiveDate::parse_from_str(value, fmt)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(DateValue::from_naive_local)
}

fn parse_utc_date(value: &str, fmt: &str) -> Option<DateValue> {
    let midnight = NaiveDate::parse_from_str(value, fmt).ok()?.and_hms_opt(0, 0, 0)?;
    Some(DateValue::from_utc(Utc.from_utc_datetime(&midnight)))
}
