//! Error types for date parsing.

use std::fmt;

/// Textual date standards understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    Rfc2822,
    Iso8601,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Rfc2822 => f.write_str("RFC 2822"),
            DateFormat::Iso8601 => f.write_str("ISO 8601"),
        }
    }
}

/// Returned when a string cannot be read as a date.
///
/// This takes the place of an "invalid date" value: a [`crate::DateValue`]
/// always holds a real instant, so callers check validity by matching on
/// the parse result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    Empty,

    #[error("Invalid {format} date: '{input}'")]
    Invalid { format: DateFormat, input: String },
}

impl ParseError {
    pub(crate) fn invalid(format: DateFormat, input: &str) -> Self {
        ParseError::Invalid {
            format,
            input: input.to_string(),
        }
    }
}
