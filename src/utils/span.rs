//! Time span formatting
//!
//! A [`TimeSpan`] is the field-by-field difference of two instants' local
//! clock readings. Hours, minutes, seconds and milliseconds are subtracted
//! independently with no borrowing between them, so the result only reads as
//! elapsed time when both instants fall on the same day and every field of
//! `end` is at least the matching field of `start`.

use crate::date_value::DateValue;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeSpan {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl TimeSpan {
    /// Field-wise difference `end - start` on local time fields.
    pub fn between(start: &DateValue, end: &DateValue) -> Self {
        Self {
            hours: diff(start.hour(), end.hour()),
            minutes: diff(start.minute(), end.minute()),
            seconds: diff(start.second(), end.second()),
            milliseconds: diff(start.millisecond(), end.millisecond()),
        }
    }
}

fn diff(start: u32, end: u32) -> i64 {
    i64::from(end) - i64::from(start)
}

/// Renders `HH:mm:ss.sss`. Each field's decimal text is left-filled with
/// `0` up to its width, sign included: `-5` milliseconds is `0-5`.
impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0>2}:{:0>2}:{:0>2}.{:0>3}",
            self.hours.to_string(),
            self.minutes.to_string(),
            self.seconds.to_string(),
            self.milliseconds.to_string()
        )
    }
}

/// Format the field-wise difference between two instants as `HH:mm:ss.sss`.
///
/// See [`TimeSpan`] for why this is not a general duration.
pub fn format_time_span(start: &DateValue, end: &DateValue) -> String {
    TimeSpan::between(start, end).to_string()
}
