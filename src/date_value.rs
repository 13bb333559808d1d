//! The instant type shared by every helper in the crate.
//!
//! A [`DateValue`] is a single point in time. Calendar and clock fields are
//! available both in UTC (`utc_*` accessors) and in the host's local time
//! zone (plain accessors), the same split a JavaScript `Date` offers.

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeDelta, TimeZone,
    Timelike, Utc, Weekday,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable instant with UTC and local field accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateValue(DateTime<Utc>);

impl DateValue {
    /// Wrap an existing UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build an instant from UTC calendar fields.
    ///
    /// Returns `None` when any field is out of range (month 13, Feb 30, ...).
    pub fn from_utc_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, milli)?;
        Some(Self(Utc.from_utc_datetime(&naive)))
    }

    /// Build an instant from calendar fields in the host's local time zone.
    ///
    /// Returns `None` for out-of-range fields. Wall-clock times around a DST
    /// transition resolve as described on [`resolve_local`].
    pub fn from_local_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, milli)?;
        Self::from_naive_local(naive)
    }

    /// Milliseconds since the Unix epoch.
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Interpret a zone-less datetime as local wall-clock time.
    pub(crate) fn from_naive_local(naive: NaiveDateTime) -> Option<Self> {
        resolve_local(&Local, &naive).map(Self)
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC datetime.
    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// The instant viewed in the host's local time zone.
    pub fn as_local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    // Local fields

    pub fn year(&self) -> i32 {
        self.as_local().year()
    }

    /// Month of the year, 1 through 12.
    pub fn month(&self) -> u32 {
        self.as_local().month()
    }

    pub fn day(&self) -> u32 {
        self.as_local().day()
    }

    pub fn weekday(&self) -> Weekday {
        self.as_local().weekday()
    }

    pub fn hour(&self) -> u32 {
        self.as_local().hour()
    }

    pub fn minute(&self) -> u32 {
        self.as_local().minute()
    }

    pub fn second(&self) -> u32 {
        self.as_local().second()
    }

    pub fn millisecond(&self) -> u32 {
        millis_of(self.as_local().nanosecond())
    }

    /// Offset of the local time zone at this instant, in minutes east of UTC.
    pub fn offset_minutes(&self) -> i32 {
        self.as_local().offset().local_minus_utc() / 60
    }

    // UTC fields

    pub fn utc_year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year in UTC, 1 through 12.
    pub fn utc_month(&self) -> u32 {
        self.0.month()
    }

    pub fn utc_day(&self) -> u32 {
        self.0.day()
    }

    pub fn utc_weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn utc_hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn utc_minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn utc_second(&self) -> u32 {
        self.0.second()
    }

    pub fn utc_millisecond(&self) -> u32 {
        millis_of(self.0.nanosecond())
    }

    /// Format as RFC 2822 in UTC, e.g. `Tue, 26 Jan 2016 13:48:02 +0000`.
    pub fn to_rfc2822(&self) -> String {
        self.0.to_rfc2822()
    }

    /// Format as ISO 8601 in UTC with millisecond precision,
    /// e.g. `2016-01-19T08:07:37.000Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Map a wall-clock time in `tz` to an instant.
///
/// A time repeated by a backward transition takes the earlier instant. A
/// time skipped by a forward transition is read with the offset in force
/// before the gap, which lands it past the gap by the gap's length
/// (02:30 on a spring-forward night in New York becomes 03:30 EDT).
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // A day back is well clear of the transition.
            let probe = naive.checked_sub_signed(TimeDelta::days(1))?;
            let before = tz.offset_from_utc_datetime(&probe).fix();
            let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

// Leap seconds are carried as nanoseconds >= 1_000_000_000.
fn millis_of(nanos: u32) -> u32 {
    (nanos / 1_000_000) % 1000
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for DateValue {
    fn from(dt: &DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    #[test]
    fn test_millis_of_leap_second() {
        assert_eq!(millis_of(1_250_000_000), 250);
        assert_eq!(millis_of(999_999_999), 999);
    }

    #[test]
    fn test_utc_fields() {
        let date = DateValue::from_utc_ymd_hms_milli(2016, 1, 19, 8, 7, 37, 125).unwrap();
        assert_eq!(date.utc_year(), 2016);
        assert_eq!(date.utc_month(), 1);
        assert_eq!(date.utc_day(), 19);
        assert_eq!(date.utc_hour(), 8);
        assert_eq!(date.utc_minute(), 7);
        assert_eq!(date.utc_second(), 37);
        assert_eq!(date.utc_millisecond(), 125);
        assert_eq!(date.utc_weekday(), Weekday::Tue);
    }

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn test_resolve_local_plain_time() {
        let utc = resolve_local(&New_York, &naive(2016, 1, 19, 8, 7)).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2016, 1, 19, 13, 7, 0).unwrap());
    }

    #[test]
    fn test_resolve_local_repeated_time_takes_earliest() {
        // 01:30 happens first as EDT (-4), then again as EST (-5)
        let utc = resolve_local(&New_York, &naive(2016, 11, 6, 1, 30)).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2016, 11, 6, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_local_skipped_time_moves_forward() {
        // 02:30 does not exist; read with EST it is 07:30 UTC, i.e. 03:30 EDT
        let utc = resolve_local(&New_York, &naive(2016, 3, 13, 2, 30)).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2016, 3, 13, 7, 30, 0).unwrap());
        assert_eq!(utc.with_timezone(&New_York).hour(), 3);
        assert_eq!(utc.with_timezone(&New_York).minute(), 30);
    }

    #[test]
    fn test_resolve_local_fixed_offset() {
        let offset = chrono::FixedOffset::east_opt(3600).unwrap();
        let utc = resolve_local(&offset, &naive(2016, 3, 13, 2, 30)).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2016, 3, 13, 1, 30, 0).unwrap());
    }

    #[test]
    fn test_out_of_range_fields() {
        assert!(DateValue::from_utc_ymd_hms_milli(2015, 2, 29, 0, 0, 0, 0).is_none());
        assert!(DateValue::from_utc_ymd_hms_milli(2016, 13, 1, 0, 0, 0, 0).is_none());
        assert!(DateValue::from_utc_ymd_hms_milli(2016, 1, 1, 24, 0, 0, 0).is_none());
    }
}
