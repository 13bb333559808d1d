//! Calendar helpers

use crate::date_value::DateValue;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether the local calendar year of `date` is a leap year.
///
/// Only the year matters; month and day are ignored.
pub fn is_leap_year(date: &DateValue) -> bool {
    is_leap(date.year())
}
