//! Angle between the hands of an analog clock

use crate::date_value::DateValue;
use std::f64::consts::PI;

/// Smaller angle between the hour and minute hands at the UTC time of
/// `date`, in degrees (`0.0..=180.0`).
///
/// The hour hand turns 0.5° per minute and the minute hand 6° per minute,
/// so the gap is `0.5 * (60 * h - 11 * m)`. Seconds are ignored.
pub fn clock_angle_degrees(date: &DateValue) -> f64 {
    let hour = f64::from(date.utc_hour() % 12);
    let minute = f64::from(date.utc_minute());

    // The raw gap lies in -324.5..=330; fold the magnitude onto the short side.
    let diff = (0.5 * (60.0 * hour - 11.0 * minute)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// [`clock_angle_degrees`] in radians (`0.0..=PI`).
pub fn clock_angle(date: &DateValue) -> f64 {
    // Convert last so whole-degree angles map exactly onto PI fractions.
    clock_angle_degrees(date) * PI / 180.0
}
