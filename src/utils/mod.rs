//! Date and time calculations.
//!
//! Each function here is a pure calculation over one or two
//! [`DateValue`](crate::DateValue)s:
//!
//! - [`date`] - Gregorian leap-year test
//! - [`span`] - field-wise `HH:mm:ss.sss` difference of two instants
//! - [`clock`] - angle between the hands of an analog clock

pub mod clock;
pub mod date;
pub mod span;
