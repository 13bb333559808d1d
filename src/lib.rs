//! datekit - small date and time helpers
//!
//! Five independent, pure functions over a [`DateValue`]:
//!
//! * [`parse_rfc2822`] / [`parse_iso8601`] - read a date string
//! * [`is_leap_year`] - Gregorian leap-year test on the local year
//! * [`format_time_span`] - field-wise `HH:mm:ss.sss` difference
//! * [`clock_angle`] - angle between the clock hands, in radians
//!
//! ```
//! use datekit::{clock_angle, parse_iso8601};
//!
//! let date = parse_iso8601("2016-04-05T03:00:00Z").unwrap();
//! assert!((clock_angle(&date) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! * [`config`] - Optional TOML configuration
//! * [`logger`] - `fern` logger setup driven by the configuration
//! * [`parse`] - RFC 2822 and ISO 8601 parsing
//! * [`utils`] - Leap years, time spans and clock angles

/// Configuration module for parser layouts and logging
pub mod config;

/// Parser layouts and other constant values
pub mod constants;

/// The instant type shared by every helper
pub mod date_value;

/// Parse error types
pub mod error;

/// Logging setup
pub mod logger;

/// RFC 2822 and ISO 8601 parsing
pub mod parse;

/// Pure date and time calculations
pub mod utils;

pub use date_value::DateValue;
pub use error::{DateFormat, ParseError};
pub use parse::{parse_iso8601, parse_rfc2822, Parser};
pub use utils::clock::{clock_angle, clock_angle_degrees};
pub use utils::date::{is_leap, is_leap_year};
pub use utils::span::{format_time_span, TimeSpan};
