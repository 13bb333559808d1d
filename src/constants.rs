//! Constants used throughout the crate
//!
//! Parser layouts, configuration file names and logging defaults live here
//! so tests and configuration validation can refer to the same values.

// RFC 2822 style layouts without a zone, read as local time
pub const RFC2822_LOOSE_DATETIME_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%b %d, %Y %H:%M",
];

// Date-only variants, read as local midnight
pub const RFC2822_LOOSE_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %b %Y"];

// ISO 8601 layouts with a compact (`+0100`) offset
pub const ISO8601_OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

// ISO 8601 date-time without an offset, read as local time
pub const ISO8601_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// ISO 8601 calendar date; a bare date is midnight UTC
pub const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

// Configuration
pub const CONFIG_FILE_NAME: &str = "datekit.toml";
pub const CONFIG_DIR_NAME: &str = "datekit";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Logging
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];
pub const DEFAULT_LOG_LEVEL: &str = "info";
