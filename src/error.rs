//! Error types for Hijri date construction and conversion.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HijriError {
    #[error("invalid Hijri date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid date string: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    #[error("invalid Hijri month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("{date} is before 1 Muharram 1 AH (0622-07-19)")]
    BeforeEpoch { date: NaiveDate },

    #[error("julian day {jdn} is outside the supported Gregorian range")]
    OutOfRange { jdn: i64 },

    #[error("invalid coordinates: latitude {lat}, longitude {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
}
