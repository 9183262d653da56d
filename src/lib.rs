//! Tabular Hijri (Islamic) calendar engine.
//!
//! Features:
//! - Gregorian and Hijri conversion through Julian Day Numbers
//! - 30-year leap cycle and month length rules
//! - Fixed Islamic event catalog, business days and month grids
//! - Arabic and English date stamps for documents

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod prayer;
pub mod queries;
pub mod tables;
pub mod types;

pub use calendar::{
    gregorian_to_hijri, hijri_to_gregorian, is_hijri_leap_year, is_valid_hijri_date,
};
pub use error::HijriError;
pub use types::{FormatStyle, HijriDate, HijriMonth, Language};
