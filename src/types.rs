//! Type definitions and constants for Hijri calendar computation and display.

use chrono::{NaiveDate, Weekday};
use clap::ValueEnum;

/// Hijri (Islamic) month, numbered 1 (Muharram) to 12 (Dhu al-Hijjah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HijriMonth {
    Muharram = 1,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

impl HijriMonth {
    /// All months in calendar order.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Map a 1-based month number to a month.
    pub fn from_number(month: u32) -> Option<Self> {
        match month {
            1 => Some(HijriMonth::Muharram),
            2 => Some(HijriMonth::Safar),
            3 => Some(HijriMonth::RabiAlAwwal),
            4 => Some(HijriMonth::RabiAlThani),
            5 => Some(HijriMonth::JumadaAlAwwal),
            6 => Some(HijriMonth::JumadaAlThani),
            7 => Some(HijriMonth::Rajab),
            8 => Some(HijriMonth::Shaban),
            9 => Some(HijriMonth::Ramadan),
            10 => Some(HijriMonth::Shawwal),
            11 => Some(HijriMonth::DhuAlQidah),
            12 => Some(HijriMonth::DhuAlHijjah),
            _ => None,
        }
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32
    }
}

/// Static month table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    /// English transliteration.
    pub name: &'static str,
    pub name_ar: &'static str,
    /// Canonical length. Dhu al-Hijjah gains a day in leap years.
    pub days: u32,
}

/// Fixed-date Islamic event from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslamicEvent {
    pub name: &'static str,
    pub name_ar: &'static str,
    pub month: HijriMonth,
    pub day: u32,
    pub description: &'static str,
    pub description_ar: &'static str,
    /// Whether the event is a public holiday (excluded from business days).
    pub is_holiday: bool,
}

/// A date in the tabular Hijri calendar.
///
/// The day never exceeds the month length for the year. Values built by
/// `new`, `try_from_gregorian` or parsing also have a year of at least 1;
/// only the total `gregorian_to_hijri` yields proleptic years below 1, for
/// Gregorian dates before 19 July 622. The matching Gregorian date is
/// carried along so the weekday comes from the Gregorian side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    pub(crate) year: i32,
    pub(crate) month: HijriMonth,
    pub(crate) day: u32,
    pub(crate) gregorian: NaiveDate,
}

/// Catalog event projected onto a concrete Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingEvent {
    pub event: &'static IslamicEvent,
    pub date: HijriDate,
}

/// One day of a Hijri month, as consumed by calendar grid renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub gregorian: NaiveDate,
    pub is_today: bool,
    /// Friday or Saturday.
    pub is_weekend: bool,
    pub is_holiday: bool,
}

/// Output language for formatted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[value(name = "ar")]
    Arabic,
    #[value(name = "en")]
    English,
}

/// Hijri date string style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    /// `DayName D MonthName YYYYهـ`
    Full,
    /// `D MonthName YYYY`
    Short,
    /// `DD/MM/YYYY`
    Numeric,
}

/// Display options for the terminal month grid.
#[derive(Clone, Debug)]
pub struct DisplayContext {
    /// First day of the week (Saturday or Sunday).
    pub week_start: Weekday,
    pub language: Language,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
}

/// Grid layout data for a single Hijri month.
pub struct MonthData {
    pub year: i32,
    pub month: HijriMonth,
    /// 42 cells, `None` for padding before and after the month.
    pub cells: Vec<Option<CalendarDay>>,
}

pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days
pub const MONTH_GRID_WIDTH: usize = 20;

pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
