//! Date queries composed from the conversion core and the static tables.
//!
//! Each query that depends on "today" takes the reference date explicitly;
//! the argument-free variants read the clock once through [`today`].

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{gregorian_to_hijri, hijri_to_gregorian, month_length};
use crate::error::HijriError;
use crate::tables::{ISLAMIC_EVENTS, is_holiday};
use crate::types::{CalendarDay, HijriDate, HijriMonth, UpcomingEvent};

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "HIJRI_TEST_TIME";

/// Get today's date, respecting HIJRI_TEST_TIME environment variable for testing.
pub fn today() -> NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

pub fn current_hijri_date() -> HijriDate {
    gregorian_to_hijri(today())
}

/// Friday and Saturday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Fri | Weekday::Sat)
}

pub fn is_ramadan(date: NaiveDate) -> bool {
    gregorian_to_hijri(date).hijri_month() == HijriMonth::Ramadan
}

pub fn is_currently_ramadan() -> bool {
    is_ramadan(today())
}

/// Days left after `date` in its Hijri month.
pub fn days_remaining_in_month(date: &HijriDate) -> u32 {
    date.month_length() - date.day()
}

pub fn days_remaining_in_hijri_month() -> u32 {
    days_remaining_in_month(&current_hijri_date())
}

/// Catalog events from `today` to the end of its Hijri year, soonest first.
///
/// Events already past in the current year are not rolled over into the
/// next one, so the list empties out towards the end of Dhu al-Hijjah.
pub fn upcoming_events(today: NaiveDate, limit: usize) -> Vec<UpcomingEvent> {
    let current = gregorian_to_hijri(today);
    let today_ordinal = current.day_of_year();

    let mut events: Vec<UpcomingEvent> = ISLAMIC_EVENTS
        .iter()
        .filter_map(|event| {
            HijriDate::new(current.year(), event.month.number(), event.day)
                .ok()
                .map(|date| UpcomingEvent { event, date })
        })
        .filter(|upcoming| upcoming.date.day_of_year() >= today_ordinal)
        .collect();

    events.sort_by_key(|upcoming| upcoming.date.day_of_year());
    events.truncate(limit);
    events
}

pub fn upcoming_islamic_events(limit: usize) -> Vec<UpcomingEvent> {
    upcoming_events(today(), limit)
}

fn month_days(
    year: i32,
    month: u32,
    today: Option<NaiveDate>,
) -> Result<Vec<CalendarDay>, HijriError> {
    let hijri_month = HijriMonth::from_number(month).ok_or(HijriError::InvalidMonth(month))?;
    let first = hijri_to_gregorian(year, month, 1)?;
    let len = month_length(year, hijri_month);

    let days = first
        .iter_days()
        .zip(1..=len)
        .map(|(gregorian, day)| CalendarDay {
            day,
            gregorian,
            is_today: today == Some(gregorian),
            is_weekend: is_weekend(gregorian.weekday()),
            is_holiday: is_holiday(hijri_month, day),
        })
        .collect();
    Ok(days)
}

/// Every day of a Hijri month in order, flagged against `today`.
pub fn calendar_month(
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Vec<CalendarDay>, HijriError> {
    month_days(year, month, Some(today))
}

pub fn hijri_calendar_month(year: i32, month: u32) -> Result<Vec<CalendarDay>, HijriError> {
    calendar_month(year, month, today())
}

/// Working days in a Hijri month: weekends and holiday events excluded.
pub fn business_days_in_month(year: i32, month: u32) -> Result<u32, HijriError> {
    let days = month_days(year, month, None)?;
    let count = days
        .iter()
        .filter(|d| !d.is_weekend && !d.is_holiday)
        .count();
    Ok(count as u32)
}

/// First and last Gregorian dates of a Hijri month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), HijriError> {
    let hijri_month = HijriMonth::from_number(month).ok_or(HijriError::InvalidMonth(month))?;
    let first = hijri_to_gregorian(year, month, 1)?;
    let last = hijri_to_gregorian(year, month, month_length(year, hijri_month))?;
    Ok((first, last))
}
