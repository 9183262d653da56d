//! Tabular Hijri calendar arithmetic built on Julian Day Numbers.
//!
//! The arithmetic (civil) Islamic calendar repeats every 30 years: 10631
//! days, of which 11 years carry a 30th day in Dhu al-Hijjah. Dates computed
//! this way can differ by a day or two from sighting-based calendars such as
//! Umm al-Qura.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::error::HijriError;
use crate::tables::{month_info, weekday_name_ar, weekday_name_en};
use crate::types::{CELLS_PER_MONTH, DisplayContext, HijriDate, HijriMonth, MonthData};

/// Julian Day Number of 1 Muharram 1 AH (16 July 622, Julian calendar).
///
/// The astronomical epoch is JD 1948439.5, the midnight that begins this
/// civil day, so whole day numbers are used everywhere.
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Positions within the 30-year cycle that are leap years.
pub const LEAP_YEAR_OFFSETS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

const CYCLE_YEARS: i64 = 30;
const CYCLE_DAYS: i64 = 10_631;

/// Check if a Hijri year has 355 days.
pub fn is_hijri_leap_year(year: i32) -> bool {
    is_leap(i64::from(year))
}

fn is_leap(year: i64) -> bool {
    LEAP_YEAR_OFFSETS.contains(&year.rem_euclid(CYCLE_YEARS))
}

fn month_len(year: i64, month: HijriMonth) -> u32 {
    let days = month_info(month).days;
    if month == HijriMonth::DhuAlHijjah && is_leap(year) {
        days + 1
    } else {
        days
    }
}

fn year_len(year: i64) -> i64 {
    if is_leap(year) { 355 } else { 354 }
}

/// Length of a month, including the leap day of Dhu al-Hijjah.
pub fn month_length(year: i32, month: HijriMonth) -> u32 {
    month_len(i64::from(year), month)
}

/// Length of a month given by number, `None` if the month is not 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    HijriMonth::from_number(month).map(|m| month_length(year, m))
}

pub fn days_in_year(year: i32) -> u32 {
    year_len(i64::from(year)) as u32
}

/// Days from the epoch to 1 Muharram of `year`.
fn days_before_year(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(CYCLE_YEARS)
}

/// Days from 1 Muharram to the first of `month` in `year`.
fn days_before_month(year: i64, month: HijriMonth) -> u32 {
    HijriMonth::ALL
        .iter()
        .take_while(|&&m| m < month)
        .map(|&m| month_len(year, m))
        .sum()
}

/// Check a Hijri triple: year from 1, month 1-12, day within the month.
pub fn is_valid_hijri_date(year: i32, month: u32, day: u32) -> bool {
    year >= 1 && day >= 1 && days_in_month(year, month).is_some_and(|len| day <= len)
}

/// Julian Day Number of a proleptic Gregorian date.
///
/// Integer formula of Fliegel and Van Flandern with floor division, valid
/// for every date chrono can represent.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Proleptic Gregorian (year, month, day) of a Julian Day Number.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month as u32, day as u32)
}

/// Convert a Julian Day Number to a chrono date.
pub fn jdn_to_date(jdn: i64) -> Result<NaiveDate, HijriError> {
    let min = gregorian_to_jdn(NaiveDate::MIN.year(), 1, 1);
    let max = gregorian_to_jdn(NaiveDate::MAX.year(), 12, 31);
    if !(min..=max).contains(&jdn) {
        return Err(HijriError::OutOfRange { jdn });
    }

    let (year, month, day) = jdn_to_gregorian(jdn);
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or(HijriError::OutOfRange { jdn })
}

fn hijri_to_jdn(year: i64, month: HijriMonth, day: u32) -> i64 {
    HIJRI_EPOCH_JDN
        + days_before_year(year)
        + i64::from(days_before_month(year, month))
        + i64::from(day)
        - 1
}

fn jdn_to_hijri(jdn: i64) -> (i64, HijriMonth, u32) {
    let elapsed = jdn - HIJRI_EPOCH_JDN;
    let mut year = (CYCLE_YEARS * elapsed + 10_646).div_euclid(CYCLE_DAYS);
    let mut remaining = elapsed - days_before_year(year);

    // The closed form already lands in the right year; keep the invariant
    // 0 <= remaining < year length explicit for the month walk below.
    while remaining < 0 {
        year -= 1;
        remaining += year_len(year);
    }
    while remaining >= year_len(year) {
        remaining -= year_len(year);
        year += 1;
    }

    for month in HijriMonth::ALL {
        let len = i64::from(month_len(year, month));
        if remaining < len {
            return (year, month, remaining as u32 + 1);
        }
        remaining -= len;
    }

    // unreachable: the months of a year add up to its length
    let last = HijriMonth::DhuAlHijjah;
    (year, last, month_len(year, last))
}

/// Convert a Gregorian date to the tabular Hijri calendar.
///
/// Total over every date chrono can represent. Dates before 19 July 622
/// fall before the epoch and come back with a proleptic year below 1, which
/// [`HijriDate::new`] would reject; use [`HijriDate::try_from_gregorian`]
/// where such input must be refused.
pub fn gregorian_to_hijri(date: NaiveDate) -> HijriDate {
    let jdn = gregorian_to_jdn(date.year(), date.month(), date.day());
    let (year, month, day) = jdn_to_hijri(jdn);

    // chrono's range keeps Hijri years far inside i32
    let hijri = HijriDate {
        year: year as i32,
        month,
        day,
        gregorian: date,
    };
    tracing::trace!(%date, %hijri, "converted gregorian date");
    hijri
}

/// Convert a Hijri date to the proleptic Gregorian calendar.
///
/// Triples failing [`is_valid_hijri_date`] are rejected rather than mapped
/// onto a neighbouring day.
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, HijriError> {
    if !is_valid_hijri_date(year, month, day) {
        tracing::debug!(year, month, day, "rejected invalid hijri date");
        return Err(HijriError::InvalidDate { year, month, day });
    }
    let hijri_month = HijriMonth::from_number(month).ok_or(HijriError::InvalidMonth(month))?;

    jdn_to_date(hijri_to_jdn(i64::from(year), hijri_month, day))
}

impl HijriDate {
    /// Build a validated Hijri date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, HijriError> {
        let gregorian = hijri_to_gregorian(year, month, day)?;
        let month = HijriMonth::from_number(month).ok_or(HijriError::InvalidMonth(month))?;
        Ok(HijriDate {
            year,
            month,
            day,
            gregorian,
        })
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        gregorian_to_hijri(date)
    }

    /// Convert a Gregorian date, refusing dates before 1 Muharram 1 AH.
    pub fn try_from_gregorian(date: NaiveDate) -> Result<Self, HijriError> {
        let hijri = gregorian_to_hijri(date);
        if hijri.year < 1 {
            tracing::debug!(%date, "rejected date before the hijri epoch");
            return Err(HijriError::BeforeEpoch { date });
        }
        Ok(hijri)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month.number()
    }

    pub fn hijri_month(&self) -> HijriMonth {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The same day in the proleptic Gregorian calendar.
    pub fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub fn jdn(&self) -> i64 {
        gregorian_to_jdn(
            self.gregorian.year(),
            self.gregorian.month(),
            self.gregorian.day(),
        )
    }

    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday()
    }

    /// Day of week, 0 = Sunday.
    pub fn day_of_week(&self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    /// Arabic month name.
    pub fn month_name(&self) -> &'static str {
        month_info(self.month).name_ar
    }

    pub fn month_name_en(&self) -> &'static str {
        month_info(self.month).name
    }

    /// Arabic weekday name.
    pub fn day_of_week_name(&self) -> &'static str {
        weekday_name_ar(self.weekday())
    }

    pub fn day_of_week_name_en(&self) -> &'static str {
        weekday_name_en(self.weekday())
    }

    /// Ordinal day within the Hijri year, 1-based.
    pub fn day_of_year(&self) -> u32 {
        days_before_month(i64::from(self.year), self.month) + self.day
    }

    pub fn is_leap_year(&self) -> bool {
        is_hijri_leap_year(self.year)
    }

    pub fn month_length(&self) -> u32 {
        month_length(self.year, self.month)
    }

    /// Move forward or backward by whole days.
    pub fn add_days(&self, days: i64) -> Result<Self, HijriError> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.gregorian.checked_add_signed(delta))
            .map(gregorian_to_hijri)
            .ok_or(HijriError::OutOfRange {
                jdn: self.jdn().saturating_add(days),
            })
    }
}

impl PartialOrd for HijriDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HijriDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 1 {
            // proleptic years keep their sign unpadded, as in error messages
            return write!(f, "{}-{:02}-{:02}", self.year, self.month(), self.day);
        }
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month(), self.day)
    }
}

impl FromStr for HijriDate {
    type Err = HijriError;

    /// Parse `YYYY-MM-DD` (Hijri year, month, day).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HijriError::InvalidFormat(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(invalid);

        let year = next()?.parse::<i32>().map_err(|_| invalid())?;
        let month = next()?.parse::<u32>().map_err(|_| invalid())?;
        let day = next()?.parse::<u32>().map_err(|_| invalid())?;
        HijriDate::new(year, month, day)
    }
}

impl MonthData {
    /// Build grid data for a Hijri month, aligned to the context's week start.
    pub fn new(ctx: &DisplayContext, year: i32, month: HijriMonth) -> Result<Self, HijriError> {
        let days = crate::queries::calendar_month(year, month.number(), ctx.today)?;

        let offset = days.first().map_or(0, |first| {
            let first_weekday = first.gregorian.weekday().num_days_from_sunday();
            let start = ctx.week_start.num_days_from_sunday();
            ((first_weekday + 7 - start) % 7) as usize
        });

        let mut cells = Vec::with_capacity(CELLS_PER_MONTH);
        cells.resize(offset, None);
        cells.extend(days.into_iter().map(Some));
        if cells.len() < CELLS_PER_MONTH {
            cells.resize(CELLS_PER_MONTH, None);
        }

        Ok(MonthData { year, month, cells })
    }
}
