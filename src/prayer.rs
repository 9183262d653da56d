//! Approximate prayer times.
//!
//! This is a placeholder schedule, not an astronomical calculation: every
//! date and location gets the same fixed times. Anything that needs real
//! times must use a solar-angle method instead.

use chrono::{NaiveDate, NaiveTime};

use crate::error::HijriError;
use crate::types::Language;

/// Daily prayer schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerTimes {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl PrayerTimes {
    /// Prayers in daily order, labelled in `language`.
    pub fn entries(&self, language: Language) -> [(&'static str, NaiveTime); 6] {
        let names = match language {
            Language::English => ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"],
            Language::Arabic => ["الفجر", "الشروق", "الظهر", "العصر", "المغرب", "العشاء"],
        };
        [
            (names[0], self.fajr),
            (names[1], self.sunrise),
            (names[2], self.dhuhr),
            (names[3], self.asr),
            (names[4], self.maghrib),
            (names[5], self.isha),
        ]
    }
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

/// Approximate prayer times for a date and location.
///
/// The coordinates are only range-checked; the returned schedule does not
/// depend on them or on the date.
pub fn prayer_times(date: NaiveDate, lat: f64, lng: f64) -> Result<PrayerTimes, HijriError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(HijriError::InvalidCoordinates { lat, lng });
    }
    tracing::debug!(%date, lat, lng, "returning fixed approximate prayer schedule");

    Ok(PrayerTimes {
        fajr: hm(4, 30),
        sunrise: hm(5, 50),
        dhuhr: hm(12, 15),
        asr: hm(15, 45),
        maghrib: hm(18, 30),
        isha: hm(20, 0),
    })
}
