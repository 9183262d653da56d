//! Unit tests for conversion, derived queries, formatting and argument parsing.

use chrono::{NaiveDate, Weekday};

use hijri::args::{Args, get_display_date};
use hijri::calendar::{
    HIJRI_EPOCH_JDN, days_in_month, days_in_year, gregorian_to_hijri, gregorian_to_jdn,
    hijri_to_gregorian, is_hijri_leap_year, is_valid_hijri_date, jdn_to_date, jdn_to_gregorian,
    month_length,
};
use hijri::error::HijriError;
use hijri::formatter::{
    format_for_legal_document, format_gregorian_span, format_hijri_date, format_month_grid,
    format_month_status, get_weekday_order,
};
use hijri::prayer::prayer_times;
use hijri::queries::{
    business_days_in_month, calendar_month, days_remaining_in_month, is_ramadan, month_bounds,
    upcoming_events,
};
use hijri::tables::{ISLAMIC_EVENTS, month_info};
use hijri::types::{
    CELLS_PER_MONTH, DisplayContext, FormatStyle, HijriDate, HijriMonth, Language, MonthData,
};

use clap::Parser;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn hijri(year: i32, month: u32, day: u32) -> HijriDate {
    HijriDate::new(year, month, day).unwrap()
}

fn base_context() -> DisplayContext {
    DisplayContext {
        week_start: Weekday::Sat,
        language: Language::English,
        color: false,
        today: ymd(2024, 3, 11),
    }
}

// ===========================================================================
// Leap years and month lengths
// ===========================================================================

mod leap_year {
    use super::*;

    #[test]
    fn cycle_offsets_are_leap() {
        for offset in [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29] {
            assert!(is_hijri_leap_year(offset), "year {offset}");
            assert!(is_hijri_leap_year(1440 + offset), "year {}", 1440 + offset);
        }
    }

    #[test]
    fn other_offsets_are_common() {
        for offset in [0, 1, 3, 4, 6, 8, 9, 11, 12, 14, 15, 17, 19, 20, 22, 23, 25, 27, 28] {
            assert!(!is_hijri_leap_year(1440 + offset), "year {}", 1440 + offset);
        }
    }

    #[test]
    fn recent_years() {
        // 1445 mod 30 = 5, 1446 mod 30 = 6
        assert!(is_hijri_leap_year(1445));
        assert!(!is_hijri_leap_year(1446));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(1445), 355);
        assert_eq!(days_in_year(1446), 354);
    }
}

mod month_lengths {
    use super::*;

    #[test]
    fn odd_months_have_30_days() {
        for month in [1, 3, 5, 7, 9, 11] {
            assert_eq!(days_in_month(1446, month), Some(30), "month {month}");
        }
    }

    #[test]
    fn even_months_have_29_days() {
        for month in [2, 4, 6, 8, 10, 12] {
            assert_eq!(days_in_month(1446, month), Some(29), "month {month}");
        }
    }

    #[test]
    fn dhu_al_hijjah_gains_a_day_in_leap_years() {
        assert_eq!(month_length(1445, HijriMonth::DhuAlHijjah), 30);
        assert_eq!(month_length(1446, HijriMonth::DhuAlHijjah), 29);
        // the static table keeps the canonical length
        assert_eq!(month_info(HijriMonth::DhuAlHijjah).days, 29);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(days_in_month(1446, 0), None);
        assert_eq!(days_in_month(1446, 13), None);
    }

    #[test]
    fn month_numbers_round_trip() {
        for (i, month) in HijriMonth::ALL.iter().enumerate() {
            assert_eq!(month.number(), i as u32 + 1);
            assert_eq!(HijriMonth::from_number(month.number()), Some(*month));
        }
    }
}

// ===========================================================================
// Validation
// ===========================================================================

mod validation {
    use super::*;

    #[test]
    fn last_day_of_dhu_al_hijjah() {
        assert!(!is_valid_hijri_date(1446, 12, 30));
        assert!(is_valid_hijri_date(1446, 12, 29));
        assert!(is_valid_hijri_date(1445, 12, 30));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(!is_valid_hijri_date(1446, 0, 1));
        assert!(!is_valid_hijri_date(1446, 13, 1));
        assert!(!is_valid_hijri_date(1446, 1, 0));
        assert!(!is_valid_hijri_date(1446, 2, 30));
        assert!(!is_valid_hijri_date(0, 1, 1));
        assert!(!is_valid_hijri_date(-5, 1, 1));
    }

    #[test]
    fn hijri_to_gregorian_rejects_invalid() {
        assert_eq!(
            hijri_to_gregorian(1446, 12, 30),
            Err(HijriError::InvalidDate {
                year: 1446,
                month: 12,
                day: 30
            })
        );
        assert!(HijriDate::new(1446, 13, 1).is_err());
    }
}

// ===========================================================================
// Julian Day Numbers
// ===========================================================================

mod julian_day {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_jdn(2024, 3, 11), 2_460_381);
        assert_eq!(gregorian_to_jdn(1858, 11, 17), 2_400_001);
    }

    #[test]
    fn hijri_epoch() {
        // 16 July 622 Julian = 19 July 622 proleptic Gregorian
        assert_eq!(gregorian_to_jdn(622, 7, 19), HIJRI_EPOCH_JDN);
        assert_eq!(jdn_to_gregorian(HIJRI_EPOCH_JDN), (622, 7, 19));
    }

    #[test]
    fn inverse_handles_month_boundaries() {
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
        assert_eq!(jdn_to_gregorian(2_451_544), (1999, 12, 31));
        assert_eq!(jdn_to_gregorian(2_451_604), (2000, 2, 29));
    }

    #[test]
    fn out_of_range_jdn() {
        assert!(matches!(
            jdn_to_date(i64::MAX / 2),
            Err(HijriError::OutOfRange { .. })
        ));
    }
}

// ===========================================================================
// Conversion
// ===========================================================================

mod conversion {
    use super::*;

    #[test]
    fn ramadan_1445_start() {
        let date = gregorian_to_hijri(ymd(2024, 3, 11));
        assert_eq!(date.year(), 1445);
        assert_eq!(date.month(), 9);
        assert!((1..=2).contains(&date.day()));
        assert_eq!(date.day_of_week(), 1);
        assert_eq!(date.day_of_week_name(), "الإثنين");
        assert_eq!(date.month_name(), "رمضان");
        assert_eq!(date.month_name_en(), "Ramadan");
    }

    #[test]
    fn millennium() {
        let date = gregorian_to_hijri(ymd(2000, 1, 1));
        assert_eq!((date.year(), date.month(), date.day()), (1420, 9, 24));
        assert_eq!(date.weekday(), Weekday::Sat);
    }

    #[test]
    fn new_year_1446() {
        assert_eq!(hijri_to_gregorian(1446, 1, 1), Ok(ymd(2024, 7, 8)));
        assert_eq!(hijri(1446, 1, 1).day_of_week_name_en(), "Monday");
    }

    #[test]
    fn eid_al_fitr_1445() {
        let date = gregorian_to_hijri(ymd(2024, 4, 10));
        assert_eq!((date.year(), date.hijri_month(), date.day()), (1445, HijriMonth::Shawwal, 1));
    }

    #[test]
    fn leap_day_of_1445() {
        let leap_day = hijri(1445, 12, 30);
        let next = leap_day.add_days(1).unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (1446, 1, 1));
    }

    #[test]
    fn epoch_day() {
        let date = gregorian_to_hijri(ymd(622, 7, 19));
        assert_eq!((date.year(), date.month(), date.day()), (1, 1, 1));
        let before = gregorian_to_hijri(ymd(622, 7, 18));
        assert_eq!(before.year(), 0);
    }

    #[test]
    fn fallible_conversion_refuses_dates_before_epoch() {
        assert_eq!(HijriDate::try_from_gregorian(ymd(622, 7, 19)), Ok(hijri(1, 1, 1)));
        assert_eq!(
            HijriDate::try_from_gregorian(ymd(622, 7, 18)),
            Err(HijriError::BeforeEpoch { date: ymd(622, 7, 18) })
        );
        assert!(HijriDate::try_from_gregorian(ymd(600, 1, 1)).is_err());
        assert_eq!(
            HijriDate::try_from_gregorian(ymd(2024, 3, 11)),
            Ok(gregorian_to_hijri(ymd(2024, 3, 11)))
        );
    }

    #[test]
    fn proleptic_year_keeps_its_sign() {
        let date = gregorian_to_hijri(ymd(600, 1, 1));
        assert_eq!((date.year(), date.month(), date.day()), (-23, 10, 6));
        assert_eq!(date.to_string(), "-23-10-06");
        assert!(date.to_string().parse::<HijriDate>().is_err());
    }

    #[test]
    fn weekday_comes_from_gregorian_date() {
        let date = hijri(1446, 9, 1);
        assert_eq!(date.gregorian(), ymd(2025, 3, 1));
        assert_eq!(date.day_of_week(), 6);
        assert_eq!(date.day_of_week_name(), "السبت");
    }

    #[test]
    fn day_of_year() {
        assert_eq!(hijri(1446, 1, 1).day_of_year(), 1);
        assert_eq!(hijri(1446, 9, 1).day_of_year(), 237);
        assert_eq!(hijri(1445, 12, 30).day_of_year(), 355);
    }

    #[test]
    fn parse_and_display() {
        let date: HijriDate = "1446-09-01".parse().unwrap();
        assert_eq!(date, hijri(1446, 9, 1));
        assert_eq!(date.to_string(), "1446-09-01");
        assert!(matches!(
            "1446-9".parse::<HijriDate>(),
            Err(HijriError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1446-12-30".parse::<HijriDate>(),
            Err(HijriError::InvalidDate { .. })
        ));
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(hijri(1445, 12, 30) < hijri(1446, 1, 1));
        assert!(hijri(1446, 9, 2) > hijri(1446, 9, 1));
    }
}

// ===========================================================================
// Derived queries
// ===========================================================================

mod queries {
    use super::*;

    #[test]
    fn ramadan_detection() {
        assert!(is_ramadan(ymd(2024, 3, 11)));
        assert!(is_ramadan(ymd(2024, 4, 9)));
        assert!(!is_ramadan(ymd(2024, 4, 10)));
        assert!(!is_ramadan(ymd(2024, 3, 10)));
    }

    #[test]
    fn days_remaining() {
        assert_eq!(days_remaining_in_month(&hijri(1445, 9, 1)), 29);
        assert_eq!(days_remaining_in_month(&hijri(1445, 12, 1)), 29);
        assert_eq!(days_remaining_in_month(&hijri(1446, 12, 29)), 0);
    }

    #[test]
    fn upcoming_after_eid_al_fitr_is_eid_al_adha() {
        let today = hijri(1445, 10, 2).gregorian();
        let events = upcoming_events(today, 1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event.name, "Eid al-Adha");
        assert_eq!(events[0].event.month, HijriMonth::DhuAlHijjah);
        assert_eq!(events[0].event.day, 10);
        assert_eq!(events[0].date.gregorian(), ymd(2024, 6, 17));
    }

    #[test]
    fn upcoming_includes_today() {
        let today = hijri(1446, 9, 1).gregorian();
        let events = upcoming_events(today, 10);
        let names: Vec<&str> = events.iter().map(|e| e.event.name).collect();
        assert_eq!(
            names,
            ["Start of Ramadan", "Laylat al-Qadr", "Eid al-Fitr", "Eid al-Adha"]
        );
    }

    #[test]
    fn upcoming_does_not_wrap_into_next_year() {
        let today = hijri(1446, 12, 11).gregorian();
        assert!(upcoming_events(today, 5).is_empty());
    }

    #[test]
    fn upcoming_from_new_year_lists_whole_catalog() {
        let today = hijri(1446, 1, 1).gregorian();
        assert_eq!(upcoming_events(today, 100).len(), ISLAMIC_EVENTS.len());
        assert!(upcoming_events(today, 0).is_empty());
    }

    #[test]
    fn business_days_ramadan_1445() {
        // 11 Mar - 9 Apr 2024: four Fridays and four Saturdays
        assert_eq!(business_days_in_month(1445, 9), Ok(22));
    }

    #[test]
    fn business_days_exclude_eid() {
        // 10 Apr - 8 May 2024: eight weekend days, Eid al-Fitr on a Wednesday
        assert_eq!(business_days_in_month(1445, 10), Ok(20));
    }

    #[test]
    fn business_days_invalid_month() {
        assert_eq!(
            business_days_in_month(1445, 13),
            Err(HijriError::InvalidMonth(13))
        );
    }

    #[test]
    fn calendar_month_grid_data() {
        let days = calendar_month(1445, 9, ymd(2024, 3, 15)).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].gregorian, ymd(2024, 3, 11));
        assert_eq!(days[29].gregorian, ymd(2024, 4, 9));

        let today: Vec<u32> = days.iter().filter(|d| d.is_today).map(|d| d.day).collect();
        assert_eq!(today, [5]);
        assert!(days[4].is_weekend);
        assert!(days[5].is_weekend);
        assert!(!days[6].is_weekend);
    }

    #[test]
    fn calendar_month_flags_holidays() {
        let days = calendar_month(1445, 12, ymd(2024, 1, 1)).unwrap();
        assert_eq!(days.len(), 30);
        let holidays: Vec<u32> = days.iter().filter(|d| d.is_holiday).map(|d| d.day).collect();
        assert_eq!(holidays, [10]);
    }

    #[test]
    fn month_bounds_of_ramadan() {
        assert_eq!(
            month_bounds(1445, 9),
            Ok((ymd(2024, 3, 11), ymd(2024, 4, 9)))
        );
    }
}

// ===========================================================================
// Formatting
// ===========================================================================

mod formatting {
    use super::*;

    #[test]
    fn numeric_style() {
        assert_eq!(
            format_hijri_date(&hijri(1446, 9, 1), FormatStyle::Numeric),
            "01/09/1446"
        );
    }

    #[test]
    fn short_style() {
        assert_eq!(
            format_hijri_date(&hijri(1446, 9, 1), FormatStyle::Short),
            "1 رمضان 1446"
        );
    }

    #[test]
    fn full_style() {
        assert_eq!(
            format_hijri_date(&hijri(1446, 9, 1), FormatStyle::Full),
            "السبت 1 رمضان 1446هـ"
        );
    }

    #[test]
    fn month_status_lines() {
        let ramadan = hijri(1446, 9, 1);
        assert_eq!(
            format_month_status(&ramadan, true, 29, Language::English),
            ["Ramadan: yes".to_string(), "Days remaining in Ramadan: 29".to_string()]
        );
        assert_eq!(
            format_month_status(&ramadan, true, 29, Language::Arabic),
            ["رمضان: نعم".to_string(), "الأيام المتبقية في رمضان: 29".to_string()]
        );
        let shawwal = hijri(1445, 10, 2);
        assert_eq!(
            format_month_status(&shawwal, false, 27, Language::English)[0],
            "Ramadan: no"
        );
    }

    #[test]
    fn legal_document_arabic() {
        assert_eq!(
            format_for_legal_document(&hijri(1446, 9, 1), Language::Arabic),
            "1 من شهر رمضان لعام 1446 هجرية"
        );
    }

    #[test]
    fn legal_document_english() {
        assert_eq!(
            format_for_legal_document(&hijri(1446, 12, 10), Language::English),
            "10 Dhu al-Hijjah 1446 AH"
        );
    }

    #[test]
    fn weekday_order_from_saturday() {
        assert_eq!(
            get_weekday_order(Weekday::Sat),
            [
                Weekday::Sat,
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
        );
    }

    #[test]
    fn gregorian_span_across_years() {
        let days = calendar_month(1445, 6, ymd(2024, 1, 1)).unwrap();
        assert_eq!(format_gregorian_span(&days), "14 Dec 2023 - 11 Jan 2024");
    }

    #[test]
    fn month_grid_layout() {
        let ctx = base_context();
        let month = MonthData::new(&ctx, 1445, HijriMonth::Ramadan).unwrap();
        assert_eq!(month.cells.len(), CELLS_PER_MONTH);
        // 1 Ramadan 1445 is a Monday, third column when weeks start on Saturday
        assert_eq!(month.cells.iter().position(Option::is_some), Some(2));

        let lines = format_month_grid(&ctx, &month);
        assert_eq!(lines[0].trim(), "Ramadan 1445 AH");
        assert_eq!(lines[1].trim(), "11 Mar - 9 Apr 2024");
        assert_eq!(lines[2], "Sa Su Mo Tu We Th Fr");
        assert_eq!(lines[3], "       1  2  3  4  5");
        assert_eq!(lines.last().map(String::as_str), Some("27 28 29 30"));
    }

    #[test]
    fn month_grid_sunday_start() {
        let ctx = DisplayContext {
            week_start: Weekday::Sun,
            ..base_context()
        };
        let month = MonthData::new(&ctx, 1445, HijriMonth::Ramadan).unwrap();
        assert_eq!(month.cells.iter().position(Option::is_some), Some(1));
    }
}

// ===========================================================================
// Prayer times
// ===========================================================================

mod prayer {
    use super::*;

    #[test]
    fn fixed_schedule_ignores_location() {
        let riyadh = prayer_times(ymd(2024, 3, 11), 24.7136, 46.6753).unwrap();
        let jeddah = prayer_times(ymd(2024, 7, 1), 21.4858, 39.1925).unwrap();
        assert_eq!(riyadh, jeddah);
        assert!(riyadh.fajr < riyadh.sunrise);
        assert!(riyadh.maghrib < riyadh.isha);
    }

    #[test]
    fn rejects_invalid_coordinates() {
        assert!(matches!(
            prayer_times(ymd(2024, 3, 11), 91.0, 0.0),
            Err(HijriError::InvalidCoordinates { .. })
        ));
        assert!(prayer_times(ymd(2024, 3, 11), 0.0, f64::NAN).is_err());
    }
}

// ===========================================================================
// Argument parsing
// ===========================================================================

mod args {
    use super::*;

    #[test]
    fn gregorian_date_argument() {
        let args = Args::try_parse_from(["hijri", "2024-03-11"]).unwrap();
        assert_eq!(get_display_date(&args), Ok(hijri(1445, 9, 1)));
    }

    #[test]
    fn hijri_date_argument() {
        let args = Args::try_parse_from(["hijri", "-H", "1445-09-01"]).unwrap();
        assert_eq!(get_display_date(&args).map(|h| h.gregorian()), Ok(ymd(2024, 3, 11)));
    }

    #[test]
    fn date_before_epoch_is_rejected() {
        let args = Args::try_parse_from(["hijri", "0600-01-01"]).unwrap();
        let err = get_display_date(&args).unwrap_err();
        assert!(err.contains("before 1 Muharram 1 AH"), "{err}");

        let args = Args::try_parse_from(["hijri", "0622-07-19"]).unwrap();
        assert_eq!(get_display_date(&args), Ok(hijri(1, 1, 1)));
    }

    #[test]
    fn invalid_date_argument() {
        let args = Args::try_parse_from(["hijri", "11/03/2024"]).unwrap();
        assert!(get_display_date(&args).is_err());

        let args = Args::try_parse_from(["hijri", "-H", "1446-12-30"]).unwrap();
        assert!(get_display_date(&args).is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["hijri"]).unwrap();
        assert_eq!(args.format, FormatStyle::Full);
        assert_eq!(args.language, Language::Arabic);
        assert!(!args.from_hijri);
    }

    #[test]
    fn prayer_accepts_negative_coordinates() {
        let args = Args::try_parse_from(["hijri", "-p", "-33.86", "151.2"]).unwrap();
        assert_eq!(args.prayer, Some(vec![-33.86, 151.2]));
    }

    #[test]
    fn conflicting_modes() {
        let args = Args::try_parse_from(["hijri", "-m", "-e", "3"]).unwrap();
        assert!(DisplayContext::new(&args).is_err());

        let args = Args::try_parse_from(["hijri", "-i", "--legal"]).unwrap();
        assert!(DisplayContext::new(&args).is_err());
    }

    #[test]
    fn sunday_week_start() {
        let args = Args::try_parse_from(["hijri", "-s"]).unwrap();
        let ctx = DisplayContext::new(&args).unwrap();
        assert_eq!(ctx.week_start, Weekday::Sun);
    }
}
