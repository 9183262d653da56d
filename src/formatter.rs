//! Hijri date strings, legal-document stamps and terminal month grids.

use chrono::{Datelike, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::error::HijriError;
use crate::prayer::PrayerTimes;
use crate::tables::{event_name, month_name, weekday_short_name};
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarDay,
    DisplayContext, FormatStyle, HijriDate, HijriMonth, Language, MONTH_GRID_WIDTH, MonthData,
    UpcomingEvent,
};

/// Format a Hijri date with Arabic labels.
///
/// - `Numeric`: `01/09/1446`
/// - `Short`: `1 رمضان 1446`
/// - `Full`: `السبت 1 رمضان 1446هـ`
pub fn format_hijri_date(date: &HijriDate, style: FormatStyle) -> String {
    match style {
        FormatStyle::Numeric => {
            format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
        }
        FormatStyle::Short => {
            format!("{} {} {}", date.day(), date.month_name(), date.year())
        }
        FormatStyle::Full => format!(
            "{} {} {} {}هـ",
            date.day_of_week_name(),
            date.day(),
            date.month_name(),
            date.year()
        ),
    }
}

/// Date stamp for contracts and other legal documents.
pub fn format_for_legal_document(date: &HijriDate, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "{} من شهر {} لعام {} هجرية",
            date.day(),
            date.month_name(),
            date.year()
        ),
        Language::English => {
            format!("{} {} {} AH", date.day(), date.month_name_en(), date.year())
        }
    }
}

/// One line per event: Hijri date, Gregorian date, name.
pub fn format_event_line(upcoming: &UpcomingEvent, language: Language) -> String {
    format!(
        "{}  {}  {}",
        format_hijri_date(&upcoming.date, FormatStyle::Numeric),
        upcoming.date.gregorian().format("%Y-%m-%d"),
        event_name(upcoming.event, language)
    )
}

/// Ramadan flag and days left in the month, one line each.
pub fn format_month_status(
    date: &HijriDate,
    is_ramadan: bool,
    remaining: u32,
    language: Language,
) -> [String; 2] {
    let month = month_name(date.hijri_month(), language);
    match language {
        Language::Arabic => [
            format!("رمضان: {}", if is_ramadan { "نعم" } else { "لا" }),
            format!("الأيام المتبقية في {}: {}", month, remaining),
        ],
        Language::English => [
            format!("Ramadan: {}", if is_ramadan { "yes" } else { "no" }),
            format!("Days remaining in {}: {}", month, remaining),
        ],
    }
}

pub fn format_prayer_times(times: &PrayerTimes, language: Language) -> Vec<String> {
    times
        .entries(language)
        .iter()
        .map(|(name, time)| {
            let padding = 8usize.saturating_sub(name.width());
            format!("{}{}{}", name, " ".repeat(padding), time.format("%H:%M"))
        })
        .collect()
}

/// Format month header with year and optional color.
pub fn format_month_header(
    year: i32,
    month: HijriMonth,
    language: Language,
    width: usize,
    color: bool,
) -> String {
    let header = match language {
        Language::Arabic => format!("{} {}هـ", month_name(month, language), year),
        Language::English => format!("{} {} AH", month_name(month, language), year),
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Gregorian span covered by a month, e.g. `11 Mar - 9 Apr 2024`.
pub fn format_gregorian_span(days: &[CalendarDay]) -> String {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return String::new();
    };
    let (first, last) = (first.gregorian, last.gregorian);
    if first.year() == last.year() {
        format!(
            "{} - {}",
            first.format("%-d %b"),
            last.format("%-d %b %Y")
        )
    } else {
        format!(
            "{} - {}",
            first.format("%-d %b %Y"),
            last.format("%-d %b %Y")
        )
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Format weekday header row with optional color.
pub fn format_weekday_headers(ctx: &DisplayContext) -> String {
    let names: Vec<&str> = get_weekday_order(ctx.week_start)
        .iter()
        .map(|&w| weekday_short_name(w, ctx.language))
        .collect();
    let row = names.join(" ");

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format day cell with color highlighting.
///
/// Color priority: today > holiday > weekend > regular
fn format_day(ctx: &DisplayContext, day: &CalendarDay, is_last: bool) -> String {
    let day_str = format!("{:>2}", day.day);

    let formatted = if !ctx.color {
        day_str
    } else if day.is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if day.is_holiday {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if day.is_weekend {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format month as grid of lines.
pub fn format_month_grid(ctx: &DisplayContext, month: &MonthData) -> Vec<String> {
    let mut lines = Vec::with_capacity(9);

    lines.push(format_month_header(
        month.year,
        month.month,
        ctx.language,
        MONTH_GRID_WIDTH,
        ctx.color,
    ));

    let days: Vec<CalendarDay> = month.cells.iter().flatten().copied().collect();
    lines.push(center_text(&format_gregorian_span(&days), MONTH_GRID_WIDTH));

    lines.push(format_weekday_headers(ctx));

    for week in month.cells.chunks(7) {
        if week.iter().all(Option::is_none) {
            continue;
        }
        let mut line = String::new();
        for (i, cell) in week.iter().enumerate() {
            let is_last = i == 6;
            match cell {
                Some(day) => line.push_str(&format_day(ctx, day, is_last)),
                None if is_last => line.push_str("  "),
                None => line.push_str("   "),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Print the grid for a single Hijri month.
pub fn print_month(ctx: &DisplayContext, year: i32, month: HijriMonth) -> Result<(), HijriError> {
    let month_data = MonthData::new(ctx, year, month)?;
    for line in format_month_grid(ctx, &month_data) {
        println!("{}", line);
    }
    Ok(())
}
