//! Command-line argument parsing using clap.
//!
//! The single positional argument is a date, `YYYY-MM-DD`: Gregorian by
//! default, Hijri with `--from-hijri`.

use chrono::{NaiveDate, Weekday};
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::queries::today;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, DisplayContext, FormatStyle, HijriDate, Language};

#[derive(Parser, Debug)]
#[command(name = "hijri")]
#[command(about = "Converts dates between the Gregorian and tabular Hijri calendars", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Style of the printed Hijri date.
    #[arg(
        short = 'f',
        long,
        default_value = "full",
        help_heading = "Output options",
        value_name = "style"
    )]
    pub format: FormatStyle,

    /// Language for legal stamps, month grids and event names.
    #[arg(
        short = 'l',
        long = "lang",
        default_value = "ar",
        help_heading = "Output options",
        value_name = "lang"
    )]
    pub language: Language,

    /// Print the date as stamped on legal documents.
    #[arg(long, help_heading = "Output options")]
    pub legal: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Treat the date argument as a Hijri date and print its Gregorian date.
    #[arg(short = 'H', long, help_heading = "Conversion options")]
    pub from_hijri: bool,

    /// Display the Hijri month containing the date.
    #[arg(short = 'm', long, help_heading = "Display options")]
    pub month: bool,

    /// Week starts on Sunday (default is Saturday).
    #[arg(short = 's', long, help_heading = "Display options")]
    pub sunday: bool,

    /// List the next N Islamic events of the current Hijri year.
    #[arg(
        short = 'e',
        long,
        help_heading = "Display options",
        value_name = "num"
    )]
    pub events: Option<usize>,

    /// Report whether the date falls in Ramadan and the days left in its month.
    #[arg(short = 'i', long, help_heading = "Display options")]
    pub info: bool,

    /// Count working days in the Hijri month containing the date.
    #[arg(short = 'b', long, help_heading = "Display options")]
    pub business_days: bool,

    /// Print approximate prayer times for a location.
    #[arg(
        short = 'p',
        long,
        num_args = 2,
        value_names = ["lat", "lng"],
        allow_negative_numbers = true,
        help_heading = "Display options"
    )]
    pub prayer: Option<Vec<f64>>,

    /// Date (YYYY-MM-DD), defaults to today.
    #[arg(index = 1, default_value = None, value_name = "date", value_hint = ValueHint::Other)]
    pub date_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, print today's Hijri date.

Hijri dates use the arithmetic (tabular) calendar and may differ by a day
or two from calendars based on moon sighting.

Examples:
  hijri                      Today's Hijri date
  hijri 2024-03-11 -f short  Hijri date of 11 March 2024
  hijri -H 1446-09-01        Gregorian date of 1 Ramadan 1446
  hijri -m --lang en         Current Hijri month
  hijri -e 3                 Next three Islamic events
  hijri -i                   Ramadan status and days left in the month
  hijri --legal              Today's date for a contract";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl DisplayContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        // Prevent conflicting display modes
        let mode_count = [
            args.month,
            args.events.is_some(),
            args.business_days,
            args.prayer.is_some(),
            args.legal,
            args.info,
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        if mode_count > 1 {
            return Err(
                "Options -m, -e, -b, -i, -p, and --legal are mutually exclusive".to_string(),
            );
        }

        Ok(DisplayContext {
            week_start: if args.sunday {
                Weekday::Sun
            } else {
                Weekday::Sat
            },
            language: args.language,
            color,
            today: today(),
        })
    }
}

/// Resolve the positional date argument to a Hijri date.
///
/// Gregorian dates before 1 Muharram 1 AH are rejected, so every mode sees
/// a year of at least 1.
pub fn get_display_date(args: &Args) -> Result<HijriDate, String> {
    let date = match (&args.date_arg, args.from_hijri) {
        (None, _) => today(),
        (Some(value), true) => return value.parse::<HijriDate>().map_err(|e| e.to_string()),
        (Some(value), false) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: {} (expected YYYY-MM-DD)", value))?,
    };

    HijriDate::try_from_gregorian(date).map_err(|e| e.to_string())
}
