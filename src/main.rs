//! Hijri calendar CLI application.
//!
//! # Usage
//! ```ignore
//! hijri                  // Today's Hijri date
//! hijri 2024-03-11       // Hijri date of a Gregorian date
//! hijri -H 1446-09-01    // Gregorian date of a Hijri date
//! hijri -m               // Current Hijri month
//! hijri -e 3             // Next three Islamic events
//! hijri -i               // Ramadan status of today
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hijri::args::{Args, get_display_date};
use hijri::formatter::{
    format_event_line, format_for_legal_document, format_hijri_date, format_month_status,
    format_prayer_times, print_month,
};
use hijri::prayer::prayer_times;
use hijri::queries::{
    business_days_in_month, current_hijri_date, days_remaining_in_hijri_month,
    days_remaining_in_month, is_currently_ramadan, is_ramadan, upcoming_events,
    upcoming_islamic_events,
};
use hijri::types::DisplayContext;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("hijri: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = DisplayContext::new(args)?;
    let hijri = get_display_date(args)?;
    let date = hijri.gregorian();
    // Without a date argument the clock-reading queries answer for today
    let follow_clock = args.date_arg.is_none();
    tracing::debug!(%date, %hijri, follow_clock, "resolved display date");

    // Display mode priority: month > events > business days > info > prayer > legal > date
    if args.month {
        print_month(&ctx, hijri.year(), hijri.hijri_month()).map_err(|e| e.to_string())?;
    } else if let Some(limit) = args.events {
        let events = if follow_clock {
            upcoming_islamic_events(limit)
        } else {
            upcoming_events(date, limit)
        };
        if events.is_empty() {
            println!("No remaining events in {}", hijri.year());
        }
        for event in &events {
            println!("{}", format_event_line(event, ctx.language));
        }
    } else if args.business_days {
        let count =
            business_days_in_month(hijri.year(), hijri.month()).map_err(|e| e.to_string())?;
        println!("{}", count);
    } else if args.info {
        let (ramadan, remaining) = if follow_clock {
            (is_currently_ramadan(), days_remaining_in_hijri_month())
        } else {
            (is_ramadan(date), days_remaining_in_month(&hijri))
        };
        for line in format_month_status(&hijri, ramadan, remaining, ctx.language) {
            println!("{}", line);
        }
    } else if let Some(coords) = &args.prayer
        && let [lat, lng] = coords.as_slice()
    {
        let times = prayer_times(date, *lat, *lng).map_err(|e| e.to_string())?;
        for line in format_prayer_times(&times, ctx.language) {
            println!("{}", line);
        }
    } else if args.legal {
        println!("{}", format_for_legal_document(&hijri, ctx.language));
    } else if args.from_hijri {
        println!("{}", date.format("%Y-%m-%d"));
    } else if follow_clock {
        println!("{}", format_hijri_date(&current_hijri_date(), args.format));
    } else {
        println!("{}", format_hijri_date(&hijri, args.format));
    }

    Ok(())
}
