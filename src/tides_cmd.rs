//! Tides command: print one month's tide forecast and shipping
//! windows, optionally adjusted for a harbor.

use anyhow::{bail, Context, Result};
use tracing::info_span;

use lunara_calendar::{generate, month_name, weekday_name, DayRecord, NUM_MONTHS};
use lunara_shipping::{group_by_month, severe_tide_days, shipping_windows};

use crate::cli::TidesArgs;
use crate::config;
use crate::convert;

/// Run the tide forecast for one month.
pub fn run(args: TidesArgs) -> Result<()> {
    let _cmd = info_span!("tides", year = args.year, month = args.month).entered();

    if !(1..=NUM_MONTHS).contains(&args.month) {
        bail!("month {} out of range (must be 1..=13)", args.month);
    }

    let cfg = config::load(&args.config)?;
    let harbors = convert::build_harbors(&cfg.harbors);
    let harbor = args
        .harbor
        .as_deref()
        .map(|id| convert::find_harbor(&harbors, id))
        .transpose()?;
    let offset = harbor.map_or(0, |h| h.tide_offset);

    let almanac = generate(args.year)
        .with_context(|| format!("failed to generate year {}", args.year))?;
    let grouped = group_by_month(almanac.days());
    let month_days: Vec<DayRecord> = grouped[&args.month].iter().map(|d| (*d).clone()).collect();

    let name = month_name(args.month).expect("month validated above");
    println!("{} (month {}) of year {}", name, args.month, args.year);
    match harbor {
        Some(h) => println!("Harbor: {} ({:+} tide offset): {}", h.name, h.tide_offset, h.note),
        None => println!("Open-sea forecast (no harbor selected)"),
    }

    let severe = severe_tide_days(&month_days, offset);
    println!("\nHigh and Mega tide days:");
    if severe.is_empty() {
        println!("  none");
    }
    for h in severe.iter().take(args.limit) {
        let weekday = weekday_name(h.day.weekday).unwrap_or("?");
        println!(
            "  day {:>2} ({weekday}): {} tide, {} {} / {} {}",
            h.day.day,
            h.adjusted_tide,
            h.day.major.icon(),
            h.day.major,
            h.day.minor.icon(),
            h.day.minor,
        );
    }
    if severe.len() > args.limit {
        println!("  ... and {} more", severe.len() - args.limit);
    }

    let windows = shipping_windows(&month_days, offset);
    println!("\nSafe shipping windows:");
    if windows.is_empty() {
        println!("  no safe windows this month");
    }
    for w in windows {
        println!("  days {}\u{2013}{} ({} day window)", w.start, w.end, w.length);
    }

    Ok(())
}
