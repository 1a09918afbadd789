//! The calendar generator.

use tracing::debug;

use lunara_tide::{
    phase, tide_level, PhaseName, MAJOR_SYNODIC_PERIOD, WEEKLY_SYNODIC_PERIOD,
};

use crate::day::DayRecord;
use crate::error::CalendarError;
use crate::season::{Season, SeasonMap};
use crate::seed::extra_month_season;
use crate::year::AlmanacYear;
use crate::{
    year_base_day, DAYS_PER_MONTH, MAX_YEAR, MIN_YEAR, NUM_MONTHS, WEEK_LENGTH, YEAR_LENGTH,
};

/// Event label on the year's opening festival day.
pub const NEW_YEAR_FESTIVAL: &str = "\u{1f38a} New Year's Festival";

/// Event label on the year's closing festival day.
pub const NEW_YEARS_EVE_FESTIVAL: &str = "\u{1f38a} New Year's Eve Festival";

/// Event label when both moons are simultaneously full.
pub const DUAL_FULL_FESTIVAL: &str = "\u{1f315} Dual-Full Festival";

/// Event label on market weekdays.
pub const WEEKLY_MARKET: &str = "\u{1f6d2} Weekly Market";

/// Event label for a full major moon in the harvest month.
pub const HARVEST_MOON: &str = "\u{1f33e} Harvest Moon";

const MARKET_WEEKDAY: u8 = 2;
const HARVEST_MONTH: u8 = 7;

/// Event rules in priority order; the first match wins and lower
/// priority events are dropped for that day. Single label per day is
/// deliberate: a Dual-Full Festival on a market weekday suppresses
/// the market label.
fn event_for_day(month: u8, day: u8, major: PhaseName, minor: PhaseName, weekday: u8) -> &'static str {
    if month == 1 && day == 0 {
        NEW_YEAR_FESTIVAL
    } else if major == PhaseName::Full && minor == PhaseName::Full {
        DUAL_FULL_FESTIVAL
    } else if weekday == MARKET_WEEKDAY {
        WEEKLY_MARKET
    } else if month == HARVEST_MONTH && major == PhaseName::Full {
        HARVEST_MOON
    } else {
        ""
    }
}

/// Emits consecutive day records, advancing the shared absolute-day
/// and weekday counters once per day with no reset between months.
struct DayEmitter {
    base_day: u64,
    counter: u32,
}

impl DayEmitter {
    fn next(
        &mut self,
        month: u8,
        day: u8,
        season: Season,
        intercalary: bool,
        fixed_event: Option<&'static str>,
    ) -> DayRecord {
        let weekday = (self.counter % WEEK_LENGTH as u32) as u8 + 1;
        let absolute = self.base_day + self.counter as u64;
        let major_phase = phase(absolute, MAJOR_SYNODIC_PERIOD);
        let minor_phase = phase(absolute, WEEKLY_SYNODIC_PERIOD);
        let major = PhaseName::from_phase(major_phase);
        let minor = PhaseName::from_phase(minor_phase);
        let event = match fixed_event {
            Some(label) => label.to_string(),
            None => event_for_day(month, day, major, minor, weekday).to_string(),
        };
        let record = DayRecord {
            absolute_day: self.counter,
            month,
            day,
            weekday,
            season,
            major,
            minor,
            major_phase,
            minor_phase,
            tide: tide_level(major_phase, minor_phase, absolute),
            event,
            intercalary,
        };
        self.counter += 1;
        record
    }
}

/// Generates the full almanac for one year.
///
/// Deterministic: the same year number always yields an identical
/// [`AlmanacYear`]. Emits the opening intercalary festival day
/// (month 1, day 0), thirty ordinary days for each of the thirteen
/// months, and the closing intercalary festival day (month 13,
/// day 31).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` falls
/// outside 1..=9999.
pub fn generate(year: i32) -> Result<AlmanacYear, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }

    let extra = extra_month_season(year);
    let season_map = SeasonMap::new(extra);
    debug!(year, extra_month_season = %extra, "generating almanac year");

    let mut emitter = DayEmitter {
        base_day: year_base_day(year),
        counter: 0,
    };
    let mut days = Vec::with_capacity(YEAR_LENGTH as usize);

    // Opening festival day precedes month 1's ordinary days and is
    // pinned to Spring regardless of the season map.
    days.push(emitter.next(1, 0, Season::Spring, true, Some(NEW_YEAR_FESTIVAL)));

    for month in 1..=NUM_MONTHS {
        let season = season_map.of(month);
        for day in 1..=DAYS_PER_MONTH {
            days.push(emitter.next(month, day, season, false, None));
        }
    }

    // Closing festival day follows month 13 and is pinned to Winter.
    days.push(emitter.next(
        NUM_MONTHS,
        DAYS_PER_MONTH + 1,
        Season::Winter,
        true,
        Some(NEW_YEARS_EVE_FESTIVAL),
    ));

    debug!(year, n_days = days.len(), "almanac year complete");
    Ok(AlmanacYear::new(year, extra, season_map, days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_years() {
        assert!(matches!(
            generate(0),
            Err(CalendarError::YearOutOfRange { year: 0 })
        ));
        assert!(matches!(
            generate(-3),
            Err(CalendarError::YearOutOfRange { year: -3 })
        ));
        assert!(matches!(
            generate(10_000),
            Err(CalendarError::YearOutOfRange { year: 10_000 })
        ));
        assert!(generate(1).is_ok());
        assert!(generate(9999).is_ok());
    }

    #[test]
    fn opening_day_priority_beats_everything() {
        let event = event_for_day(1, 0, PhaseName::Full, PhaseName::Full, MARKET_WEEKDAY);
        assert_eq!(event, NEW_YEAR_FESTIVAL);
    }

    #[test]
    fn dual_full_suppresses_market() {
        let event = event_for_day(3, 10, PhaseName::Full, PhaseName::Full, MARKET_WEEKDAY);
        assert_eq!(event, DUAL_FULL_FESTIVAL);
    }

    #[test]
    fn market_suppresses_harvest_moon() {
        let event = event_for_day(HARVEST_MONTH, 10, PhaseName::Full, PhaseName::New, MARKET_WEEKDAY);
        assert_eq!(event, WEEKLY_MARKET);
    }

    #[test]
    fn harvest_moon_requires_month_seven() {
        assert_eq!(
            event_for_day(HARVEST_MONTH, 10, PhaseName::Full, PhaseName::New, 4),
            HARVEST_MOON
        );
        assert_eq!(event_for_day(8, 10, PhaseName::Full, PhaseName::New, 4), "");
    }

    #[test]
    fn plain_day_has_no_event() {
        assert_eq!(event_for_day(3, 10, PhaseName::Waxing, PhaseName::New, 4), "");
    }

    #[test]
    fn multi_year_phase_continuity() {
        // The last day of year 1 and the first day of year 2 are
        // adjacent on the absolute timeline, so the major moon phase
        // advances by exactly one thirtieth.
        let y1 = generate(1).unwrap();
        let y2 = generate(2).unwrap();
        let last = y1.days().last().unwrap();
        let first = &y2.days()[0];
        let step = (first.major_phase - last.major_phase).rem_euclid(1.0);
        assert!((step - 1.0 / 30.0).abs() < 1e-9, "phase step {step}");
    }
}
