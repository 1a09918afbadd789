//! # lunara-calendar
//!
//! Deterministic almanac generation for the dual-moon world's
//! 13-month, 392-day calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year number"] -->|"year_fraction()"| B["fraction [0,1)"]
//!     B -->|"extra_month_season()"| C["Season"]
//!     C -->|"SeasonMap::new()"| D["month -> season"]
//!     A -->|"generate()"| E["AlmanacYear"]
//!     D --> E
//!     E -->|".days()"| F["392 DayRecords"]
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use lunara_calendar::generate;
//!
//! let year = generate(1108)?;
//! assert_eq!(year.days().len(), 392);
//! assert!(year.days()[0].intercalary);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `seed` | Deterministic per-year pseudo-random fraction |
//! | `season` | Season enum and month-to-season map |
//! | `day` | The immutable per-day record |
//! | `year` | Generated year container |
//! | `generate` | The calendar generator |
//! | `names` | Month and weekday display names |
//! | `error` | Error types |

mod day;
mod error;
mod generate;
mod names;
mod season;
mod seed;
mod year;

pub use day::DayRecord;
pub use error::CalendarError;
pub use generate::{
    generate, DUAL_FULL_FESTIVAL, HARVEST_MOON, NEW_YEARS_EVE_FESTIVAL, NEW_YEAR_FESTIVAL,
    WEEKLY_MARKET,
};
pub use names::{month_name, weekday_name};
pub use season::{Season, SeasonMap};
pub use seed::{extra_month_season, year_fraction};
pub use year::AlmanacYear;

/// Number of months in a year.
pub const NUM_MONTHS: u8 = 13;

/// Ordinary days in every month.
pub const DAYS_PER_MONTH: u8 = 30;

/// Length of the week. Weekdays cycle 1..=7 across the whole year,
/// intercalary days included.
pub const WEEK_LENGTH: u8 = 7;

/// Total days in a year: 13 months of 30 days plus two intercalary
/// festival days.
pub const YEAR_LENGTH: u32 = NUM_MONTHS as u32 * DAYS_PER_MONTH as u32 + 2;

/// Inclusive bounds on acceptable year numbers.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Absolute day of a year's first day, counted from the epoch.
///
/// Year 1 starts at day 0; the count is continuous across years so
/// moon phase arithmetic never resets.
pub fn year_base_day(year: i32) -> u64 {
    let year_index = (year - 1).max(0) as u64;
    year_index * YEAR_LENGTH as u64
}
