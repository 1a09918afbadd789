//! Harbor-adjusted day views and severe-tide listing.

use lunara_calendar::DayRecord;
use lunara_tide::TideLevel;

use crate::harbor::adjust_tide;

/// A day record viewed through a harbor's tide offset.
///
/// The base record stays untouched; the adjusted level lives beside
/// it rather than overwriting the open-sea value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarborDay<'a> {
    /// The underlying almanac day.
    pub day: &'a DayRecord,
    /// Tide level after applying the harbor offset.
    pub adjusted_tide: TideLevel,
}

/// Applies a harbor offset to every day, preserving order.
pub fn adjusted_days(days: &[DayRecord], offset: i8) -> Vec<HarborDay<'_>> {
    days.iter()
        .map(|day| HarborDay {
            day,
            adjusted_tide: adjust_tide(day.tide, offset),
        })
        .collect()
}

/// Lists the days whose adjusted tide reaches High or Mega, in day
/// order.
///
/// The filter is unbounded; callers cap the result for display if
/// they want a shortlist.
pub fn severe_tide_days(days: &[DayRecord], offset: i8) -> Vec<HarborDay<'_>> {
    adjusted_days(days, offset)
        .into_iter()
        .filter(|h| h.adjusted_tide >= TideLevel::High)
        .collect()
}
