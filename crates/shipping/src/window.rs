//! Safe shipping window detection.

use lunara_calendar::DayRecord;
use lunara_tide::TideLevel;

use crate::severe::adjusted_days;

/// A maximal run of consecutive safe sailing days within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First day number of the run.
    pub start: u8,
    /// Last day number of the run, inclusive.
    pub end: u8,
    /// Number of days in the run.
    pub length: u8,
}

/// Finds the safe shipping windows in one month's days.
///
/// A day is safe when it is not intercalary and its harbor-adjusted
/// tide stays at or below Moderate. Consecutive safe day numbers
/// merge into one window; any gap starts the next one. Windows are
/// maximal and non-overlapping.
pub fn shipping_windows(month_days: &[DayRecord], harbor_offset: i8) -> Vec<Window> {
    let safe = adjusted_days(month_days, harbor_offset)
        .into_iter()
        .filter(|h| h.adjusted_tide <= TideLevel::Moderate && !h.day.intercalary);

    let mut windows = Vec::new();
    let mut current: Option<Window> = None;
    for h in safe {
        let day = h.day.day;
        if let Some(win) = current.as_mut() {
            if day == win.end + 1 {
                win.end = day;
                win.length += 1;
                continue;
            }
            windows.push(*win);
        }
        current = Some(Window { start: day, end: day, length: 1 });
    }
    if let Some(win) = current {
        windows.push(win);
    }
    windows
}
