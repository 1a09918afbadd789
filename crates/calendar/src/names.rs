//! Month and weekday display names.

use crate::{NUM_MONTHS, WEEK_LENGTH};

/// Month names in calendar order (index 0 = month 1).
pub(crate) const MONTH_NAMES: [&str; NUM_MONTHS as usize] = [
    "Beres", "Brit", "Avos", "Emos", "Umshei", "Idrel", "Yamei", "Mila", "Leida", "Divar",
    "Kohav", "Shiv", "Midia",
];

/// Weekday names (index 0 = weekday 1).
pub(crate) const WEEKDAY_NAMES: [&str; WEEK_LENGTH as usize] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh",
];

/// Name of the given month (1..=13), if valid.
pub fn month_name(month: u8) -> Option<&'static str> {
    if (1..=NUM_MONTHS).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Name of the given weekday (1..=7), if valid.
pub fn weekday_name(weekday: u8) -> Option<&'static str> {
    if (1..=WEEK_LENGTH).contains(&weekday) {
        Some(WEEKDAY_NAMES[(weekday - 1) as usize])
    } else {
        None
    }
}
