//! Partition a year's days by month.

use std::collections::BTreeMap;

use lunara_calendar::{DayRecord, NUM_MONTHS};

/// Groups day records by month, preserving day order within each
/// group.
///
/// Every month number 1..=13 is present in the result even when it
/// holds no days, so month-indexed consumers never miss a key.
pub fn group_by_month(days: &[DayRecord]) -> BTreeMap<u8, Vec<&DayRecord>> {
    let mut by_month: BTreeMap<u8, Vec<&DayRecord>> =
        (1..=NUM_MONTHS).map(|m| (m, Vec::new())).collect();
    for day in days {
        by_month.entry(day.month).or_default().push(day);
    }
    by_month
}
