use lunara_calendar::generate;
use lunara_shipping::{
    adjust_tide, group_by_month, severe_tide_days, shipping_windows,
};
use lunara_tide::TideLevel;

// Aggregations need owned slices; the grouped views borrow from the
// almanac, so tests clone the month they exercise.
fn month_days(year: i32, month: u8) -> Vec<lunara_calendar::DayRecord> {
    let almanac = generate(year).unwrap();
    group_by_month(almanac.days())[&month]
        .iter()
        .map(|d| (*d).clone())
        .collect()
}

#[test]
fn windows_cover_exactly_the_safe_days() {
    for month in [1, 6, 13] {
        let days = month_days(1108, month);
        let windows = shipping_windows(&days, 0);

        let safe_days: Vec<u8> = days
            .iter()
            .filter(|d| !d.intercalary && adjust_tide(d.tide, 0) <= TideLevel::Moderate)
            .map(|d| d.day)
            .collect();
        let covered: usize = windows.iter().map(|w| w.length as usize).sum();
        assert_eq!(covered, safe_days.len(), "month {month}");

        for w in &windows {
            assert!(w.start <= w.end);
            assert_eq!(w.length as u16, (w.end - w.start) as u16 + 1);
            for d in w.start..=w.end {
                assert!(safe_days.contains(&d), "month {month}: day {d} not safe");
            }
        }
    }
}

#[test]
fn windows_are_maximal_and_non_overlapping() {
    for year in [1, 500, 9999] {
        for month in 1..=13 {
            let days = month_days(year, month);
            let windows = shipping_windows(&days, 0);
            for pair in windows.windows(2) {
                // A gap of at least one day separates adjacent
                // windows; start..end ranges never touch.
                assert!(pair[1].start > pair[0].end + 1, "year {year}, month {month}");
            }
        }
    }
}

#[test]
fn severe_days_and_windows_are_disjoint() {
    let days = month_days(42, 9);
    let severe: Vec<u8> = severe_tide_days(&days, 0).iter().map(|h| h.day.day).collect();
    for w in shipping_windows(&days, 0) {
        for d in w.start..=w.end {
            assert!(!severe.contains(&d), "day {d} both severe and safe");
        }
    }
}

#[test]
fn dampened_harbor_widens_windows() {
    // Lowering every tide by one rank can only grow the safe set.
    let days = month_days(1108, 4);
    let base: usize = shipping_windows(&days, 0).iter().map(|w| w.length as usize).sum();
    let dampened: usize = shipping_windows(&days, -1)
        .iter()
        .map(|w| w.length as usize)
        .sum();
    assert!(dampened >= base);
}
