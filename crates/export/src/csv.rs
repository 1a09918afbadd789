//! Delimited text export of a generated year.

use std::fmt::Write as _;

use lunara_calendar::DayRecord;

/// Column order of the tabular export. Matches the JSON field order.
const HEADER: &str =
    "absoluteDay,month,day,weekday,season,major,minor,majorPhase,minorPhase,tide,event,intercalary";

/// Quotes a field if it contains a comma, quote, or newline, doubling
/// internal quotes (standard CSV escaping). Other values pass through
/// unchanged.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders day records as a CSV table with a fixed header row.
///
/// An empty event serializes as an empty field, never a literal
/// "null".
pub fn to_csv(days: &[DayRecord]) -> String {
    let mut out = String::with_capacity(days.len() * 64 + HEADER.len());
    out.push_str(HEADER);
    for day in days {
        out.push('\n');
        let _ = write!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            day.absolute_day,
            day.month,
            day.day,
            day.weekday,
            day.season,
            day.major,
            day.minor,
            day.major_phase,
            day.minor_phase,
            day.tide,
            escape(&day.event),
            day.intercalary,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunara_calendar::{generate, Season};
    use lunara_tide::{PhaseName, TideLevel};

    fn sample_day(event: &str) -> DayRecord {
        DayRecord {
            absolute_day: 5,
            month: 1,
            day: 5,
            weekday: 6,
            season: Season::Spring,
            major: PhaseName::Waxing,
            minor: PhaseName::Waning,
            major_phase: 0.25,
            minor_phase: 0.75,
            tide: TideLevel::Low,
            event: event.to_string(),
            intercalary: false,
        }
    }

    #[test]
    fn header_row_is_fixed() {
        let csv = to_csv(&[]);
        assert_eq!(csv, HEADER);
    }

    #[test]
    fn plain_row_needs_no_quoting() {
        let csv = to_csv(&[sample_day("")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "5,1,5,6,Spring,Waxing,Waning,0.25,0.75,Low,,false");
    }

    #[test]
    fn event_with_comma_and_quotes_is_escaped() {
        let csv = to_csv(&[sample_day("Festival, \"Grand\"")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(
            row.contains("\"Festival, \"\"Grand\"\"\""),
            "unexpected row: {row}"
        );
    }

    #[test]
    fn embedded_newline_is_quoted() {
        let csv = to_csv(&[sample_day("line one\nline two")]);
        assert!(csv.contains("\"line one\nline two\""));
    }

    #[test]
    fn full_year_has_one_row_per_day() {
        let almanac = generate(1108).unwrap();
        let csv = to_csv(almanac.days());
        // No event label contains a newline, so lines == rows.
        assert_eq!(csv.lines().count(), almanac.days().len() + 1);
        assert!(csv.starts_with("absoluteDay,"));
    }
}
