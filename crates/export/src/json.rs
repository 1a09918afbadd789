//! JSON export of a generated year.

use serde::Serialize;

use lunara_calendar::DayRecord;

use crate::error::ExportError;

/// Document shape of the JSON export: the year number followed by the
/// full day sequence. Day fields serialize in the order declared on
/// [`DayRecord`].
#[derive(Serialize)]
struct YearDocument<'a> {
    year: i32,
    days: &'a [DayRecord],
}

/// Renders a year's day sequence as a pretty-printed JSON document.
pub fn to_json(year: i32, days: &[DayRecord]) -> Result<String, ExportError> {
    let doc = YearDocument { year, days };
    Ok(serde_json::to_string_pretty(&doc)?)
}
