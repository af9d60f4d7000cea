use chrono::NaiveDate;

use crate::consts::DATE_FMT;

/// Parse a log entry date, strictly `YYYY-MM-DD`
pub(crate) fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}
