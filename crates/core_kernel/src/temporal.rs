//! Date handling for the formats the registry service speaks
//!
//! The service is inconsistent about date layouts:
//! - `StanDanych` (data status) comes back as `dd-mm-YYYY`
//! - report dates and dates inside search rows use `YYYY-mm-dd`

use chrono::NaiveDate;

use crate::error::CoreError;

/// Layout of the data status value returned by `GetValue(StanDanych)`
pub const DATA_STATUS_FORMAT: &str = "%d-%m-%Y";

/// Layout of report dates and of dates inside report rows
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the data status date, e.g. `31-12-2014`
pub fn parse_data_status_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATA_STATUS_FORMAT).map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
        expected: "dd-mm-YYYY",
    })
}

/// Formats a date the way bulk report requests expect it
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

/// Parses an optional `YYYY-mm-dd` field; the service sends an empty string for "no date"
pub fn parse_optional_report_date(value: &str) -> Result<Option<NaiveDate>, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::InvalidDate {
            value: value.to_string(),
            expected: "YYYY-mm-dd",
        })
}
