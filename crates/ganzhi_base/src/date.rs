//! Gregorian date validation.

use chrono::NaiveDate;

use crate::error::GanzhiError;

/// Build a Gregorian date, rejecting impossible triples such as 2023-02-30.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, GanzhiError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GanzhiError::InvalidDate { year, month, day })
}
