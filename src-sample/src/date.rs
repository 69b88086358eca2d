//! MMYY time codes
//!
//! Sampling dates in the qPCR export are coded as 3 or 4 digit integers,
//! month first: `321` is March 2021, `1220` is December 2020. Only month
//! and year are meaningful; parsed dates are pinned to the first of the
//! month.

use chrono::{Datelike, NaiveDate};

/// Error type for unparseable time codes
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateCodeError {
    #[error("time code '{0}' is not a 3 or 4 digit MMYY value")]
    Malformed(String),

    #[error("time code '{0}' has month {1}, expected 1..=12")]
    MonthOutOfRange(String, u32),
}

/// Parse an MMYY time code into a calendar date pinned to day 1.
///
/// Accepts both the 3-digit single-digit-month form (`321`) and the
/// 4-digit form (`1220`, `0321`). Two-digit years pivot the strptime way:
/// 00–68 map to 20yy, 69–99 to 19yy.
pub fn parse_time_code(code: &str) -> Result<NaiveDate, DateCodeError> {
    let digits = code.trim();
    if !(3..=4).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateCodeError::Malformed(code.to_string()));
    }

    let value: u32 = digits
        .parse()
        .map_err(|_| DateCodeError::Malformed(code.to_string()))?;
    let month = value / 100;
    let yy = value % 100;
    if !(1..=12).contains(&month) {
        return Err(DateCodeError::MonthOutOfRange(code.to_string(), month));
    }

    let year = if yy <= 68 { 2000 + yy } else { 1900 + yy } as i32;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DateCodeError::MonthOutOfRange(code.to_string(), month))
}

/// Short month/year label, e.g. 2021-03-01 → "3/21". Inverse of
/// [`parse_time_code`] up to zero padding; used for axis tick labels.
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{}/{:02}", date.month(), date.year().rem_euclid(100))
}
