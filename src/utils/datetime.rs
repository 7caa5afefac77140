/// Pure date utility functions (Discord-agnostic)
use chrono::{Datelike, NaiveDate};

use crate::constants::DATE_FORMAT;

/// Parse a birthday token in DD.MM.YYYY format
pub fn parse_birthday(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
}

/// Format a date as DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Map a birthday onto a target year.
///
/// Feb 29 birthdays fall on Feb 28 in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("clamped occurrence date is always valid")
}
