//! Date validation for `DD/MM/YYYY` fields
//!
//! The value must carry at least 8 digits, parse to a real calendar date and
//! have a four-digit year between 1900 and 2099.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::digits::count_digits;
use crate::error::{ValidationError, ValidationResult};

/// Day and month (2 digits each) plus a 4-digit year
const MIN_DATE_DIGITS: usize = 8;

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:19|20)\d{2}$").unwrap());

/// Validates a date with the default message
///
/// ```rust
/// use br_validators::validate_date;
///
/// assert!(validate_date("15/06/1990").is_ok());
/// assert!(validate_date("31/02/2021").is_err());
/// ```
pub fn validate_date(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_date(value)
}

pub(crate) fn check_date(value: &str, message: &str) -> ValidationResult {
    if count_digits(value) < MIN_DATE_DIGITS {
        tracing::debug!(validator = "date", "too few digits");
        return Err(ValidationError::message_only(message));
    }

    let Some(date) = parse_display_date(value) else {
        tracing::debug!(validator = "date", "not a calendar date");
        return Err(ValidationError::message_only(message));
    };

    if !YEAR_REGEX.is_match(&date.year().to_string()) {
        tracing::debug!(validator = "date", year = date.year(), "year out of range");
        return Err(ValidationError::message_only(message));
    }

    Ok(())
}

/// Parses a `DD/MM/YYYY` display string leniently.
///
/// Each component may be preceded by any run of non-digit characters, so
/// `15-06-1990`, `15.06.1990` and `15061990` all parse. Day and month take up
/// to two digits, the year up to four. Anything after the year is ignored.
/// Returns `None` when a component is missing or the triple is not a real
/// calendar date.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let mut rest = value;
    let day = take_number(&mut rest, 2)?;
    let month = take_number(&mut rest, 2)?;
    let year = take_number(&mut rest, 4)?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Skips leading non-digits, then consumes up to `max_digits` digits
fn take_number(rest: &mut &str, max_digits: usize) -> Option<u32> {
    let start = rest.find(|c: char| c.is_ascii_digit())?;
    let tail = &rest[start..];
    let len = tail
        .bytes()
        .take(max_digits)
        .take_while(u8::is_ascii_digit)
        .count();

    let number = tail[..len].parse().ok()?;
    *rest = &tail[len..];
    Some(number)
}
