//! Date formatting helpers

use crate::errors::UtilError;
use chrono::{NaiveDate, NaiveDateTime};

const US_ENGLISH: &str = "en_us";

/// Split a `YYYY-MM-DD HH:MM[:SS[.fff]]` timestamp into a localized date and
/// an `HH:MM` time
///
/// `en_us` gets `MM/DD/YYYY`; every other language gets `DD/MM/YYYY`.
pub fn format_datetime_by_language(
    value: &str,
    language: &str,
) -> Result<(String, String), UtilError> {
    let trimmed = value.trim();
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .map_err(|_| UtilError::DateFormat(value.to_string()))?;

    let date_format = if language.eq_ignore_ascii_case(US_ENGLISH) {
        "%m/%d/%Y"
    } else {
        "%d/%m/%Y"
    };

    Ok((
        parsed.format(date_format).to_string(),
        parsed.format("%H:%M").to_string(),
    ))
}

/// `true` unless `subscribed_on` holds a valid `YYYY-MM-DD` date
pub fn user_never_signed(subscribed_on: Option<&str>) -> bool {
    match subscribed_on {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err(),
        None => true,
    }
}
