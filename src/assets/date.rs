//! `dd-mm-yyyy` date helpers.
//!
//! All conversions are done in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{ErrorCode, HelperResult};
use crate::json::numeric::{is_numeric, numeric_value, to_int};

/// The current year, for [`date_validate`] and [`to_timestamp`].
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Split `dd-mm-yyyy` into its numeric parts. Exactly two dashes are required.
fn date_parts(date: &str) -> Option<[&str; 3]> {
    if date.matches('-').count() != 2 {
        return None;
    }
    let mut parts = date.split('-');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if [day, month, year].iter().all(|p| is_numeric(p)) {
        Some([day, month, year])
    } else {
        None
    }
}

/// Check a `dd-mm-yyyy` date: numeric parts, day 1-31, month 1-12 and a year
/// no earlier than `current_year`.
///
/// Days are not checked against the month; `31-02-2030` passes.
pub fn date_validate(date: &str, current_year: i32) -> bool {
    let Some([day, month, year]) = date_parts(date) else {
        return false;
    };
    let (Some(day), Some(month), Some(year)) =
        (numeric_value(day), numeric_value(month), numeric_value(year))
    else {
        return false;
    };
    (1.0..=31.0).contains(&day) && (1.0..=12.0).contains(&month) && year >= current_year as f64
}

/// Convert `dd-mm-yyyy` to a Unix timestamp at midnight UTC.
///
/// Empty or invalid dates give 0, and so do valid dates whose year is
/// beyond what a calendar date can hold. Days past the end of the month roll
/// over into the next month (`31-02-2030` is 3 March 2030).
pub fn to_timestamp(date: &str, current_year: i32) -> i64 {
    if date.is_empty() || !date_validate(date, current_year) {
        return 0;
    }
    match midnight_timestamp(date) {
        Some(timestamp) => timestamp,
        None => {
            tracing::debug!(date, "date out of calendar range, using 0");
            0
        }
    }
}

fn midnight_timestamp(date: &str) -> Option<i64> {
    let [day, month, year] = date_parts(date)?;
    let day = to_int(day)?;
    let year = i32::try_from(to_int(year)?).ok()?;
    let month = u32::try_from(to_int(month)?).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(Duration::days(day - 1))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp())
}

/// Convert a Unix timestamp to `dd-mm-yyyy`. A zero timestamp gives `""`.
pub fn from_timestamp(timestamp: i64) -> HelperResult<String> {
    if timestamp == 0 {
        return Ok(String::new());
    }
    let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or(ErrorCode::E401_TimestampOutOfRange(timestamp))?;
    Ok(datetime.format("%d-%m-%Y").to_string())
}

/// Zero-pad to two characters.
fn pad2(part: &str) -> String {
    format!("{:0>2}", part)
}

/// Reorder `d-m-yyyy hh:mm:ss` into `yyyy-mm-dd hh:mm:ss`, zero-padding day
/// and month.
pub fn calculate_date(date: &str) -> HelperResult<String> {
    let malformed = || ErrorCode::E400_MalformedDate(date.to_string());

    let mut halves = date.split(' ');
    let day_part = halves.next().ok_or_else(malformed)?;
    let time_part = halves.next().ok_or_else(malformed)?;

    let fields: Vec<&str> = day_part.split('-').collect();
    let &[day, month, year] = fields.as_slice() else {
        return Err(malformed());
    };

    Ok(format!("{}-{}-{} {}", year, pad2(month), pad2(day), time_part))
}
