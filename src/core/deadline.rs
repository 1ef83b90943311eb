//! Deadline cell parsing.
//!
//! Two shapes are accepted, tried in order:
//! 1. `dd/mm/YYYY HH:MM:SS` (four-digit year, 24h clock)
//! 2. `HH:MM:SS`, placed on the reference date of the cycle
//!
//! Both are civil times in the reference timezone. A time-only value always
//! means "on the day the cycle runs"; it carries no other date information.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use thiserror::Error;

pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not dd/mm/yyyy hh:mm:ss nor hh:mm:ss")]
    Unrecognized,

    #[error("{0} does not exist in timezone {1}")]
    NonexistentLocalTime(NaiveDateTime, &'static str),
}

/// Parse a raw deadline into an instant in `tz`.
pub fn parse(raw: &str, reference_date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    let naive = parse_naive(raw.trim(), reference_date)?;
    // `%S` accepts :60, which chrono keeps as a leap-second nanosecond
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ParseError::Unrecognized);
    }
    localize(naive, tz)
}

fn parse_naive(s: &str, reference_date: NaiveDate) -> Result<NaiveDateTime, ParseError> {
    if has_four_digit_year(s)
        && let Ok(dt) = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
    {
        return Ok(dt);
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, TIME_FORMAT) {
        return Ok(reference_date.and_time(t));
    }

    Err(ParseError::Unrecognized)
}

/// chrono's `%Y` also takes short years; "1/1/24" must not mean year 24.
fn has_four_digit_year(s: &str) -> bool {
    s.split_whitespace()
        .next()
        .and_then(|date| date.rsplit('/').next())
        .map(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// DST fold → earlier instant; DST gap → error.
fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or(ParseError::NonexistentLocalTime(naive, tz.name()))
}
