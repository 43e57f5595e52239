//! Time utilities: the storage timestamp format, parsing user input,
//! UTC offsets and duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Utc};

/// Fixed ISO-8601 layout used in the database and in CSV/JSON files.
/// Lexicographic order of formatted values equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current instant, truncated to whole seconds like every stored value.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an RFC 3339 timestamp (any offset) into UTC, dropping sub-seconds.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(0))
}

/// Parse a timestamp typed by the user.
///
/// Accepts RFC 3339 (`2024-01-05T09:00:00Z`) or a local wall-clock time
/// (`2024-01-05 09:00` / `2024-01-05 09:00:00`) interpreted in `offset`.
pub fn parse_user_timestamp(s: &str, offset: FixedOffset) -> AppResult<DateTime<Utc>> {
    if let Some(ts) = parse_timestamp(s) {
        return Ok(ts);
    }

    let trimmed = s.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    Ok(local_to_utc(naive, offset))
}

pub fn parse_optional_timestamp(
    input: Option<&String>,
    offset: FixedOffset,
) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_user_timestamp(s, offset)).transpose()
}

/// Convert a wall-clock time in `offset` to UTC.
pub fn local_to_utc(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    let shifted = naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(shifted, Utc)
}

/// UTC instant of local midnight at the start of `date`.
pub fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    local_to_utc(date.and_time(NaiveTime::MIN), offset)
}

/// Calendar date of `ts` as seen from `offset`.
pub fn local_date(ts: &DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    ts.with_timezone(&offset).date_naive()
}

/// Parse `Z`, `UTC`, `+09:00`, `-0530` or `+02` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (h, m) = if digits.len() <= 2 {
        (digits.parse::<i32>().ok()?, 0)
    } else {
        let split = digits.len() - 2;
        (
            digits[..split].parse::<i32>().ok()?,
            digits[split..].parse::<i32>().ok()?,
        )
    };

    if h > 23 || m > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
}

/// Format a number of seconds as `HH:MM` (hours are not wrapped at 24).
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}", sign, s / 3600, s % 3600 / 60)
}
