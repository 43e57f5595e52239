use crate::errors::{AppError, AppResult};
use crate::utils::time::local_date;
use chrono::{Datelike, FixedOffset, NaiveDate};

pub fn today(offset: FixedOffset) -> NaiveDate {
    local_date(&crate::utils::time::now(), offset)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn start_of_next_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(NaiveDate::MAX)
}

/// Every day in `[first, end)`.
pub fn days_between(first: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    first.iter_days().take_while(|d| *d < end).collect()
}

/// Resolve a period expression to a half-open span of days `[first, end)`.
///
/// Supported shapes:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `A:B` where both sides share one of the shapes above
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(format!(
                "start and end must have the same format: {r}"
            )));
        }

        let (first, _) = parse_single_period(start)?;
        let (_, last) = parse_single_period(end)?;

        if last <= first {
            return Err(AppError::InvalidRange(format!("end before start: {r}")));
        }
        return Ok((first, last));
    }

    parse_single_period(r.trim())
}

fn parse_single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let end = NaiveDate::from_ymd_opt(y + 1, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            Ok((first, end))
        }
        // YYYY-MM
        7 => {
            let first = parse_month(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((first, start_of_next_month(first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let next = d
                .succ_opt()
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, next))
        }
        _ => Err(AppError::InvalidRange(format!("unsupported period format: {p}"))),
    }
}
