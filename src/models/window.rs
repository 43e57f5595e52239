use crate::errors::{AppError, AppResult};
use crate::utils::date::{start_of_month, start_of_next_month};
use crate::utils::time::{format_timestamp, local_midnight};
use chrono::{DateTime, FixedOffset, NaiveDate, SubsecRound, TimeDelta, Timelike, Utc};

/// Half-open interval `[start, end)` of UTC instants.
///
/// Every date filter goes through a window so a session starting exactly at
/// `end` always belongs to the next day/month, never to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn ceil_to_second(ts: DateTime<Utc>) -> DateTime<Utc> {
    if ts.nanosecond() == 0 {
        ts
    } else {
        ts.trunc_subsecs(0) + TimeDelta::seconds(1)
    }
}

impl Window {
    /// Bounds with sub-seconds are rounded up to the next whole second:
    /// stored check-ins have second precision, so the window selects the
    /// same sessions in SQL and in `contains`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidInput(format!(
                "window end {} is before start {}",
                format_timestamp(&end),
                format_timestamp(&start)
            )));
        }
        Ok(Self {
            start: ceil_to_second(start),
            end: ceil_to_second(end),
        })
    }

    /// Calendar day `date` as seen from `offset`.
    pub fn day(date: NaiveDate, offset: FixedOffset) -> Self {
        let next = date.succ_opt().unwrap_or(NaiveDate::MAX);
        Self::days(date, next, offset)
    }

    /// Calendar month containing `date`.
    pub fn month(date: NaiveDate, offset: FixedOffset) -> Self {
        Self::days(start_of_month(date), start_of_next_month(date), offset)
    }

    /// Days `[first, end)`; an inverted span collapses to an empty window.
    pub fn days(first: NaiveDate, end: NaiveDate, offset: FixedOffset) -> Self {
        let start = local_midnight(first, offset);
        let end = local_midnight(end.max(first), offset);
        Self { start, end }
    }

    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        *ts >= self.start && *ts < self.end
    }

    pub fn start_str(&self) -> String {
        format_timestamp(&self.start)
    }

    pub fn end_str(&self) -> String {
        format_timestamp(&self.end)
    }
}
