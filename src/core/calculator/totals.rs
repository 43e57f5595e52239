use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Utc};

/// Sum of closed-session durations, in seconds. Open sessions count as 0.
pub fn sum_durations(sessions: &[WorkSession]) -> i64 {
    sessions.iter().filter_map(|s| s.duration_seconds()).sum()
}

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}

/// Hours worked by sessions checked in during `[start, end)`.
pub fn total_hours_for_range(
    store: &SessionStore,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<f64> {
    let sessions = store.get_between(start, end)?;
    Ok(seconds_to_hours(sum_durations(&sessions)))
}
