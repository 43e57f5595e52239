use crate::utils::time::{format_seconds, format_timestamp};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSession {
    pub id: i64,                          // ⇔ work_time.id (AUTOINCREMENT)
    pub check_in: DateTime<Utc>,          // ⇔ work_time.check_in (TEXT, ISO 8601 UTC)
    pub check_out: Option<DateTime<Utc>>, // ⇔ work_time.check_out (NULL while open)
}

impl WorkSession {
    pub fn new(id: i64, check_in: DateTime<Utc>, check_out: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            check_in,
            check_out,
        }
    }

    /// An open session is one that has not been checked out yet.
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        self.check_out.map(|out| out - self.check_in)
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.duration().map(|d| d.num_seconds())
    }

    /// `HH:MM`, or `None` while the session is open.
    pub fn formatted_duration(&self) -> Option<String> {
        self.duration_seconds().map(format_seconds)
    }

    pub fn check_in_str(&self) -> String {
        format_timestamp(&self.check_in)
    }

    /// Empty string for an open session.
    pub fn check_out_str(&self) -> String {
        self.check_out
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default()
    }
}
