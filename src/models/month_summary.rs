use crate::core::calculator::{progress, totals};
use crate::models::day_summary::DaySummary;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub first_day: NaiveDate,
    pub days: Vec<DaySummary>,
    pub total_seconds: i64,
    pub target_hours: f64,
    pub open_sessions: usize,
}

impl MonthSummary {
    pub fn hours(&self) -> f64 {
        totals::seconds_to_hours(self.total_seconds)
    }

    pub fn progress(&self) -> f64 {
        progress::progress_percent(self.hours(), self.target_hours)
    }

    pub fn worked_days(&self) -> usize {
        self.days.iter().filter(|d| !d.sessions.is_empty()).count()
    }
}
