use crate::models::work_session::WorkSession;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub sessions: Vec<WorkSession>,
    pub total_seconds: i64,
}

impl DaySummary {
    pub fn hours(&self) -> f64 {
        crate::core::calculator::totals::seconds_to_hours(self.total_seconds)
    }
}
