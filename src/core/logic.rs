use crate::core::calculator::breakdown::{day_summaries, per_day_breakdown};
use crate::core::calculator::totals::sum_durations;
use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::models::month_summary::MonthSummary;
use crate::utils::date::{start_of_month, start_of_next_month};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Everything the calendar and totals views need for one month.
    pub fn month_summary(
        store: &SessionStore,
        date: NaiveDate,
        target_hours: f64,
    ) -> AppResult<MonthSummary> {
        let first_day = start_of_month(date);
        let sessions = store.get_for_month(date)?;

        let breakdown = per_day_breakdown(
            &sessions,
            first_day,
            start_of_next_month(date),
            store.offset(),
        );

        Ok(MonthSummary {
            first_day,
            total_seconds: sum_durations(&sessions),
            open_sessions: sessions.iter().filter(|s| s.is_open()).count(),
            days: day_summaries(breakdown),
            target_hours,
        })
    }
}
