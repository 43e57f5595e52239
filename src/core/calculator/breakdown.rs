use crate::models::day_summary::DaySummary;
use crate::models::work_session::WorkSession;
use crate::utils::date::days_between;
use crate::utils::time::local_date;
use chrono::{FixedOffset, NaiveDate};
use std::collections::BTreeMap;

use super::totals::sum_durations;

/// Bucket sessions by the local calendar day of their check-in.
///
/// Every day in `[first_day, end_day)` gets a bucket, empty or not.
/// Sessions checked in outside that span are ignored. Each bucket keeps the
/// order of `sessions`.
pub fn per_day_breakdown(
    sessions: &[WorkSession],
    first_day: NaiveDate,
    end_day: NaiveDate,
    offset: FixedOffset,
) -> BTreeMap<NaiveDate, Vec<WorkSession>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<WorkSession>> = days_between(first_day, end_day)
        .into_iter()
        .map(|d| (d, Vec::new()))
        .collect();

    for s in sessions {
        if let Some(bucket) = buckets.get_mut(&local_date(&s.check_in, offset)) {
            bucket.push(s.clone());
        }
    }

    buckets
}

pub fn day_summaries(breakdown: BTreeMap<NaiveDate, Vec<WorkSession>>) -> Vec<DaySummary> {
    breakdown
        .into_iter()
        .map(|(date, sessions)| DaySummary {
            date,
            total_seconds: sum_durations(&sessions),
            sessions,
        })
        .collect()
}
