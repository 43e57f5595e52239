mod common;
use common::{memory_store, store_with_january, ts};

use chrono::{FixedOffset, NaiveDate};
use timecheck::core::calculator::breakdown::{day_summaries, per_day_breakdown};
use timecheck::core::calculator::progress::progress_percent;
use timecheck::core::calculator::totals::{sum_durations, total_hours_for_range};
use timecheck::core::logic::Core;
use timecheck::models::work_session::WorkSession;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

#[test]
fn test_sum_durations_ignores_open_sessions() {
    let sessions = vec![
        WorkSession::new(
            1,
            ts("2024-01-05T09:00:00Z"),
            Some(ts("2024-01-05T10:30:00Z")),
        ),
        WorkSession::new(2, ts("2024-01-05T11:00:00Z"), None),
    ];

    assert_eq!(sum_durations(&sessions), 5400);
    assert_eq!(sum_durations(&[]), 0);
}

#[test]
fn test_breakdown_buckets_same_day_sessions_together() {
    let store = store_with_january();
    let sessions = store.get_for_month(day(2024, 1, 1)).unwrap();

    let breakdown = per_day_breakdown(&sessions, day(2024, 1, 1), day(2024, 2, 1), utc());

    assert_eq!(breakdown.len(), 31);
    assert_eq!(breakdown[&day(2024, 1, 5)].len(), 2);
    assert_eq!(breakdown[&day(2024, 1, 8)].len(), 1);
    assert!(breakdown[&day(2024, 1, 6)].is_empty());

    let summaries = day_summaries(breakdown);
    let fifth = summaries
        .iter()
        .find(|d| d.date == day(2024, 1, 5))
        .unwrap();
    assert!((fifth.hours() - 7.0).abs() < 1e-9);

    let total: f64 = summaries.iter().map(|d| d.hours()).sum();
    assert!((total - 15.0).abs() < 1e-9);
}

#[test]
fn test_breakdown_ignores_sessions_outside_span() {
    let sessions = vec![
        WorkSession::new(
            1,
            ts("2023-12-31T23:00:00Z"),
            Some(ts("2024-01-01T01:00:00Z")),
        ),
        WorkSession::new(
            2,
            ts("2024-01-02T09:00:00Z"),
            Some(ts("2024-01-02T10:00:00Z")),
        ),
    ];

    let breakdown = per_day_breakdown(&sessions, day(2024, 1, 1), day(2024, 1, 3), utc());

    assert_eq!(breakdown.len(), 2);
    assert!(breakdown[&day(2024, 1, 1)].is_empty());
    assert_eq!(breakdown[&day(2024, 1, 2)][0].id, 2);
}

#[test]
fn test_breakdown_uses_local_calendar_day() {
    let session = WorkSession::new(
        1,
        ts("2024-01-05T23:30:00Z"),
        Some(ts("2024-01-06T01:00:00Z")),
    );
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    let breakdown = per_day_breakdown(&[session], day(2024, 1, 5), day(2024, 1, 7), plus_two);

    assert!(breakdown[&day(2024, 1, 5)].is_empty());
    assert_eq!(breakdown[&day(2024, 1, 6)].len(), 1);
}

#[test]
fn test_total_hours_for_range_is_half_open() {
    let store = store_with_january();

    let all = total_hours_for_range(&store, ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))
        .unwrap();
    assert!((all - 15.0).abs() < 1e-9);

    let first_only =
        total_hours_for_range(&store, ts("2024-01-05T08:00:00Z"), ts("2024-01-05T13:00:00Z"))
            .unwrap();
    assert!((first_only - 4.0).abs() < 1e-9);
}

#[test]
fn test_progress_percent_is_capped_and_guarded() {
    assert!((progress_percent(80.0, 160.0) - 50.0).abs() < 1e-9);
    assert_eq!(progress_percent(200.0, 160.0), 100.0);
    assert_eq!(progress_percent(10.0, 0.0), 0.0);
    assert_eq!(progress_percent(10.0, -5.0), 0.0);
    assert_eq!(progress_percent(0.0, 160.0), 0.0);
}

#[test]
fn test_month_summary_collects_days_and_open_sessions() {
    let mut store = store_with_january();
    store.check_in_at(ts("2024-01-09T09:00:00Z")).unwrap();

    let summary = Core::month_summary(&store, day(2024, 1, 20), 160.0).unwrap();

    assert_eq!(summary.first_day, day(2024, 1, 1));
    assert_eq!(summary.days.len(), 31);
    assert_eq!(summary.open_sessions, 1);
    assert_eq!(summary.worked_days(), 3);
    assert!((summary.hours() - 15.0).abs() < 1e-9);
    assert!((summary.progress() - 15.0 / 160.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_month_summary_of_empty_month() {
    let store = memory_store();

    let summary = Core::month_summary(&store, day(2024, 2, 10), 160.0).unwrap();

    assert_eq!(summary.days.len(), 29);
    assert_eq!(summary.total_seconds, 0);
    assert_eq!(summary.worked_days(), 0);
    assert_eq!(summary.progress(), 0.0);
}

#[test]
fn test_month_window_is_half_open() {
    use timecheck::models::window::Window;

    let jan = Window::month(day(2024, 1, 17), utc());

    assert_eq!(jan.start_str(), "2024-01-01T00:00:00Z");
    assert_eq!(jan.end_str(), "2024-02-01T00:00:00Z");
    assert!(jan.contains(&ts("2024-01-01T00:00:00Z")));
    assert!(jan.contains(&ts("2024-01-31T23:59:59Z")));
    assert!(!jan.contains(&ts("2024-02-01T00:00:00Z")));

    let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();
    let local_jan = Window::month(day(2024, 1, 1), plus_nine);
    assert_eq!(local_jan.start_str(), "2023-12-31T15:00:00Z");
}

#[test]
fn test_window_with_sub_second_bounds_agrees_with_stored_precision() {
    use timecheck::models::window::Window;

    let w = Window::new(ts("2024-01-05T10:00:00.500Z"), ts("2024-01-05T11:00:00.500Z")).unwrap();

    assert_eq!(w.start_str(), "2024-01-05T10:00:01Z");
    assert_eq!(w.end_str(), "2024-01-05T11:00:01Z");
    assert!(!w.contains(&ts("2024-01-05T10:00:00Z")));
    assert!(w.contains(&ts("2024-01-05T11:00:00Z")));
}
