mod common;
use common::{memory_store, setup_test_db, store_with_january, ts};

use chrono::{FixedOffset, NaiveDate};
use timecheck::db::SessionStore;
use timecheck::db::log::load_log;
use timecheck::errors::AppError;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_check_in_check_out_duration_and_month_total() {
    let mut store = memory_store();

    let opened = store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();
    assert!(opened.is_open());
    assert_eq!(opened.duration(), None);

    let closed = store.check_out_at(ts("2024-01-05T17:30:00Z")).unwrap();
    assert_eq!(closed.id, opened.id);
    assert_eq!(closed.duration_seconds(), Some(8 * 3600 + 1800));
    assert_eq!(closed.formatted_duration().as_deref(), Some("08:30"));

    let total = store.total_hours_for_month(day(2024, 1, 10)).unwrap();
    assert!((total - 8.5).abs() < 1e-9, "got {total}");
}

#[test]
fn test_check_out_without_sessions_changes_nothing() {
    let mut store = memory_store();

    let err = store.check_out_at(ts("2024-01-05T17:30:00Z")).unwrap_err();
    assert!(matches!(err, AppError::NoOpenSession));

    assert_eq!(store.count().unwrap(), 0);
    assert!(store.latest().unwrap().is_none());
}

#[test]
fn test_check_out_after_everything_closed_is_no_open_session() {
    let mut store = store_with_january();

    let err = store.check_out_at(ts("2024-01-09T17:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::NoOpenSession));
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_second_check_in_is_rejected_while_open() {
    let mut store = memory_store();
    let open = store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();

    let err = store.check_in_at(ts("2024-01-05T10:00:00Z")).unwrap_err();
    match err {
        AppError::SessionAlreadyOpen(id) => assert_eq!(id, open.id),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_at_most_one_open_session_over_a_sequence() {
    let mut store = memory_store();

    let steps = [
        ("in", "2024-03-01T08:00:00Z"),
        ("in", "2024-03-01T08:05:00Z"),
        ("out", "2024-03-01T12:00:00Z"),
        ("out", "2024-03-01T12:01:00Z"),
        ("in", "2024-03-01T13:00:00Z"),
        ("out", "2024-03-01T18:00:00Z"),
        ("in", "2024-03-02T09:00:00Z"),
    ];

    for (kind, at) in steps {
        let _ = match kind {
            "in" => store.check_in_at(ts(at)),
            _ => store.check_out_at(ts(at)),
        };
        let open = store
            .get_all()
            .unwrap()
            .iter()
            .filter(|s| s.is_open())
            .count();
        assert!(open <= 1, "{open} open sessions after {kind} at {at}");
    }

    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_check_out_before_check_in_is_rejected() {
    let mut store = memory_store();
    store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();

    let err = store.check_out_at(ts("2024-01-05T08:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::CheckOutBeforeCheckIn { .. }));
    assert!(store.open_session().unwrap().is_some());
}

#[test]
fn test_update_overwrites_given_fields() {
    let mut store = store_with_january();
    let target = store.get_for_date(day(2024, 1, 8)).unwrap()[0].clone();

    let updated = store
        .update(target.id, Some(ts("2024-01-08T10:00:00Z")), None)
        .unwrap();
    assert_eq!(updated.check_in, ts("2024-01-08T10:00:00Z"));
    assert_eq!(updated.check_out, target.check_out);

    let reread = store.get_by_id(target.id).unwrap();
    assert_eq!(reread, updated);
    assert_eq!(reread.duration_seconds(), Some(7 * 3600));
}

#[test]
fn test_update_can_close_an_open_session() {
    let mut store = memory_store();
    let open = store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();

    store
        .update(open.id, None, Some(ts("2024-01-05T11:00:00Z")))
        .unwrap();

    assert!(store.open_session().unwrap().is_none());
}

#[test]
fn test_update_errors_are_explicit() {
    let mut store = store_with_january();

    assert!(matches!(
        store.update(999, Some(ts("2024-01-01T00:00:00Z")), None),
        Err(AppError::NotFound(999))
    ));

    let any = store.latest().unwrap().unwrap();
    assert!(matches!(
        store.update(any.id, None, None),
        Err(AppError::InvalidInput(_))
    ));

    let err = store
        .update(any.id, None, Some(ts("2000-01-01T00:00:00Z")))
        .unwrap_err();
    assert!(matches!(err, AppError::CheckOutBeforeCheckIn { .. }));
    assert_eq!(store.get_by_id(any.id).unwrap(), any);
}

#[test]
fn test_delete_removes_from_every_query() {
    let mut store = store_with_january();
    let victim = store.get_for_date(day(2024, 1, 8)).unwrap()[0].clone();

    store.delete(victim.id).unwrap();

    assert!(matches!(store.get_by_id(victim.id), Err(AppError::NotFound(_))));
    assert!(store.get_for_date(day(2024, 1, 8)).unwrap().is_empty());
    assert!(store.get_all().unwrap().iter().all(|s| s.id != victim.id));
    assert!(
        store
            .get_for_month(day(2024, 1, 1))
            .unwrap()
            .iter()
            .all(|s| s.id != victim.id)
    );
    assert!(
        store
            .get_between(ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))
            .unwrap()
            .iter()
            .all(|s| s.id != victim.id)
    );

    let total = store.total_hours_for_month(day(2024, 1, 1)).unwrap();
    assert!((total - 7.0).abs() < 1e-9);
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let mut store = store_with_january();
    assert!(matches!(store.delete(42), Err(AppError::NotFound(42))));
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_delete_all_reports_count() {
    let mut store = store_with_january();
    assert_eq!(store.delete_all().unwrap(), 3);
    assert!(store.get_all().unwrap().is_empty());
    assert_eq!(store.delete_all().unwrap(), 0);
}

#[test]
fn test_ids_are_never_reused() {
    let mut store = store_with_january();
    let last = store.latest().unwrap().unwrap();

    store.delete(last.id).unwrap();
    let fresh = store.check_in_at(ts("2024-01-09T09:00:00Z")).unwrap();

    assert!(fresh.id > last.id);
}

#[test]
fn test_queries_are_newest_first() {
    let store = store_with_january();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].check_in >= w[1].check_in));
    assert_eq!(all[0].check_in, ts("2024-01-08T09:00:00Z"));

    let latest = store.latest().unwrap().unwrap();
    assert_eq!(latest, all[0]);

    let same_day = store.get_for_date(day(2024, 1, 5)).unwrap();
    assert_eq!(same_day.len(), 2);
    assert_eq!(same_day[0].check_in, ts("2024-01-05T13:00:00Z"));
}

#[test]
fn test_between_is_half_open() {
    let store = store_with_january();

    let hit = store
        .get_between(ts("2024-01-05T08:00:00Z"), ts("2024-01-05T13:00:00Z"))
        .unwrap();
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].check_in, ts("2024-01-05T08:00:00Z"));

    assert!(matches!(
        store.get_between(ts("2024-01-06T00:00:00Z"), ts("2024-01-05T00:00:00Z")),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_month_window_excludes_next_month_start() {
    let mut store = memory_store();
    store.check_in_at(ts("2024-01-31T22:00:00Z")).unwrap();
    store.check_out_at(ts("2024-01-31T23:00:00Z")).unwrap();
    store.check_in_at(ts("2024-02-01T00:00:00Z")).unwrap();
    store.check_out_at(ts("2024-02-01T02:00:00Z")).unwrap();

    assert_eq!(store.get_for_month(day(2024, 1, 15)).unwrap().len(), 1);
    assert_eq!(store.get_for_month(day(2024, 2, 29)).unwrap().len(), 1);

    let jan = store.total_hours_for_month(day(2024, 1, 1)).unwrap();
    let feb = store.total_hours_for_month(day(2024, 2, 1)).unwrap();
    assert!((jan - 1.0).abs() < 1e-9);
    assert!((feb - 2.0).abs() < 1e-9);
}

#[test]
fn test_open_sessions_do_not_count_toward_totals() {
    let mut store = store_with_january();
    store.check_in_at(ts("2024-01-09T09:00:00Z")).unwrap();

    let total = store.total_hours_for_month(day(2024, 1, 9)).unwrap();
    assert!((total - 15.0).abs() < 1e-9);
}

#[test]
fn test_offset_moves_day_boundaries() {
    let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
    let mut store = memory_store().with_offset(seoul);

    // 2024-02-01 01:00 in Seoul
    store.check_in_at(ts("2024-01-31T16:00:00Z")).unwrap();
    store.check_out_at(ts("2024-01-31T20:00:00Z")).unwrap();

    assert!(store.get_for_date(day(2024, 1, 31)).unwrap().is_empty());
    assert_eq!(store.get_for_date(day(2024, 2, 1)).unwrap().len(), 1);
    assert!(store.get_for_month(day(2024, 1, 1)).unwrap().is_empty());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let db_path = setup_test_db("store_persists");

    {
        let mut store = SessionStore::open(&db_path).unwrap();
        store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();
        store.check_out_at(ts("2024-01-05T17:30:00Z")).unwrap();
        store.close().unwrap();
    }

    let store = SessionStore::open(&db_path).unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].check_out, Some(ts("2024-01-05T17:30:00Z")));
}

#[test]
fn test_mutations_are_written_to_internal_log() {
    let mut store = memory_store();
    let s = store.check_in_at(ts("2024-01-05T09:00:00Z")).unwrap();
    store.check_out_at(ts("2024-01-05T10:00:00Z")).unwrap();
    store.delete(s.id).unwrap();

    let ops: Vec<String> = load_log(store.conn())
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();

    assert!(ops.contains(&"migration_applied".to_string()));
    let tail: Vec<&str> = ops.iter().rev().take(3).map(String::as_str).collect();
    assert_eq!(tail, vec!["del", "check_out", "check_in"]);
}

#[test]
fn test_migrations_run_once() {
    let db_path = setup_test_db("migrations_once");

    SessionStore::open(&db_path).unwrap().close().unwrap();
    let store = SessionStore::open(&db_path).unwrap();

    let applied = load_log(store.conn())
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn test_returned_sessions_match_stored_precision() {
    let mut store = memory_store();

    let opened = store
        .check_in_at(ts("2024-01-05T09:00:00.750Z"))
        .unwrap();
    assert_eq!(opened.check_in, ts("2024-01-05T09:00:00Z"));
    assert_eq!(store.get_by_id(opened.id).unwrap(), opened);

    let closed = store
        .check_out_at(ts("2024-01-05T10:00:00.250Z"))
        .unwrap();
    assert_eq!(closed.duration_seconds(), Some(3600));
    assert_eq!(store.get_by_id(closed.id).unwrap(), closed);

    let edited = store
        .update(closed.id, Some(ts("2024-01-05T08:30:00.999Z")), None)
        .unwrap();
    assert_eq!(edited.check_in, ts("2024-01-05T08:30:00Z"));
    assert_eq!(store.get_by_id(edited.id).unwrap(), edited);
}

#[test]
fn test_between_with_sub_second_bounds() {
    let mut store = memory_store();
    store.check_in_at(ts("2024-01-05T10:00:00Z")).unwrap();
    store.check_out_at(ts("2024-01-05T11:00:00Z")).unwrap();

    let after = store
        .get_between(ts("2024-01-05T10:00:00.500Z"), ts("2024-01-05T12:00:00Z"))
        .unwrap();
    assert!(after.is_empty());

    let around = store
        .get_between(ts("2024-01-05T09:00:00Z"), ts("2024-01-05T10:00:00.500Z"))
        .unwrap();
    assert_eq!(around.len(), 1);
}
