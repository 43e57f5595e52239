#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use timecheck::db::SessionStore;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration never leaks into the tests.
pub fn tc() -> Command {
    let home = env::temp_dir().join("timecheck_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("timecheck");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecheck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{}_timecheck_dir", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn memory_store() -> SessionStore {
    SessionStore::open_in_memory().expect("open in-memory store")
}

/// Store with two closed sessions on 2024-01-05 (4h and 3h) and one on
/// 2024-01-08 (8h).
pub fn store_with_january() -> SessionStore {
    let mut store = memory_store();
    for (i, o) in [
        ("2024-01-05T08:00:00Z", "2024-01-05T12:00:00Z"),
        ("2024-01-05T13:00:00Z", "2024-01-05T16:00:00Z"),
        ("2024-01-08T09:00:00Z", "2024-01-08T17:00:00Z"),
    ] {
        store.check_in_at(ts(i)).expect("check in");
        store.check_out_at(ts(o)).expect("check out");
    }
    store
}

/// Initialize DB through the CLI
pub fn init_db(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and record a small dataset through the CLI
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (i, o) in [
        ("2024-01-05T09:00:00Z", "2024-01-05T17:30:00Z"),
        ("2024-01-08T09:00:00Z", "2024-01-08T17:00:00Z"),
    ] {
        tc().args(["--db", db_path, "in", "--at", i])
            .assert()
            .success();
        tc().args(["--db", db_path, "out", "--at", o])
            .assert()
            .success();
    }
}
