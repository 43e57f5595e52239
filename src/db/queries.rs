use crate::errors::{AppError, AppResult};
use crate::models::window::Window;
use crate::models::work_session::WorkSession;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_SESSIONS: &str = "SELECT id, check_in, check_out FROM work_time";
const NEWEST_FIRST: &str = "ORDER BY check_in DESC, id DESC";

fn parse_column(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<WorkSession> {
    let check_in_str: String = row.get("check_in")?;
    let check_out_str: Option<String> = row.get("check_out")?;

    let check_in = parse_column(1, &check_in_str)?;
    let check_out = match check_out_str.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(parse_column(2, s)?),
        _ => None,
    };

    Ok(WorkSession {
        id: row.get("id")?,
        check_in,
        check_out,
    })
}

fn load_many<P: rusqlite::Params>(conn: &Connection, sql: &str, p: P) -> AppResult<Vec<WorkSession>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(p, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_one<P: rusqlite::Params>(conn: &Connection, sql: &str, p: P) -> AppResult<Option<WorkSession>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let session = stmt.query_row(p, map_row).optional()?;
    Ok(session)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<WorkSession>> {
    load_one(conn, &format!("{SELECT_SESSIONS} WHERE id = ?1"), [id])
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<WorkSession>> {
    load_many(conn, &format!("{SELECT_SESSIONS} {NEWEST_FIRST}"), [])
}

/// Sessions whose check-in lies in `[window.start, window.end)`.
pub fn load_in_window(conn: &Connection, window: &Window) -> AppResult<Vec<WorkSession>> {
    load_many(
        conn,
        &format!("{SELECT_SESSIONS} WHERE check_in >= ?1 AND check_in < ?2 {NEWEST_FIRST}"),
        params![window.start_str(), window.end_str()],
    )
}

pub fn load_latest(conn: &Connection) -> AppResult<Option<WorkSession>> {
    load_one(conn, &format!("{SELECT_SESSIONS} {NEWEST_FIRST} LIMIT 1"), [])
}

/// The open session with the latest check-in, if any.
pub fn load_open(conn: &Connection) -> AppResult<Option<WorkSession>> {
    load_one(
        conn,
        &format!("{SELECT_SESSIONS} WHERE check_out IS NULL {NEWEST_FIRST} LIMIT 1"),
        [],
    )
}

pub fn count_sessions(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM work_time", [], |row| row.get(0))?;
    Ok(n)
}

pub fn count_open(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM work_time WHERE check_out IS NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// Insert a new session and return the id assigned by the store.
pub fn insert_session(
    conn: &Connection,
    check_in: &DateTime<Utc>,
    check_out: Option<&DateTime<Utc>>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_time (check_in, check_out) VALUES (?1, ?2)",
        params![format_timestamp(check_in), check_out.map(format_timestamp)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a session keeping its id.
pub fn insert_session_with_id(conn: &Connection, s: &WorkSession) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_time (id, check_in, check_out) VALUES (?1, ?2, ?3)",
        params![s.id, s.check_in_str(), s.check_out.as_ref().map(format_timestamp)],
    )?;
    Ok(())
}

/// Overwrite both timestamps of a session. Returns the number of rows touched.
pub fn update_session(conn: &Connection, s: &WorkSession) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE work_time SET check_in = ?1, check_out = ?2 WHERE id = ?3",
        params![s.check_in_str(), s.check_out.as_ref().map(format_timestamp), s.id],
    )?;
    Ok(n)
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM work_time WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn delete_all_sessions(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM work_time", [])?;
    Ok(n)
}

/// First and last check-in currently stored.
pub fn check_in_bounds(conn: &Connection) -> AppResult<(Option<String>, Option<String>)> {
    let bounds = conn.query_row(
        "SELECT MIN(check_in), MAX(check_in) FROM work_time",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(bounds)
}
