//! The record store: one explicitly owned SQLite connection holding every
//! work session.

use crate::core::calculator::totals;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::window::Window;
use crate::models::work_session::WorkSession;
use crate::ui::messages::warning;
use crate::utils::time::{self, format_timestamp};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, SubsecRound, Utc};
use rusqlite::Connection;
use std::path::Path;

pub struct SessionStore {
    conn: Connection,
    path: String,
    offset: FixedOffset,
}

fn ensure_ordered(check_in: &DateTime<Utc>, check_out: &DateTime<Utc>) -> AppResult<()> {
    if check_out < check_in {
        return Err(AppError::CheckOutBeforeCheckIn {
            check_in: format_timestamp(check_in),
            check_out: format_timestamp(check_out),
        });
    }
    Ok(())
}

impl SessionStore {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path)).map_err(|source| {
            AppError::StorageUnavailable {
                path: path.to_string(),
                source,
            }
        })?;
        Self::from_connection(conn, path)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| AppError::StorageUnavailable {
            path: ":memory:".to_string(),
            source,
        })?;
        Self::from_connection(conn, ":memory:")
    }

    fn from_connection(conn: Connection, path: &str) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self {
            conn,
            path: path.to_string(),
            offset: Utc.fix(),
        })
    }

    /// Interpret calendar days and months in `offset` instead of UTC.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the underlying connection, reporting a failed close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }

    /// Append a row to the internal log. A failed write is reported as a
    /// warning and never fails the operation that triggered it.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    pub fn check_in(&mut self) -> AppResult<WorkSession> {
        self.check_in_at(time::now())
    }

    /// Open a new session at `at`. Rejected while another session is open.
    pub fn check_in_at(&mut self, at: DateTime<Utc>) -> AppResult<WorkSession> {
        let at = at.trunc_subsecs(0);
        if let Some(open) = queries::load_open(&self.conn)? {
            return Err(AppError::SessionAlreadyOpen(open.id));
        }

        let id = queries::insert_session(&self.conn, &at, None)?;
        self.audit(
            "check_in",
            &id.to_string(),
            &format!("Checked in at {}", format_timestamp(&at)),
        );

        Ok(WorkSession::new(id, at, None))
    }

    pub fn check_out(&mut self) -> AppResult<WorkSession> {
        self.check_out_at(time::now())
    }

    /// Close the open session with the latest check-in.
    pub fn check_out_at(&mut self, at: DateTime<Utc>) -> AppResult<WorkSession> {
        let at = at.trunc_subsecs(0);
        let mut open = queries::load_open(&self.conn)?.ok_or(AppError::NoOpenSession)?;
        ensure_ordered(&open.check_in, &at)?;

        open.check_out = Some(at);
        queries::update_session(&self.conn, &open)?;
        self.audit(
            "check_out",
            &open.id.to_string(),
            &format!("Checked out at {}", format_timestamp(&at)),
        );

        Ok(open)
    }

    /// Overwrite the given fields of session `id`.
    pub fn update(
        &mut self,
        id: i64,
        check_in: Option<DateTime<Utc>>,
        check_out: Option<DateTime<Utc>>,
    ) -> AppResult<WorkSession> {
        if check_in.is_none() && check_out.is_none() {
            return Err(AppError::InvalidInput(
                "nothing to update: provide a check-in and/or a check-out".into(),
            ));
        }

        let mut session = self.get_by_id(id)?;
        // stored at second precision
        if let Some(ci) = check_in {
            session.check_in = ci.trunc_subsecs(0);
        }
        if let Some(co) = check_out {
            session.check_out = Some(co.trunc_subsecs(0));
        }
        if let Some(co) = &session.check_out {
            ensure_ordered(&session.check_in, co)?;
        }

        if queries::update_session(&self.conn, &session)? == 0 {
            return Err(AppError::NotFound(id));
        }

        self.audit(
            "edit",
            &id.to_string(),
            &format!(
                "Session set to {} → {}",
                session.check_in_str(),
                if session.is_open() {
                    "open".to_string()
                } else {
                    session.check_out_str()
                }
            ),
        );

        Ok(session)
    }

    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        if queries::delete_session(&self.conn, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        self.audit("del", &id.to_string(), "Session deleted");
        Ok(())
    }

    /// Remove every session; returns how many were removed.
    pub fn delete_all(&mut self) -> AppResult<usize> {
        let n = queries::delete_all_sessions(&self.conn)?;
        self.audit("del_all", "", &format!("Deleted {} sessions", n));
        Ok(n)
    }

    /// Wipe the store and insert `sessions` in a single transaction.
    ///
    /// With `preserve_ids` the sessions keep their ids; otherwise the store
    /// assigns fresh ones. Either way nothing changes if any insert fails.
    /// Returns how many sessions were removed.
    pub fn replace_all(&mut self, sessions: &[WorkSession], preserve_ids: bool) -> AppResult<usize> {
        let tx = self.conn.transaction()?;

        let removed = queries::delete_all_sessions(&tx)?;
        for s in sessions {
            if preserve_ids {
                queries::insert_session_with_id(&tx, s)?;
            } else {
                queries::insert_session(&tx, &s.check_in, s.check_out.as_ref())?;
            }
        }

        tx.commit()?;

        self.audit(
            "import",
            "",
            &format!(
                "Replaced {} sessions with {} imported sessions",
                removed,
                sessions.len()
            ),
        );

        Ok(removed)
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn get_by_id(&self, id: i64) -> AppResult<WorkSession> {
        queries::load_by_id(&self.conn, id)?.ok_or(AppError::NotFound(id))
    }

    pub fn get_all(&self) -> AppResult<Vec<WorkSession>> {
        queries::load_all(&self.conn)
    }

    pub fn get_in_window(&self, window: &Window) -> AppResult<Vec<WorkSession>> {
        queries::load_in_window(&self.conn, window)
    }

    pub fn get_for_date(&self, date: NaiveDate) -> AppResult<Vec<WorkSession>> {
        self.get_in_window(&Window::day(date, self.offset))
    }

    /// Sessions whose check-in lies in `[start, end)`.
    pub fn get_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Vec<WorkSession>> {
        self.get_in_window(&Window::new(start, end)?)
    }

    pub fn get_for_month(&self, date: NaiveDate) -> AppResult<Vec<WorkSession>> {
        self.get_in_window(&Window::month(date, self.offset))
    }

    /// Closed-session hours for the calendar month containing `date`.
    pub fn total_hours_for_month(&self, date: NaiveDate) -> AppResult<f64> {
        let sessions = self.get_for_month(date)?;
        Ok(totals::seconds_to_hours(totals::sum_durations(&sessions)))
    }

    /// Most recent session by check-in; drives the checked-in/out status.
    pub fn latest(&self) -> AppResult<Option<WorkSession>> {
        queries::load_latest(&self.conn)
    }

    pub fn open_session(&self) -> AppResult<Option<WorkSession>> {
        queries::load_open(&self.conn)
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count_sessions(&self.conn)
    }
}
