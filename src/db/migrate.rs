//! Schema migrations.
//!
//! Each migration is a named step. Applied steps are recorded in the `log`
//! table under `operation = 'migration_applied'` so they run exactly once.

use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_work_time",
        message: "Created work_time table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_time (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            check_in  TEXT NOT NULL,
            check_out TEXT
        );
        "#,
    },
    Migration {
        version: "20240215_0002_index_check_in",
        message: "Added check_in index to work_time",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_time_check_in ON work_time(check_in);
        "#,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [
            chrono::Local::now().to_rfc3339().as_str(),
            m.version,
            m.message,
        ],
    )?;

    tx.commit()
}

/// Versions of the migrations that have not been applied yet.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations and return the versions
/// that were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}
