use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::interchange::model::{CSV_HEADERS, SessionRecord};
use crate::interchange::validate::{RawRecord, build_sessions};
use crate::interchange::{ImportMode, ImportReport};
use crate::models::work_session::WorkSession;
use crate::utils::time::parse_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::io::Write;

/// Write `ID,CheckIn,CheckOut` plus one row per session.
pub fn write_csv<W: Write>(writer: W, sessions: &[WorkSession]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    // explicit header: an empty table still gets one
    wtr.write_record(CSV_HEADERS)?;
    for s in sessions {
        wtr.serialize(SessionRecord::from(s))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Full dump of the store as CSV text.
pub fn export_csv(store: &SessionStore) -> AppResult<String> {
    let sessions = store.get_all()?;

    let mut buf = Vec::new();
    write_csv(&mut buf, &sessions)?;

    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}

/// A header has three columns and no timestamp where `CheckIn` goes, so a
/// data line in first position is never mistaken for one.
fn looks_like_header(headers: &StringRecord) -> bool {
    headers.len() >= 3
        && !headers.iter().all(str::is_empty)
        && parse_timestamp(headers.get(1).unwrap_or_default()).is_none()
}

fn read_rows(text: &str) -> AppResult<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    if !looks_like_header(rdr.headers()?) {
        return Err(AppError::InvalidInput(
            "CSV data has no header row".into(),
        ));
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);

        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        rows.push(RawRecord {
            line,
            fields: record.len(),
            id: field(0),
            check_in: field(1),
            check_out: field(2),
        });
    }

    Ok(rows)
}

/// Replace the whole store with the sessions in `text`.
///
/// Destructive: existing sessions are removed in the same transaction that
/// inserts the new ones. Text without a header leaves the store untouched.
pub fn import_csv(store: &mut SessionStore, text: &str, mode: ImportMode) -> AppResult<ImportReport> {
    let rows = read_rows(text)?;
    let (sessions, skipped) = build_sessions(rows, mode)?;

    let removed = store.replace_all(&sessions, mode == ImportMode::PreserveIds)?;

    Ok(ImportReport {
        removed,
        imported: sessions.len(),
        skipped,
    })
}
