use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::interchange::model::SessionRecord;
use crate::interchange::validate::{RawRecord, build_sessions};
use crate::interchange::{ImportMode, ImportReport};

/// Full dump of the store as a pretty-printed JSON array.
pub fn export_json(store: &SessionStore) -> AppResult<String> {
    let records: Vec<SessionRecord> = store.get_all()?.iter().map(SessionRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Same rules as the CSV import; "line" in skip reports is the 1-based
/// position in the array. Malformed JSON leaves the store untouched.
pub fn import_json(store: &mut SessionStore, text: &str, mode: ImportMode) -> AppResult<ImportReport> {
    let records: Vec<SessionRecord> = serde_json::from_str(text)?;

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(idx, r)| RawRecord {
            line: idx as u64 + 1,
            fields: 3,
            id: r.id.map(|id| id.to_string()).unwrap_or_default(),
            check_in: r.check_in,
            check_out: r.check_out.unwrap_or_default(),
        })
        .collect();

    let (sessions, skipped) = build_sessions(rows, mode)?;
    let removed = store.replace_all(&sessions, mode == ImportMode::PreserveIds)?;

    Ok(ImportReport {
        removed,
        imported: sessions.len(),
        skipped,
    })
}
