use crate::errors::{AppError, AppResult};
use crate::interchange::{ImportMode, SkippedRow};
use crate::models::work_session::WorkSession;
use crate::utils::time::parse_timestamp;
use std::collections::HashSet;

/// One data row as read from a file, before any validation.
pub(crate) struct RawRecord {
    pub line: u64,
    pub fields: usize,
    pub id: String,
    pub check_in: String,
    pub check_out: String,
}

/// Turn raw rows into sessions ready for insertion.
///
/// Rows are skipped (not fatal) for missing fields, a bad check-in, a bad non-empty
/// check-out, an inverted pair, or an unusable id in `PreserveIds` mode.
/// Only the latest open session is kept. A repeated id in `PreserveIds`
/// mode is fatal.
pub(crate) fn build_sessions(
    rows: Vec<RawRecord>,
    mode: ImportMode,
) -> AppResult<(Vec<WorkSession>, Vec<SkippedRow>)> {
    let mut accepted: Vec<(u64, WorkSession)> = Vec::new();
    let mut skipped = Vec::new();
    let mut seen_ids = HashSet::new();

    for row in rows {
        let skip = |reason: String| SkippedRow {
            line: row.line,
            reason,
        };

        if row.fields < 3 {
            skipped.push(skip(format!("expected 3 fields, found {}", row.fields)));
            continue;
        }

        let Some(check_in) = parse_timestamp(&row.check_in) else {
            skipped.push(skip(format!("invalid check-in '{}'", row.check_in)));
            continue;
        };

        let check_out = if row.check_out.trim().is_empty() {
            None
        } else {
            match parse_timestamp(&row.check_out) {
                Some(ts) => Some(ts),
                None => {
                    skipped.push(skip(format!("invalid check-out '{}'", row.check_out)));
                    continue;
                }
            }
        };

        if let Some(out) = &check_out
            && *out < check_in
        {
            skipped.push(skip("check-out is earlier than check-in".into()));
            continue;
        }

        let id = match mode {
            ImportMode::Renumber => 0,
            ImportMode::PreserveIds => match row.id.trim().parse::<i64>() {
                Ok(id) if id > 0 => {
                    if !seen_ids.insert(id) {
                        return Err(AppError::DuplicateId(id));
                    }
                    id
                }
                _ => {
                    skipped.push(skip(format!("invalid id '{}'", row.id)));
                    continue;
                }
            },
        };

        accepted.push((row.line, WorkSession::new(id, check_in, check_out)));
    }

    // keep a single open session: the one checked in last
    let latest_open = accepted
        .iter()
        .filter(|(_, s)| s.is_open())
        .map(|(_, s)| s.check_in)
        .max();

    let mut kept_open = false;
    let mut sessions = Vec::with_capacity(accepted.len());
    for (line, s) in accepted {
        if s.is_open() {
            if kept_open || Some(s.check_in) != latest_open {
                skipped.push(SkippedRow {
                    line,
                    reason: "another session is already open".into(),
                });
                continue;
            }
            kept_open = true;
        }
        sessions.push(s);
    }

    skipped.sort_by_key(|r| r.line);
    Ok((sessions, skipped))
}
