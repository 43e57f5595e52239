//! Backup/restore of the whole session table as CSV or JSON.

pub mod csv_format;
mod fs_utils;
pub mod json_format;
pub mod logic;
pub mod model;
mod validate;

pub use logic::InterchangeLogic;
pub use model::SessionRecord;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InterchangeFormat {
    Csv,
    Json,
}

impl InterchangeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterchangeFormat::Csv => "csv",
            InterchangeFormat::Json => "json",
        }
    }
}

/// How imported rows get their ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Ignore ids in the file; the store assigns fresh, monotonic ids.
    #[default]
    Renumber,
    /// Keep ids from the file. Two rows sharing an id abort the import.
    PreserveIds,
}

/// A row that was not imported, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub removed: usize,
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
