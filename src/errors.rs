//! Unified application error type.
//! Store, aggregation, interchange and CLI code all return AppError so a
//! caller can always tell "nothing to do" apart from "something broke".

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Cannot open database '{path}': {source}")]
    StorageUnavailable {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Session logic errors
    // ---------------------------
    #[error("No work session with id {0}")]
    NotFound(i64),

    #[error("No open session to check out")]
    NoOpenSession,

    #[error("Session #{0} is still open: check out before checking in again")]
    SessionAlreadyOpen(i64),

    #[error("Check-out {check_out} is earlier than check-in {check_in}")]
    CheckOutBeforeCheckIn { check_in: String, check_out: String },

    #[error("Duplicate session id in import data: {0}")]
    DuplicateId(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Interchange errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
