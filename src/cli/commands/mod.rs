pub mod backup;
pub mod calendar;
pub mod check;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod total;

use crate::config::Config;
use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_month, today};
use chrono::NaiveDate;

/// Open the configured store, cutting days in the configured offset.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SessionStore> {
    let offset = cfg.offset()?;
    Ok(SessionStore::open(&cfg.database)?.with_offset(offset))
}

/// `--month YYYY-MM`, or the current month.
pub(crate) fn resolve_month(month: &Option<String>, cfg: &Config) -> AppResult<NaiveDate> {
    match month {
        Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone())),
        None => Ok(today(cfg.offset()?)),
    }
}
