use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::long_local;
use crate::utils::time::{now, parse_optional_timestamp};

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let offset = cfg.offset()?;

    match cmd {
        Commands::In { at } => {
            let ts = parse_optional_timestamp(at.as_ref(), offset)?.unwrap_or_else(now);
            let mut store = open_store(cfg)?;
            let session = store.check_in_at(ts)?;

            success(format!(
                "Checked in at {} (session #{})",
                long_local(&session.check_in, offset),
                session.id
            ));
            store.close()
        }
        Commands::Out { at } => {
            let ts = parse_optional_timestamp(at.as_ref(), offset)?.unwrap_or_else(now);
            let mut store = open_store(cfg)?;
            let session = store.check_out_at(ts)?;

            success(format!(
                "Checked out at {} (session #{}, worked {})",
                long_local(&ts, offset),
                session.id,
                session.formatted_duration().unwrap_or_default()
            ));
            store.close()
        }
        _ => Ok(()),
    }
}
