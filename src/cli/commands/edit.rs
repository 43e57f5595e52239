use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::long_local;
use crate::utils::time::parse_optional_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        check_in,
        check_out,
    } = cmd
    {
        let offset = cfg.offset()?;
        let new_in = parse_optional_timestamp(check_in.as_ref(), offset)?;
        let new_out = parse_optional_timestamp(check_out.as_ref(), offset)?;

        let mut store = open_store(cfg)?;
        let s = store.update(*id, new_in, new_out)?;

        success(format!(
            "Session #{} updated: {} → {}",
            s.id,
            long_local(&s.check_in, offset),
            s.check_out
                .as_ref()
                .map(|ts| long_local(ts, offset))
                .unwrap_or_else(|| "open".to_string())
        ));

        store.close()?;
    }
    Ok(())
}
