use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::interchange::InterchangeLogic;
use crate::ui::messages::success;
use crate::utils::path::{default_backup_dir, expand_tilde};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { dir, compress } = cmd {
        let dir = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(default_backup_dir);

        let store = open_store(cfg)?;
        let path = InterchangeLogic::backup(&store, &dir, *compress)?;
        success(format!("Backup created: {}", path.display()));

        store.close()?;
    }
    Ok(())
}
