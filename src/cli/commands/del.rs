use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        let prompt = match id {
            Some(id) => format!("Delete session #{}? This action is irreversible.", id),
            None => "Delete ALL sessions? This action is irreversible.".to_string(),
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;

        match id {
            Some(id) if !*all => {
                store.delete(*id)?;
                success(format!("Session #{} has been deleted.", id));
            }
            _ => {
                let n = store.delete_all()?;
                success(format!("{} sessions have been deleted.", n));
            }
        }

        store.close()?;
    }

    Ok(())
}
