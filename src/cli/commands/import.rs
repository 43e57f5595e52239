use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::interchange::{ImportMode, InterchangeLogic};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        format,
        file,
        keep_ids,
        yes,
    } = cmd
    {
        let path = expand_tilde(file);

        if !*yes
            && !confirm("Importing replaces ALL stored sessions. Continue?")
        {
            info("Import cancelled.");
            return Ok(());
        }

        let mode = if *keep_ids {
            ImportMode::PreserveIds
        } else {
            ImportMode::Renumber
        };

        let mut store = open_store(cfg)?;
        let report = InterchangeLogic::import_from_file(&mut store, *format, &path, mode)?;

        for row in &report.skipped {
            warning(format!("Skipped line {}: {}", row.line, row.reason));
        }
        success(format!(
            "Imported {} sessions from {} (replaced {}, skipped {})",
            report.imported,
            path.display(),
            report.removed,
            report.skipped.len()
        ));

        store.close()?;
    }
    Ok(())
}
