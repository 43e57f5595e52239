use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Opening the store already applies pending migrations, so check
        // what is pending on a raw connection first.
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let conn = rusqlite::Connection::open(&cfg.database)?;
            let pending = pending_migrations(&conn)?;
            if pending.is_empty() {
                println!("{}✔ Schema is up to date.{}\n", GREEN, RESET);
            } else {
                for version in run_pending_migrations(&conn)? {
                    println!("  applied {}", version);
                }
                println!("{}✔ Migration completed.{}\n", GREEN, RESET);
            }
        }

        if !(*info || *check || *vacuum) {
            return Ok(());
        }

        let store = open_store(cfg)?;

        if *info {
            stats::print_db_info(&store)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        store.close()?;
    }

    Ok(())
}
