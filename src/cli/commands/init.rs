use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing timecheck…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let store = SessionStore::open(&db_path)?;
    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    match store.count()? {
        0 => info("No sessions recorded yet."),
        n => info(format!("{} sessions already stored.", n)),
    }

    success("timecheck initialization completed!");
    store.close()
}
