//! Path utilities: expand `~` and locate the default backup directory.

use crate::config::Config;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<config dir>/backups`
pub fn default_backup_dir() -> PathBuf {
    Config::config_dir().join("backups")
}
