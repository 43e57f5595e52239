use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::long_local;
use crate::utils::time::{format_seconds, now};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let offset = cfg.offset()?;
    let store = open_store(cfg)?;

    match store.latest()? {
        None => info("No sessions recorded yet."),
        Some(s) if s.is_open() => {
            let elapsed = (now() - s.check_in).num_seconds().max(0);
            println!(
                "🟢 Checked in since {} (session #{}, {} elapsed)",
                long_local(&s.check_in, offset),
                s.id,
                format_seconds(elapsed)
            );
        }
        Some(s) => {
            println!(
                "⚪ Checked out. Last session #{}: {} → {} ({})",
                s.id,
                long_local(&s.check_in, offset),
                s.check_out
                    .as_ref()
                    .map(|ts| long_local(ts, offset))
                    .unwrap_or_default(),
                s.formatted_duration().unwrap_or_default()
            );
        }
    }

    store.close()
}
