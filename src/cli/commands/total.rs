use crate::cli::commands::{open_store, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::formatting::{format_hours, progress_bar};
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total { month } = cmd {
        let m = resolve_month(month, cfg)?;
        let store = open_store(cfg)?;
        let summary = Core::month_summary(&store, m, cfg.monthly_target_hours)?;

        let progress = summary.progress();
        println!(
            "Total for {}: {} ({}) over {} days",
            summary.first_day.format("%Y-%m"),
            format_hours(summary.hours()),
            format_seconds(summary.total_seconds),
            summary.worked_days()
        );
        println!(
            "{}{} {:.0}%{} of {} target",
            color_for_progress(progress),
            progress_bar(progress, 30),
            progress,
            RESET,
            format_hours(summary.target_hours)
        );
        if summary.open_sessions > 0 {
            println!("(one session still open, not counted)");
        }

        store.close()?;
    }
    Ok(())
}
