use crate::cli::commands::{open_store, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{BLUE, GREY, RED, RESET};
use crate::utils::formatting::{bold, format_hours, short_local};
use chrono::{Datelike, Weekday};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, details } = cmd {
        let m = resolve_month(month, cfg)?;
        let store = open_store(cfg)?;
        let offset = store.offset();
        let summary = Core::month_summary(&store, m, cfg.monthly_target_hours)?;

        header(summary.first_day.format("%B %Y"));

        for day in &summary.days {
            let label = day.date.format("%a %d").to_string();
            let label = match day.date.weekday() {
                Weekday::Sun => format!("{RED}{label}{RESET}"),
                Weekday::Sat => format!("{BLUE}{label}{RESET}"),
                _ => label,
            };

            if day.sessions.is_empty() {
                println!("{}  {GREY}-{RESET}", label);
                continue;
            }

            println!("{}  {}", label, format_hours(day.hours()));

            if *details {
                // oldest first within a day
                for s in day.sessions.iter().rev() {
                    println!(
                        "        #{} {} → {}",
                        s.id,
                        short_local(&s.check_in, offset),
                        s.check_out
                            .as_ref()
                            .map(|ts| short_local(ts, offset))
                            .unwrap_or_else(|| "--:--".to_string())
                    );
                }
            }
        }

        println!(
            "\n{} {}",
            bold("Total:"),
            format_hours(summary.hours())
        );

        store.close()?;
    }
    Ok(())
}
