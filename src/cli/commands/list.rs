use crate::cli::commands::{open_store, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::totals::{seconds_to_hours, sum_durations};
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::models::window::Window;
use crate::utils::date::{parse_date, parse_period};
use crate::utils::formatting::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        id,
        date,
        month,
        range,
        all,
    } = cmd
    {
        let store = open_store(cfg)?;
        let offset = store.offset();

        let (title, sessions) = if let Some(id) = id {
            (format!("Session #{id}"), vec![store.get_by_id(*id)?])
        } else if let Some(d) = date {
            let day = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            (day.to_string(), store.get_for_date(day)?)
        } else if let Some(r) = range {
            let (first, end) = parse_period(r)?;
            let window = Window::days(first, end, offset);
            (r.clone(), store.get_in_window(&window)?)
        } else if *all {
            ("All sessions".to_string(), store.get_all()?)
        } else {
            let m = resolve_month(month, cfg)?;
            (m.format("%Y-%m").to_string(), store.get_for_month(m)?)
        };

        if sessions.is_empty() {
            println!("No sessions for {}", title);
            return store.close();
        }

        println!("\n{}\n", title);
        print!("{}", ListLogic::render(&sessions, offset, &cfg.separator_char));
        println!(
            "\n{} sessions, {} worked",
            sessions.len(),
            format_hours(seconds_to_hours(sum_durations(&sessions)))
        );

        store.close()?;
    }
    Ok(())
}
