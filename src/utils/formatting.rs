//! Formatting utilities used for CLI output.

use chrono::{DateTime, FixedOffset, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `8.5` → `8.5h`
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// `MM/dd HH:mm` in the given offset.
pub fn short_local(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%m/%d %H:%M").to_string()
}

/// `YYYY-MM-DD HH:MM` in the given offset.
pub fn long_local(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

/// Horizontal rule of `width` copies of `sep` (first char only).
pub fn rule(sep: &str, width: usize) -> String {
    sep.chars().next().unwrap_or('-').to_string().repeat(width)
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled.min(width)))
}
