use crate::db::queries;
use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &SessionStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(store.path()).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, store.path(), RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL SESSIONS
    //
    let count = queries::count_sessions(store.conn())?;
    let open = queries::count_open(store.conn())?;
    println!(
        "{}• Total sessions:{} {}{}{} ({} open)",
        CYAN, RESET, GREEN, count, RESET, open
    );

    //
    // 3) CHECK-IN RANGE
    //
    let (first, last) = queries::check_in_bounds(store.conn())?;
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Check-in range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) CURRENT STATUS
    //
    match store.open_session()? {
        Some(s) => println!(
            "{}• Status:{} checked in since {} (session #{})",
            CYAN,
            RESET,
            s.check_in_str(),
            s.id
        ),
        None => println!("{}• Status:{} checked out", CYAN, RESET),
    }

    println!();
    Ok(())
}
