use crate::models::work_session::WorkSession;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::formatting::long_local;
use crate::utils::table::Table;
use chrono::FixedOffset;

/// Renders sessions as the table shown by `list`.
pub struct ListLogic;

impl ListLogic {
    pub fn render(sessions: &[WorkSession], offset: FixedOffset, sep: &str) -> String {
        let mut table = Table::new(vec!["ID", "CHECK-IN", "CHECK-OUT", "DURATION"]);

        for s in sessions {
            let check_out = s
                .check_out
                .as_ref()
                .map(|ts| long_local(ts, offset))
                .unwrap_or_else(|| "--:--".to_string());
            let duration = s.formatted_duration().unwrap_or_else(|| "--:--".to_string());

            table.add_row(vec![
                s.id.to_string(),
                colorize_in_out(&long_local(&s.check_in, offset), true),
                colorize_in_out(&check_out, false),
                colorize_optional(&duration),
            ]);
        }

        table.render(sep)
    }
}
