pub mod day_summary;
pub mod month_summary;
pub mod window;
pub mod work_session;
