pub mod calculator;
pub mod config;
pub mod list;
pub mod log;
pub mod logic;
