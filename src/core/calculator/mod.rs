pub mod breakdown;
pub mod progress;
pub mod totals;
