pub mod chart;
pub mod csv_log;
pub mod format;
pub mod report;
