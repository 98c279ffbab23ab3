//! Display formatting for terminal output
//!
//! Alternative renderings of a report for the operator's terminal.

pub mod json;
pub mod summary;

pub use json::report_to_json;
pub use summary::format_totals_table;
