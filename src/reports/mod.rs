//! Reports module for node-balance
//!
//! Builds the operator-facing documents from frozen scope totals.

pub mod daily_balance;

pub use daily_balance::{escape_html, DailyBalanceReport};
