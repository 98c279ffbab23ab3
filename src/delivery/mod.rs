//! Report delivery
//!
//! A finished report is handed to a sink exactly once. Sinks do not retry.

pub mod chunk;
pub mod telegram;

use std::io::Write;

use crate::error::BalanceResult;

pub use chunk::{chunk_message, MESSAGE_LIMIT};
pub use telegram::TelegramSink;

/// Destination for a rendered report
pub trait DeliverySink {
    fn deliver(&self, text: &str) -> BalanceResult<()>;
}

/// Writes the report to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DeliverySink for StdoutSink {
    fn deliver(&self, text: &str) -> BalanceResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}
