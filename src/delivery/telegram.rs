//! Telegram Bot API sink

use std::time::Duration;

use crate::error::{BalanceError, BalanceResult};

use super::chunk::{chunk_message, MESSAGE_LIMIT};
use super::DeliverySink;

const TELEGRAM_API: &str = "https://api.telegram.org";
const USER_AGENT: &str = concat!("node-balance/", env!("CARGO_PKG_VERSION"));

/// Sends reports through `sendMessage` with HTML parse mode
pub struct TelegramSink {
    http: reqwest::blocking::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramSink {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> BalanceResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BalanceError::Delivery(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    fn send_chunk(&self, text: &str) -> BalanceResult<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API, self.bot_token);
        let params = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text),
            ("parse_mode", "HTML"),
        ];

        // Errors carry the request URL, which embeds the bot token.
        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .map_err(|e| BalanceError::Delivery(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BalanceError::Delivery(format!(
                "Telegram returned {}: {}",
                status,
                body.trim()
            )));
        }

        Ok(())
    }
}

impl DeliverySink for TelegramSink {
    fn deliver(&self, text: &str) -> BalanceResult<()> {
        let chunks = chunk_message(text, MESSAGE_LIMIT);
        let count = chunks.len();
        for (idx, chunk) in chunks.iter().enumerate() {
            self.send_chunk(chunk)?;
            log::debug!("Sent message part {}/{}", idx + 1, count);
        }
        log::info!("Report delivered to Telegram chat {} ({} message(s))", self.chat_id, count);
        Ok(())
    }
}
