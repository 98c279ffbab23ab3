//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod run;

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;

pub use config::handle_config_command;
pub use run::{handle_report_command, handle_run_command, OutputFormat, ReportArgs, RunArgs};

/// Flags that take precedence over the settings file
#[derive(Args, Debug, Default)]
pub struct SettingsOverrides {
    /// Node display name used in the report header
    #[arg(long, global = true, env = "NODE_BALANCE_NODE_NAME")]
    pub node_name: Option<String>,

    /// Path to the bos executable
    #[arg(long, global = true, env = "NODE_BALANCE_BOS_PATH")]
    pub bos_path: Option<PathBuf>,

    /// Telegram bot token
    #[arg(long, global = true, env = "NODE_BALANCE_TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat id to deliver to
    #[arg(long, global = true, env = "NODE_BALANCE_CHAT_ID")]
    pub chat_id: Option<String>,
}

impl SettingsOverrides {
    /// Apply every override that was given
    pub fn apply(self, settings: &mut Settings) {
        if let Some(node_name) = self.node_name {
            settings.node_name = node_name;
        }
        if let Some(bos_path) = self.bos_path {
            settings.bos_path = bos_path;
        }
        if let Some(token) = self.telegram_token {
            settings.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = self.chat_id {
            settings.telegram.chat_id = Some(chat_id);
        }
    }
}
