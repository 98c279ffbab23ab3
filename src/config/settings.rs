//! User settings for node-balance
//!
//! Persisted as `config.json` in the config directory. Every field has a
//! default so partial files load; command line flags and environment
//! variables override what is stored here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::NodeBalancePaths;
use crate::error::BalanceError;

/// Telegram delivery settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSettings {
    /// Bot API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,

    /// Destination chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl TelegramSettings {
    /// Token and chat id, if both are configured and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat)) if !token.is_empty() && !chat.is_empty() => {
                Some((token, chat))
            }
            _ => None,
        }
    }
}

/// User settings for node-balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display name of the node in report headers
    #[serde(default = "default_node_name")]
    pub node_name: String,

    /// Path to the bos executable
    #[serde(default = "default_bos_path")]
    pub bos_path: PathBuf,

    /// Telegram delivery
    #[serde(default)]
    pub telegram: TelegramSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_node_name() -> String {
    "My Node".to_string()
}

fn default_bos_path() -> PathBuf {
    PathBuf::from("bos")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            node_name: default_node_name(),
            bos_path: default_bos_path(),
            telegram: TelegramSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &NodeBalancePaths) -> Result<Self, BalanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BalanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BalanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NodeBalancePaths) -> Result<(), BalanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BalanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BalanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
