//! Path management for node-balance
//!
//! ## Path Resolution Order
//!
//! 1. `NODE_BALANCE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/node-balance` on Linux,
//!    `~/Library/Application Support/node-balance` on macOS,
//!    `%APPDATA%\node-balance\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BalanceError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "NODE_BALANCE_CONFIG_DIR";

/// Manages all paths used by node-balance
#[derive(Debug, Clone)]
pub struct NodeBalancePaths {
    /// Base directory for node-balance configuration
    base_dir: PathBuf,
}

impl NodeBalancePaths {
    /// Create a new NodeBalancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BalanceError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "node-balance")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BalanceError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create NodeBalancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BalanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BalanceError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
