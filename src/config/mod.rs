//! Configuration module for node-balance
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Settings persistence (node name, bos path, Telegram credentials)

pub mod paths;
pub mod settings;

pub use paths::NodeBalancePaths;
pub use settings::{Settings, TelegramSettings};
