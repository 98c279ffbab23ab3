//! Config CLI command
//!
//! Shows the resolved configuration and optionally writes the default
//! settings file.

use crate::config::{NodeBalancePaths, Settings};
use crate::error::BalanceResult;

/// Handle `config`
pub fn handle_config_command(
    paths: &NodeBalancePaths,
    settings: &Settings,
    init: bool,
) -> BalanceResult<()> {
    if init {
        if paths.is_initialized() {
            println!("Settings already exist at {}", paths.settings_file().display());
        } else {
            Settings::default().save(paths)?;
            println!("Wrote default settings to {}", paths.settings_file().display());
        }
    }

    println!("{}", describe(paths, settings));
    Ok(())
}

/// Human-readable summary of the active configuration; secrets are not shown
pub fn describe(paths: &NodeBalancePaths, settings: &Settings) -> String {
    let telegram = match settings.telegram.credentials() {
        Some((_, chat_id)) => format!("configured (chat {})", chat_id),
        None => "not configured".to_string(),
    };

    format!(
        "Config directory: {}\n\
         Settings file:    {}{}\n\
         Node name:        {}\n\
         bos path:         {}\n\
         Telegram:         {}",
        paths.base_dir().display(),
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" },
        settings.node_name,
        settings.bos_path.display(),
        telegram,
    )
}
