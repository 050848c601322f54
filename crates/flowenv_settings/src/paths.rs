//! Home, config, and log locations.

use std::path::PathBuf;

pub const HOME_ENV: &str = "FLOWENV_HOME";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the Flowenv home directory.
///
/// Priority:
/// 1) FLOWENV_HOME
/// 2) ~/.flowenv
/// 3) ./.flowenv
pub fn flowenv_home() -> PathBuf {
    if let Some(override_path) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(override_path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flowenv")
}

/// Default config file: ~/.flowenv/config.toml
pub fn default_config_path() -> PathBuf {
    flowenv_home().join(CONFIG_FILE_NAME)
}

/// Default logs directory: ~/.flowenv/logs
pub fn default_logs_dir() -> PathBuf {
    flowenv_home().join("logs")
}
