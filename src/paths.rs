//! Centralized path definitions for fitcheck
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.fitcheck/
//! └── config.toml               # User preferences (scoring options)
//! ```

use std::path::PathBuf;

/// Global config directory name (under home)
const GLOBAL_DIR: &str = ".fitcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "FITCHECK_CONFIG";

/// Get the global config directory.
///
/// Returns `~/.fitcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$FITCHECK_CONFIG` when set, otherwise `~/.fitcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}
