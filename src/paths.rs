//! Centralized path definitions for propreport
//!
//! ## Layout
//!
//! ```text
//! ~/.config/propreport/
//! └── config.toml               # User preferences (title, colour, header)
//!
//! ./properties.toml             # Default property file (per working directory)
//! ```
//!
//! The config location can be overridden with `PROPREPORT_CONFIG`.

use std::env;
use std::path::PathBuf;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "PROPREPORT_CONFIG";

/// Property file read when none is given on the command line
pub const DEFAULT_PROPERTIES_FILE: &str = "properties.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "propreport";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global propreport directory.
///
/// Returns `~/.config/propreport/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Honors `PROPREPORT_CONFIG` when set and non-empty.
#[must_use]
pub fn global_config() -> PathBuf {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
