//! Global configuration management
//!
//! User preferences for the property report, stored at
//! `~/.config/propreport/config.toml`:
//!
//! ```toml
//! [report]
//! title = "Build properties"
//! color = false
//! header = true
//! default_file = "gradle.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::paths;

/// Global propreport configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// Report preferences
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report preferences
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Header title; the CLI derives one from the property file when unset
    pub title: Option<String>,
    /// Colour property names when writing to a terminal
    pub color: bool,
    /// Print the header block
    pub header: bool,
    /// Property file read when `--file` is not given
    pub default_file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            color: true,
            header: true,
            default_file: PathBuf::from(paths::DEFAULT_PROPERTIES_FILE),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if it is missing or invalid
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or use defaults if it is missing or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Self::parse(&content))
        {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring config at {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
