//! Errors raised while assembling a property source

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading properties
#[derive(Debug, Error)]
pub enum SourceError {
    /// The properties file could not be read
    #[error("failed to read properties file {}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The properties file is not valid TOML
    #[error("invalid properties file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A `NAME=VALUE` definition without `=`
    #[error("invalid property definition '{0}': expected NAME=VALUE")]
    MalformedDefinition(String),

    /// A `NAME=VALUE` definition with an empty name
    #[error("invalid property definition '{0}': property name is empty")]
    EmptyName(String),
}
