//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read from disk.
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the expected schema.
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configured example site is missing from the experiment config,
    /// or is listed but not marked complete.
    #[error("example site '{0}' is not listed as a complete site in the experiment config")]
    ExampleSiteUnavailable(String),

    /// No compartments configured, so there is nothing to scan.
    #[error("options config lists no compartments under core.compartments")]
    NoCompartments,
}
