//! Configuration module - YAML schema and resolution into per-run paths

mod error;
mod resolve;
mod schema;

pub use error::ConfigError;
pub use resolve::{process_configuration, ResolvedConfig};
pub use schema::{
    CoreOptions, ExperimentConfig, ExperimentPaths, OptionsConfig, PrefilterOptions,
    PreprocessOptions, SiteEntry, SiteStatus,
};
