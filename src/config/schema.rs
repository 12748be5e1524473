//! Serde schema for the two YAML configuration files
//!
//! The options config carries pipeline-wide settings plus the per-step
//! blocks; this stage only reads `core` and `preprocess.prefilter`. The
//! experiment config carries the batch directories and the per-site status
//! list produced by the upstream processing stages.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Pipeline options config (`options.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    pub core: CoreOptions,
    pub preprocess: PreprocessOptions,
}

/// Core options shared by every pipeline step.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreOptions {
    /// Compartments with per-site measurement files (e.g. Cells, Nuclei, Cytoplasm).
    pub compartments: Vec<String>,

    /// Site whose measurement files are representative of the whole batch.
    /// Feature columns are scanned from this site only.
    pub example_site: String,

    /// Column-name prefix marking metadata (non-feature) columns.
    #[serde(default = "default_metadata_prefix")]
    pub metadata_prefix: String,
}

/// The `preprocess` block of the options config.
#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessOptions {
    pub prefilter: PrefilterOptions,
}

/// Options for the prefilter step.
#[derive(Debug, Clone, Deserialize)]
pub struct PrefilterOptions {
    /// When false, the feature table is still written but nothing is flagged.
    #[serde(default = "default_true")]
    pub perform: bool,

    /// Permit replacing an existing prefilter file.
    #[serde(default)]
    pub force_overwrite: bool,

    /// Substrings marking features to flag for removal (e.g. "Costes", "Manders").
    #[serde(default)]
    pub flag_cols: Vec<String>,
}

/// Experiment config (`experiment.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentConfig {
    pub experiment: ExperimentPaths,
    #[serde(default)]
    pub sites: Vec<SiteEntry>,
}

/// Batch-level directories.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentPaths {
    /// Root of the per-batch single-cell data.
    pub data_dir: PathBuf,

    /// Root of the per-batch pipeline outputs.
    pub output_dir: PathBuf,
}

/// One site and its processing status from the upstream stages.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    #[serde(default)]
    pub status: SiteStatus,
}

/// Upstream processing status of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    #[default]
    Complete,
    Incomplete,
    Errored,
}

impl OptionsConfig {
    /// Load and parse the options config from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        parse_yaml(path)
    }
}

impl ExperimentConfig {
    /// Load and parse the experiment config from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        parse_yaml(path)
    }
}

fn parse_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn default_metadata_prefix() -> String {
    "Metadata_".to_string()
}

fn default_true() -> bool {
    true
}
