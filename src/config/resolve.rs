//! Resolution of raw configs into the paths and options for one run

use std::path::{Path, PathBuf};

use crate::config::{
    ConfigError, CoreOptions, ExperimentConfig, OptionsConfig, PrefilterOptions, SiteStatus,
};

/// Name of the output artifact under `<output_dir>/<batch_id>/`.
pub const PREFILTER_FILE_NAME: &str = "feature_prefilter.tsv";

/// Everything the prefilter step needs, resolved from both config files.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub batch_id: String,
    pub step: String,
    pub core: CoreOptions,
    pub prefilter: PrefilterOptions,

    /// `<data_dir>/<batch_id>` - root of the batch's per-site data.
    pub input_data_dir: PathBuf,

    /// `<input_data_dir>/<example_site>` - directory scanned for features.
    pub example_site_dir: PathBuf,

    /// Destination of the tab-separated feature table.
    pub prefilter_file: PathBuf,

    /// Sites marked complete by the upstream stages.
    pub sites: Vec<String>,
}

/// Load both config files and resolve them for one batch.
///
/// Returns the resolved config plus the names of incomplete and errored
/// sites. Those two lists exist only so the caller can log what was skipped;
/// the prefilter step itself reads a single example site.
pub fn process_configuration(
    batch_id: &str,
    step: &str,
    options_path: &Path,
    experiment_path: &Path,
) -> Result<(ResolvedConfig, Vec<String>, Vec<String>), ConfigError> {
    let options = OptionsConfig::from_path(options_path)?;
    let experiment = ExperimentConfig::from_path(experiment_path)?;

    if options.core.compartments.is_empty() {
        return Err(ConfigError::NoCompartments);
    }

    let mut complete = Vec::new();
    let mut incomplete = Vec::new();
    let mut errored = Vec::new();
    for site in &experiment.sites {
        match site.status {
            SiteStatus::Complete => complete.push(site.name.clone()),
            SiteStatus::Incomplete => incomplete.push(site.name.clone()),
            SiteStatus::Errored => errored.push(site.name.clone()),
        }
    }

    let example_site = &options.core.example_site;
    if !complete.iter().any(|name| name == example_site) {
        return Err(ConfigError::ExampleSiteUnavailable(example_site.clone()));
    }

    let input_data_dir = experiment.experiment.data_dir.join(batch_id);
    let example_site_dir = input_data_dir.join(example_site);
    let prefilter_file = experiment
        .experiment
        .output_dir
        .join(batch_id)
        .join(PREFILTER_FILE_NAME);

    let resolved = ResolvedConfig {
        batch_id: batch_id.to_string(),
        step: step.to_string(),
        core: options.core,
        prefilter: options.preprocess.prefilter,
        input_data_dir,
        example_site_dir,
        prefilter_file,
        sites: complete,
    };

    Ok((resolved, incomplete, errored))
}
