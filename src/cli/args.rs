//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Prefilter-features - Select which morphology features are retained for profile construction
#[derive(Parser, Debug)]
#[command(name = "prefilter-features")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Batch identifier to process (e.g. "2020_07_02_Batch8")
    #[arg(short, long)]
    pub batch_id: String,

    /// Pipeline options config file (YAML).
    /// Holds the core options and the preprocess.prefilter block.
    #[arg(long, default_value = "config/options.yaml")]
    pub options_config: PathBuf,

    /// Experiment config file (YAML).
    /// Holds the data/output directories and the per-site status list.
    #[arg(long, default_value = "config/experiment.yaml")]
    pub experiment_config: PathBuf,

    /// Overwrite an existing prefilter file.
    /// The command line overrides 'force_overwrite: false' in the config;
    /// it can enable forcing but never disable it.
    #[arg(long, default_value = "false")]
    pub force: bool,
}
