//! Prefilter-features: Morphology Feature Preselection
//!
//! Determines which features should be used for building morphology
//! profiles. This is a preselection step; an additional round of feature
//! selection occurs at a later stage.

mod cli;
mod config;
mod pipeline;
mod report;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::process_configuration;
use pipeline::{
    check_if_write, load_features, mark_all_retained, prefilter_features, write_feature_table,
};
use report::PrefilterSummary;
use utils::{
    create_spinner, finish_with_success, init_logging, install_panic_hook, print_banner,
    print_completion, print_config, print_info, print_success, print_warning,
};

/// Step name, used for the log file and recorded in the resolved config.
const STEP_NAME: &str = "prefilter-features";

const FILE_EXISTS_WARNING: &str = "
Prefilter file already exists! Not overwriting!
Set 'force_overwrite: true' in the config or pass --force to overwrite.
Also check 'perform: true' is set in the config.
(Note that 'perform: false' still writes a file lacking prefiltered features.)
";

const FORCE_WARNING: &str = "
Prefilter file already exists! Overwriting file. This may be intended.
";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(STEP_NAME)?;
    install_panic_hook();

    // Failures are recorded in the log before surfacing; the printed message
    // and abnormal exit come from returning the error as usual.
    let result = run(cli);
    if let Err(err) = &result {
        tracing::error!("{STEP_NAME} failed: {err:#}");
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    tracing::info!("args used: {:?}", cli);

    let (config, incomplete_sites, errored_sites) = process_configuration(
        &cli.batch_id,
        STEP_NAME,
        &cli.options_config,
        &cli.experiment_config,
    )?;
    tracing::info!("config used: {:?}", config);
    tracing::info!(
        "skipped incomplete sites during config processing: {:?}",
        incomplete_sites
    );
    tracing::info!(
        "skipped errored sites during config processing: {:?}",
        errored_sites
    );

    // Forced overwrite can be achieved in one of two ways; the command line
    // overrides the config file.
    let force = config.prefilter.force_overwrite || cli.force;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&config, force);

    if config.prefilter_file.exists() {
        if !force {
            print_warning(FILE_EXISTS_WARNING);
            tracing::warn!("prefilter file exists, NOT overwriting");
        } else {
            print_warning(FORCE_WARNING);
            tracing::warn!("prefilter file exists, overwriting");
        }
    }

    println!("    Starting {STEP_NAME}");
    tracing::info!("{STEP_NAME} started");

    let spinner = create_spinner("Scanning example site features...");
    let mut features = if config.prefilter.perform {
        prefilter_features(
            &config.core,
            &config.example_site_dir,
            &config.prefilter.flag_cols,
        )?
    } else {
        let features = load_features(&config.core, &config.example_site_dir)?;
        mark_all_retained(features)?
    };
    finish_with_success(&spinner, "Example site features scanned");

    let summary = PrefilterSummary::from_table(&features, config.prefilter.perform)?;
    summary.display();
    tracing::info!(
        "scanned {} feature(s), flagged {}",
        summary.total_features,
        summary.flagged_features
    );

    if check_if_write(&config.prefilter_file, force) {
        write_feature_table(&mut features, &config.prefilter_file)?;
        print_success(&format!(
            "Wrote feature table to {}",
            config.prefilter_file.display()
        ));
        tracing::info!("wrote prefilter file: {}", config.prefilter_file.display());
    } else {
        print_info("Skipped writing: prefilter file already exists");
        tracing::info!("skipped writing prefilter file");
    }

    print_completion();
    tracing::info!("{STEP_NAME} finished");

    Ok(())
}
