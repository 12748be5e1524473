//! Unit tests for configuration loading and resolution

use prefilter_features::config::{process_configuration, ConfigError};
use std::fs;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_resolved_paths_follow_batch_layout() {
    let fixture = common::create_fixture(true, false, &["Costes"]);

    let (config, _, _) = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    )
    .unwrap();

    assert_eq!(config.batch_id, common::BATCH_ID);
    assert_eq!(config.step, "prefilter-features");
    assert_eq!(config.input_data_dir, fixture.data_dir.join(common::BATCH_ID));
    assert_eq!(
        config.example_site_dir,
        fixture.data_dir.join(common::BATCH_ID).join(common::EXAMPLE_SITE)
    );
    assert_eq!(config.prefilter_file, fixture.prefilter_file);
}

#[test]
fn test_prefilter_options_carried_through() {
    let fixture = common::create_fixture(false, true, &["Costes", "Manders"]);

    let (config, _, _) = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    )
    .unwrap();

    assert!(!config.prefilter.perform);
    assert!(config.prefilter.force_overwrite);
    assert_eq!(config.prefilter.flag_cols, vec!["Costes", "Manders"]);
}

#[test]
fn test_sites_partitioned_by_status() {
    let fixture = common::create_fixture(true, false, &[]);

    let (config, incomplete, errored) = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    )
    .unwrap();

    assert_eq!(config.sites, vec![common::EXAMPLE_SITE.to_string()]);
    assert_eq!(incomplete, vec!["A01-2".to_string()]);
    assert_eq!(errored, vec!["B02-1".to_string()]);
}

#[test]
fn test_example_site_must_be_complete() {
    let fixture = common::create_fixture(true, false, &[]);
    // Demote the example site to incomplete
    let experiment_yaml = format!(
        r#"experiment:
  data_dir: {}
  output_dir: {}
sites:
  - name: {}
    status: incomplete
"#,
        fixture.data_dir.display(),
        fixture.output_dir.display(),
        common::EXAMPLE_SITE,
    );
    fs::write(&fixture.experiment_path, experiment_yaml).unwrap();

    let result = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    );

    assert!(matches!(
        result,
        Err(ConfigError::ExampleSiteUnavailable(site)) if site == common::EXAMPLE_SITE
    ));
}

#[test]
fn test_missing_config_file_is_a_read_error() {
    let fixture = common::create_fixture(true, false, &[]);
    let missing = fixture.temp.path().join("nope.yaml");

    let result = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &missing,
        &fixture.experiment_path,
    );

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let fixture = common::create_fixture(true, false, &[]);
    fs::write(&fixture.options_path, "core: [not, the, schema]").unwrap();

    let result = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    );

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_empty_compartment_list_rejected() {
    let fixture = common::create_fixture(true, false, &[]);
    let options_yaml = format!(
        r#"core:
  compartments: []
  example_site: {}
preprocess:
  prefilter: {{}}
"#,
        common::EXAMPLE_SITE
    );
    fs::write(&fixture.options_path, options_yaml).unwrap();

    let result = process_configuration(
        common::BATCH_ID,
        "prefilter-features",
        &fixture.options_path,
        &fixture.experiment_path,
    );

    assert!(matches!(result, Err(ConfigError::NoCompartments)));
}
