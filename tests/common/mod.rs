//! Shared test utilities and fixture generators

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use prefilter_features::config::CoreOptions;

pub const BATCH_ID: &str = "2020_07_02_Batch8";
pub const EXAMPLE_SITE: &str = "A01-1";

/// Core options matching the fixture site layout.
pub fn core_options() -> CoreOptions {
    CoreOptions {
        compartments: vec![
            "Cells".to_string(),
            "Nuclei".to_string(),
            "Cytoplasm".to_string(),
        ],
        example_site: EXAMPLE_SITE.to_string(),
        metadata_prefix: "Metadata_".to_string(),
    }
}

/// Lay out a minimal example site under `<data_dir>/<batch>/<site>/` with one
/// CSV per compartment. Feature columns (after dropping metadata and
/// bookkeeping columns):
/// - Cells: AreaShape_Area, Correlation_Costes_DNA_AGP
/// - Nuclei: Intensity_MeanIntensity_DNA, Correlation_Manders_DNA_RNA
/// - Cytoplasm: Texture_Entropy_RNA_3
pub fn create_example_site(data_dir: &Path) -> PathBuf {
    let site_dir = data_dir.join(BATCH_ID).join(EXAMPLE_SITE);
    fs::create_dir_all(&site_dir).unwrap();

    fs::write(
        site_dir.join("Cells.csv"),
        "ImageNumber,ObjectNumber,Metadata_Well,AreaShape_Area,Correlation_Costes_DNA_AGP\n\
         1,1,A01,100.0,0.5\n\
         1,2,A01,130.0,0.4\n",
    )
    .unwrap();
    fs::write(
        site_dir.join("Nuclei.csv"),
        "ImageNumber,ObjectNumber,Intensity_MeanIntensity_DNA,Correlation_Manders_DNA_RNA\n\
         1,1,0.3,0.7\n\
         1,2,0.2,0.8\n",
    )
    .unwrap();
    fs::write(
        site_dir.join("Cytoplasm.csv"),
        "ImageNumber,ObjectNumber,Texture_Entropy_RNA_3\n\
         1,1,2.5\n\
         1,2,2.6\n",
    )
    .unwrap();

    site_dir
}

/// A complete on-disk fixture: example site data plus both config files.
pub struct Fixture {
    pub temp: TempDir,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub site_dir: PathBuf,
    pub options_path: PathBuf,
    pub experiment_path: PathBuf,
    pub prefilter_file: PathBuf,
}

/// Build a full fixture with the given prefilter options.
pub fn create_fixture(perform: bool, force_overwrite: bool, flag_cols: &[&str]) -> Fixture {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("single_cell");
    let output_dir = temp.path().join("profiles");
    let site_dir = create_example_site(&data_dir);

    let flag_list = flag_cols
        .iter()
        .map(|flag| format!("\"{}\"", flag))
        .collect::<Vec<_>>()
        .join(", ");
    let options_yaml = format!(
        r#"core:
  compartments: ["Cells", "Nuclei", "Cytoplasm"]
  example_site: {EXAMPLE_SITE}
preprocess:
  prefilter:
    perform: {perform}
    force_overwrite: {force_overwrite}
    flag_cols: [{flag_list}]
"#
    );
    let experiment_yaml = format!(
        r#"experiment:
  data_dir: {}
  output_dir: {}
sites:
  - name: {EXAMPLE_SITE}
  - name: A01-2
    status: incomplete
  - name: B02-1
    status: errored
"#,
        data_dir.display(),
        output_dir.display(),
    );

    let options_path = temp.path().join("options.yaml");
    let experiment_path = temp.path().join("experiment.yaml");
    fs::write(&options_path, options_yaml).unwrap();
    fs::write(&experiment_path, experiment_yaml).unwrap();

    let prefilter_file = output_dir.join(BATCH_ID).join("feature_prefilter.tsv");

    Fixture {
        temp,
        data_dir,
        output_dir,
        site_dir,
        options_path,
        experiment_path,
        prefilter_file,
    }
}
