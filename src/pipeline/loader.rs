//! Feature scanning from an example site's per-compartment CSV files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::config::CoreOptions;

/// Bookkeeping columns emitted by the segmentation software.
/// Never features, regardless of the metadata prefix.
const NON_FEATURE_COLUMNS: &[&str] = &["ImageNumber", "ObjectNumber", "TableNumber"];

/// Scan the example site's compartment files and build the feature table.
///
/// Reads only the header of `<example_site_dir>/<Compartment>.csv` for each
/// configured compartment and collects its feature columns. The result has
/// one row per feature with columns `compartment` and `feature_name`, where
/// `feature_name` is the compartment-prefixed column name (the name the
/// feature carries in merged per-site data). Row order follows the
/// compartment order in the config and the column order in each file.
pub fn load_features(core: &CoreOptions, example_site_dir: &Path) -> Result<DataFrame> {
    let mut compartments: Vec<String> = Vec::new();
    let mut feature_names: Vec<String> = Vec::new();

    for compartment in &core.compartments {
        let path = example_site_dir.join(format!("{compartment}.csv"));
        for column in feature_columns(&path, &core.metadata_prefix)? {
            compartments.push(compartment.clone());
            feature_names.push(format!("{compartment}_{column}"));
        }
    }

    let df = df! {
        "compartment" => compartments,
        "feature_name" => feature_names,
    }?;

    Ok(df)
}

/// Read the header row of one compartment file and keep the feature columns.
fn feature_columns(path: &Path, metadata_prefix: &str) -> Result<Vec<String>> {
    // n_rows = 0 still parses the header, which is all we need here.
    let df = LazyCsvReader::new(path)
        .with_n_rows(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("Failed to read compartment file: {}", path.display()))?;

    let columns = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .filter(|name| is_feature_column(name, metadata_prefix))
        .collect();

    Ok(columns)
}

fn is_feature_column(name: &str, metadata_prefix: &str) -> bool {
    !name.starts_with(metadata_prefix) && !NON_FEATURE_COLUMNS.contains(&name)
}
