//! Prefilter flagging of the feature table

use anyhow::Result;
use polars::prelude::*;
use std::path::Path;

use crate::config::CoreOptions;
use crate::pipeline::load_features;

/// Boolean indicator column added to the feature table. True means the
/// feature is flagged for removal before profile construction.
pub const PREFILTER_COLUMN: &str = "prefilter_column";

/// Scan the example site and flag features matching any of `flag_cols`.
///
/// Matching is a case-sensitive substring test against the compartment-
/// prefixed feature name, so `flag_cols: ["Costes"]` flags
/// `Cells_Correlation_Costes_DNA_AGP`. An empty list flags nothing.
pub fn prefilter_features(
    core: &CoreOptions,
    example_site_dir: &Path,
    flag_cols: &[String],
) -> Result<DataFrame> {
    let mut df = load_features(core, example_site_dir)?;

    let names = df.column("feature_name")?.as_materialized_series().clone();
    let flags: Vec<bool> = names
        .str()?
        .into_iter()
        .map(|name| match name {
            Some(name) => flag_cols.iter().any(|flag| name.contains(flag.as_str())),
            None => false,
        })
        .collect();

    df.with_column(Series::new(PREFILTER_COLUMN.into(), flags))?;
    Ok(df)
}

/// Append a uniformly-false indicator column.
///
/// The `perform: false` path: the feature table is still produced and
/// written, but no feature is flagged.
pub fn mark_all_retained(mut df: DataFrame) -> Result<DataFrame> {
    let flags = vec![false; df.height()];
    df.with_column(Series::new(PREFILTER_COLUMN.into(), flags))?;
    Ok(df)
}

/// Number of features flagged for removal.
pub fn flagged_count(df: &DataFrame) -> Result<usize> {
    let count = df
        .column(PREFILTER_COLUMN)?
        .as_materialized_series()
        .bool()?
        .into_iter()
        .flatten()
        .filter(|flagged| *flagged)
        .count();
    Ok(count)
}
