//! Guarded tab-separated output of the feature table

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Decide whether the feature table may be written.
///
/// Writing is permitted when the destination does not exist yet, or when the
/// force-overwrite flag is set (via config or command line). This is an
/// existence check, not a lock; concurrent runs can still race.
pub fn check_if_write(path: &Path, force: bool) -> bool {
    !path.exists() || force
}

/// Write the feature table as a tab-separated file with a header row.
///
/// Parent directories are created if missing. An empty table still gets its
/// header so downstream stages can rely on the column names.
pub fn write_feature_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .with_separator(b'\t')
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write feature table: {}", path.display()))?;

    Ok(())
}
