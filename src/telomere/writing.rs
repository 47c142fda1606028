use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::common::consts::{
    CONTEXT_COL_NAME, INDEX_COL_NAME, LENGTH_COL_NAME, POSITION_COL_NAME, RESULTS_FILE_SUFFIX,
};
use crate::common::models::TelomereHit;

///
/// Write the hit table as tab-separated text with a header row. One row per
/// hit, in collection order.
///
/// # Arguments
///
/// - hits: the collected hits from both strand passes
/// - path: where the table goes
///
pub fn write_results_tsv(hits: &[TelomereHit], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create results file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "{}\t{}\t{}\t{}",
        INDEX_COL_NAME, LENGTH_COL_NAME, POSITION_COL_NAME, CONTEXT_COL_NAME
    )?;
    for hit in hits {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            hit.index, hit.length, hit.position, hit.context
        )?;
    }
    writer.flush()?;

    Ok(())
}

///
/// Derive the default results path from the input path: a trailing `.gz` is
/// dropped, then the results suffix is appended, so plain and gzipped copies
/// of the same file land on the same output name.
///
pub fn default_output_path(sequence_path: &Path) -> PathBuf {
    let path_str = sequence_path.to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    PathBuf::from(format!("{}{}", base, RESULTS_FILE_SUFFIX))
}
