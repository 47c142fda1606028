//! # Telomere detection for budding-yeast sequencing reads
//!
//! Scans the raw text of a sequence file for degenerate telomeric repeat
//! runs, the (TG)1-3 pattern of S. cerevisiae and its complement, on both
//! strand orientations. Each qualifying run is reported with its length,
//! 0-based position, and a window of surrounding text.
//!
//! The scan makes one forward pass per strand. At each candidate offset it
//! grows a tentative run under the strand's base roles until a stop
//! condition fires, keeps the run if it is long enough and clean, then
//! resumes just past wherever the attempt stopped. The G-rich pass runs
//! first, then the C-rich pass, and both feed one shared hit index.
//!
//! ## Example
//!
//! ```rust
//! use telofinder::common::models::SequenceStore;
//! use telofinder::telomere::find_telomeres;
//!
//! let store = SequenceStore::from("TTGGG".repeat(40).as_str());
//! let hits = find_telomeres(&store, 50);
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].length, 200);
//! assert_eq!(hits[0].position, 0);
//! ```
pub mod cli;
pub mod collect;
pub mod consts;
pub mod context;
pub mod scan;
pub mod strand;
pub mod writing;

// Re-exports
pub use collect::HitCollector;
pub use scan::{attempt_run, scan_strand, RunAttempt, RunMatch};
pub use strand::{StrandConfig, C_STRAND, G_STRAND};

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::common::models::{SequenceStore, TelomereHit};

///
/// Run both strand passes over the scanned text and collect every accepted
/// run under one shared index: the G-rich pass first, then the C-rich pass,
/// each in ascending position order.
///
/// # Arguments
///
/// - store: the case-folded sequence text
/// - min_length: minimum run length (strict) required to report a hit
///
pub fn find_telomeres(store: &SequenceStore, min_length: usize) -> Vec<TelomereHit> {
    let mut collector = HitCollector::new();

    for strand in [&G_STRAND, &C_STRAND] {
        for run in scan_strand(store.as_bytes(), strand, min_length) {
            collector.record(store.as_bytes(), run);
        }
    }

    collector.into_hits()
}

///
/// Load a sequence file, scan it on both strands, and write the results
/// table. Returns the number of hits found.
///
/// # Arguments
///
/// - sequence_path: plain or gzipped input file
/// - min_length: minimum run length (strict) required to report a hit
/// - output_path: where the results table goes
///
pub fn run_telomere_scan(
    sequence_path: &Path,
    min_length: usize,
    output_path: &Path,
) -> Result<usize> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );

    spinner.set_message(format!("Reading {:?}...", sequence_path));
    let store = SequenceStore::try_from(sequence_path)
        .with_context(|| format!("Failed to load sequence file: {:?}", sequence_path))?;

    spinner.set_message(format!("Scanning {} bases on both strands...", store.len()));
    let hits = find_telomeres(&store, min_length);

    spinner.set_message(format!("Writing {} hits...", hits.len()));
    writing::write_results_tsv(&hits, output_path)?;

    spinner.finish_with_message("Done!");

    Ok(hits.len())
}
